use std::error::Error;
use std::fmt;

/// Errors raised while wiring up or feeding the program editor.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// An element the page markup must provide was not found.
    MissingElement(String),
    /// A DOM call was rejected by the browser.
    Dom(String),
    Network(String),
    /// The program list could not be decoded.
    Decode(String),
    Config(String),
}

impl Error for WidgetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            WidgetError::MissingElement(ref what) => write!(f, "Page markup is missing {}", what),
            WidgetError::Dom(ref msg) => write!(f, "DOM error: {}", msg),
            WidgetError::Network(ref msg) => write!(f, "Network error: {}", msg),
            WidgetError::Decode(ref msg) => write!(f, "Could not decode program list: {}", msg),
            WidgetError::Config(ref msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_missing_element() {
        let err = WidgetError::MissingElement("#btn-add".to_string());
        assert_eq!(err.to_string(), "Page markup is missing #btn-add");
    }
}
