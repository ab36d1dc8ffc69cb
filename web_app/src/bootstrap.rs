//! Locates the page elements the widget depends on and mounts it.

use leptos::mount::mount_to;
use leptos::prelude::*;
use programedit_common::{Language, WidgetConfig, WidgetError, CONFIG_ELEMENT_ID};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlIFrameElement};

use crate::components::ProgramEditor;

/// DOM handles the host page must provide.
pub struct PageHandles {
    /// Element the card list is appended to, after its static leading nodes.
    pub container: HtmlElement,
    pub add_button: HtmlElement,
    /// Target frame of the page form; loads once per submission.
    pub result_frame: HtmlIFrameElement,
}

impl PageHandles {
    pub fn locate(document: &Document, config: &WidgetConfig) -> Result<Self, WidgetError> {
        let container = element_by_id(document, &config.container_id)?;
        let add_button = element_by_id(document, &config.add_button_id)?;

        let selector = &config.result_frame_selector;
        let result_frame = document
            .query_selector(selector)
            .map_err(|e| WidgetError::Dom(format!("{:?}", e)))?
            .ok_or_else(|| WidgetError::MissingElement(format!("an element matching '{}'", selector)))?
            .dyn_into::<HtmlIFrameElement>()
            .map_err(|_| WidgetError::MissingElement(format!("an iframe matching '{}'", selector)))?;

        Ok(Self {
            container,
            add_button,
            result_frame,
        })
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, WidgetError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| WidgetError::MissingElement(format!("#{}", id)))
}

/// Read the embedded JSON configuration, falling back to defaults.
pub fn load_config(document: &Document) -> WidgetConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return WidgetConfig::default();
    };

    match WidgetConfig::from_json_str(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            WidgetConfig::default()
        }
    }
}

fn page_language(document: &Document) -> Option<String> {
    document.document_element()?.get_attribute("lang")
}

/// Mount the editor into the container and wire the page controls.
pub fn init(handles: PageHandles, config: WidgetConfig, lang: Language) {
    let PageHandles {
        container,
        add_button,
        result_frame,
    } = handles;

    mount_to(container, move || {
        view! {
            <ProgramEditor
                config=config
                lang=lang
                add_button=add_button
                result_frame=result_frame
            />
        }
    })
    .forget();
}

/// Startup sequence run once from the wasm entry point.
pub fn start() -> Result<(), WidgetError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::MissingElement("document".to_string()))?;

    let config = load_config(&document);
    let lang = config.resolve_language(page_language(&document).as_deref());
    let handles = PageHandles::locate(&document, &config)?;

    log::info!("Starting program editor ({:?})", lang);
    init(handles, config, lang);
    Ok(())
}
