//! Background flash played on the result frame after a form submission.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashSettings {
    pub highlight: String,
    pub resting: String,
    /// Number of scheduled alternations after the first color write.
    pub flashes: u32,
    pub interval_ms: u32,
}

impl Default for FlashSettings {
    fn default() -> Self {
        Self {
            highlight: "#AAFFAA".to_string(),
            resting: "#E0EBF5".to_string(),
            flashes: 3,
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashColor {
    Highlight,
    Resting,
}

impl FlashColor {
    fn other(self) -> Self {
        match self {
            FlashColor::Highlight => FlashColor::Resting,
            FlashColor::Resting => FlashColor::Highlight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashStep {
    pub color: FlashColor,
    /// Another step should be scheduled after the interval.
    pub schedule_next: bool,
}

/// Alternating color sequence, starting on the highlight color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSequence {
    remaining: u32,
    next: FlashColor,
}

impl FlashSequence {
    pub fn new(flashes: u32) -> Self {
        Self {
            remaining: flashes,
            next: FlashColor::Highlight,
        }
    }

    pub fn step(&mut self) -> FlashStep {
        let color = self.next;
        self.next = color.other();
        let schedule_next = self.remaining > 0;
        if schedule_next {
            self.remaining -= 1;
        }
        FlashStep { color, schedule_next }
    }
}

impl FlashSettings {
    pub fn color(&self, color: FlashColor) -> &str {
        match color {
            FlashColor::Highlight => &self.highlight,
            FlashColor::Resting => &self.resting,
        }
    }

    pub fn sequence(&self) -> FlashSequence {
        FlashSequence::new(self.flashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(mut sequence: FlashSequence) -> Vec<FlashColor> {
        let mut colors = Vec::new();
        loop {
            let step = sequence.step();
            colors.push(step.color);
            if !step.schedule_next {
                return colors;
            }
        }
    }

    #[test]
    fn test_three_alternations_then_stop() {
        let colors = run(FlashSettings::default().sequence());
        assert_eq!(
            colors,
            vec![
                FlashColor::Highlight,
                FlashColor::Resting,
                FlashColor::Highlight,
                FlashColor::Resting,
            ]
        );
    }

    #[test]
    fn test_zero_flashes_writes_once() {
        assert_eq!(run(FlashSequence::new(0)), vec![FlashColor::Highlight]);
    }

    #[test]
    fn test_default_colors() {
        let settings = FlashSettings::default();
        assert_eq!(settings.color(FlashColor::Highlight), "#AAFFAA");
        assert_eq!(settings.color(FlashColor::Resting), "#E0EBF5");
        assert_eq!(settings.interval_ms, 100);
    }
}
