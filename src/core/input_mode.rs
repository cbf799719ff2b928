//! Answer input mode: structured math markup or plain typed text.

use std::fmt;
use std::str::FromStr;

use crate::core::persistence::{PreferenceError, PreferenceStore};

/// Preference key holding the mode tag.
pub const INPUT_MODE_KEY: &str = "answer-input-mode";

/// How raw answer input is treated before submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Math-editor markup, canonicalized before submission.
    #[default]
    Math,
    /// Typed text, submitted as-is (after trimming).
    Text,
}

impl InputMode {
    pub fn as_tag(self) -> &'static str {
        match self {
            InputMode::Math => "math",
            InputMode::Text => "text",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::Math => InputMode::Text,
            InputMode::Text => InputMode::Math,
        }
    }

    /// Interpret a stored tag. Missing or unrecognized values mean `Math`.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => InputMode::default(),
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unrecognized input mode {:?}; using math", tag);
                InputMode::default()
            }),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown input mode {0:?} (expected \"math\" or \"text\")")]
pub struct ParseInputModeError(String);

impl FromStr for InputMode {
    type Err = ParseInputModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "math" => Ok(InputMode::Math),
            "text" => Ok(InputMode::Text),
            other => Err(ParseInputModeError(other.to_string())),
        }
    }
}

/// Read the persisted mode. Any store failure falls back to `Math`.
pub fn load_input_mode(store: &dyn PreferenceStore) -> InputMode {
    match store.get(INPUT_MODE_KEY) {
        Ok(value) => InputMode::from_stored(value.as_deref()),
        Err(e) => {
            log::warn!("Could not read input mode preference: {}", e);
            InputMode::default()
        }
    }
}

pub fn save_input_mode(
    store: &mut dyn PreferenceStore,
    mode: InputMode,
) -> Result<(), PreferenceError> {
    store.set(INPUT_MODE_KEY, mode.as_tag())?;
    log::info!("Input mode set to {}", mode);
    Ok(())
}
