use serde::{Deserialize, Serialize};

/// Interaction that opens the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerEvent {
    /// Pointer entering the reference shows, leaving hides.
    #[default]
    MouseEnter,
    /// Focus entering the reference shows, leaving hides.
    Focus,
    /// Each click toggles.
    Click,
    /// Only the controlled `open` option decides.
    Manual,
}

impl TriggerEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseEnter => "mouseenter",
            Self::Focus => "focus",
            Self::Click => "click",
            Self::Manual => "manual",
        }
    }
}

/// How the floating panel treats its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentMode {
    /// Plain text, escaped on render.
    #[default]
    Text,
    /// Arbitrary renderable nodes.
    Rich,
}
