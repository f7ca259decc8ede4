//! Hovertip Core
//!
//! Platform-agnostic pieces of the hovertip components: class-name composition,
//! the closed tooltip option set, bundled presets and the show/hide state machine.
//! This crate has no UI or browser dependencies.
#![forbid(unsafe_code)]

pub mod classes;
pub mod options;
pub mod presets;
pub mod trigger;
pub mod visibility;

pub use classes::{
    PANEL_BASE_CLASSES, PANEL_BORDER_CLASSES, UNDERLINE_CLASS, UNDERLINE_STYLE, merge_classes,
};
pub use options::{
    Animation, MAX_DELAY_MS, MAX_DISTANCE_PX, MAX_DURATION_MS, OptionsError, Placement, Size,
    Theme, TooltipOptions,
};
pub use presets::PresetError;
pub use trigger::{ContentMode, TriggerEvent};
pub use visibility::{Delays, Effect, Visibility, VisibilityEvent, VisibilityMachine};
