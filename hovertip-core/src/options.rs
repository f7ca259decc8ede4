//! Pass-through tooltip options.
//!
//! The set is closed: the trigger interaction and the content mode are owned
//! by the component that renders the widget and have no field here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted show/hide delay.
pub const MAX_DELAY_MS: u32 = 10_000;
/// Largest accepted animation duration.
pub const MAX_DURATION_MS: u32 = 5_000;
/// Largest accepted gap between reference and panel.
pub const MAX_DISTANCE_PX: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    Top,
    TopStart,
    TopEnd,
    Bottom,
    BottomStart,
    BottomEnd,
    Left,
    LeftStart,
    LeftEnd,
    Right,
    RightStart,
    RightEnd,
}

impl Placement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopStart => "top-start",
            Self::TopEnd => "top-end",
            Self::Bottom => "bottom",
            Self::BottomStart => "bottom-start",
            Self::BottomEnd => "bottom-end",
            Self::Left => "left",
            Self::LeftStart => "left-start",
            Self::LeftEnd => "left-end",
            Self::Right => "right",
            Self::RightStart => "right-start",
            Self::RightEnd => "right-end",
        }
    }

    /// Side of the reference the panel sits on, without the alignment suffix.
    #[must_use]
    pub const fn side(self) -> &'static str {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => "top",
            Self::Bottom | Self::BottomStart | Self::BottomEnd => "bottom",
            Self::Left | Self::LeftStart | Self::LeftEnd => "left",
            Self::Right | Self::RightStart | Self::RightEnd => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Transparent,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Transparent => "transparent",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        format!("hovertip-{}-theme", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    #[default]
    Regular,
    Big,
}

impl Size {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Regular => "regular",
            Self::Big => "big",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        format!("hovertip-{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    Shift,
    Perspective,
    Fade,
    Scale,
    None,
}

impl Animation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Perspective => "perspective",
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::None => "none",
        }
    }
}

/// Errors raised when tooltip options fall outside accepted bounds.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be at most {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        max: u32,
        value: u32,
    },
}

/// Display options forwarded to the tooltip widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TooltipOptions {
    pub placement: Placement,
    pub interactive: bool,
    pub delay_ms: u32,
    pub hide_delay_ms: u32,
    pub arrow: bool,
    pub theme: Theme,
    pub size: Size,
    pub animation: Animation,
    pub duration_ms: u32,
    pub distance_px: u32,
    pub offset_px: i32,
    pub z_index: u32,
    pub disabled: bool,
    /// Controlled visibility; `None` leaves it to the trigger.
    pub open: Option<bool>,
    pub hide_on_escape: bool,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            interactive: true,
            delay_ms: 0,
            hide_delay_ms: 0,
            arrow: false,
            theme: Theme::default(),
            size: Size::default(),
            animation: Animation::default(),
            duration_ms: 375,
            distance_px: 10,
            offset_px: 0,
            z_index: 9999,
            disabled: false,
            open: None,
            hide_on_escape: true,
        }
    }
}

impl TooltipOptions {
    /// Parse options from JSON and check their bounds.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check numeric options against their upper bounds.
    ///
    /// # Errors
    /// Returns the first [`OptionsError::RangeViolation`] encountered.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let checks = [
            ("delayMs", self.delay_ms, MAX_DELAY_MS),
            ("hideDelayMs", self.hide_delay_ms, MAX_DELAY_MS),
            ("durationMs", self.duration_ms, MAX_DURATION_MS),
            ("distancePx", self.distance_px, MAX_DISTANCE_PX),
        ];
        for (field, value, max) in checks {
            if value > max {
                return Err(OptionsError::RangeViolation { field, max, value });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub const fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    #[must_use]
    pub const fn with_delay(mut self, show_ms: u32, hide_ms: u32) -> Self {
        self.delay_ms = show_ms;
        self.hide_delay_ms = hide_ms;
        self
    }

    #[must_use]
    pub const fn with_arrow(mut self, arrow: bool) -> Self {
        self.arrow = arrow;
        self
    }

    #[must_use]
    pub const fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_animation(mut self, animation: Animation, duration_ms: u32) -> Self {
        self.animation = animation;
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub const fn with_open(mut self, open: Option<bool>) -> Self {
        self.open = open;
        self
    }

    /// Inline style for the floating panel.
    #[must_use]
    pub fn popper_style(&self) -> String {
        let mut style = format!(
            "z-index: {}; --hovertip-distance: {}px; --hovertip-offset: {}px; --hovertip-duration: {}ms;",
            self.z_index, self.distance_px, self.offset_px, self.duration_ms
        );
        if !self.interactive {
            style.push_str(" pointer-events: none;");
        }
        style
    }
}
