//! Show/hide state machine behind the tooltip widget.
//!
//! The machine is pure: it never touches timers itself. Delayed transitions
//! come back as [`Effect::ScheduleShow`] / [`Effect::ScheduleHide`] carrying a
//! generation, and the caller feeds [`VisibilityEvent::TimerElapsed`] with that
//! generation once the delay has passed. Any later event that moves the state
//! away from the pending one makes the old generation stale.

use crate::options::TooltipOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    PendingShow {
        generation: u64,
    },
    Shown,
    PendingHide {
        generation: u64,
    },
}

impl Visibility {
    /// Whether the panel is on screen. A pending hide is still visible.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Shown | Self::PendingHide { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    /// Trigger engaged (pointer enter, focus in).
    Activate,
    /// Trigger released (pointer leave, focus out).
    Deactivate,
    /// Click-style trigger.
    Toggle,
    TimerElapsed(u64),
    /// Hide immediately, skipping any delay.
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScheduleShow { generation: u64, delay_ms: u32 },
    ScheduleHide { generation: u64, delay_ms: u32 },
    Show,
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Delays {
    pub show_ms: u32,
    pub hide_ms: u32,
}

impl From<&TooltipOptions> for Delays {
    fn from(options: &TooltipOptions) -> Self {
        Self {
            show_ms: options.delay_ms,
            hide_ms: options.hide_delay_ms,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisibilityMachine {
    state: Visibility,
    next_generation: u64,
}

impl VisibilityMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> Visibility {
        self.state
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Apply an event and return the side effect the caller must carry out.
    pub fn step(&mut self, event: VisibilityEvent, delays: Delays) -> Option<Effect> {
        match event {
            VisibilityEvent::Activate => self.activate(delays.show_ms),
            VisibilityEvent::Deactivate => self.deactivate(delays.hide_ms),
            VisibilityEvent::Toggle => match self.state {
                Visibility::Hidden | Visibility::PendingHide { .. } => {
                    self.activate(delays.show_ms)
                }
                Visibility::PendingShow { .. } | Visibility::Shown => {
                    self.deactivate(delays.hide_ms)
                }
            },
            VisibilityEvent::TimerElapsed(generation) => self.elapse(generation),
            VisibilityEvent::Dismiss => self.dismiss(),
        }
    }

    fn activate(&mut self, delay_ms: u32) -> Option<Effect> {
        match self.state {
            Visibility::Hidden if delay_ms == 0 => {
                self.state = Visibility::Shown;
                Some(Effect::Show)
            }
            Visibility::Hidden => {
                let generation = self.bump();
                self.state = Visibility::PendingShow { generation };
                Some(Effect::ScheduleShow {
                    generation,
                    delay_ms,
                })
            }
            Visibility::PendingHide { .. } => {
                self.state = Visibility::Shown;
                None
            }
            Visibility::PendingShow { .. } | Visibility::Shown => None,
        }
    }

    fn deactivate(&mut self, delay_ms: u32) -> Option<Effect> {
        match self.state {
            Visibility::Shown if delay_ms == 0 => {
                self.state = Visibility::Hidden;
                Some(Effect::Hide)
            }
            Visibility::Shown => {
                let generation = self.bump();
                self.state = Visibility::PendingHide { generation };
                Some(Effect::ScheduleHide {
                    generation,
                    delay_ms,
                })
            }
            Visibility::PendingShow { .. } => {
                self.state = Visibility::Hidden;
                None
            }
            Visibility::Hidden | Visibility::PendingHide { .. } => None,
        }
    }

    fn elapse(&mut self, generation: u64) -> Option<Effect> {
        match self.state {
            Visibility::PendingShow { generation: pending } if pending == generation => {
                self.state = Visibility::Shown;
                Some(Effect::Show)
            }
            Visibility::PendingHide { generation: pending } if pending == generation => {
                self.state = Visibility::Hidden;
                Some(Effect::Hide)
            }
            _ => None,
        }
    }

    fn dismiss(&mut self) -> Option<Effect> {
        let was_visible = self.state.is_visible();
        self.state = Visibility::Hidden;
        was_visible.then_some(Effect::Hide)
    }

    const fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}
