use crate::dom;
use hovertip_core::{Delays, Effect, TooltipOptions, Visibility, VisibilityEvent, VisibilityMachine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew::{UseStateHandle, hook};

/// Drives a [`VisibilityMachine`] and carries out the effects it returns.
#[derive(Clone)]
struct Driver {
    machine: Rc<RefCell<VisibilityMachine>>,
    visible: UseStateHandle<bool>,
    delays: Delays,
    /// Set while `disabled` or a controlled `open` owns visibility.
    suppressed: bool,
}

impl Driver {
    fn dispatch(&self, event: VisibilityEvent) {
        if self.suppressed
            && matches!(
                event,
                VisibilityEvent::Activate | VisibilityEvent::Deactivate | VisibilityEvent::Toggle
            )
        {
            log::trace!("ignoring {event:?} while visibility is overridden");
            return;
        }
        let effect = self.machine.borrow_mut().step(event, self.delays);
        match effect {
            Some(Effect::Show) => {
                log::debug!("tooltip shown after {event:?}");
                self.visible.set(true);
            }
            Some(Effect::Hide) => {
                log::debug!("tooltip hidden after {event:?}");
                self.visible.set(false);
            }
            Some(
                Effect::ScheduleShow {
                    generation,
                    delay_ms,
                }
                | Effect::ScheduleHide {
                    generation,
                    delay_ms,
                },
            ) => self.schedule(generation, delay_ms),
            None => {
                if let VisibilityEvent::TimerElapsed(generation) = event {
                    log::trace!("ignoring stale tooltip timer {generation}");
                }
            }
        }
    }

    fn schedule(&self, generation: u64, delay_ms: u32) {
        let driver = self.clone();
        let duration = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        spawn_local(async move {
            if let Err(err) = dom::sleep_ms(duration).await {
                let message = dom::js_error_message(&err);
                log::error!("tooltip timer failed: {message}");
                dom::console_error(&format!("tooltip timer failed: {message}"));
            }
            driver.dispatch(VisibilityEvent::TimerElapsed(generation));
        });
    }
}

/// Visibility of one popover plus a way to feed it events.
#[derive(Clone)]
pub struct VisibilityHandle {
    visible: bool,
    driver: Driver,
}

impl VisibilityHandle {
    /// Whether the trigger side currently wants the panel shown.
    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    /// Current state of the underlying machine.
    #[must_use]
    pub fn state(&self) -> Visibility {
        self.driver.machine.borrow().state()
    }

    pub fn dispatch(&self, event: VisibilityEvent) {
        self.driver.dispatch(event);
    }

    /// A DOM listener that feeds `event` regardless of the DOM event payload.
    #[must_use]
    pub fn listener<E: 'static>(&self, event: VisibilityEvent) -> Callback<E> {
        let driver = self.driver.clone();
        Callback::from(move |_: E| driver.dispatch(event))
    }
}

/// Trigger-driven visibility for a popover.
///
/// Trigger events are ignored while `disabled` is set or `open` is controlled,
/// and the machine is reset when either override starts.
#[hook]
pub fn use_visibility(options: &TooltipOptions) -> VisibilityHandle {
    let machine = use_mut_ref(VisibilityMachine::new);
    let visible = use_state_eq(|| false);
    let suppressed = options.disabled || options.open.is_some();
    let driver = Driver {
        machine,
        visible: visible.clone(),
        delays: Delays::from(options),
        suppressed,
    };

    {
        let driver = driver.clone();
        use_effect_with(suppressed, move |suppressed| {
            if *suppressed {
                driver.dispatch(VisibilityEvent::Dismiss);
            }
            || {}
        });
    }

    VisibilityHandle {
        visible: *visible,
        driver,
    }
}
