//! Floating panel anchored to a reference element.
//!
//! The popover owns show/hide timing for its trigger mode and renders the
//! panel next to the reference children. Placement is declarative: the side
//! and alignment are exposed as classes and `data-*` attributes for the
//! stylesheet to position against.

mod state;

pub use state::{VisibilityHandle, use_visibility};

use crate::components::foundation as f;
use hovertip_core::VisibilityEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use wasm_bindgen::JsCast;

static POPPER_IDS: AtomicUsize = AtomicUsize::new(0);

/// What the floating panel shows.
#[derive(Clone, PartialEq)]
pub enum PopoverContent {
    /// Escaped plain text.
    Text(f::AttrValue),
    /// Any renderable node.
    Rich(f::Html),
}

impl PopoverContent {
    #[must_use]
    pub const fn mode(&self) -> f::ContentMode {
        match self {
            Self::Text(_) => f::ContentMode::Text,
            Self::Rich(_) => f::ContentMode::Rich,
        }
    }

    fn render(&self) -> f::Html {
        match self {
            Self::Text(text) => f::html! { <>{ text.clone() }</> },
            Self::Rich(node) => node.clone(),
        }
    }
}

impl Default for PopoverContent {
    fn default() -> Self {
        Self::Text(f::AttrValue::default())
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct PopoverProps {
    #[prop_or_default]
    pub trigger: f::TriggerEvent,
    #[prop_or_default]
    pub content: PopoverContent,
    #[prop_or_default]
    pub options: f::TooltipOptions,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub style: Option<f::AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub on_show: f::Callback<()>,
    #[prop_or_default]
    pub on_hide: f::Callback<()>,
    #[prop_or_default]
    pub children: f::Children,
}

/// Final visibility once `disabled` and controlled `open` are applied.
#[must_use]
pub const fn resolve_shown(options: &f::TooltipOptions, triggered: bool) -> bool {
    if options.disabled {
        return false;
    }
    match options.open {
        Some(open) => open,
        None => triggered,
    }
}

fn popper_id_for(host_id: Option<&f::AttrValue>, fallback: usize) -> String {
    host_id.map_or_else(
        || format!("hovertip-{fallback}"),
        |id| format!("{id}-tooltip"),
    )
}

/// Whether `target` is `container` itself or one of its descendants.
fn contains(container: &f::NodeRef, target: Option<web_sys::EventTarget>) -> bool {
    let Some(container) = container.cast::<web_sys::Node>() else {
        return false;
    };
    target
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}

#[f::function_component(Popover)]
pub fn popover(props: &PopoverProps) -> f::Html {
    let fallback_id = f::use_state(|| POPPER_IDS.fetch_add(1, Ordering::Relaxed));
    let host_ref = f::use_node_ref();
    let popper_ref = f::use_node_ref();
    let options = &props.options;
    let visibility = use_visibility(options);
    let shown = resolve_shown(options, visibility.visible());

    let was_shown = f::use_mut_ref(|| false);
    {
        let on_show = props.on_show.clone();
        let on_hide = props.on_hide.clone();
        f::use_effect_with(shown, move |shown| {
            let was = std::mem::replace(&mut *was_shown.borrow_mut(), *shown);
            match (was, *shown) {
                (false, true) => on_show.emit(()),
                (true, false) => on_hide.emit(()),
                _ => {}
            }
            || {}
        });
    }

    let trigger = props.trigger;
    let (on_enter, on_leave) = match trigger {
        f::TriggerEvent::MouseEnter => (
            Some(visibility.listener::<f::MouseEvent>(VisibilityEvent::Activate)),
            Some(visibility.listener::<f::MouseEvent>(VisibilityEvent::Deactivate)),
        ),
        _ => (None, None),
    };
    // Focus moving between the reference and the panel stays inside the host.
    let (on_focus_in, on_focus_out) = match trigger {
        f::TriggerEvent::Focus => {
            let focus_listener = |event: VisibilityEvent| {
                let visibility = visibility.clone();
                let host_ref = host_ref.clone();
                f::Callback::from(move |e: f::FocusEvent| {
                    if !contains(&host_ref, e.related_target()) {
                        visibility.dispatch(event);
                    }
                })
            };
            (
                Some(focus_listener(VisibilityEvent::Activate)),
                Some(focus_listener(VisibilityEvent::Deactivate)),
            )
        }
        _ => (None, None),
    };
    let on_click = (trigger == f::TriggerEvent::Click).then(|| {
        let visibility = visibility.clone();
        let popper_ref = popper_ref.clone();
        f::Callback::from(move |e: f::MouseEvent| {
            if !contains(&popper_ref, e.target()) {
                visibility.dispatch(VisibilityEvent::Toggle);
            }
        })
    });
    let on_keydown = (options.hide_on_escape && trigger != f::TriggerEvent::Manual).then(|| {
        let visibility = visibility.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            if e.key() == "Escape" {
                visibility.dispatch(VisibilityEvent::Dismiss);
            }
        })
    });

    let popper_id =
        shown.then(|| f::AttrValue::from(popper_id_for(props.id.as_ref(), *fallback_id)));
    let side = options.placement.side();
    let popper_class = f::classes!("hovertip-popper", format!("hovertip-popper-{side}"));
    let box_class = f::classes!("hovertip-box", options.theme.class(), options.size.class());
    let host_class = f::classes!("hovertip-host", "relative", "inline-block");

    f::html! {
        <div
            ref={host_ref}
            id={props.id.clone()}
            class={host_class}
            style={props.style.clone()}
            aria-label={props.aria_label.clone()}
            aria-describedby={popper_id.clone()}
            data-trigger={trigger.as_str()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onfocusin={on_focus_in}
            onfocusout={on_focus_out}
            onclick={on_click}
            onkeydown={on_keydown}
        >
            { for props.children.iter() }
            <div
                ref={popper_ref}
                id={popper_id}
                class={popper_class}
                role="tooltip"
                style={options.popper_style()}
                data-placement={options.placement.as_str()}
                data-theme={options.theme.as_str()}
                data-size={options.size.as_str()}
                data-animation={options.animation.as_str()}
                aria-hidden={(!shown).to_string()}
                hidden={!shown}
            >
                <div class={box_class} data-state={if shown { "visible" } else { "hidden" }}>
                    if options.arrow {
                        <div class="hovertip-arrow" data-placement={side}></div>
                    }
                    <div class="hovertip-content">{ props.content.render() }</div>
                </div>
            </div>
        </div>
    }
}
