//! Hover tooltip with a styled panel and an optional dotted underline.


use crate::components::foundation as f;
use crate::components::popover::{Popover, PopoverContent};
use hovertip_core::{PANEL_BASE_CLASSES, PANEL_BORDER_CLASSES, UNDERLINE_CLASS, UNDERLINE_STYLE};

/// Trigger interaction used by every [`Tooltip`]; options cannot change it.
pub const TOOLTIP_TRIGGER: f::TriggerEvent = f::TriggerEvent::MouseEnter;

#[derive(f::Properties, PartialEq, Clone)]
pub struct TooltipProps {
    /// Shown inside the floating panel.
    #[prop_or_default]
    pub content: Option<f::Html>,
    /// Extra classes for the floating panel, placed ahead of the base set.
    #[prop_or_default]
    pub class: f::Classes,
    /// Extra classes for the underline wrapper. Ignored without `with_underline`.
    #[prop_or_default]
    pub span_class: f::Classes,
    #[prop_or_default]
    pub with_underline: bool,
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

#[must_use]
pub fn panel_class(extra: &f::Classes) -> f::Classes {
    f::merged(extra, &[PANEL_BASE_CLASSES, PANEL_BORDER_CLASSES])
}

#[must_use]
pub fn underline_class(extra: &f::Classes) -> f::Classes {
    f::merged(extra, &[UNDERLINE_CLASS])
}

#[f::function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> f::Html {
    let panel = f::html! {
        <div class={panel_class(&props.class)}>
            { props.content.clone().unwrap_or_default() }
        </div>
    };

    let reference = if props.with_underline {
        f::html! {
            <span class={underline_class(&props.span_class)} style={UNDERLINE_STYLE}>
                { for props.children.iter() }
            </span>
        }
    } else {
        f::html! { <>{ for props.children.iter() }</> }
    };

    f::html! {
        <Popover
            trigger={TOOLTIP_TRIGGER}
            content={PopoverContent::Rich(panel)}
            options={props.options.clone()}
            id={props.id.clone()}
            style={props.style.clone()}
            aria_label={props.aria_label.clone()}
            on_show={props.on_show.clone()}
            on_hide={props.on_hide.clone()}
        >
            { reference }
        </Popover>
    }
}
