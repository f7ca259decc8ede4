pub use hovertip_core::{
    ContentMode, Placement, Theme, TooltipOptions, TriggerEvent, merge_classes,
};
pub use yew::function_component;
pub use yew::prelude::{
    AttrValue, Callback, Children, Classes, FocusEvent, Html, KeyboardEvent, MouseEvent,
    NodeRef, Properties, classes, html,
};
pub use yew::{hook, use_effect_with, use_mut_ref, use_node_ref, use_state, use_state_eq};

/// Merge a caller's `Classes` with fixed fragments, caller first.
///
/// Fixed fragments may hold several space-separated classes; a class that
/// already appeared keeps its first position.
#[must_use]
pub fn merged(extra: &Classes, fixed: &[&str]) -> Classes {
    let extra = extra.to_string();
    let parts = std::iter::once((extra.as_str(), true))
        .chain(fixed.iter().map(|part| (*part, true)));
    Classes::from(merge_classes(parts))
}
