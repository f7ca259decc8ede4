//! Showcase page mounted by the `demo` build.

use crate::components::foundation as f;
use crate::components::{Popover, PopoverContent, Tooltip};
use hovertip_core::presets;

fn preset_or_default(name: &str) -> f::TooltipOptions {
    presets::load(name).unwrap_or_else(|err| {
        log::error!("falling back to default tooltip options: {err}");
        f::TooltipOptions::default()
    })
}

#[f::function_component(Showcase)]
pub fn showcase() -> f::Html {
    let shows = f::use_state(|| 0_u32);
    let on_show = {
        let shows = shows.clone();
        f::Callback::from(move |()| shows.set(*shows + 1))
    };
    let placements = [
        f::Placement::Top,
        f::Placement::Right,
        f::Placement::Bottom,
        f::Placement::Left,
    ];

    f::html! {
        <main class="p-8 space-y-6">
            <p>
                { "Terms like " }
                <Tooltip
                    with_underline={true}
                    content={f::html! { <span>{ "A short definition." }</span> }}
                    options={preset_or_default("glossary")}
                    on_show={on_show}
                >
                    { "latency" }
                </Tooltip>
                { format!(" have been explained {} times.", *shows) }
            </p>
            <div class="flex gap-4">
                { for placements.iter().map(|placement| f::html! {
                    <Tooltip
                        class={f::classes!("w-48")}
                        content={f::html! { <>{ placement.as_str() }</> }}
                        options={f::TooltipOptions::default().with_placement(*placement).with_arrow(true)}
                    >
                        <button class="btn">{ placement.as_str() }</button>
                    </Tooltip>
                }) }
            </div>
            <Popover
                trigger={f::TriggerEvent::Click}
                content={PopoverContent::Text("Click again to close".into())}
                options={preset_or_default("hint")}
            >
                <button class="btn">{ "Click trigger" }</button>
            </Popover>
        </main>
    }
}
