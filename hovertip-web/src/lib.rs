#![forbid(unsafe_code)]
#[cfg(all(target_arch = "wasm32", feature = "demo"))]
use wasm_bindgen::prelude::*;

pub mod components;
#[cfg(feature = "demo")]
pub mod demo;
pub mod dom;

pub use components::{Popover, PopoverContent, Tooltip, TooltipProps};
pub use hovertip_core::{Placement, Theme, TooltipOptions};

#[cfg(all(target_arch = "wasm32", feature = "demo"))]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    yew::Renderer::<demo::Showcase>::new().render();
}
