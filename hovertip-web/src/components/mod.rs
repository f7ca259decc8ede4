pub mod foundation;
pub mod popover;
pub mod tooltip;

pub use popover::{Popover, PopoverContent, PopoverProps};
pub use tooltip::{Tooltip, TooltipProps};
