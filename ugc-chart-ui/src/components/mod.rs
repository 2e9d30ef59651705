//! Reusable Dioxus RSX components for the user growth chart.

mod chart_container;
mod date_range_picker;
mod load_status;

pub use chart_container::ChartContainer;
pub use date_range_picker::DateRangePicker;
pub use load_status::LoadStatus;
