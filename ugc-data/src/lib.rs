//! Core types and pure logic for the user growth chart.
//!
//! Everything here is free of browser APIs so it can be unit tested
//! natively. The Dioxus crates consume it from WASM.

pub mod dates;
pub mod error;
pub mod loader;
pub mod models;
pub mod options;
pub mod range;
pub mod settings;

pub use error::LoadError;
pub use models::{DayCount, Series, SeriesPoint};
pub use options::ChartOptions;
pub use range::{DataSpan, LoadOutcome, LoadState, VisibleRange};
pub use settings::ChartSettings;
