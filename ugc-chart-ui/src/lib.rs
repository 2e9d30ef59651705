//! Shared Dioxus components and ApexCharts bridge for the user growth chart.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for ApexCharts and `fetch` via `js_sys`/`web_sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (container, picker, load status)

pub mod js_bridge;
pub mod state;
pub mod components;
