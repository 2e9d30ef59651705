//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ugc_data::{ChartSettings, LoadState, VisibleRange};

/// Shared state for the user growth chart.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded day counts (`Loading` until the fetch succeeds)
    pub load_state: Signal<LoadState>,
    /// Current x-axis clip, replaced on every range selection
    pub visible_range: Signal<VisibleRange>,
    /// Picker start input value (YYYY-MM-DD)
    pub start_date: Signal<String>,
    /// Picker end input value (YYYY-MM-DD)
    pub end_date: Signal<String>,
    /// Endpoint, title and DOM ids
    pub settings: Signal<ChartSettings>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            load_state: Signal::new(LoadState::Loading),
            visible_range: Signal::new(VisibleRange::default()),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            settings: Signal::new(ChartSettings::default()),
        }
    }
}
