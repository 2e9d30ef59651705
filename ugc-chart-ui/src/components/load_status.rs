//! Status line under the chart.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows "Loading data..." until the load completes, then the loaded span.
/// A failed load never completes, so the loading text stays.
#[component]
pub fn LoadStatus() -> Element {
    let state = use_context::<AppState>();
    let text = state.load_state.read().status_line();

    rsx! {
        p {
            style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
            "{text}"
        }
    }
}
