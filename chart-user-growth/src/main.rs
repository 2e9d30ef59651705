//! User Growth Trends by Day
//!
//! A single ApexCharts line chart of daily user counts with a date range
//! picker underneath that clips the visible x-axis window.
//!
//! Data flow:
//! 1. On mount: one abortable GET to the configured endpoint.
//! 2. The JSON keys (DD-MM-YYYY) are swapped to MM-DD-YYYY and collected
//!    in source order; `LoadState` flips to `Ready` exactly once.
//! 3. `Ready` enables the picker, bounded to the loaded span.
//! 4. Any change to the loaded data or the visible range re-renders the chart.
//!
//! A failed fetch is logged and otherwise ignored: the chart stays empty.

use dioxus::prelude::*;
use ugc_chart_ui::components::{ChartContainer, DateRangePicker, LoadStatus};
use ugc_chart_ui::js_bridge;
use ugc_chart_ui::state::AppState;
use ugc_data::loader::parse_growth_json;
use ugc_data::options::{chart_payload, ChartOptions};
use ugc_data::range::on_range_change;
use ugc_data::{DayCount, LoadError};
use web_sys::AbortController;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("user-growth-root"))
        .launch(App);
}

/// Fetch and parse the day → count mapping.
async fn load_growth(url: &str, controller: &AbortController) -> Result<Vec<DayCount>, LoadError> {
    let body = js_bridge::fetch_text(url, &controller.signal()).await?;
    parse_growth_json(&body)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let controller = use_hook(|| AbortController::new().ok());
    let container_id = use_hook(|| state.settings.peek().container_id.clone());
    let height = state.settings.peek().height;

    // ─── Effect 1: Load once on mount ───
    // Settings are peeked so this effect never re-runs.
    let load_controller = controller.clone();
    use_effect(move || {
        let Some(controller) = load_controller.clone() else {
            log::error!("Error fetching data: AbortController unavailable");
            return;
        };
        let url = state.settings.peek().data_url.clone();
        // The task is owned by this component, so it is dropped on unmount
        // and never writes to state afterwards.
        spawn(async move {
            let result = load_growth(&url, &controller).await;
            state
                .load_state
                .with_mut(|load_state| load_state.apply_load_result(result));
        });
    });

    // ─── Effect 2: Render chart from current state ───
    // Re-runs whenever load_state or visible_range change.
    use_effect(move || {
        let settings = state.settings.read().clone();
        let range = *state.visible_range.read();
        let series = state.load_state.read().series(&settings.series_name);

        let options = ChartOptions::template(&settings).with_range(&range);
        match chart_payload(&options, &series) {
            Ok((options_json, series_json)) => {
                js_bridge::render_apex_chart(&settings.container_id, &options_json, &series_json);
            }
            Err(e) => log::error!("Failed to serialize chart payload: {}", e),
        }
    });

    use_drop({
        let container_id = container_id.clone();
        move || {
            if let Some(controller) = &controller {
                controller.abort();
            }
            js_bridge::destroy_chart(&container_id);
        }
    });

    let on_range = move |(start, end): (String, String)| {
        state.visible_range.set(on_range_change(&start, &end));
        log::info!("Updated data on graph");
    };

    // ─── Render ───
    rsx! {
        document::Script { src: js_bridge::APEXCHARTS_SRC.to_string() }

        div {
            id: "chart",
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartContainer {
                id: container_id.clone(),
                height: height,
            }

            LoadStatus {}

            div {
                style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                DateRangePicker { on_change: on_range }
            }
        }
    }
}
