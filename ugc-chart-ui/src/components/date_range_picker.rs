//! Date range picker bounded by the loaded data span.
//!
//! While data is loading there is no [`DataSpan`], so both inputs are
//! disabled and no selection can reach the chart.

use crate::state::AppState;
use dioxus::prelude::*;
use ugc_data::dates::format_picker_date;
use ugc_data::DataSpan;

fn is_selectable(span: Option<DataSpan>, value: &str) -> bool {
    span.is_some_and(|s| s.accepts_picker_value(value))
}

/// Start and end date inputs. Calls `on_change(start, end)` once both ends
/// are chosen, and with two empty strings when cleared.
#[component]
pub fn DateRangePicker(on_change: EventHandler<(String, String)>) -> Element {
    let mut state = use_context::<AppState>();
    let span = state.load_state.read().span();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let disabled = span.is_none();
    let (min, max) = span
        .map(|s| {
            (
                format_picker_date(&s.selectable_min()),
                format_picker_date(&s.selectable_max()),
            )
        })
        .unwrap_or_default();

    let on_start_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if !is_selectable(span, &value) {
            log::warn!("picker: start date {:?} is outside the loaded data", value);
            return;
        }
        state.start_date.set(value.clone());
        let end = (state.end_date)();
        if !end.is_empty() {
            on_change.call((value, end));
        }
    };

    let on_end_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if !is_selectable(span, &value) {
            log::warn!("picker: end date {:?} is outside the loaded data", value);
            return;
        }
        state.end_date.set(value.clone());
        let start = (state.start_date)();
        if !start.is_empty() {
            on_change.call((start, value));
        }
    };

    let on_clear = move |_: Event<MouseData>| {
        state.start_date.set(String::new());
        state.end_date.set(String::new());
        on_change.call((String::new(), String::new()));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    disabled: disabled,
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    disabled: disabled,
                    onchange: on_end_change,
                }
            }
            button {
                disabled: disabled,
                onclick: on_clear,
                "Clear"
            }
        }
    }
}
