//! Fixed-height host element for the line chart.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id ApexCharts renders into
    pub id: String,
    /// Chart height in pixels
    #[props(default = 350)]
    pub height: u32,
}

/// A container div for the chart. It renders immediately, so an empty
/// chart stays on screen if the data never arrives.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
