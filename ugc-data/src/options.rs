//! Declarative options handed to the ApexCharts line chart.
//!
//! Field names serialize to the widget's camelCase keys. The template is
//! fixed; only `xaxis.min`/`xaxis.max` change, folded in from the current
//! [`VisibleRange`]. Unset bounds are sent as explicit `null`s: the widget
//! merges option updates into its current config, so an omitted key would
//! keep the previous clip.

use crate::models::Series;
use crate::range::VisibleRange;
use crate::settings::ChartSettings;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSection,
    pub data_labels: Toggle,
    pub stroke: Stroke,
    pub title: Title,
    pub grid: Grid,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub markers: Markers,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSection {
    pub height: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub zoom: Toggle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Stroke {
    pub curve: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
    pub align: String,
    pub style: TitleStyle,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TitleStyle {
    pub font_size: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Grid {
    pub row: GridRow,
}

/// Alternating row colours, repeated down the plot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GridRow {
    pub colors: Vec<String>,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabels {
    pub format: String,
    pub datetime_formatter: DatetimeFormatter,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatetimeFormatter {
    pub day: String,
    pub month: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Markers {
    pub size: u32,
    pub colors: String,
    pub stroke_colors: String,
    pub stroke_width: u32,
    pub stroke_opacity: f64,
    pub stroke_dash_array: u32,
    pub fill_opacity: f64,
    pub discrete: Vec<serde_json::Value>,
    pub shape: String,
    pub radius: u32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub show_null_data_points: bool,
    pub hover: MarkerHover,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerHover {
    pub size_offset: u32,
}

impl ChartOptions {
    /// The static template, showing the full data range.
    pub fn template(settings: &ChartSettings) -> Self {
        Self {
            chart: ChartSection {
                height: settings.height,
                kind: "line".to_string(),
                zoom: Toggle { enabled: false },
            },
            data_labels: Toggle { enabled: false },
            stroke: Stroke {
                curve: "straight".to_string(),
            },
            title: Title {
                text: settings.title.clone(),
                align: "center".to_string(),
                style: TitleStyle {
                    font_size: "32px".to_string(),
                },
            },
            grid: Grid {
                row: GridRow {
                    colors: vec!["#f3f3f3".to_string(), "transparent".to_string()],
                    opacity: 0.5,
                },
            },
            xaxis: XAxis {
                kind: "datetime".to_string(),
                min: None,
                max: None,
                labels: AxisLabels {
                    format: "dd MMM".to_string(),
                    datetime_formatter: DatetimeFormatter {
                        day: "dd MMM".to_string(),
                        month: "MMM 'yy".to_string(),
                    },
                },
            },
            yaxis: YAxis { max: None },
            markers: Markers {
                size: 4,
                colors: "red".to_string(),
                stroke_colors: "#fff".to_string(),
                stroke_width: 2,
                stroke_opacity: 0.9,
                stroke_dash_array: 0,
                fill_opacity: 1.0,
                discrete: Vec::new(),
                shape: "circle".to_string(),
                radius: 2,
                offset_x: 0,
                offset_y: 0,
                show_null_data_points: true,
                hover: MarkerHover { size_offset: 3 },
            },
        }
    }

    /// This template with the x-axis clipped to `range`, passed through as is.
    pub fn with_range(mut self, range: &VisibleRange) -> Self {
        self.xaxis.min = range.min;
        self.xaxis.max = range.max;
        self
    }
}

/// Serialize options and the single series into the JSON strings the
/// chart bridge expects.
pub fn chart_payload(options: &ChartOptions, series: &Series) -> anyhow::Result<(String, String)> {
    let options_json = serde_json::to_string(options)?;
    let series_json = serde_json::to_string(&[series])?;
    Ok((options_json, series_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::on_range_change;
    use serde_json::json;

    #[test]
    fn test_template_json_keys() {
        let options = ChartOptions::template(&ChartSettings::default());
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["chart"]["type"], "line");
        assert_eq!(value["chart"]["height"], 350);
        assert_eq!(value["chart"]["zoom"]["enabled"], false);
        assert_eq!(value["dataLabels"]["enabled"], false);
        assert_eq!(value["stroke"]["curve"], "straight");
        assert_eq!(value["title"]["text"], "User Growth Trends by Day");
        assert_eq!(value["title"]["style"]["fontSize"], "32px");
        assert_eq!(value["grid"]["row"]["colors"], json!(["#f3f3f3", "transparent"]));
        assert_eq!(value["xaxis"]["type"], "datetime");
        assert_eq!(value["xaxis"]["labels"]["format"], "dd MMM");
        assert_eq!(value["markers"]["strokeColors"], "#fff");
        assert_eq!(value["markers"]["hover"]["sizeOffset"], 3);
    }

    #[test]
    fn test_unbounded_range_sends_null_bounds() {
        let options = ChartOptions::template(&ChartSettings::default())
            .with_range(&VisibleRange::default());
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["xaxis"].get("min"), Some(&serde_json::Value::Null));
        assert_eq!(value["xaxis"].get("max"), Some(&serde_json::Value::Null));
        assert!(value["yaxis"].get("max").is_none());
    }

    #[test]
    fn test_cleared_range_resets_previous_clip() {
        let settings = ChartSettings::default();
        let series = Series::empty("Users");

        let clipped = ChartOptions::template(&settings)
            .with_range(&on_range_change("2021-01-01", "2021-01-02"));
        let (clipped_json, _) = chart_payload(&clipped, &series).unwrap();
        assert!(clipped_json.contains(r#""min":1609459200000"#));

        let cleared = ChartOptions::template(&settings).with_range(&on_range_change("", ""));
        let (cleared_json, _) = chart_payload(&cleared, &series).unwrap();
        assert!(cleared_json.contains(r#""min":null"#));
        assert!(cleared_json.contains(r#""max":null"#));

        let half = ChartOptions::template(&settings)
            .with_range(&on_range_change("2021-01-01", "bad"));
        let (half_json, _) = chart_payload(&half, &series).unwrap();
        assert!(half_json.contains(r#""min":1609459200000"#));
        assert!(half_json.contains(r#""max":null"#));
    }

    #[test]
    fn test_range_passes_through_unchanged() {
        let range = on_range_change("2021-01-01", "2021-01-02");
        let options = ChartOptions::template(&ChartSettings::default()).with_range(&range);
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["xaxis"]["min"], 1_609_459_200_000i64);
        assert_eq!(value["xaxis"]["max"], 1_609_545_600_000i64);
    }

    #[test]
    fn test_with_range_only_touches_xaxis() {
        let template = ChartOptions::template(&ChartSettings::default());
        let clipped = template.clone().with_range(&VisibleRange {
            min: Some(1),
            max: Some(2),
        });
        assert_eq!(clipped.title, template.title);
        assert_eq!(clipped.markers, template.markers);
        assert_eq!(clipped.xaxis.labels, template.xaxis.labels);
        assert_ne!(clipped.xaxis, template.xaxis);
    }

    #[test]
    fn test_chart_payload_wraps_series_in_array() {
        let options = ChartOptions::template(&ChartSettings::default());
        let (_, series_json) = chart_payload(&options, &Series::empty("Users")).unwrap();
        assert_eq!(series_json, r#"[{"name":"Users","data":[]}]"#);
    }
}
