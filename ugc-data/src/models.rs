//! Data model structs for the user growth series.
//!
//! Point structs derive `Serialize` so they can be handed to the chart
//! widget as JSON from the Dioxus WASM frontend.

use chrono::NaiveDate;
use serde::Serialize;

/// One (date, count) observation from the upstream source.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCount {
    /// Month-first date string, "MM-DD-YYYY".
    pub date: String,
    /// Number of users recorded for the day, as sent by the source.
    pub count: f64,
    /// `date` parsed, used for span lookups.
    pub day: NaiveDate,
}

impl DayCount {
    pub fn to_point(&self) -> SeriesPoint {
        SeriesPoint {
            x: self.date.clone(),
            y: self.count,
        }
    }
}

/// A single `{x, y}` chart point.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    pub x: String,
    pub y: f64,
}

/// A named line on the chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Series {
    pub name: String,
    pub data: Vec<SeriesPoint>,
}

impl Series {
    /// Build a series from loaded day counts, keeping their order.
    pub fn from_days(name: &str, days: &[DayCount]) -> Self {
        Self {
            name: name.to_string(),
            data: days.iter().map(DayCount::to_point).collect(),
        }
    }

    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            data: Vec::new(),
        }
    }
}
