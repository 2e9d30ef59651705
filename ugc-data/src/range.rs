//! Visible range, data span and load state.
//!
//! `LoadState` makes the loader/picker coupling explicit: a [`DataSpan`]
//! (and with it the disabled-date predicate) only exists once data is
//! `Ready` and non-empty.

use crate::dates::{next_day, parse_picker_date, to_timestamp_millis};
use crate::error::LoadError;
use crate::models::{DayCount, Series};
use chrono::NaiveDate;

/// Min/max timestamps (ms) clipping the x-axis. `None` shows all data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Build a new visible range from the picker's two date strings.
///
/// The result replaces the previous range outright. Order and span are not
/// checked. A blank or unparseable string leaves that bound unset.
pub fn on_range_change(start: &str, end: &str) -> VisibleRange {
    log::info!("From: {}, to: {}", start, end);
    VisibleRange {
        min: picker_timestamp(start),
        max: picker_timestamp(end),
    }
}

fn picker_timestamp(s: &str) -> Option<i64> {
    if s.trim().is_empty() {
        return None;
    }
    match parse_picker_date(s) {
        Ok(date) => Some(to_timestamp_millis(&date)),
        Err(e) => {
            log::warn!("range: ignoring unparseable date {:?}: {}", s, e);
            None
        }
    }
}

/// Earliest and latest loaded dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DataSpan {
    /// Span of the loaded days, `None` when nothing is loaded.
    pub fn from_days(days: &[DayCount]) -> Option<Self> {
        let first = days.iter().map(|d| d.day).min()?;
        let last = days.iter().map(|d| d.day).max()?;
        Some(Self { first, last })
    }

    /// Whether the picker must refuse `candidate`.
    ///
    /// The upper bound is one day past the last entry so the final day can
    /// close a range.
    pub fn is_date_disabled(&self, candidate: NaiveDate) -> bool {
        candidate < self.first || candidate > self.selectable_max()
    }

    /// Whether a picker input value ("YYYY-MM-DD") is a selectable date.
    pub fn accepts_picker_value(&self, value: &str) -> bool {
        match parse_picker_date(value) {
            Ok(date) => !self.is_date_disabled(date),
            Err(_) => false,
        }
    }

    pub fn selectable_min(&self) -> NaiveDate {
        self.first
    }

    pub fn selectable_max(&self) -> NaiveDate {
        next_day(&self.last)
    }
}

/// Whether the one-shot load has completed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready(Vec<DayCount>),
}

/// What [`LoadState::apply_load_result`] did with a load result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Moved to `Ready` with this many days.
    Loaded(usize),
    /// The load failed; the error was logged and the state left `Loading`.
    Failed,
    /// Already `Ready`; the result was dropped.
    Ignored,
}

impl LoadState {
    /// Fold the result of the one-shot load into the state.
    ///
    /// `Loading` moves to `Ready` on success and stays `Loading` on failure,
    /// with the error logged rather than returned. Once `Ready`, later
    /// results are ignored.
    pub fn apply_load_result(&mut self, result: Result<Vec<DayCount>, LoadError>) -> LoadOutcome {
        if self.is_ready() {
            log::warn!("load: data already loaded, ignoring a second result");
            return LoadOutcome::Ignored;
        }
        match result {
            Ok(days) => {
                log::info!("Fetched data from API: {} days", days.len());
                let count = days.len();
                *self = LoadState::Ready(days);
                log::info!("Plotted data to graph");
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                LoadOutcome::Failed
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    /// Loaded days, empty while loading.
    pub fn days(&self) -> &[DayCount] {
        match self {
            LoadState::Loading => &[],
            LoadState::Ready(days) => days,
        }
    }

    /// Span for the picker predicate. Only a non-empty `Ready` has one.
    pub fn span(&self) -> Option<DataSpan> {
        DataSpan::from_days(self.days())
    }

    /// One-line description of what the chart holds, shown under it.
    pub fn status_line(&self) -> String {
        match (self, self.span()) {
            (LoadState::Loading, _) => "Loading data...".to_string(),
            (LoadState::Ready(_), None) => "No data points received.".to_string(),
            (LoadState::Ready(days), Some(span)) => format!(
                "{} days from {} to {}",
                days.len(),
                span.first.format("%d %b %Y"),
                span.last.format("%d %b %Y"),
            ),
        }
    }

    pub fn series(&self, name: &str) -> Series {
        Series::from_days(name, self.days())
    }
}
