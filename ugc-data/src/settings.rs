//! Compile-time configuration for the chart app.

/// Endpoint serving the day → count JSON mapping.
pub const DEFAULT_DATA_URL: &str = "https://elasticsnivelinghashmaps.dacod.repl.co/";

/// Chart title shown above the line.
pub const DEFAULT_TITLE: &str = "User Growth Trends by Day";

/// Fixed chart height in pixels.
pub const DEFAULT_HEIGHT: u32 = 350;

/// DOM id for the chart container div.
pub const DEFAULT_CONTAINER_ID: &str = "user-growth-chart";

/// Name of the single series.
pub const DEFAULT_SERIES_NAME: &str = "Users";

/// Settings shared by the loader and chart configurator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSettings {
    pub data_url: String,
    pub title: String,
    pub height: u32,
    pub container_id: String,
    pub series_name: String,
}

impl Default for ChartSettings {
    /// Defaults, with `UGC_DATA_URL` (read at build time) overriding the endpoint.
    fn default() -> Self {
        Self {
            data_url: option_env!("UGC_DATA_URL")
                .unwrap_or(DEFAULT_DATA_URL)
                .to_string(),
            title: DEFAULT_TITLE.to_string(),
            height: DEFAULT_HEIGHT,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            series_name: DEFAULT_SERIES_NAME.to_string(),
        }
    }
}
