use std::path::PathBuf;

use crate::data::filter::PayloadRange;

/// Table read at startup, relative to the working directory.
pub const DATA_FILE: &str = "spacex_launch_dash.csv";

/// Bounds, step and tick marks of the payload range slider.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl SliderConfig {
    /// The slider starts out covering its whole span.
    pub fn full_range(&self) -> PayloadRange {
        PayloadRange::new(self.min, self.max)
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}

/// Everything the dashboard needs to know before it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub payload_slider: SliderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [600.0, 400.0],
            payload_slider: SliderConfig::default(),
        }
    }
}
