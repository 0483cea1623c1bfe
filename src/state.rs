use crate::charts::ChartSpec;
use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::normalize_booster;
use crate::data::model::{LaunchDataset, Outcome};
use crate::page::{build_page, Page};
use crate::reactive::{Dashboard, OutputId, SelectorEvent};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Dataset, selector values and current charts.
    pub dashboard: Dashboard,

    /// Layout built once from the dataset.
    pub page: Page,

    /// Colour per pie slice label (sites, then outcomes).
    pub slice_colors: ColorMap,

    /// Colour per normalized booster label (scatter series).
    pub booster_colors: ColorMap,

    /// Text typed into the dropdown's search box.
    pub site_query: String,

    /// Slider positions while dragging; published as one range.
    pub payload_low: f64,
    pub payload_high: f64,
}

impl AppState {
    pub fn new(dataset: LaunchDataset, config: &DashboardConfig) -> Self {
        let page = build_page(&dataset, config);
        let slice_colors = ColorMap::new(
            dataset
                .sites()
                .iter()
                .map(String::as_str)
                .chain([Outcome::Success.label(), Outcome::Failure.label()]),
        );
        let booster_colors = ColorMap::new(
            dataset
                .records()
                .iter()
                .map(|r| normalize_booster(&r.booster_version)),
        );
        let initial = page.initial_selectors(config.payload_slider.full_range());
        let dashboard = Dashboard::new(dataset, config.payload_slider.clone(), initial);
        let range = dashboard.selectors().payload;

        Self {
            dashboard,
            page,
            slice_colors,
            booster_colors,
            site_query: String::new(),
            payload_low: range.low(),
            payload_high: range.high(),
        }
    }

    /// Forward a selector change to the dashboard.
    pub fn publish(&mut self, event: SelectorEvent) {
        self.dashboard.publish(event);
        let range = self.dashboard.selectors().payload;
        self.payload_low = range.low();
        self.payload_high = range.high();
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.dashboard.chart(output)
    }
}
