//! Selector → chart wiring.
//!
//! Every chart output registers the selectors it depends on together with the
//! handler that computes it. When a selector publishes a change, the
//! [`Dashboard`] updates its [`SelectorState`] and recomputes exactly the
//! outputs subscribed to that selector.

use std::collections::BTreeMap;

use log::debug;

use crate::charts::correlation::correlation_chart;
use crate::charts::proportion::proportion_chart;
use crate::charts::ChartSpec;
use crate::config::SliderConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::selectors::SelectorState;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorId {
    SiteDropdown,
    PayloadSlider,
}

impl SelectorId {
    pub fn as_str(self) -> &'static str {
        match self {
            SelectorId::SiteDropdown => "site-dropdown",
            SelectorId::PayloadSlider => "payload-slider",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPieChart,
    PayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::PayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

/// A user interaction with one of the selectors.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    SiteChanged(SiteSelection),
    PayloadChanged(PayloadRange),
}

impl SelectorEvent {
    /// The selector that published this event.
    pub fn source(&self) -> SelectorId {
        match self {
            SelectorEvent::SiteChanged(_) => SelectorId::SiteDropdown,
            SelectorEvent::PayloadChanged(_) => SelectorId::PayloadSlider,
        }
    }
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

/// Computes an output from the dataset and the current selector values.
/// Must be pure: the same inputs always give the same chart.
pub type Handler = fn(&LaunchDataset, &SelectorState) -> ChartSpec;

struct Subscription {
    output: OutputId,
    inputs: Vec<SelectorId>,
    handler: Handler,
}

/// Registry of output subscriptions.
#[derive(Default)]
pub struct Bindings {
    subscriptions: Vec<Subscription>,
}

impl Bindings {
    /// Register `output` as depending on `inputs`. Registering the same
    /// output twice replaces the earlier subscription.
    pub fn subscribe(&mut self, output: OutputId, inputs: &[SelectorId], handler: Handler) {
        self.subscriptions.retain(|s| s.output != output);
        self.subscriptions.push(Subscription {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
    }

    /// Outputs (with their handlers) that depend on `source`.
    pub fn subscribers(&self, source: SelectorId) -> impl Iterator<Item = (OutputId, Handler)> + '_ {
        self.subscriptions
            .iter()
            .filter(move |s| s.inputs.contains(&source))
            .map(|s| (s.output, s.handler))
    }

    pub fn outputs(&self) -> impl Iterator<Item = (OutputId, Handler)> + '_ {
        self.subscriptions.iter().map(|s| (s.output, s.handler))
    }

    #[cfg(test)]
    pub fn inputs_of(&self, output: OutputId) -> Option<&[SelectorId]> {
        self.subscriptions
            .iter()
            .find(|s| s.output == output)
            .map(|s| s.inputs.as_slice())
    }
}

fn pie_handler(dataset: &LaunchDataset, selectors: &SelectorState) -> ChartSpec {
    ChartSpec::Pie(proportion_chart(dataset, &selectors.site))
}

fn scatter_handler(dataset: &LaunchDataset, selectors: &SelectorState) -> ChartSpec {
    ChartSpec::Scatter(correlation_chart(
        dataset,
        &selectors.site,
        selectors.payload,
    ))
}

/// The pie chart follows the site dropdown; the scatter chart follows both
/// the dropdown and the payload slider.
pub fn default_bindings() -> Bindings {
    let mut bindings = Bindings::default();
    bindings.subscribe(
        OutputId::SuccessPieChart,
        &[SelectorId::SiteDropdown],
        pie_handler,
    );
    bindings.subscribe(
        OutputId::PayloadScatterChart,
        &[SelectorId::SiteDropdown, SelectorId::PayloadSlider],
        scatter_handler,
    );
    bindings
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Owns the dataset, the selector values and the latest chart of every output.
pub struct Dashboard {
    dataset: LaunchDataset,
    slider: SliderConfig,
    selectors: SelectorState,
    bindings: Bindings,
    charts: BTreeMap<OutputId, ChartSpec>,
}

impl Dashboard {
    pub fn new(dataset: LaunchDataset, slider: SliderConfig, initial: SelectorState) -> Self {
        Self::with_bindings(dataset, slider, initial, default_bindings())
    }

    /// Build a dashboard with custom wiring. Every output is computed once
    /// from `initial`, its range clamped to the slider bounds.
    pub fn with_bindings(
        dataset: LaunchDataset,
        slider: SliderConfig,
        initial: SelectorState,
        bindings: Bindings,
    ) -> Self {
        let selectors = SelectorState {
            payload: initial.payload.clamped(slider.min, slider.max),
            ..initial
        };
        let charts = bindings
            .outputs()
            .map(|(output, handler)| (output, handler(&dataset, &selectors)))
            .collect();
        Self {
            dataset,
            slider,
            selectors,
            bindings,
            charts,
        }
    }

    /// Apply a selector change and recompute the outputs subscribed to it.
    /// Returns the outputs that were recomputed.
    pub fn publish(&mut self, event: SelectorEvent) -> Vec<OutputId> {
        let source = event.source();
        match event {
            SelectorEvent::SiteChanged(site) => self.selectors.site = site,
            SelectorEvent::PayloadChanged(range) => {
                self.selectors.payload = range.clamped(self.slider.min, self.slider.max);
            }
        }

        let mut updated = Vec::new();
        for (output, handler) in self.bindings.subscribers(source) {
            self.charts
                .insert(output, handler(&self.dataset, &self.selectors));
            updated.push(output);
        }
        debug!(
            "{} changed, recomputed {:?}",
            source.as_str(),
            updated.iter().map(|o| o.as_str()).collect::<Vec<_>>()
        );
        updated
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.charts.get(&output)
    }

    pub fn selectors(&self) -> &SelectorState {
        &self.selectors
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::two_site_dataset;

    fn dashboard() -> Dashboard {
        let slider = SliderConfig::default();
        let initial = SelectorState {
            site: SiteSelection::All,
            payload: slider.full_range(),
        };
        Dashboard::new(two_site_dataset(), slider, initial)
    }

    fn pie(dash: &Dashboard) -> &crate::charts::PieChart {
        match dash.chart(OutputId::SuccessPieChart) {
            Some(ChartSpec::Pie(p)) => p,
            other => panic!("expected pie chart, got {other:?}"),
        }
    }

    fn scatter(dash: &Dashboard) -> &crate::charts::ScatterChart {
        match dash.chart(OutputId::PayloadScatterChart) {
            Some(ChartSpec::Scatter(s)) => s,
            other => panic!("expected scatter chart, got {other:?}"),
        }
    }

    #[test]
    fn test_initial_charts() {
        let dash = dashboard();
        assert_eq!(dash.selectors().site, SiteSelection::All);
        assert_eq!(dash.selectors().payload, PayloadRange::new(0.0, 10000.0));
        assert_eq!(pie(&dash).value_of("A"), Some(3));
        assert_eq!(pie(&dash).value_of("B"), Some(0));
        assert_eq!(scatter(&dash).point_count(), 6);
    }

    #[test]
    fn test_site_change_recomputes_both_charts() {
        let mut dash = dashboard();
        let updated = dash.publish(SelectorEvent::SiteChanged(SiteSelection::Site("A".into())));
        assert_eq!(
            updated,
            vec![OutputId::SuccessPieChart, OutputId::PayloadScatterChart]
        );
        assert_eq!(pie(&dash).value_of("Success"), Some(3));
        assert_eq!(pie(&dash).value_of("Failure"), Some(2));
        assert_eq!(scatter(&dash).point_count(), 5);
    }

    #[test]
    fn test_payload_change_recomputes_only_scatter() {
        let mut dash = dashboard();
        let pie_before = pie(&dash).clone();
        let updated = dash.publish(SelectorEvent::PayloadChanged(PayloadRange::new(
            2000.0, 6000.0,
        )));
        assert_eq!(updated, vec![OutputId::PayloadScatterChart]);
        assert_eq!(pie(&dash), &pie_before);
        assert_eq!(scatter(&dash).point_count(), 3);
    }

    #[test]
    fn test_payload_change_is_clamped_to_slider() {
        let mut dash = dashboard();
        dash.publish(SelectorEvent::PayloadChanged(PayloadRange::new(
            -1000.0, 50000.0,
        )));
        assert_eq!(dash.selectors().payload, PayloadRange::new(0.0, 10000.0));
    }

    #[test]
    fn test_publishing_is_idempotent() {
        let mut dash = dashboard();
        let event = SelectorEvent::SiteChanged(SiteSelection::Site("B".into()));
        dash.publish(event.clone());
        let first = scatter(&dash).clone();
        dash.publish(event);
        assert_eq!(scatter(&dash), &first);
    }

    #[test]
    fn test_default_bindings_dependencies() {
        let bindings = default_bindings();
        assert_eq!(
            bindings.inputs_of(OutputId::SuccessPieChart),
            Some(&[SelectorId::SiteDropdown][..])
        );
        assert_eq!(
            bindings.inputs_of(OutputId::PayloadScatterChart),
            Some(&[SelectorId::SiteDropdown, SelectorId::PayloadSlider][..])
        );
    }

    #[test]
    fn test_resubscribe_replaces() {
        let mut bindings = default_bindings();
        bindings.subscribe(
            OutputId::SuccessPieChart,
            &[SelectorId::PayloadSlider],
            pie_handler,
        );
        let outputs: Vec<OutputId> = bindings
            .subscribers(SelectorId::PayloadSlider)
            .map(|(o, _)| o)
            .collect();
        assert_eq!(
            outputs,
            vec![OutputId::PayloadScatterChart, OutputId::SuccessPieChart]
        );
        assert_eq!(bindings.outputs().count(), 2);
    }

    #[test]
    fn test_unsubscribed_output_is_absent() {
        let dash = Dashboard::with_bindings(
            two_site_dataset(),
            SliderConfig::default(),
            SelectorState {
                site: SiteSelection::All,
                payload: PayloadRange::new(0.0, 10000.0),
            },
            Bindings::default(),
        );
        assert!(dash.chart(OutputId::SuccessPieChart).is_none());
    }

    #[test]
    fn test_starts_from_initial_selectors() {
        let initial = SelectorState {
            site: SiteSelection::Site("A".into()),
            payload: PayloadRange::new(2000.0, 20000.0),
        };
        let dash = Dashboard::new(two_site_dataset(), SliderConfig::default(), initial);

        assert_eq!(dash.selectors().site, SiteSelection::Site("A".into()));
        assert_eq!(dash.selectors().payload, PayloadRange::new(2000.0, 10000.0));
        assert_eq!(pie(&dash).title, "Total Success Launches For Site A");
        assert_eq!(pie(&dash).value_of("Success"), Some(3));
        assert_eq!(pie(&dash).value_of("Failure"), Some(2));
        match dash.chart(OutputId::PayloadScatterChart) {
            Some(ChartSpec::Scatter(s)) => assert_eq!(s.point_count(), 4),
            other => panic!("expected scatter chart, got {other:?}"),
        }
    }
}
