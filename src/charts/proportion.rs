use log::debug;

use super::{PieChart, PieSlice};
use crate::data::filter::SiteSelection;
use crate::data::model::{LaunchDataset, Outcome};

pub const ALL_SITES_TITLE: &str = "Total Success Launches By Site";

/// Title of the per-site proportion chart.
pub fn site_title(site: &str) -> String {
    format!("Total Success Launches For Site {site}")
}

/// Success proportions for the current site selection.
///
/// * `All` – one slice per site holding its success count. Sites without a
///   single success still get a (zero) slice.
/// * `Site(s)` – a `Success` and a `Failure` slice for the launches at `s`.
///   A site without launches gives an empty chart.
pub fn proportion_chart(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    let chart = match selection {
        SiteSelection::All => {
            let slices = dataset
                .sites()
                .iter()
                .map(|site| PieSlice {
                    label: site.clone(),
                    value: dataset
                        .records()
                        .iter()
                        .filter(|r| r.site == *site && r.outcome.is_success())
                        .count(),
                })
                .collect();
            PieChart {
                title: ALL_SITES_TITLE.to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let (mut successes, mut failures) = (0, 0);
            for rec in dataset.records().iter().filter(|r| r.site == *site) {
                match rec.outcome {
                    Outcome::Success => successes += 1,
                    Outcome::Failure => failures += 1,
                }
            }
            let slices = if successes + failures == 0 {
                Vec::new()
            } else {
                vec![
                    PieSlice {
                        label: Outcome::Success.to_string(),
                        value: successes,
                    },
                    PieSlice {
                        label: Outcome::Failure.to_string(),
                        value: failures,
                    },
                ]
            };
            PieChart {
                title: site_title(site),
                slices,
            }
        }
    };
    debug!(
        "proportion chart for {selection}: {} slices, {} launches",
        chart.slices.len(),
        chart.total()
    );
    chart
}
