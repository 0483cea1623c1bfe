use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

/// Label of the pseudo-option standing for every site.
pub const ALL_SITES_LABEL: &str = "All sites";

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorOption {
    pub label: String,
    pub value: SiteSelection,
}

/// Dropdown options: `All sites` first, then every site in the order it first
/// appears in the table.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SelectorOption> {
    std::iter::once(SelectorOption {
        label: ALL_SITES_LABEL.to_string(),
        value: SiteSelection::All,
    })
    .chain(dataset.sites().iter().map(|site| SelectorOption {
        label: site.clone(),
        value: SiteSelection::Site(site.clone()),
    }))
    .collect()
}

/// Current value of every selector on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}
