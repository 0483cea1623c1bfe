use crate::config::DashboardConfig;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::reactive::{OutputId, SelectorId};
use crate::selectors::{site_options, SelectorOption, SelectorState};

/// Title colour `#503D36`.
pub const TITLE_COLOR: [u8; 3] = [0x50, 0x3D, 0x36];
pub const TITLE_SIZE: f32 = 40.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub id: SelectorId,
    pub options: Vec<SelectorOption>,
    pub default: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeSliderSpec {
    pub id: SelectorId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// `(position, label)` tick marks.
    pub marks: Vec<(f64, String)>,
    pub value: PayloadRange,
}

/// One element of the page, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Heading {
        text: String,
        color: [u8; 3],
        size: f32,
    },
    Break,
    Paragraph(String),
    Dropdown(DropdownSpec),
    RangeSlider(RangeSliderSpec),
    Graph(OutputId),
}

/// Static description of the page. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub components: Vec<Component>,
}

impl Page {
    pub fn dropdown(&self) -> Option<&DropdownSpec> {
        self.components.iter().find_map(|c| match c {
            Component::Dropdown(d) => Some(d),
            _ => None,
        })
    }

    pub fn range_slider(&self) -> Option<&RangeSliderSpec> {
        self.components.iter().find_map(|c| match c {
            Component::RangeSlider(r) => Some(r),
            _ => None,
        })
    }

    /// Selector values the page starts with: the dropdown's default site and
    /// the slider's initial span. `fallback` covers a page without a slider.
    pub fn initial_selectors(&self, fallback: PayloadRange) -> SelectorState {
        SelectorState {
            site: self
                .dropdown()
                .map(|d| d.default.clone())
                .unwrap_or_default(),
            payload: self.range_slider().map_or(fallback, |r| r.value),
        }
    }

    #[cfg(test)]
    pub fn graphs(&self) -> Vec<OutputId> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Graph(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}

pub fn build_page(dataset: &LaunchDataset, config: &DashboardConfig) -> Page {
    let slider = &config.payload_slider;
    let components = vec![
        Component::Heading {
            text: config.title.clone(),
            color: TITLE_COLOR,
            size: TITLE_SIZE,
        },
        Component::Break,
        Component::Dropdown(DropdownSpec {
            id: SelectorId::SiteDropdown,
            options: site_options(dataset),
            default: SiteSelection::All,
            placeholder: "Select a Launch Site here".to_string(),
            searchable: true,
        }),
        Component::Graph(OutputId::SuccessPieChart),
        Component::Break,
        Component::Paragraph("Payload range (Kg):".to_string()),
        Component::RangeSlider(RangeSliderSpec {
            id: SelectorId::PayloadSlider,
            min: slider.min,
            max: slider.max,
            step: slider.step,
            marks: slider.marks.iter().map(|&m| (m, format!("{m}"))).collect(),
            value: slider.full_range(),
        }),
        Component::Graph(OutputId::PayloadScatterChart),
    ];
    Page { components }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::two_site_dataset;

    #[test]
    fn test_page_layout() {
        let page = build_page(&two_site_dataset(), &DashboardConfig::default());
        assert!(matches!(
            &page.components[0],
            Component::Heading { text, .. } if text == "SpaceX Launch Records Dashboard"
        ));
        assert_eq!(
            page.graphs(),
            vec![OutputId::SuccessPieChart, OutputId::PayloadScatterChart]
        );
    }

    #[test]
    fn test_dropdown_spec() {
        let page = build_page(&two_site_dataset(), &DashboardConfig::default());
        let dropdown = page.dropdown().unwrap();
        assert_eq!(dropdown.id.as_str(), "site-dropdown");
        assert_eq!(dropdown.default, SiteSelection::All);
        assert_eq!(dropdown.options.len(), 3);
        assert!(dropdown.searchable);
    }

    #[test]
    fn test_range_slider_spec() {
        let page = build_page(&two_site_dataset(), &DashboardConfig::default());
        let slider = page.range_slider().unwrap();
        assert_eq!(slider.id.as_str(), "payload-slider");
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10000.0, 1000.0));
        let labels: Vec<&str> = slider.marks.iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["0", "2500", "5000", "7500", "10000"]);
        assert_eq!(slider.value, PayloadRange::new(0.0, 10000.0));
    }

    #[test]
    fn test_initial_selectors_follow_components() {
        let mut page = build_page(&two_site_dataset(), &DashboardConfig::default());
        for component in &mut page.components {
            match component {
                Component::Dropdown(d) => d.default = SiteSelection::Site("B".into()),
                Component::RangeSlider(r) => r.value = PayloadRange::new(1000.0, 4000.0),
                _ => {}
            }
        }
        let initial = page.initial_selectors(PayloadRange::new(0.0, 10000.0));
        assert_eq!(initial.site, SiteSelection::Site("B".into()));
        assert_eq!(initial.payload, PayloadRange::new(1000.0, 4000.0));

        let bare = Page { components: Vec::new() };
        let initial = bare.initial_selectors(PayloadRange::new(0.0, 500.0));
        assert_eq!(initial.site, SiteSelection::All);
        assert_eq!(initial.payload, PayloadRange::new(0.0, 500.0));
    }
}
