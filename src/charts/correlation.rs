use log::debug;

use super::proportion;
use super::{ScatterChart, ScatterSeries};
use crate::data::filter::{normalize_booster, records_in_range, PayloadRange, SiteSelection};
use crate::data::loader::{CLASS_COLUMN, PAYLOAD_COLUMN};
use crate::data::model::LaunchDataset;

pub const ALL_SITES_TITLE: &str = "Correlation Between Payload and Success For All Sites";

/// Payload mass against outcome for launches inside `range`, one series per
/// booster label.
///
/// Series appear in the order their label is first met in the table.
pub fn correlation_chart(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for rec in records_in_range(dataset, range).filter(|r| selection.matches(r)) {
        let label = normalize_booster(&rec.booster_version);
        let point = [rec.payload_mass, rec.outcome.as_f64()];
        match series.iter_mut().find(|s| s.label == label) {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                label: label.to_string(),
                points: vec![point],
            }),
        }
    }

    let title = match selection {
        SiteSelection::All => ALL_SITES_TITLE.to_string(),
        // Same wording as the per-site pie chart.
        SiteSelection::Site(site) => proportion::site_title(site),
    };

    let chart = ScatterChart {
        title,
        x_label: PAYLOAD_COLUMN.to_string(),
        y_label: CLASS_COLUMN.to_string(),
        series,
    };
    debug!(
        "correlation chart for {selection} in [{}, {}]: {} points",
        range.low(),
        range.high(),
        chart.point_count()
    );
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::two_site_dataset;

    fn xs(chart: &ScatterChart) -> Vec<f64> {
        let mut xs: Vec<f64> = chart
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p[0]))
            .collect();
        xs.sort_by(f64::total_cmp);
        xs
    }

    #[test]
    fn test_full_range_keeps_everything() {
        let ds = two_site_dataset();
        let chart = correlation_chart(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(chart.point_count(), ds.len());
        assert_eq!(chart.title, ALL_SITES_TITLE);
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
    }

    #[test]
    fn test_range_filter_is_inclusive() {
        let ds = two_site_dataset();
        let chart = correlation_chart(
            &ds,
            &SiteSelection::All,
            PayloadRange::new(2500.0, 5000.0),
        );
        assert_eq!(xs(&chart), vec![2500.0, 3000.0, 5000.0]);
    }

    #[test]
    fn test_range_filter_matches_predicate_for_every_range() {
        let ds = two_site_dataset();
        let edges = [0.0, 500.0, 2500.0, 3000.0, 7500.0, 9600.0, 10000.0];
        for &lo in &edges {
            for &hi in edges.iter().filter(|&&hi| hi >= lo) {
                let chart =
                    correlation_chart(&ds, &SiteSelection::All, PayloadRange::new(lo, hi));
                let mut expected: Vec<f64> = ds
                    .records()
                    .iter()
                    .map(|r| r.payload_mass)
                    .filter(|&m| lo <= m && m <= hi)
                    .collect();
                expected.sort_by(f64::total_cmp);
                assert_eq!(xs(&chart), expected, "range [{lo}, {hi}]");
            }
        }
    }

    #[test]
    fn test_series_use_normalized_labels() {
        let ds = two_site_dataset();
        let chart = correlation_chart(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(chart.series_labels(), vec!["v1.0", "v1.1", "FT", "B4", "B5"]);

        let ft = chart.series.iter().find(|s| s.label == "FT").unwrap();
        assert_eq!(ft.points, vec![[3000.0, 0.0], [5000.0, 1.0]]);
    }

    #[test]
    fn test_single_site() {
        let ds = two_site_dataset();
        let chart = correlation_chart(
            &ds,
            &SiteSelection::Site("B".into()),
            PayloadRange::new(0.0, 10000.0),
        );
        assert_eq!(chart.title, "Total Success Launches For Site B");
        assert_eq!(chart.point_count(), 1);
        assert_eq!(chart.series[0].points, vec![[3000.0, 0.0]]);
    }

    #[test]
    fn test_empty_selection_gives_empty_chart() {
        let ds = two_site_dataset();
        let chart = correlation_chart(
            &ds,
            &SiteSelection::Site("B".into()),
            PayloadRange::new(4000.0, 6000.0),
        );
        assert!(chart.series.is_empty());
        assert_eq!(chart.point_count(), 0);
    }
}
