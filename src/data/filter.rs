use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Site predicate
// ---------------------------------------------------------------------------

/// Which launch site the charts are restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    /// No restriction (the `ALL` dropdown value).
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("ALL"),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload predicate
// ---------------------------------------------------------------------------

/// Inclusive payload mass range `[low, high]`. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Build a range from two end points in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Restrict both end points to `[min, max]`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        PayloadRange::new(self.low.clamp(min, max), self.high.clamp(min, max))
    }

    pub fn contains(&self, payload_mass: f64) -> bool {
        self.low <= payload_mass && payload_mass <= self.high
    }
}

/// Records whose payload mass lies inside `range` (both ends inclusive).
pub fn records_in_range<'a>(
    dataset: &'a LaunchDataset,
    range: PayloadRange,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset
        .records()
        .iter()
        .filter(move |rec| range.contains(rec.payload_mass))
}

// ---------------------------------------------------------------------------
// Booster label normalization
// ---------------------------------------------------------------------------

/// Prefix → short label. Checked in order, first match wins.
pub const BOOSTER_RULES: [(&str, &str); 5] = [
    ("F9 v1.1", "v1.1"),
    ("F9 v1.0", "v1.0"),
    ("F9 B4", "B4"),
    ("F9 B5", "B5"),
    ("F9 FT", "FT"),
];

/// Rewrite a raw booster version to its short label. Versions matching no
/// rule are returned unchanged.
pub fn normalize_booster(version: &str) -> &str {
    apply_prefix_rules(&BOOSTER_RULES, version)
}

/// Return the label of the first rule whose prefix starts `value`, or `value`
/// itself when none does.
pub fn apply_prefix_rules<'a>(rules: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    rules
        .iter()
        .find(|(prefix, _)| value.starts_with(prefix))
        .map(|(_, label)| *label)
        .unwrap_or(value)
}
