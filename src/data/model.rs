use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Binary launch outcome stored in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a raw `class` value. Anything other than 0 or 1 is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Numeric value used as the y coordinate in the scatter chart.
    pub fn as_f64(self) -> f64 {
        self.class() as f64
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// `Launch Site`
    pub site: String,
    /// `Payload Mass (kg)`, always finite and non-negative.
    pub payload_mass: f64,
    /// `Booster Version`, raw (not normalized).
    pub booster_version: String,
    /// `class`
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Min / max of the payload mass column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// The full parsed dataset with its derived summary values.
///
/// Built once at startup and never mutated afterwards; handlers only ever see
/// a shared reference.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct sites in first-occurrence order.
    sites: Vec<String>,
    /// `None` when the dataset has no rows.
    payload_bounds: Option<PayloadBounds>,
}

impl LaunchDataset {
    /// Derive the site list and payload bounds from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut sites = Vec::new();
        let mut payload_bounds: Option<PayloadBounds> = None;

        for rec in &records {
            if seen.insert(rec.site.as_str()) {
                sites.push(rec.site.clone());
            }
            let mass = rec.payload_mass;
            payload_bounds = Some(match payload_bounds {
                None => PayloadBounds { min: mass, max: mass },
                Some(b) => PayloadBounds {
                    min: b.min.min(mass),
                    max: b.max.max(mass),
                },
            });
        }

        LaunchDataset {
            records,
            sites,
            payload_bounds,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        self.payload_bounds
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::record;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Success.to_string(), "Success");
        assert_eq!(format!("{}", Outcome::Failure), "Failure");
    }

    #[test]
    fn test_sites_in_first_occurrence_order() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 500.0, "F9 v1.1", true),
            record("CCAFS LC-40", 0.0, "F9 v1.0  B0003", false),
            record("VAFB SLC-4E", 9600.0, "F9 B5 B1046.1", true),
            record("KSC LC-39A", 2490.0, "F9 FT B1031.1", true),
        ]);
        assert_eq!(ds.sites(), ["VAFB SLC-4E", "CCAFS LC-40", "KSC LC-39A"]);
    }

    #[test]
    fn test_payload_bounds() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 525.0, "F9 v1.0", true),
            record("A", 9600.0, "F9 B5", true),
            record("B", 0.0, "F9 v1.1", false),
        ]);
        assert_eq!(
            ds.payload_bounds(),
            Some(PayloadBounds {
                min: 0.0,
                max: 9600.0
            })
        );
    }

    #[test]
    fn test_empty_dataset() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.sites().is_empty());
        assert_eq!(ds.payload_bounds(), None);
    }
}
