/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  payload range, site selection, booster labels
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::model::{LaunchDataset, LaunchRecord, Outcome};

    pub fn record(site: &str, payload_mass: f64, booster: &str, success: bool) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass,
            booster_version: booster.to_string(),
            outcome: if success {
                Outcome::Success
            } else {
                Outcome::Failure
            },
        }
    }

    /// Site A: 3 successes, 2 failures. Site B: 0 successes, 1 failure.
    pub fn two_site_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, "F9 v1.0  B0003", true),
            record("A", 2500.0, "F9 v1.1 B1011", false),
            record("B", 3000.0, "F9 FT B1021.1", false),
            record("A", 5000.0, "F9 FT B1029.2", true),
            record("A", 7500.0, "F9 B4 B1041.1", false),
            record("A", 9600.0, "F9 B5 B1048.3", true),
        ])
    }
}
