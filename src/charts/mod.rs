/// Chart specifications produced by the selector handlers.
///
/// A specification is plain data: the UI layer decides how to draw it.
pub mod correlation;
pub mod proportion;

use std::f64::consts::TAU;

/// Any chart an output region can show.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ChartSpec::Pie(pie) => pie.total() == 0,
            ChartSpec::Scatter(scatter) => scatter.point_count() == 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Value of the slice with the given label, if present.
    #[cfg(test)]
    pub fn value_of(&self, label: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
    }

    /// `(start_angle, sweep)` in radians for every slice, in slice order.
    /// Zero-valued slices get a zero sweep. Returns nothing when the chart
    /// has no data.
    pub fn wedges(&self) -> Vec<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.slices
            .iter()
            .map(|s| {
                let sweep = s.value as f64 / total as f64 * TAU;
                let wedge = (start, sweep);
                start += sweep;
                wedge
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// One colour group of the scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    /// `[x, y]` pairs.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    #[cfg(test)]
    pub fn series_labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}
