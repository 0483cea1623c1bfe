use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::charts::{ChartSpec, PieChart, ScatterChart};
use crate::color::ColorMap;
use crate::reactive::OutputId;
use crate::state::AppState;

const CHART_HEIGHT: f32 = 380.0;

/// Arc segments per full turn of the pie.
const ARC_SEGMENTS: f64 = 128.0;

// ---------------------------------------------------------------------------
// Chart region
// ---------------------------------------------------------------------------

/// Render the current chart of an output region, title first.
pub fn chart(ui: &mut Ui, output: OutputId, state: &AppState) {
    let Some(spec) = state.chart(output) else {
        return;
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(spec.title());
    });

    let empty = spec.is_empty();
    match spec {
        ChartSpec::Pie(pie) => pie_chart(ui, output.as_str(), pie, empty, &state.slice_colors),
        ChartSpec::Scatter(scatter) => {
            scatter_chart(ui, output.as_str(), scatter, empty, &state.booster_colors)
        }
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, id: &str, pie: &PieChart, empty: bool, colors: &ColorMap) {
    let wedges = pie.wedges();
    let total = pie.total() as f64;

    Plot::new(id)
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            if empty {
                plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), "No launches"));
                return;
            }

            for (slice, &(start, sweep)) in pie.slices.iter().zip(&wedges) {
                if slice.value == 0 {
                    continue;
                }
                let color = colors.color_for(&slice.label);

                // Polygon fill assumes a convex shape: draw quarter-turn
                // pieces under one legend entry.
                for (piece_start, piece_sweep) in split_wedge(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(wedge_points(piece_start, piece_sweep)))
                            .name(&slice.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                }

                let mid = start + sweep / 2.0;
                let percent = slice.value as f64 / total * 100.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{percent:.1}%")).color(Color32::WHITE),
                ));
            }
        });
}

/// Split a wedge into equal pieces of at most a quarter turn.
fn split_wedge(start: f64, sweep: f64) -> Vec<(f64, f64)> {
    let pieces = (sweep / FRAC_PI_2).ceil() as usize;
    (0..pieces)
        .map(|i| {
            let piece = sweep / pieces as f64;
            (start + piece * i as f64, piece)
        })
        .collect()
}

/// Centre point followed by the arc from `start` to `start + sweep`.
fn wedge_points(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let segments = ((sweep / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let angle = start + sweep * i as f64 / segments as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

fn scatter_chart(ui: &mut Ui, id: &str, chart: &ScatterChart, empty: bool, colors: &ColorMap) {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .include_x(0.0)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if empty {
                plot_ui.text(Text::new(
                    PlotPoint::new(0.0, 0.5),
                    "No launches in the selected payload range",
                ));
                return;
            }
            for series in &chart.series {
                plot_ui.points(
                    Points::new(PlotPoints::from(series.points.clone()))
                        .name(&series.label)
                        .color(colors.color_for(&series.label))
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
