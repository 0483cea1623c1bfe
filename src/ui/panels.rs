use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Slider, Ui};

use crate::data::filter::PayloadRange;
use crate::page::{Component, DropdownSpec, RangeSliderSpec};
use crate::reactive::SelectorEvent;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Page body
// ---------------------------------------------------------------------------

/// Render every page component top to bottom.
pub fn page(ui: &mut Ui, state: &mut AppState) {
    // Clone the layout so we can mutate state inside the loop.
    let components = state.page.components.clone();

    for component in &components {
        match component {
            Component::Heading { text, color, size } => {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(text)
                            .size(*size)
                            .color(Color32::from_rgb(color[0], color[1], color[2])),
                    );
                });
            }
            Component::Break => ui.add_space(12.0),
            Component::Paragraph(text) => {
                ui.label(text);
            }
            Component::Dropdown(spec) => site_dropdown(ui, spec, state),
            Component::RangeSlider(spec) => payload_slider(ui, spec, state),
            Component::Graph(output) => plot::chart(ui, *output, state),
        }
    }
}

// ---------------------------------------------------------------------------
// Site dropdown
// ---------------------------------------------------------------------------

fn site_dropdown(ui: &mut Ui, spec: &DropdownSpec, state: &mut AppState) {
    let current = state.dashboard.selectors().site.clone();
    let selected_text = spec
        .options
        .iter()
        .find(|o| o.value == current)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| spec.placeholder.clone());

    let mut picked = None;
    egui::ComboBox::from_id_salt(spec.id.as_str())
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if spec.searchable {
                ui.add(
                    egui::TextEdit::singleline(&mut state.site_query)
                        .hint_text(spec.placeholder.as_str()),
                );
                ui.separator();
            }
            let query = state.site_query.to_lowercase();
            for option in &spec.options {
                if !query.is_empty() && !option.label.to_lowercase().contains(&query) {
                    continue;
                }
                if ui
                    .selectable_label(option.value == current, option.label.as_str())
                    .clicked()
                {
                    picked = Some(option.value.clone());
                }
            }
        });

    if let Some(site) = picked {
        state.site_query.clear();
        state.publish(SelectorEvent::SiteChanged(site));
    }
}

// ---------------------------------------------------------------------------
// Payload range slider
// ---------------------------------------------------------------------------

/// Two handles (low / high) sharing one track width, with the tick labels
/// painted underneath.
fn payload_slider(ui: &mut Ui, spec: &RangeSliderSpec, state: &mut AppState) {
    let mut low = state.payload_low;
    let mut high = state.payload_high;
    let track_width = (ui.available_width() - 120.0).max(100.0);

    let (low_changed, high_changed) = ui
        .scope(|ui: &mut Ui| {
            ui.spacing_mut().slider_width = track_width;
            let low_changed = ui
                .add(
                    Slider::new(&mut low, spec.min..=spec.max)
                        .step_by(spec.step)
                        .text("from"),
                )
                .changed();
            let high_changed = ui
                .add(
                    Slider::new(&mut high, spec.min..=spec.max)
                        .step_by(spec.step)
                        .text("to"),
                )
                .changed();
            (low_changed, high_changed)
        })
        .inner;

    tick_marks(ui, spec, track_width);

    // A handle dragged past the other one pushes it along.
    if low_changed {
        high = high.max(low);
    }
    if high_changed {
        low = low.min(high);
    }
    if low_changed || high_changed {
        state.publish(SelectorEvent::PayloadChanged(PayloadRange::new(low, high)));
    }
}

fn tick_marks(ui: &mut Ui, spec: &RangeSliderSpec, track_width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(track_width, 16.0), Sense::hover());
    let span = spec.max - spec.min;
    if span <= 0.0 {
        return;
    }
    let painter = ui.painter();
    for (value, label) in &spec.marks {
        let t = ((value - spec.min) / span) as f32;
        painter.text(
            egui::pos2(rect.left() + t * rect.width(), rect.top()),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(12.0),
            ui.visuals().text_color(),
        );
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Dataset summary: launch count, site count and payload bounds.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    let dataset = state.dashboard.dataset();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches from {} sites",
            dataset.len(),
            dataset.sites().len()
        ));
        ui.separator();
        match dataset.payload_bounds() {
            Some(bounds) => ui.label(format!(
                "Payload Mass (kg): {} to {}",
                bounds.min, bounds.max
            )),
            None => ui.label(RichText::new("No launches loaded").color(Color32::RED)),
        };
    });
}
