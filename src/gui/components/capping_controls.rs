// src/gui/components/capping_controls.rs
//
// Lower/upper bound editors. Returns true when a bound changed so the caller
// can rebuild derived views.

use eframe::egui;
use tracing::info;

use crate::config::{
    consts::DEFAULT_CAP_UPPER,
    options::{Bound, CapOptions},
};

pub fn draw(ui: &mut egui::Ui, cap: &mut CapOptions) -> bool {
    let before = *cap;

    ui.horizontal(|ui| {
        ui.label("Capping:");
        bound_editor(ui, "Lower", &mut cap.lower, 0.0);
        ui.add_space(12.0);
        bound_editor(ui, "Upper", &mut cap.upper, DEFAULT_CAP_UPPER);
        ui.add_space(12.0);
        if ui.button("Reset").on_hover_text("Computed lower, fixed upper at 8.6").clicked() {
            *cap = CapOptions::default();
        }
    });

    let changed = *cap != before;
    if changed {
        info!(?cap, "gui: capping changed");
    }
    changed
}

fn bound_editor(ui: &mut egui::Ui, label: &str, bound: &mut Bound, fallback: f64) {
    let mut fixed = matches!(bound, Bound::Fixed(_));
    ui.label(label);
    if ui.checkbox(&mut fixed, "fixed").on_hover_text("Unchecked: mean ± 3σ").changed() {
        *bound = if fixed { Bound::Fixed(fallback) } else { Bound::Computed };
    }

    match bound {
        Bound::Fixed(v) => {
            ui.add(egui::DragValue::new(v).speed(0.05).range(0.0..=10.0).fixed_decimals(2));
        }
        Bound::Computed => {
            ui.weak("computed");
        }
    }
}
