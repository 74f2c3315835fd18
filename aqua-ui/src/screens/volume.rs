use egui::Ui;

use crate::app::AquaApp;
use crate::screens::show_errors;

pub struct WaterVolumeScreen;

impl WaterVolumeScreen {
    pub fn show(app: &mut AquaApp, ui: &mut Ui) {
        ui.heading("Water Volume");
        ui.add_space(5.0);

        egui::Grid::new("volume_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Length (cm):");
                ui.text_edit_singleline(&mut app.volume_form.length_cm);
                ui.end_row();

                ui.label("Width (cm):");
                ui.text_edit_singleline(&mut app.volume_form.width_cm);
                ui.end_row();

                ui.label("Height (cm):");
                ui.text_edit_singleline(&mut app.volume_form.height_cm);
                ui.end_row();

                ui.label("Fill (%):");
                ui.text_edit_singleline(&mut app.volume_form.fill_percent);
                ui.end_row();
            });

        ui.add_space(5.0);
        if ui.button("Calculate").clicked() {
            app.volume_form.calculate();
        }

        show_errors(ui, &app.volume_form.errors);

        if let Some(outcome) = &app.volume_form.result {
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(format!(
                    "Water volume: {} L ({} US gal)",
                    outcome.liters, outcome.gallons
                ))
                .strong(),
            );
        }
    }
}
