use egui::Ui;

use crate::app::AquaApp;
use crate::screens::show_errors;

pub struct DietScreen;

impl DietScreen {
    pub fn show(app: &mut AquaApp, ui: &mut Ui) {
        ui.heading("Diet");
        ui.add_space(5.0);

        egui::Grid::new("diet_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Average body weight (g):");
                ui.text_edit_singleline(&mut app.diet_form.body_weight_g);
                ui.end_row();

                ui.label("Fish count:");
                ui.text_edit_singleline(&mut app.diet_form.fish_count);
                ui.end_row();
            });

        ui.add_space(5.0);
        if ui.button("Calculate").clicked() {
            let config = app.settings.diet();
            app.diet_form.calculate(&config);
        }

        show_errors(ui, &app.diet_form.errors);

        if let Some(result) = &app.diet_form.result {
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(format!("Daily feed: {} g", result.daily_total_g)).strong(),
            );
            ui.label(format!("{} g per fish", result.per_fish_g));
        }
    }
}
