use egui::Ui;

use aqua_core::calc::StockingResult;

use crate::app::{AquaApp, FishCalcChoice};
use crate::screens::show_errors;

/// Fish stocking tab: a choice screen toggling between the two
/// sub-calculators. Back always returns to the choice.
pub struct FishStockingScreen;

impl FishStockingScreen {
    pub fn show(app: &mut AquaApp, ui: &mut Ui) {
        ui.heading("Fish Stocking");
        ui.add_space(5.0);

        match app.fish_choice {
            FishCalcChoice::None => Self::show_choice(app, ui),
            FishCalcChoice::ByVolume => Self::show_by_volume(app, ui),
            FishCalcChoice::ByDimensions => Self::show_by_dimensions(app, ui),
        }
    }

    fn show_choice(app: &mut AquaApp, ui: &mut Ui) {
        ui.label("How do you want to describe the tank?");
        ui.add_space(5.0);
        if ui.button("By water volume").clicked() {
            app.fish_choice.select(FishCalcChoice::ByVolume);
        }
        if ui.button("By tank dimensions").clicked() {
            app.fish_choice.select(FishCalcChoice::ByDimensions);
        }
    }

    fn show_by_volume(app: &mut AquaApp, ui: &mut Ui) {
        if ui.button("← Back").clicked() {
            app.fish_choice.clear();
            return;
        }
        ui.add_space(5.0);

        egui::Grid::new("stocking_volume_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Water volume (L):");
                ui.text_edit_singleline(&mut app.stocking_by_volume.volume_liters);
                ui.end_row();

                ui.label("Adult fish length (cm):");
                ui.text_edit_singleline(&mut app.stocking_by_volume.adult_length_cm);
                ui.end_row();
            });

        ui.add_space(5.0);
        if ui.button("Calculate").clicked() {
            let config = app.settings.stocking();
            app.stocking_by_volume.calculate(&config);
        }

        show_errors(ui, &app.stocking_by_volume.errors);
        if let Some(result) = &app.stocking_by_volume.result {
            Self::show_result(ui, result);
        }
    }

    fn show_by_dimensions(app: &mut AquaApp, ui: &mut Ui) {
        if ui.button("← Back").clicked() {
            app.fish_choice.clear();
            return;
        }
        ui.add_space(5.0);

        egui::Grid::new("stocking_dims_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Length (cm):");
                ui.text_edit_singleline(&mut app.stocking_by_dimensions.length_cm);
                ui.end_row();

                ui.label("Width (cm):");
                ui.text_edit_singleline(&mut app.stocking_by_dimensions.width_cm);
                ui.end_row();

                ui.label("Height (cm):");
                ui.text_edit_singleline(&mut app.stocking_by_dimensions.height_cm);
                ui.end_row();

                ui.label("Fill (%):");
                ui.text_edit_singleline(&mut app.stocking_by_dimensions.fill_percent);
                ui.end_row();

                ui.label("Adult fish length (cm):");
                ui.text_edit_singleline(&mut app.stocking_by_dimensions.adult_length_cm);
                ui.end_row();
            });

        ui.add_space(5.0);
        if ui.button("Calculate").clicked() {
            let config = app.settings.stocking();
            app.stocking_by_dimensions.calculate(&config);
        }

        show_errors(ui, &app.stocking_by_dimensions.errors);
        if let Some(result) = &app.stocking_by_dimensions.result {
            Self::show_result(ui, result);
        }
    }

    fn show_result(ui: &mut Ui, result: &StockingResult) {
        ui.add_space(5.0);
        ui.label(
            egui::RichText::new(format!("Maximum fish: {}", result.max_fish)).strong(),
        );
        ui.label(format!(
            "{} L supports {} cm of adult fish",
            result.usable_volume_liters, result.capacity_cm
        ));
    }
}
