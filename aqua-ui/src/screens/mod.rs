mod diet;
mod reset_password;
mod stocking;
mod volume;

pub use diet::DietScreen;
pub use reset_password::ResetPasswordScreen;
pub use stocking::FishStockingScreen;
pub use volume::WaterVolumeScreen;

use egui::Ui;

use crate::app::{AquaApp, CalculatorTab};

/// Tab container for the three calculators.
pub struct CalculatorsScreen;

impl CalculatorsScreen {
    pub fn show(app: &mut AquaApp, ui: &mut Ui) {
        ui.horizontal(|ui| {
            for tab in CalculatorTab::all() {
                if ui.selectable_label(app.tab == *tab, tab.label()).clicked() {
                    app.switch_tab(*tab);
                }
            }
        });
        ui.separator();

        match app.tab {
            CalculatorTab::WaterVolume => WaterVolumeScreen::show(app, ui),
            CalculatorTab::FishStocking => FishStockingScreen::show(app, ui),
            CalculatorTab::Diet => DietScreen::show(app, ui),
        }
    }
}

/// Renders a form's validation errors as red text.
pub(crate) fn show_errors(ui: &mut Ui, errors: &[String]) {
    for error in errors {
        ui.colored_label(egui::Color32::RED, error);
    }
}
