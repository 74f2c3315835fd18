use egui::Ui;

use aqua_core::reset::ResetPhase;

use crate::app::AquaApp;

/// Two-phase password reset form. Phase 1 collects the email; once the
/// reset email is sent, the form swaps to the new-password fields.
pub struct ResetPasswordScreen;

impl ResetPasswordScreen {
    pub fn show(app: &mut AquaApp, ui: &mut Ui) {
        if ui.button("← Back").clicked() {
            app.leave_reset_screen();
            return;
        }

        ui.heading("Reset Password");
        ui.add_space(5.0);

        let loading = app.reset.flow.is_loading();

        match app.reset.flow.phase() {
            ResetPhase::Idle => {
                egui::Grid::new("reset_email_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Email:");
                        ui.add_enabled(
                            !loading,
                            egui::TextEdit::singleline(&mut app.reset.email),
                        );
                        ui.end_row();
                    });

                ui.add_space(5.0);
                if ui
                    .add_enabled(!loading, egui::Button::new("Send reset email"))
                    .clicked()
                {
                    app.start_reset_request();
                }
            }
            ResetPhase::EmailSent => {
                egui::Grid::new("reset_password_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("New password:");
                        ui.add_enabled(
                            !loading,
                            egui::TextEdit::singleline(&mut app.reset.password).password(true),
                        );
                        ui.end_row();

                        ui.label("Confirm password:");
                        ui.add_enabled(
                            !loading,
                            egui::TextEdit::singleline(&mut app.reset.confirmation).password(true),
                        );
                        ui.end_row();
                    });

                ui.add_space(5.0);
                if ui
                    .add_enabled(!loading, egui::Button::new("Update password"))
                    .clicked()
                {
                    app.start_password_update();
                }
            }
            ResetPhase::PasswordUpdated => {
                // Nothing left to submit; the redirect timer is running.
            }
        }

        if loading {
            ui.add_space(5.0);
            ui.spinner();
        }

        ui.add_space(5.0);
        if let Some(error) = app.reset.flow.error_message() {
            ui.colored_label(egui::Color32::RED, error);
        }
        if let Some(success) = app.reset.flow.success_message() {
            ui.colored_label(egui::Color32::GREEN, success);
        }
    }
}
