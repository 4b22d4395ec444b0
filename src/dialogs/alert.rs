use eframe::egui;

use crate::error::{AppError, Severity};

/// A modal message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: Severity,
    pub message: String,
}

impl From<&AppError> for Alert {
    fn from(error: &AppError) -> Self {
        Self {
            severity: error.severity(),
            message: error.to_string(),
        }
    }
}

impl Alert {
    pub fn title(&self) -> &'static str {
        match self.severity {
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    /// Draws the message box. Returns true once the user dismissed it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;
        let (icon, color) = match self.severity {
            Severity::Warning => ("⚠", egui::Color32::from_rgb(230, 170, 40)),
            Severity::Error => ("⛔", egui::Color32::from_rgb(220, 60, 60)),
        };

        egui::Window::new(self.title())
            .id(egui::Id::new("alert"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(icon).size(22.0).color(color));
                    ui.label(&self.message);
                });
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed
            || ctx.input_mut(|i| {
                i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                    || i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)
            })
    }
}
