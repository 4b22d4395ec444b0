use eframe::egui;

use crate::ImageLabApp;
use crate::state::SessionState;

pub fn central_panel(app: &mut ImageLabApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        let status = match app.controller().state() {
            SessionState::NoImage => "No image".to_owned(),
            SessionState::ImageLoaded => match app.controller().session().display() {
                Some(image) => format!("{}x{}", image.width(), image.height()),
                None => "Image loaded".to_owned(),
            },
        };
        ui.horizontal(|ui| {
            ui.label(status);
            if app.controller().camera_is_open() {
                ui.separator();
                ui.label("Camera open");
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        app.surface().paint(ui);
    });
}
