use eframe::egui;

use crate::ImageLabApp;
use crate::dialogs::DialogKind;
use crate::ops::Channel;

/// Source buttons on the first row, operations on the second.
pub fn controls_panel(app: &mut ImageLabApp, ctx: &egui::Context) {
    let enabled = !app.controller().is_modal_active();

    egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Load image").clicked() {
                    app.pick_and_load();
                }
                if ui.button("Capture image").clicked() {
                    app.controller_mut().capture_image();
                }
            });

            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                if ui.button("Show image").clicked() {
                    app.controller_mut().show_image();
                }

                ui.separator();
                ui.label("Channel:");
                let mut channel = app.selected_channel();
                egui::ComboBox::from_id_salt("channel_selector")
                    .selected_text(channel.name())
                    .width(70.0)
                    .show_ui(ui, |ui| {
                        for option in Channel::ALL {
                            ui.selectable_value(&mut channel, option, option.name());
                        }
                    });
                app.set_selected_channel(channel);
                if ui.button("Show channel").clicked() {
                    app.controller_mut().show_channel(channel);
                }

                ui.separator();
                for (label, kind) in [
                    ("Resize", DialogKind::Resize),
                    ("Adjust brightness", DialogKind::Brightness),
                    ("Draw line", DialogKind::Line),
                ] {
                    if ui.button(label).clicked() {
                        app.controller_mut().open_dialog(kind);
                    }
                }
            });
            ui.add_space(6.0);
        });
    });
}
