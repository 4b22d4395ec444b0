use eframe::egui;

use crate::config::AppConfig;
use crate::controller::Controller;
use crate::dialogs::DialogResult;
use crate::ops::Channel;
use crate::panels::{central_panel, controls_panel};
use crate::renderer::DisplaySurface;
use crate::source::{self, CaptureDevice};

pub struct ImageLabApp {
    config: AppConfig,
    controller: Controller,
    // Keeps the displayed texture alive between frames
    surface: DisplaySurface,
    selected_channel: Channel,
}

impl ImageLabApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let camera = CaptureDevice::native(config.camera_index);
        Self::with_controller(config, Controller::new(camera))
    }

    pub fn with_controller(config: AppConfig, controller: Controller) -> Self {
        Self {
            config,
            controller,
            surface: DisplaySurface::new(),
            selected_channel: Channel::default(),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub fn selected_channel(&self) -> Channel {
        self.selected_channel
    }

    pub fn set_selected_channel(&mut self, channel: Channel) {
        self.selected_channel = channel;
    }

    /// Asks for a file with the native picker and loads it. Cancelling the
    /// picker changes nothing.
    pub fn pick_and_load(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Load image")
            .add_filter("Images", self.config.image_extensions)
            .pick_file();

        match picked {
            Some(path) => {
                if !source::has_image_extension(&path, self.config.image_extensions) {
                    log::warn!("Picked file without an image extension: {}", path.display());
                }
                self.controller.load_image(&path);
            }
            None => log::debug!("File picker cancelled"),
        }
    }

    fn show_modals(&mut self, ctx: &egui::Context) {
        let alert_open = self.controller.alert().is_some();

        let result = self
            .controller
            .dialog_mut()
            .map(|dialog| dialog.show(ctx, !alert_open));
        match result {
            Some(DialogResult::Apply) => {
                self.controller.submit_dialog();
            }
            Some(DialogResult::Cancel) => self.controller.cancel_dialog(),
            Some(DialogResult::Open) | None => {}
        }

        let dismissed = self.controller.alert().is_some_and(|alert| alert.show(ctx));
        if dismissed {
            self.controller.dismiss_alert();
        }
    }
}

impl eframe::App for ImageLabApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        controls_panel(self, ctx);
        self.show_modals(ctx);

        // Upload after this frame's actions so the new image shows immediately.
        self.surface.sync(ctx, self.controller.session());
        central_panel(self, ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.controller.shutdown();
    }
}
