use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use image::RgbImage;

use crate::state::Session;

/// Owns the GPU texture of the image currently on screen.
///
/// egui frees a texture as soon as its last `TextureHandle` is dropped, so
/// the handle lives here, inside the app, for as long as it is shown.
#[derive(Default)]
pub struct DisplaySurface {
    texture: Option<TextureHandle>,
    /// Session revision the texture was built from
    revision: Option<u64>,
}

impl std::fmt::Debug for DisplaySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplaySurface")
            .field("size", &self.size())
            .field("revision", &self.revision)
            .finish()
    }
}

/// Converts a display image into the RGBA layout egui uploads.
pub fn to_color_image(image: &RgbImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgb(size, image.as_raw())
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-uploads the display image if the session changed since last frame
    pub fn sync(&mut self, ctx: &egui::Context, session: &Session) {
        if self.revision == Some(session.revision()) {
            return;
        }
        self.revision = Some(session.revision());

        match session.display() {
            Some(image) => self.render(ctx, image),
            None => self.texture = None,
        }
    }

    /// Replaces the shown texture with `image`
    pub fn render(&mut self, ctx: &egui::Context, image: &RgbImage) {
        let color_image = to_color_image(image);
        match &mut self.texture {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("display_image", color_image, TextureOptions::LINEAR));
            }
        }
        log::debug!("Uploaded display texture {}x{}", image.width(), image.height());
    }

    pub fn size(&self) -> Option<[usize; 2]> {
        self.texture.as_ref().map(|t| t.size())
    }

    /// Paints the image at its natural size, scrolling if it does not fit
    pub fn paint(&self, ui: &mut egui::Ui) {
        let Some(texture) = &self.texture else {
            ui.centered_and_justified(|ui| {
                ui.weak("No image loaded");
            });
            return;
        };

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(egui::Image::new(egui::load::SizedTexture::from_handle(texture)));
            });
    }
}
