/// Largest width or height the resize dialog accepts.
pub const MAX_DIMENSION: u32 = 16_384;

/// Largest total pixel count a resize may produce (about 200 MB of RGB).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Largest line thickness the rasterizer accepts.
pub const MAX_THICKNESS: i32 = 32_767;

/// Startup settings for the main window and the capture device
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Index of the camera opened by "Capture image"
    pub camera_index: u32,
    /// Extensions offered by the file picker
    pub image_extensions: &'static [&'static str],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Image Processor".to_owned(),
            window_size: [800.0, 600.0],
            min_window_size: [480.0, 320.0],
            camera_index: 0,
            image_extensions: &["jpg", "jpeg", "png"],
        }
    }
}

impl AppConfig {
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size)
                .with_min_inner_size(self.min_window_size),
            ..Default::default()
        }
    }
}
