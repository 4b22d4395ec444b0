//! Where images come from: files on disk and the first camera.

mod camera;
mod file;

pub use camera::{CaptureDevice, DeviceOpener, FrameGrabber};
pub use file::{has_image_extension, load_from_file};
