use image::RgbImage;

use crate::error::{AppError, AppResult};

/// An open camera stream
pub trait FrameGrabber {
    /// Blocks until one frame has been read.
    fn grab(&mut self) -> AppResult<RgbImage>;

    /// Stops the stream. Called exactly once before the grabber is dropped.
    fn release(&mut self);
}

/// Opens the camera with the given index
pub type DeviceOpener = Box<dyn Fn(u32) -> AppResult<Box<dyn FrameGrabber>>>;

/// Lazily opened, exclusively owned capture device.
///
/// The stream is opened on the first [`CaptureDevice::capture`] and then
/// reused. [`CaptureDevice::release`] closes it; it is a no-op if the
/// device was never opened or was already released.
pub struct CaptureDevice {
    index: u32,
    opener: DeviceOpener,
    handle: Option<Box<dyn FrameGrabber>>,
}

impl std::fmt::Debug for CaptureDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureDevice")
            .field("index", &self.index)
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl CaptureDevice {
    pub fn new(index: u32, opener: DeviceOpener) -> Self {
        Self {
            index,
            opener,
            handle: None,
        }
    }

    /// A device backed by the platform camera API
    pub fn native(index: u32) -> Self {
        Self::new(index, Box::new(native::open))
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn capture(&mut self) -> AppResult<RgbImage> {
        if self.handle.is_none() {
            let grabber = (self.opener)(self.index)?;
            log::info!("Opened camera {}", self.index);
            self.handle = Some(grabber);
        }

        let Some(grabber) = self.handle.as_mut() else {
            return Err(AppError::DeviceUnavailable {
                index: self.index,
                reason: "camera handle missing".to_owned(),
            });
        };
        let frame = grabber.grab()?;
        log::info!("Captured frame {}x{}", frame.width(), frame.height());
        Ok(frame)
    }

    pub fn release(&mut self) {
        if let Some(mut grabber) = self.handle.take() {
            grabber.release();
            log::info!("Released camera {}", self.index);
        }
    }
}

impl Drop for CaptureDevice {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(feature = "camera")]
mod native {
    use image::RgbImage;
    use nokhwa::Camera;
    use nokhwa::pixel_format::RgbFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};

    use super::FrameGrabber;
    use crate::error::{AppError, AppResult};

    struct NokhwaGrabber {
        camera: Camera,
    }

    pub(super) fn open(index: u32) -> AppResult<Box<dyn FrameGrabber>> {
        let unavailable = |e: nokhwa::NokhwaError| AppError::DeviceUnavailable {
            index,
            reason: e.to_string(),
        };

        #[cfg(target_os = "macos")]
        nokhwa::nokhwa_initialize(|granted| {
            log::info!("Camera access granted: {}", granted);
        });

        let format =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), format).map_err(unavailable)?;
        camera.open_stream().map_err(unavailable)?;
        Ok(Box::new(NokhwaGrabber { camera }))
    }

    impl FrameGrabber for NokhwaGrabber {
        fn grab(&mut self) -> AppResult<RgbImage> {
            let read_failed = |e: nokhwa::NokhwaError| AppError::FrameReadFailure(e.to_string());
            let buffer = self.camera.frame().map_err(read_failed)?;
            buffer.decode_image::<RgbFormat>().map_err(read_failed)
        }

        fn release(&mut self) {
            if let Err(e) = self.camera.stop_stream() {
                log::warn!("Failed to stop camera stream: {}", e);
            }
        }
    }
}

#[cfg(not(feature = "camera"))]
mod native {
    use super::FrameGrabber;
    use crate::error::{AppError, AppResult};

    pub(super) fn open(index: u32) -> AppResult<Box<dyn FrameGrabber>> {
        Err(AppError::DeviceUnavailable {
            index,
            reason: "built without camera support".to_owned(),
        })
    }
}
