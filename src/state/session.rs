//! The image state of one interactive session.
//!
//! A session holds at most one source image (set by load or capture) and
//! one display image (derived from the source by the last command).
//!
//! ```text
//!                 load / capture
//!  ┌──────────┐ ───────────────► ┌───────────────┐ ──┐
//!  │ NoImage  │                  │  ImageLoaded  │   │ load / capture / command
//!  └──────────┘                  └───────────────┘ ◄─┘
//! ```
//!
//! Commands requested in `NoImage` fail with `AppError::NoImageLoaded` and
//! leave the session untouched. A failed command leaves the display as it was.

use image::RgbImage;

use crate::command::Command;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoImage,
    ImageLoaded,
}

#[derive(Debug, Default)]
pub struct Session {
    source: Option<RgbImage>,
    display: Option<RgbImage>,
    /// Bumped whenever the display image is replaced
    revision: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.source.is_some() {
            SessionState::ImageLoaded
        } else {
            SessionState::NoImage
        }
    }

    pub fn source(&self) -> Option<&RgbImage> {
        self.source.as_ref()
    }

    pub fn display(&self) -> Option<&RgbImage> {
        self.display.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Fails with a warning-level error when nothing has been loaded yet
    pub fn require_image(&self) -> AppResult<&RgbImage> {
        self.source.as_ref().ok_or(AppError::NoImageLoaded)
    }

    /// Replaces the source wholesale and shows it unmodified
    pub fn set_source(&mut self, image: RgbImage) {
        self.display = Some(image.clone());
        self.source = Some(image);
        self.revision += 1;
    }

    /// Runs `command` on the source and shows the result
    pub fn apply(&mut self, command: &Command) -> AppResult<()> {
        let source = self.require_image()?;
        let output = command.execute(source)?;
        log::info!(
            "Applied {}: {}x{}",
            command.name(),
            output.width(),
            output.height()
        );
        self.display = Some(output);
        self.revision += 1;
        Ok(())
    }
}
