use image::RgbImage;

use crate::error::InputError;
use crate::ops::{self, Channel};

/// Result type for command execution
pub type CommandResult = Result<RgbImage, InputError>;

/// A pixel operation together with its validated-at-execution parameters.
///
/// Commands always read the loaded source image; they never build on the
/// previous display image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the source unmodified
    ShowOriginal,

    /// Keep a single colour channel
    Isolate(Channel),

    /// Scale to an exact size
    Resize { width: i32, height: i32 },

    /// Raise the HSV value channel
    AdjustBrightness { delta: i32 },

    /// Draw a green segment
    DrawLine {
        from: (i32, i32),
        to: (i32, i32),
        thickness: i32,
    },
}

impl Command {
    /// Execute the command against the source image
    pub fn execute(&self, source: &RgbImage) -> CommandResult {
        match self {
            Command::ShowOriginal => Ok(source.clone()),
            Command::Isolate(channel) => Ok(ops::isolate(source, *channel)),
            Command::Resize { width, height } => ops::resize(source, *width, *height),
            Command::AdjustBrightness { delta } => ops::adjust_brightness(source, *delta),
            Command::DrawLine {
                from,
                to,
                thickness,
            } => ops::draw_line(source, *from, *to, *thickness),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::ShowOriginal => "show original",
            Command::Isolate(_) => "isolate channel",
            Command::Resize { .. } => "resize",
            Command::AdjustBrightness { .. } => "adjust brightness",
            Command::DrawLine { .. } => "draw line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_show_original_copies_source() {
        let source = RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]));
        assert_eq!(Command::ShowOriginal.execute(&source).unwrap(), source);
    }

    #[test]
    fn test_execute_forwards_errors() {
        let source = RgbImage::new(3, 2);
        let cmd = Command::Resize { width: -5, height: 10 };
        assert!(matches!(cmd.execute(&source), Err(InputError::InvalidDimensions { .. })));
    }
}
