use std::path::PathBuf;
use thiserror::Error;

/// Rejected dialog input or operation parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("dimensions must be positive and at most {max}, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32, max: u32 },
    #[error("{width}x{height} exceeds the limit of {max} pixels")]
    TooManyPixels { width: u32, height: u32, max: u64 },
    #[error("brightness must be between 0 and 100, got {0}")]
    OutOfRange(i32),
    #[error("thickness must be between 1 and {max}, got {value}")]
    InvalidThickness { value: i32, max: i32 },
}

/// Errors surfaced to the user as a message box
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load image {}: {reason}", .path.display())]
    DecodeFailure { path: PathBuf, reason: String },
    #[error("Could not open camera {index}: {reason}")]
    DeviceUnavailable { index: u32, reason: String },
    #[error("Failed to capture a frame: {0}")]
    FrameReadFailure(String),
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("Load or capture an image first")]
    NoImageLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl AppError {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoImageLoaded => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
