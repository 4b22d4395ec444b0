use std::path::Path;

use image::{ImageFormat, ImageReader, RgbImage};

use crate::error::{AppError, AppResult};

/// Formats accepted from disk.
const SUPPORTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

/// Check if a path carries one of the given extensions, ignoring case
pub fn has_image_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()))
}

/// Reads and decodes a PNG or JPEG file.
///
/// The format is sniffed from the content first, so a PNG saved with a
/// `.jpg` extension still loads.
pub fn load_from_file(path: &Path) -> AppResult<RgbImage> {
    let fail = |reason: String| AppError::DecodeFailure {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| fail(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| fail(e.to_string()))?;

    match reader.format() {
        Some(format) if SUPPORTED_FORMATS.contains(&format) => {}
        Some(format) => return Err(fail(format!("unsupported format {format:?}"))),
        None => return Err(fail("not a recognised image format".to_owned())),
    }

    let decoded = reader.decode().map_err(|e| fail(e.to_string()))?;
    log::debug!("Decoded {}: {}x{}", path.display(), decoded.width(), decoded.height());
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_filter() {
        let exts = ["jpg", "jpeg", "png"];
        assert!(has_image_extension(&PathBuf::from("a/b/photo.JPG"), &exts));
        assert!(has_image_extension(&PathBuf::from("shot.png"), &exts));
        assert!(!has_image_extension(&PathBuf::from("notes.txt"), &exts));
        assert!(!has_image_extension(&PathBuf::from("no_extension"), &exts));
    }

    #[test]
    fn test_missing_file_is_decode_failure() {
        let err = load_from_file(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, AppError::DecodeFailure { .. }));
    }
}
