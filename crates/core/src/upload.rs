//! Upload gateway policy: size ceiling and content-type allow-list.

use crate::error::CoreError;

/// Maximum accepted upload size (50 MiB).
pub const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Content types the gateway accepts, with the extension used when the
/// original filename carries none.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("image/svg+xml", "svg"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
];

/// Validate an upload's content type, returning its fallback extension.
pub fn validate_content_type(content_type: &str) -> Result<&'static str, CoreError> {
    ALLOWED_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported file format '{content_type}'. Only images and mp4/webm videos are accepted"
            ))
        })
}

/// Validate an upload's size against [`MAX_UPLOAD_BYTES`].
pub fn validate_size(len: usize) -> Result<(), CoreError> {
    if len > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File too large ({len} bytes). Maximum is {MAX_UPLOAD_BYTES} bytes"
        )));
    }
    Ok(())
}

/// True when the content type is a croppable raster image.
///
/// SVG and video pass the upload gate but cannot go through the pixel
/// crop transform.
pub fn is_croppable(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/png" | "image/webp")
}
