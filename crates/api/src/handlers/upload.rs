//! Handlers for the upload gateway: raw uploads and the crop pipeline.

use std::io::Cursor;

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use folio_core::error::CoreError;
use folio_core::imageops::{crop_rotated, safe_area, CropRect, Flip};
use folio_core::upload::{is_croppable, validate_content_type, validate_size};
use folio_storage::object_name;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminAuth;
use crate::state::AppState;

/// Response for both upload endpoints.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    /// Publicly resolvable URL of the stored object.
    pub url: String,
}

/// Crop parameters submitted alongside the image, as a JSON-encoded
/// multipart field.
#[derive(Debug, Deserialize)]
pub struct CropParams {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
}

/// One file pulled out of a multipart body.
struct UploadedFile {
    filename: Option<String>,
    content_type: String,
    bytes: Vec<u8>,
}

/// Read the `image` field (and optionally the named text fields) from
/// a multipart body.
async fn read_multipart(
    multipart: &mut Multipart,
    text_field: Option<&str>,
) -> Result<(UploadedFile, Option<String>), AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some(UploadedFile {
                filename,
                content_type,
                bytes: bytes.to_vec(),
            });
        } else if Some(name.as_str()) == text_field {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            text = Some(value);
        }
        // ignore unknown fields
    }

    let file = file
        .ok_or_else(|| AppError::BadRequest("Missing required 'image' field".into()))?;
    Ok((file, text))
}

/// POST /api/v1/upload
///
/// Accepts one file under the multipart field `image`, checks type and
/// size before any storage write, stores it under a random name with
/// the original extension preserved, and returns the public URL.
pub async fn upload(
    _auth: AdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let (file, _) = read_multipart(&mut multipart, None).await?;

    let fallback_ext = validate_content_type(&file.content_type)?;
    validate_size(file.bytes.len())?;

    let name = object_name(file.filename.as_deref(), fallback_ext);
    let url = state
        .store
        .put(&name, &file.content_type, file.bytes)
        .await?;

    tracing::info!(name, "Stored upload");
    Ok(Json(UploadResponse { success: true, url }))
}

/// POST /api/v1/upload/crop
///
/// Applies the rotate-flip-crop transform to an uploaded raster image
/// and stores the result as PNG. The crop parameters arrive as a JSON
/// object in the `crop` multipart field.
pub async fn crop(
    _auth: AdminAuth,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let (file, params) = read_multipart(&mut multipart, Some("crop")).await?;

    validate_content_type(&file.content_type)?;
    validate_size(file.bytes.len())?;
    if !is_croppable(&file.content_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Cannot crop '{}'; only raster images are croppable",
            file.content_type
        ))));
    }

    let params = params
        .ok_or_else(|| AppError::BadRequest("Missing required 'crop' field".into()))?;
    let params: CropParams = serde_json::from_str(&params)
        .map_err(|e| AppError::BadRequest(format!("Invalid crop parameters: {e}")))?;

    let source = image::load_from_memory(&file.bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid image data: {e}")))?;

    // A rectangle wider than the rotation canvas can only add
    // transparent padding; beyond that the output allocation is
    // attacker-controlled.
    let max_side = safe_area(source.width(), source.height());
    if params.width == 0
        || params.height == 0
        || params.width > max_side
        || params.height > max_side
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Crop rectangle {}x{} is out of range; each side must be between 1 and {max_side} pixels",
            params.width, params.height
        ))));
    }

    let cropped = crop_rotated(
        &source,
        CropRect {
            x: params.x,
            y: params.y,
            width: params.width,
            height: params.height,
        },
        params.rotation,
        Flip {
            horizontal: params.flip_h,
            vertical: params.flip_v,
        },
    );

    let mut encoded = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(cropped)
        .write_to(&mut encoded, image::ImageFormat::Png)
        .map_err(|e| AppError::InternalError(format!("PNG encoding failed: {e}")))?;

    let name = object_name(None, "png");
    let url = state
        .store
        .put(&name, "image/png", encoded.into_inner())
        .await?;

    tracing::info!(name, "Stored cropped upload");
    Ok(Json(UploadResponse { success: true, url }))
}
