use anyhow::{Result, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STD};
use image::{GenericImageView, ImageFormat};

/// Image ready to be sent inline to the model.
#[derive(Debug, Clone)]
pub struct InlineImage {
    pub mime_type: &'static str,
    pub data: String,
    pub width: u32,
    pub height: u32,
}

pub fn detect_mime_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    None
}

pub fn mime_to_format(mime_type: &str) -> Result<ImageFormat> {
    match mime_type {
        "image/png" => Ok(ImageFormat::Png),
        "image/jpeg" | "image/jpg" => Ok(ImageFormat::Jpeg),
        _ => Err(anyhow!("unsupported mime type: {mime_type}")),
    }
}

/// Checks that the upload really decodes before encoding it for the model.
pub fn prepare_inline_image(bytes: &[u8]) -> Result<InlineImage> {
    let mime_type =
        detect_mime_type(bytes).ok_or_else(|| anyhow!("image data is neither PNG nor JPEG"))?;
    let format = mime_to_format(mime_type)?;
    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| anyhow!("decode image failed: {err}"))?;
    let (width, height) = image.dimensions();
    Ok(InlineImage {
        mime_type,
        data: BASE64_STD.encode(bytes),
        width,
        height,
    })
}
