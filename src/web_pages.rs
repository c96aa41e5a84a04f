use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection},
    response::Html,
};

use crate::error::AppError;
use crate::generator::Generator;
use crate::options::{CaptionLength, Count, Mood, Region, StyleOptions, Tone};
use crate::prompt::Prompt;
use crate::suggestions::GenerationResult;

const INDEX_HTML: &str = include_str!("../templates/index.html");

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
pub const MAX_UPLOAD_BYTES: usize = 8 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}

impl AppState {
    pub fn new(generator: Generator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

struct Upload {
    file_name: String,
    bytes: Bytes,
}

#[derive(Default)]
struct GenerateForm {
    image: Option<Upload>,
    length: Option<String>,
    tone: Option<String>,
    region: Option<String>,
    mood: Option<String>,
    num: Option<String>,
}

impl GenerateForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = GenerateForm::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "image" => {
                    let file_name = field.file_name().unwrap_or("").to_string();
                    let bytes = field.bytes().await?;
                    form.image = Some(Upload { file_name, bytes });
                }
                "length" => form.length = Some(field.text().await?),
                "tone" => form.tone = Some(field.text().await?),
                "region" => form.region = Some(field.text().await?),
                "mood" => form.mood = Some(field.text().await?),
                "num" => form.num = Some(field.text().await?),
                _ => {}
            }
        }
        Ok(form)
    }

    fn style(&self) -> StyleOptions {
        StyleOptions {
            length: CaptionLength::parse_or_default(self.length.as_deref()),
            tone: Tone::parse_or_default(self.tone.as_deref()),
            region: Region::parse_or_default(self.region.as_deref()),
            mood: Mood::parse_or_default(self.mood.as_deref()),
        }
    }
}

/// Last path component of a client-supplied file name.
fn sanitize_file_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .trim()
}

fn extension_from_filename(file_name: &str) -> Option<String> {
    if let Some((stem, ext)) = file_name.rsplit_once('.') {
        let trimmed = ext.trim();
        if !trimmed.is_empty() && !stem.is_empty() {
            return Some(trimmed.to_lowercase());
        }
    }
    None
}

fn validate_upload(upload: Option<Upload>) -> Result<Upload, AppError> {
    let upload = upload.ok_or(AppError::MissingImage)?;
    let file_name = sanitize_file_name(&upload.file_name);
    if file_name.is_empty() {
        return Err(AppError::MissingImage);
    }
    match extension_from_filename(file_name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => return Err(AppError::UnsupportedFileType),
    }
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::ImageTooLarge {
            max_bytes: MAX_UPLOAD_BYTES,
        });
    }
    Ok(upload)
}

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn generate_suggestions(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let form = GenerateForm::read(multipart?).await?;
    let style = form.style();
    let count = Count::parse(form.num.as_deref());
    let upload = validate_upload(form.image)?;

    log::debug!(
        "generating {count} suggestions for {} ({} bytes): region={}, mood={}, tone={}, length={}",
        upload.file_name,
        upload.bytes.len(),
        style.region,
        style.mood,
        style.tone,
        style.length
    );
    let prompt = Prompt::build(&style, count);
    let result = state.generator.generate(&prompt, &upload.bytes, count).await;
    log::info!(
        "generated {} captions and {} songs for region {}",
        result.captions.len(),
        result.songs.len(),
        style.region
    );
    Ok(Json(result))
}
