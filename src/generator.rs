use anyhow::{Context, Result};

use crate::config::GeminiConfig;
use crate::gemini::GeminiClient;
use crate::image_processing;
use crate::options::Count;
use crate::prompt::Prompt;
use crate::suggestions::{GenerationResult, SongPool, mock, parser};

/// Turns a prompt and photo into suggestions.
///
/// With a Gemini key the model is asked first; without one, or whenever
/// the upstream call fails in any way, the mock tables answer instead.
/// Callers always get exactly `count` captions and songs back.
#[derive(Debug, Clone)]
pub struct Generator {
    upstream: Option<GeminiClient>,
}

impl Generator {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let upstream = match config.api_key.as_deref() {
            Some(api_key) => Some(GeminiClient::new(config, api_key)?),
            None => None,
        };
        Ok(Self { upstream })
    }

    pub fn offline() -> Self {
        Self { upstream: None }
    }

    pub fn is_live(&self) -> bool {
        self.upstream.is_some()
    }

    pub async fn generate(&self, prompt: &Prompt, image: &[u8], count: Count) -> GenerationResult {
        let fallback = mock_for(prompt, count);
        let Some(client) = &self.upstream else {
            return fallback;
        };
        match request_suggestions(client, prompt, image, count).await {
            Ok(result) => result.fill_to(count, &fallback),
            Err(err) => {
                log::warn!("Gemini generation failed, serving mock suggestions: {err:#}");
                fallback
            }
        }
    }
}

fn mock_for(prompt: &Prompt, count: Count) -> GenerationResult {
    mock::generate_for_pool(SongPool::from(prompt.region()), prompt.text(), count)
}

async fn request_suggestions(
    client: &GeminiClient,
    prompt: &Prompt,
    image: &[u8],
    count: Count,
) -> Result<GenerationResult> {
    let bytes = image.to_vec();
    let inline = tokio::task::spawn_blocking(move || image_processing::prepare_inline_image(&bytes))
        .await
        .context("image preparation task failed")??;
    log::debug!(
        "sending {}x{} {} image to Gemini",
        inline.width,
        inline.height,
        inline.mime_type
    );

    let text = client.generate_content(prompt.text(), &inline).await?;
    let result = parser::parse_response(&text, count);
    if !result.is_complete(count) {
        log::debug!(
            "Gemini returned {} captions and {} songs, padding to {count}",
            result.captions.len(),
            result.songs.len()
        );
    }
    Ok(result)
}
