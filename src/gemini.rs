use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::GeminiConfig;
use crate::image_processing::InlineImage;

async fn assert_ok_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(anyhow!("Gemini request failed: {status} {text}"))
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<Part>>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: Option<String>,
}

/// Thin client for the `generateContent` endpoint. Requests are never retried.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, api_key: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build Gemini HTTP client")?;
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );
        Ok(Self {
            http,
            api_key: api_key.into(),
            endpoint,
        })
    }

    /// Sends the prompt with the image inline and returns the first
    /// candidate's text.
    pub async fn generate_content(&self, prompt: &str, image: &InlineImage) -> Result<String> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({
                "contents": [
                    {
                        "role": "user",
                        "parts": [
                            {"text": prompt},
                            {"inline_data": {"mime_type": image.mime_type, "data": image.data}}
                        ]
                    }
                ]
            }))
            .send()
            .await?;

        let response = assert_ok_response(response).await?;
        let payload: GenerateContentResponse = response.json().await?;
        if let Some(error) = payload.error.and_then(|err| err.message) {
            return Err(anyhow!("Gemini returned an error: {error}"));
        }
        let text = payload
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| anyhow!("Gemini returned no text content"))?;

        Ok(text.trim().to_string())
    }
}
