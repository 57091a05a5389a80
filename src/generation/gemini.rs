// SPDX-License-Identifier: MPL-2.0
//! Gemini `generateContent` backend.
//!
//! Sends the subject and scene images as inline data followed by the prompt,
//! and reads the first inline image of the answer.

use super::{prompt, GenerationError, GenerationFuture, MontageGenerator};
use crate::montage::{EncodedImage, MontageRequest};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Value};

/// Default REST endpoint root.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default image-capable model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Environment variables checked, in order, when no key is configured.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub api_base: String,
    pub model: String,
    /// Key from the settings file. Environment variables are used when `None`.
    pub api_key: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl GeminiSettings {
    /// Full URL of the `generateContent` method for the configured model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.api_base.trim().trim_end_matches('/');
        let model = self.model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        };
        format!("{base}/{model_path}:generateContent")
    }

    /// Configured key, then the first non-empty environment variable.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        non_empty(self.api_key.as_deref()).or_else(|| {
            API_KEY_ENV_VARS
                .iter()
                .find_map(|name| non_empty(std::env::var(name).ok().as_deref()))
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// [`MontageGenerator`] backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    settings: GeminiSettings,
    http: reqwest::Client,
}

impl GeminiGenerator {
    #[must_use]
    pub fn new(settings: GeminiSettings) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("scene-montage/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { settings, http }
    }

    #[must_use]
    pub fn settings(&self) -> &GeminiSettings {
        &self.settings
    }
}

impl MontageGenerator for GeminiGenerator {
    fn generate(&self, request: MontageRequest) -> GenerationFuture {
        let api_key = self.settings.resolve_api_key();
        let endpoint = self.settings.endpoint();
        let http = self.http.clone();
        let payload = build_payload(&request);
        let mode = request.mode;

        Box::pin(async move {
            let api_key = api_key.ok_or(GenerationError::MissingApiKey)?;
            tracing::info!(%endpoint, %mode, "sending montage request");

            let response = http
                .post(&endpoint)
                .header(API_KEY_HEADER, api_key)
                .json(&payload)
                .send()
                .await
                .map_err(|err| GenerationError::Transport(err.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| GenerationError::Transport(err.to_string()))?;

            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "generation service rejected request");
                return Err(parse_error_body(status.as_u16(), &body));
            }

            let image = parse_response(&body)?;
            tracing::info!(
                media_type = image.media_type(),
                bytes = image.bytes().len(),
                "montage received"
            );
            Ok(image)
        })
    }
}

fn inline_part(image: &EncodedImage) -> Value {
    json!({
        "inlineData": {
            "mimeType": image.media_type(),
            "data": BASE64.encode(image.bytes()),
        }
    })
}

/// Request body: subject image, scene image, then the prompt.
#[must_use]
pub fn build_payload(request: &MontageRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                inline_part(&request.subject_image),
                inline_part(&request.scene_image),
                { "text": prompt::build(request) },
            ],
        }],
        "generationConfig": {
            "responseModalities": ["IMAGE", "TEXT"],
        },
    })
}

/// Extracts the first inline image of a successful response.
///
/// # Errors
///
/// Fails when the body is not JSON, when image data is not valid base64, or
/// when no image part is present. In the last case the model's text or the
/// block reason becomes the message.
pub fn parse_response(body: &str) -> Result<EncodedImage, GenerationError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|err| GenerationError::MalformedResponse(err.to_string()))?;

    let mut texts = Vec::new();
    let candidates = payload
        .get("candidates")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for candidate in candidates {
        let parts = candidate
            .pointer("/content/parts")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        for part in parts {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    texts.push(text.trim().to_string());
                }
            }

            let Some(inline) = part.get("inlineData").or_else(|| part.get("inline_data")) else {
                continue;
            };
            let data = inline.get("data").and_then(Value::as_str).unwrap_or_default();
            if data.is_empty() {
                continue;
            }
            let media_type = inline
                .get("mimeType")
                .or_else(|| inline.get("mime_type"))
                .and_then(Value::as_str)
                .unwrap_or(crate::montage::encoded_image::PNG_MEDIA_TYPE);

            let bytes = BASE64
                .decode(data.as_bytes())
                .map_err(|err| GenerationError::InvalidImageData(err.to_string()))?;
            match EncodedImage::new(media_type, bytes) {
                Some(image) => return Ok(image),
                None => {
                    tracing::debug!(media_type, "skipping non-image inline part");
                }
            }
        }
    }

    Err(GenerationError::NoImage(no_image_reason(&payload, &texts)))
}

fn no_image_reason(payload: &Value, texts: &[String]) -> String {
    if !texts.is_empty() {
        return texts.join(" ");
    }
    if let Some(reason) = payload
        .pointer("/promptFeedback/blockReason")
        .and_then(Value::as_str)
    {
        return format!("request blocked ({reason})");
    }
    if let Some(reason) = payload
        .pointer("/candidates/0/finishReason")
        .and_then(Value::as_str)
    {
        return format!("generation stopped ({reason})");
    }
    "empty response".to_string()
}

/// Maps a non-success response to an error, preferring the provider's
/// `error.message`.
#[must_use]
pub fn parse_error_body(status: u16, body: &str) -> GenerationError {
    let provider_message = serde_json::from_str::<Value>(body).ok().and_then(|payload| {
        payload
            .pointer("/error/message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    });

    let message = provider_message.unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or("request failed")
                .to_string()
        } else {
            trimmed.to_string()
        }
    });

    GenerationError::Status { status, message }
}
