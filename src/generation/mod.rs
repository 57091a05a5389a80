// SPDX-License-Identifier: MPL-2.0
//! Boundary to the external image-generation service.
//!
//! The application talks to the service through [`MontageGenerator`]: one
//! asynchronous call that turns a [`MontageRequest`] into an [`EncodedImage`]
//! or a [`GenerationError`]. [`GeminiGenerator`] is the production backend.

pub mod gemini;
pub mod prompt;

pub use gemini::{GeminiGenerator, GeminiSettings};

use crate::montage::{EncodedImage, MontageRequest};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error as ThisError;

/// Future returned by [`MontageGenerator::generate`].
pub type GenerationFuture =
    Pin<Box<dyn Future<Output = Result<EncodedImage, GenerationError>> + Send + 'static>>;

/// Produces a montage image from a request.
///
/// Implementations own everything provider-specific (endpoint, auth, prompt).
/// No timeout or retry is expected: the future resolves once, whenever the
/// service answers.
pub trait MontageGenerator: Send + Sync + fmt::Debug {
    fn generate(&self, request: MontageRequest) -> GenerationFuture;
}

/// Why a generation attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum GenerationError {
    #[error("No API key configured. Set GEMINI_API_KEY or add api_key to settings.toml.")]
    MissingApiKey,
    #[error("Could not reach the generation service: {0}")]
    Transport(String),
    #[error("The generation service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("The generation service returned an unreadable response: {0}")]
    MalformedResponse(String),
    #[error("The generated image could not be decoded: {0}")]
    InvalidImageData(String),
    #[error("The model returned no image: {0}")]
    NoImage(String),
    /// A failure without any description.
    #[error("")]
    Unspecified,
}

impl GenerationError {
    /// The text shown to the user: the failure's own message, or `None` when
    /// it carries none. The prefixed `Display` form is for logs.
    #[must_use]
    pub fn description(&self) -> Option<String> {
        let message = match self {
            GenerationError::MissingApiKey => return Some(self.to_string()),
            GenerationError::Transport(message)
            | GenerationError::Status { message, .. }
            | GenerationError::MalformedResponse(message)
            | GenerationError::InvalidImageData(message)
            | GenerationError::NoImage(message) => message,
            GenerationError::Unspecified => return None,
        };
        let trimmed = message.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
