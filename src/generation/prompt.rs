// SPDX-License-Identifier: MPL-2.0
//! Instruction text sent alongside the two images.

use crate::montage::{MontageMode, MontageRequest};

/// Builds the text prompt for a request.
///
/// The subject image is always sent first and the scene second, so the
/// wording refers to them as "the first image" and "the second image".
#[must_use]
pub fn build(request: &MontageRequest) -> String {
    let target = request.target_description.trim();
    let mut prompt = match request.mode {
        MontageMode::Insert => format!(
            "The first image shows a character on a white background. The second image is a scene. \
             Replace {target} in the scene with the character from the first image. \
             Keep every other part of the scene exactly as it is: same framing, lighting, colors and background. \
             Match the character's scale, perspective and lighting to the spot being replaced so the result looks like an unedited photograph."
        ),
        MontageMode::Recreate => format!(
            "The first image shows a character on a white background. The second image is a scene. \
             Create a new image that recreates this scene with the character from the first image in place of {target}. \
             Keep the mood, setting and composition of the scene, but regenerate it as a whole so the character fits naturally. \
             Preserve the character's identity, face and clothing."
        ),
    };

    if let Some(details) = request
        .extra_details
        .as_deref()
        .map(str::trim)
        .filter(|details| !details.is_empty())
    {
        prompt.push_str("\nAdditional details: ");
        prompt.push_str(details);
    }

    prompt.push_str("\nReturn only the final image.");
    prompt
}
