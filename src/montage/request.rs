// SPDX-License-Identifier: MPL-2.0
//! The montage form and the request built from it.

use super::EncodedImage;
use std::fmt;
use std::str::FromStr;

/// Which of the two uploaders an image belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    /// The character to place into the scene.
    Subject,
    /// The scene receiving the character.
    Scene,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::Subject, ImageSlot::Scene];

    /// i18n key of the uploader label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ImageSlot::Subject => "uploader-subject-label",
            ImageSlot::Scene => "uploader-scene-label",
        }
    }
}

/// How the character is combined with the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MontageMode {
    /// Replace the identified figure inside the original scene pixels.
    #[default]
    Insert,
    /// Regenerate the whole scene around the character.
    Recreate,
}

impl MontageMode {
    pub const ALL: [MontageMode; 2] = [MontageMode::Insert, MontageMode::Recreate];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MontageMode::Insert => "insert",
            MontageMode::Recreate => "recreate",
        }
    }

    /// i18n key of the option label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            MontageMode::Insert => "mode-insert",
            MontageMode::Recreate => "mode-recreate",
        }
    }
}

impl fmt::Display for MontageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MontageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insert" => Ok(MontageMode::Insert),
            "recreate" => Ok(MontageMode::Recreate),
            other => Err(format!("unknown montage mode: {other}")),
        }
    }
}

/// Everything the generation service receives for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MontageRequest {
    pub subject_image: EncodedImage,
    pub scene_image: EncodedImage,
    pub target_description: String,
    pub mode: MontageMode,
    pub extra_details: Option<String>,
}

/// The user's current inputs.
///
/// Every field is freely editable; [`MontageForm::is_valid`] decides whether
/// the set can be submitted.
#[derive(Debug, Clone, Default)]
pub struct MontageForm {
    subject_image: Option<EncodedImage>,
    scene_image: Option<EncodedImage>,
    target_description: String,
    mode: MontageMode,
    extra_details: String,
}

impl MontageForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image(&mut self, slot: ImageSlot, image: EncodedImage) {
        match slot {
            ImageSlot::Subject => self.subject_image = Some(image),
            ImageSlot::Scene => self.scene_image = Some(image),
        }
    }

    #[must_use]
    pub fn image(&self, slot: ImageSlot) -> Option<&EncodedImage> {
        match slot {
            ImageSlot::Subject => self.subject_image.as_ref(),
            ImageSlot::Scene => self.scene_image.as_ref(),
        }
    }

    pub fn set_target_description(&mut self, value: impl Into<String>) {
        self.target_description = value.into();
    }

    #[must_use]
    pub fn target_description(&self) -> &str {
        &self.target_description
    }

    pub fn set_mode(&mut self, mode: MontageMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> MontageMode {
        self.mode
    }

    pub fn set_extra_details(&mut self, value: impl Into<String>) {
        self.extra_details = value.into();
    }

    #[must_use]
    pub fn extra_details(&self) -> &str {
        &self.extra_details
    }

    /// Both images present and a non-blank target description.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.subject_image.is_some()
            && self.scene_image.is_some()
            && !self.target_description.trim().is_empty()
    }

    /// Copies the fields into a request, or `None` while the form is invalid.
    #[must_use]
    pub fn build(&self) -> Option<MontageRequest> {
        if !self.is_valid() {
            return None;
        }
        let details = self.extra_details.trim();
        Some(MontageRequest {
            subject_image: self.subject_image.clone()?,
            scene_image: self.scene_image.clone()?,
            target_description: self.target_description.clone(),
            mode: self.mode,
            extra_details: (!details.is_empty()).then(|| self.extra_details.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(tag: u8) -> EncodedImage {
        EncodedImage::new("image/png", vec![tag]).expect("png media type")
    }

    fn form(subject: bool, scene: bool, target: &str) -> MontageForm {
        let mut form = MontageForm::new();
        if subject {
            form.set_image(ImageSlot::Subject, image(1));
        }
        if scene {
            form.set_image(ImageSlot::Scene, image(2));
        }
        form.set_target_description(target);
        form
    }

    #[test]
    fn validity_requires_both_images_and_non_blank_target() {
        let targets = ["", "   ", "\t\n", "the man in red"];
        for subject in [false, true] {
            for scene in [false, true] {
                for target in targets {
                    let expected = subject && scene && !target.trim().is_empty();
                    assert_eq!(
                        form(subject, scene, target).is_valid(),
                        expected,
                        "subject={subject} scene={scene} target={target:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn build_is_none_while_invalid() {
        assert!(form(true, false, "someone").build().is_none());
        assert!(form(true, true, "  ").build().is_none());
    }

    #[test]
    fn build_copies_fields() {
        let mut form = form(true, true, "the man in red");
        form.set_mode(MontageMode::Recreate);
        form.set_extra_details("looking surprised");

        let request = form.build().expect("valid form");
        assert_eq!(request.subject_image, image(1));
        assert_eq!(request.scene_image, image(2));
        assert_eq!(request.target_description, "the man in red");
        assert_eq!(request.mode, MontageMode::Recreate);
        assert_eq!(request.extra_details.as_deref(), Some("looking surprised"));
    }

    #[test]
    fn blank_details_become_none() {
        let mut form = form(true, true, "the man in red");
        form.set_extra_details("   ");
        assert_eq!(form.build().unwrap().extra_details, None);
    }

    #[test]
    fn replacing_an_image_keeps_the_other_slot() {
        let mut form = form(true, true, "x");
        form.set_image(ImageSlot::Subject, image(9));
        assert_eq!(form.image(ImageSlot::Subject), Some(&image(9)));
        assert_eq!(form.image(ImageSlot::Scene), Some(&image(2)));
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Insert".parse::<MontageMode>(), Ok(MontageMode::Insert));
        assert_eq!(" recreate ".parse::<MontageMode>(), Ok(MontageMode::Recreate));
        assert!("blend".parse::<MontageMode>().is_err());
        assert_eq!(MontageMode::default(), MontageMode::Insert);
    }
}
