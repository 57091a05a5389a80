// SPDX-License-Identifier: MPL-2.0
//! Request lifecycle: Idle → Loading → Success | Error.
//!
//! [`Lifecycle`] is the only owner of the result and error fields. It is
//! mutated through exactly two entry points: [`Lifecycle::submit`] starts an
//! attempt and [`Lifecycle::complete`] settles it. Each accepted submission is
//! stamped with a [`RequestId`]; a completion carrying any other id is
//! discarded, so a late answer can never overwrite a newer attempt.

use super::{EncodedImage, MontageForm, MontageRequest};
use crate::generation::GenerationError;
use std::fmt;

/// Where the current attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Identity of one accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error text shown in the output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMessage {
    /// The failure's own description.
    Described(String),
    /// The failure carried no description; the view shows a generic text.
    Unknown,
}

impl FailureMessage {
    /// i18n key of the generic fallback text.
    pub const FALLBACK_KEY: &'static str = "error-generation-unknown";

    fn from_error(error: &GenerationError) -> Self {
        error
            .description()
            .map_or(FailureMessage::Unknown, FailureMessage::Described)
    }
}

/// Explicit state holder for the generation round-trip.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
    result: Option<EncodedImage>,
    error: Option<FailureMessage>,
    current: Option<RequestId>,
    next_id: u64,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LifecycleState::Loading
    }

    /// The displayed image, set only in [`LifecycleState::Success`].
    #[must_use]
    pub fn result(&self) -> Option<&EncodedImage> {
        self.result.as_ref()
    }

    /// The displayed error, set only in [`LifecycleState::Error`].
    #[must_use]
    pub fn error(&self) -> Option<&FailureMessage> {
        self.error.as_ref()
    }

    /// Id of the attempt currently loading.
    #[must_use]
    pub fn current_request(&self) -> Option<RequestId> {
        self.current
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self, form: &MontageForm) -> bool {
        !self.is_loading() && form.is_valid()
    }

    /// Starts a new attempt.
    ///
    /// Returns `None` and leaves everything untouched while an attempt is
    /// loading or the form is invalid. Otherwise clears the previous result
    /// and error, enters Loading and hands back the request to dispatch.
    pub fn submit(&mut self, form: &MontageForm) -> Option<(RequestId, MontageRequest)> {
        if self.is_loading() {
            tracing::debug!("submit ignored: a request is already loading");
            return None;
        }
        let request = form.build()?;

        self.next_id += 1;
        let id = RequestId(self.next_id);
        self.result = None;
        self.error = None;
        self.current = Some(id);
        self.state = LifecycleState::Loading;
        tracing::info!(request = %id, mode = %request.mode, "montage request started");

        Some((id, request))
    }

    /// Settles the attempt identified by `id`.
    ///
    /// Returns `false` when `id` is not the attempt currently loading; the
    /// outcome is then dropped.
    pub fn complete(&mut self, id: RequestId, outcome: Result<EncodedImage, GenerationError>) -> bool {
        if self.current != Some(id) {
            tracing::warn!(request = %id, current = ?self.current, "discarding stale generation result");
            return false;
        }
        self.current = None;

        match outcome {
            Ok(image) => {
                tracing::info!(request = %id, media_type = image.media_type(), "montage request succeeded");
                self.result = Some(image);
                self.error = None;
                self.state = LifecycleState::Success;
            }
            Err(error) => {
                tracing::warn!(request = %id, error = %error, "montage request failed");
                self.result = None;
                self.error = Some(FailureMessage::from_error(&error));
                self.state = LifecycleState::Error;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::montage::{ImageSlot, MontageMode};

    fn image(tag: u8) -> EncodedImage {
        EncodedImage::new("image/png", vec![tag]).unwrap()
    }

    fn valid_form() -> MontageForm {
        let mut form = MontageForm::new();
        form.set_image(ImageSlot::Subject, image(b'A'));
        form.set_image(ImageSlot::Scene, image(b'B'));
        form.set_target_description("the man in red");
        form.set_mode(MontageMode::Insert);
        form.set_extra_details("");
        form
    }

    #[test]
    fn starts_idle_and_empty() {
        let lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Idle);
        assert!(lifecycle.result().is_none());
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn successful_request_displays_returned_image() {
        let mut lifecycle = Lifecycle::new();
        let form = valid_form();
        assert!(lifecycle.can_submit(&form));

        let (id, request) = lifecycle.submit(&form).expect("valid form is accepted");
        assert_eq!(request.subject_image, image(b'A'));
        assert_eq!(request.scene_image, image(b'B'));
        assert_eq!(request.extra_details, None);
        assert_eq!(lifecycle.state(), LifecycleState::Loading);
        assert!(!lifecycle.can_submit(&form));

        assert!(lifecycle.complete(id, Ok(image(b'C'))));
        assert_eq!(lifecycle.state(), LifecycleState::Success);
        assert_eq!(lifecycle.result(), Some(&image(b'C')));
        assert!(lifecycle.error().is_none());
    }

    #[test]
    fn failed_request_displays_its_message() {
        let mut lifecycle = Lifecycle::new();
        let (id, _) = lifecycle.submit(&valid_form()).unwrap();

        lifecycle.complete(
            id,
            Err(GenerationError::Status {
                status: 429,
                message: "rate limited".into(),
            }),
        );
        assert_eq!(lifecycle.state(), LifecycleState::Error);
        assert!(lifecycle.result().is_none());
        assert_eq!(
            lifecycle.error(),
            Some(&FailureMessage::Described("rate limited".into()))
        );
    }

    #[test]
    fn failure_with_blank_message_uses_fallback() {
        let mut lifecycle = Lifecycle::new();
        let (id, _) = lifecycle.submit(&valid_form()).unwrap();

        lifecycle.complete(id, Err(GenerationError::Transport(String::new())));
        assert_eq!(lifecycle.state(), LifecycleState::Error);
        assert_eq!(lifecycle.error(), Some(&FailureMessage::Unknown));
    }

    #[test]
    fn failure_without_description_uses_fallback() {
        let mut lifecycle = Lifecycle::new();
        let (id, _) = lifecycle.submit(&valid_form()).unwrap();

        lifecycle.complete(id, Err(GenerationError::Unspecified));
        assert_eq!(lifecycle.error(), Some(&FailureMessage::Unknown));
    }

    #[test]
    fn resubmitting_clears_previous_result_and_error() {
        let mut lifecycle = Lifecycle::new();
        let form = valid_form();

        let (first, _) = lifecycle.submit(&form).unwrap();
        lifecycle.complete(first, Ok(image(b'C')));
        let (second, _) = lifecycle.submit(&form).unwrap();
        assert!(lifecycle.result().is_none());
        assert!(lifecycle.error().is_none());

        lifecycle.complete(second, Err(GenerationError::Unspecified));
        lifecycle.submit(&form).unwrap();
        assert!(lifecycle.result().is_none());
        assert!(lifecycle.error().is_none());
        assert_eq!(lifecycle.state(), LifecycleState::Loading);
    }

    #[test]
    fn submit_is_rejected_while_loading_or_invalid() {
        let mut lifecycle = Lifecycle::new();
        assert!(lifecycle.submit(&MontageForm::new()).is_none());
        assert_eq!(lifecycle.state(), LifecycleState::Idle);

        let (id, _) = lifecycle.submit(&valid_form()).unwrap();
        assert!(lifecycle.submit(&valid_form()).is_none());
        assert_eq!(lifecycle.current_request(), Some(id));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut lifecycle = Lifecycle::new();
        let form = valid_form();

        let (first, _) = lifecycle.submit(&form).unwrap();
        lifecycle.complete(first, Err(GenerationError::Unspecified));
        let (second, _) = lifecycle.submit(&form).unwrap();
        assert_ne!(first, second);

        assert!(!lifecycle.complete(first, Ok(image(b'X'))));
        assert_eq!(lifecycle.state(), LifecycleState::Loading);
        assert!(lifecycle.result().is_none());

        assert!(lifecycle.complete(second, Ok(image(b'C'))));
        assert!(!lifecycle.complete(second, Ok(image(b'Y'))));
        assert_eq!(lifecycle.result(), Some(&image(b'C')));
    }
}
