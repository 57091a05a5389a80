// SPDX-License-Identifier: MPL-2.0
//! Montage domain: the inputs a user assembles, the request sent to the
//! generation service, and the lifecycle of one generation attempt.
//!
//! - [`encoded_image`] - Image payloads read from disk or returned by the service
//! - [`request`] - The editable form, its validity predicate and the built request
//! - [`lifecycle`] - Idle / Loading / Success / Error state holder

pub mod encoded_image;
pub mod lifecycle;
pub mod request;

pub use encoded_image::EncodedImage;
pub use lifecycle::{FailureMessage, Lifecycle, LifecycleState, RequestId};
pub use request::{ImageSlot, MontageForm, MontageMode, MontageRequest};
