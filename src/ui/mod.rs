// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! owns a small `State`, reacts to its own `Message`, and reports anything the
//! application must do as an effect.
//!
//! # Panels
//!
//! - [`form_panel`] - Uploaders, target description, mode and details inputs
//! - [`result_panel`] - Placeholder, progress, error or generated montage
//! - [`preview`] - Full-window preview overlay
//! - [`uploader`] - Drop zone with file dialog and drop routing
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notifications

pub mod design_tokens;
pub mod form_panel;
pub mod notifications;
pub mod preview;
pub mod result_panel;
pub mod styles;
pub mod theming;
pub mod uploader;
pub mod widgets;
