// SPDX-License-Identifier: MPL-2.0
//! `scene_montage` blends a character into a scene with an AI image-generation
//! service, built with the Iced GUI framework.
//!
//! The user provides a character image, a scene image and a short description
//! of the figure to replace, picks a montage mode, and receives a generated
//! image that can be previewed full-window and saved as `montage.png`.

pub mod app;
pub mod error;
pub mod generation;
pub mod i18n;
pub mod icon;
pub mod montage;
pub mod ui;
