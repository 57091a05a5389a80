// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration entries.

// ==========================================================================
// Generation Defaults
// ==========================================================================

pub use crate::generation::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1180.0;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Smallest window size that keeps both panels usable.
pub const MIN_WINDOW_WIDTH: f32 = 760.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Save Defaults
// ==========================================================================

/// File name offered by the save dialog.
pub const MONTAGE_FILE_NAME: &str = "montage.png";
