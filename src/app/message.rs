// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::generation::GenerationError;
use crate::montage::{EncodedImage, ImageSlot, RequestId};
use crate::ui::form_panel;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::result_panel;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form_panel::Message),
    Result(result_panel::Message),
    Preview(preview::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the open file dialog of one uploader.
    OpenDialogResult {
        slot: ImageSlot,
        path: Option<PathBuf>,
    },
    /// An image file finished reading. `Ok(None)` means it was not an image.
    ImageRead {
        slot: ImageSlot,
        path: PathBuf,
        result: Result<Option<EncodedImage>, Error>,
    },
    /// Files are being dragged over the window.
    FilesHovered,
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// A file was dropped on the window (one message per file).
    FileDropped(PathBuf),
    /// The generation service answered request `id`.
    GenerationCompleted {
        id: RequestId,
        result: Result<EncodedImage, GenerationError>,
    },
    /// Result from the save dialog, with the image shown when Save was pressed.
    SaveDialogResult {
        image: EncodedImage,
        path: Option<PathBuf>,
    },
    /// The montage file was written (or not).
    SaveCompleted {
        path: PathBuf,
        result: Result<(), Error>,
    },
    Tick(Instant), // Spinner animation and notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `SCENE_MONTAGE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SCENE_MONTAGE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
