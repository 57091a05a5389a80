// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable access to the parts
//! of `App` it may touch and returns the follow-up [`Task`].

use super::config::MONTAGE_FILE_NAME;
use super::persisted_state::AppState;
use super::Message;
use crate::error::Error;
use crate::generation::{GenerationError, MontageGenerator};
use crate::montage::encoded_image::IMAGE_EXTENSIONS;
use crate::montage::{EncodedImage, ImageSlot, Lifecycle, MontageForm, RequestId};
use crate::ui::form_panel;
use crate::ui::notifications::{self, Notification};
use crate::ui::preview;
use crate::ui::result_panel;
use crate::ui::uploader::{self, DropGesture};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub form: &'a mut MontageForm,
    pub lifecycle: &'a mut Lifecycle,
    pub uploaders: &'a mut Vec<uploader::State>,
    pub drop_gesture: &'a mut DropGesture,
    pub preview: &'a mut preview::State,
    pub spinner_rotation: &'a mut f32,
    pub generator: &'a Arc<dyn MontageGenerator>,
    pub persisted: &'a mut AppState,
    pub data_dir: Option<&'a PathBuf>,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn uploader_mut(&mut self, slot: ImageSlot) -> Option<&mut uploader::State> {
        self.uploaders.iter_mut().find(|state| state.slot() == slot)
    }

    /// Writes the persisted state, surfacing a warning toast on failure.
    fn persist_state(&mut self) {
        if let Some(key) = self.persisted.save_to(self.data_dir.cloned()) {
            self.notifications.push(Notification::warning(&key));
        }
    }

    /// The preview only makes sense while a result is displayed.
    fn sync_preview(&mut self) {
        if self.preview.is_open() && self.lifecycle.result().is_none() {
            self.preview.close();
        }
    }
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form_panel::Message) -> Task<Message> {
    match message {
        form_panel::Message::Uploader(slot, uploader_message) => {
            let effect = match ctx.uploader_mut(slot) {
                Some(state) => state.handle(uploader_message),
                None => uploader::Effect::None,
            };
            match effect {
                uploader::Effect::OpenDialog(slot) => {
                    open_image_dialog(slot, ctx.persisted.last_open_directory.clone())
                }
                uploader::Effect::None => Task::none(),
            }
        }
        form_panel::Message::TargetChanged(value) => {
            ctx.form.set_target_description(value);
            Task::none()
        }
        form_panel::Message::ModeSelected(mode) => {
            ctx.form.set_mode(mode);
            Task::none()
        }
        form_panel::Message::DetailsChanged(value) => {
            ctx.form.set_extra_details(value);
            Task::none()
        }
        form_panel::Message::SubmitPressed => handle_submit(ctx),
    }
}

/// Starts a generation request when the form is valid and nothing is running.
fn handle_submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some((id, request)) = ctx.lifecycle.submit(ctx.form) else {
        return Task::none();
    };
    ctx.sync_preview();
    *ctx.spinner_rotation = 0.0;

    let generation = ctx.generator.generate(request);
    Task::perform(generation, move |result| Message::GenerationCompleted {
        id,
        result,
    })
}

pub fn handle_generation_completed(
    ctx: &mut UpdateContext<'_>,
    id: RequestId,
    result: Result<EncodedImage, GenerationError>,
) -> Task<Message> {
    ctx.lifecycle.complete(id, result);
    ctx.sync_preview();
    Task::none()
}

pub fn handle_result_message(
    ctx: &mut UpdateContext<'_>,
    message: result_panel::Message,
) -> Task<Message> {
    match message {
        result_panel::Message::PreviewPressed => {
            if ctx.lifecycle.result().is_some() {
                ctx.preview.open();
            }
            Task::none()
        }
        result_panel::Message::SavePressed => match ctx.lifecycle.result() {
            Some(image) => {
                open_save_dialog(image.clone(), ctx.persisted.last_save_directory.clone())
            }
            None => Task::none(),
        },
    }
}

fn open_image_dialog(slot: ImageSlot, last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().add_filter("Images", IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::OpenDialogResult { slot, path },
    )
}

fn read_image(slot: ImageSlot, path: PathBuf) -> Task<Message> {
    Task::perform(
        {
            let path = path.clone();
            async move { EncodedImage::read_path(path).await }
        },
        move |result| Message::ImageRead {
            slot,
            path: path.clone(),
            result,
        },
    )
}

pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    slot: ImageSlot,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };

    ctx.persisted.set_last_open_directory_from_file(&path);
    ctx.persist_state();
    read_image(slot, path)
}

/// Applies a finished read. Non-images and unreadable files leave every
/// field untouched and show nothing to the user.
pub fn handle_image_read(
    ctx: &mut UpdateContext<'_>,
    slot: ImageSlot,
    path: &Path,
    result: Result<Option<EncodedImage>, Error>,
) -> Task<Message> {
    match result {
        Ok(Some(image)) => {
            tracing::debug!(path = %path.display(), ?slot, media_type = image.media_type(), "image accepted");
            if let Some(state) = ctx.uploader_mut(slot) {
                state.set_preview(&image);
            }
            ctx.form.set_image(slot, image);
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "ignoring non-image file");
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read image file");
        }
    }
    Task::none()
}

pub fn handle_files_hovered(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.drop_gesture.hovered();
    let target = uploader::drop_target(ctx.uploaders, ctx.form);
    for state in ctx.uploaders.iter_mut() {
        state.set_dragging(state.slot() == target);
    }
    Task::none()
}

pub fn handle_files_hovered_left(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.drop_gesture.left();
    for state in ctx.uploaders.iter_mut() {
        state.set_dragging(false);
    }
    Task::none()
}

/// Decides whether a dropped file is the first of its gesture and which
/// uploader receives it. Clears the drag highlight either way.
pub fn route_drop(ctx: &mut UpdateContext<'_>, now: Instant) -> (bool, ImageSlot) {
    let accepted = ctx.drop_gesture.accept_drop_at(now);
    let target = uploader::drop_target(ctx.uploaders, ctx.form);
    for state in ctx.uploaders.iter_mut() {
        state.set_dragging(false);
    }
    (accepted, target)
}

/// Handles a file dropped on the window. Only the first file of a
/// multi-file drop is read.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf, now: Instant) -> Task<Message> {
    let (accepted, slot) = route_drop(ctx, now);
    if !accepted {
        tracing::debug!(path = %path.display(), "ignoring extra dropped file");
        return Task::none();
    }
    read_image(slot, path)
}

fn open_save_dialog(image: EncodedImage, last_save_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_file_name(MONTAGE_FILE_NAME)
                .add_filter("PNG", &["png"]);

            // Use last save directory if available
            if let Some(dir) = last_save_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.save_file().await.map(|h| h.path().to_path_buf())
        },
        move |path| Message::SaveDialogResult { image, path },
    )
}

/// Writes the image captured when Save was pressed, even if a newer request
/// has replaced the displayed result since.
pub fn handle_save_dialog_result(image: EncodedImage, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };

    Task::perform(
        {
            let path = path.clone();
            async move { image.save_png(path).await }
        },
        move |result| Message::SaveCompleted {
            path: path.clone(),
            result,
        },
    )
}

pub fn handle_save_completed(
    ctx: &mut UpdateContext<'_>,
    path: &Path,
    result: Result<(), Error>,
) -> Task<Message> {
    match result {
        Ok(()) => {
            tracing::info!(path = %path.display(), "montage saved");
            ctx.notifications.push(
                Notification::success("notification-save-success")
                    .with_arg("path", path.display().to_string()),
            );

            // Remember the save directory for next time
            ctx.persisted.set_last_save_directory_from_file(path);
            ctx.persist_state();
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to save montage");
            ctx.notifications.push(
                Notification::error("notification-save-error").with_arg("error", err.to_string()),
            );
        }
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx.lifecycle.is_loading() {
        *ctx.spinner_rotation = animated_spinner::next_rotation(*ctx.spinner_rotation);
    }
    ctx.notifications.tick(now);
    Task::none()
}
