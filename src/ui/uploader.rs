// SPDX-License-Identifier: MPL-2.0
//! Image uploader: a labelled drop zone that also opens a file dialog.
//!
//! The uploader only tracks presentation state (preview, hover, drag
//! highlight). Reading files happens in the application through
//! [`EncodedImage::read_path`], so dialog picks and window drops share one
//! path.
//!
//! [`EncodedImage::read_path`]: crate::montage::EncodedImage::read_path

use crate::i18n::I18n;
use crate::montage::{EncodedImage, ImageSlot, MontageForm};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, text, Column, Text};
use iced::{alignment, mouse, ContentFit, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct State {
    slot: ImageSlot,
    preview: Option<Handle>,
    cursor_inside: bool,
    is_dragging: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
    CursorEntered,
    CursorExited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Ask the application to show the open-file dialog for this slot.
    OpenDialog(ImageSlot),
}

impl State {
    #[must_use]
    pub fn new(slot: ImageSlot) -> Self {
        Self {
            slot,
            preview: None,
            cursor_inside: false,
            is_dragging: false,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::BrowsePressed => Effect::OpenDialog(self.slot),
            Message::CursorEntered => {
                self.cursor_inside = true;
                Effect::None
            }
            Message::CursorExited => {
                self.cursor_inside = false;
                self.is_dragging = false;
                Effect::None
            }
        }
    }

    /// Shows an accepted image.
    pub fn set_preview(&mut self, image: &EncodedImage) {
        self.preview = Some(image.handle().clone());
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    #[must_use]
    pub fn slot(&self) -> ImageSlot {
        self.slot
    }

    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn cursor_inside(&self) -> bool {
        self.cursor_inside
    }
}

/// Picks the uploader a window-level drop belongs to: the one under the
/// cursor, else the first without an image, else the subject uploader.
#[must_use]
pub fn drop_target(uploaders: &[State], form: &MontageForm) -> ImageSlot {
    uploaders
        .iter()
        .find(|state| state.cursor_inside)
        .or_else(|| {
            uploaders
                .iter()
                .find(|state| form.image(state.slot).is_none())
        })
        .map_or(ImageSlot::Subject, |state| state.slot)
}

/// Time after an accepted drop during which further drops count as part of
/// the same gesture.
pub const GESTURE_WINDOW: Duration = Duration::from_millis(250);

/// Accepts only the first file of a multi-file drop.
///
/// The window reports one drop event per file. A gesture begins with a hover
/// event (or, when the platform sends none, once [`GESTURE_WINDOW`] has passed
/// since the last accepted drop).
#[derive(Debug, Default)]
pub struct DropGesture {
    accepted_at: Option<Instant>,
}

impl DropGesture {
    /// Files entered the window: a new gesture starts.
    pub fn hovered(&mut self) {
        self.accepted_at = None;
    }

    /// Files left the window without dropping.
    pub fn left(&mut self) {
        self.accepted_at = None;
    }

    /// Returns `true` for the first file of the current gesture.
    pub fn accept_drop_at(&mut self, now: Instant) -> bool {
        let same_gesture = self
            .accepted_at
            .is_some_and(|at| now.saturating_duration_since(at) < GESTURE_WINDOW);
        if same_gesture {
            return false;
        }
        self.accepted_at = Some(now);
        true
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;
    let label = Text::new(ctx.i18n.tr(state.slot.label_key())).size(typography::BODY);

    let content: Element<'_, Message> = match &state.preview {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("⇪").size(sizing::ICON_XL).style(muted))
            .push(Text::new(ctx.i18n.tr("uploader-drop-prompt")).size(typography::BODY))
            .push(
                Text::new(ctx.i18n.tr("uploader-formats"))
                    .size(typography::CAPTION)
                    .style(muted),
            )
            .into(),
    };

    let zone = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::UPLOADER_HEIGHT))
        .padding(spacing::XS)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::UPLOADER_HEIGHT))
        .style(styles::container::drop_zone(
            state.is_dragging || state.cursor_inside,
        ));

    let zone = mouse_area(zone)
        .on_press(Message::BrowsePressed)
        .on_enter(Message::CursorEntered)
        .on_exit(Message::CursorExited)
        .interaction(mouse::Interaction::Pointer);

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(label)
        .push(zone)
        .into()
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(styles::container::muted_text(theme)),
    }
}
