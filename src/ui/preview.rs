// SPDX-License-Identifier: MPL-2.0
//! Full-window preview of the generated montage.
//!
//! Clicking the dimmed backdrop, the close control, or pressing Escape
//! dismisses the preview. Clicks on the image itself are swallowed.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, mouse_area, opaque, tooltip, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ClosePressed,
    BackdropPressed,
    ImagePressed,
    EscapePressed,
}

impl State {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ClosePressed | Message::BackdropPressed | Message::EscapePressed => {
                self.close();
            }
            Message::ImagePressed => {}
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub image: &'a Handle,
}

/// Builds the overlay layer. Callers only render it while the preview is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let picture = mouse_area(image(ctx.image.clone()).content_fit(ContentFit::Contain))
        .on_press(Message::ImagePressed);

    let centered = container(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let label = ctx.i18n.tr("preview-close");
    let close = tooltip(
        button(Text::new("×").size(typography::TITLE_MD))
            .on_press(Message::ClosePressed)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::overlay_close),
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let close_layer = container(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    opaque(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(centered)
            .push(close_layer),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> State {
        let mut state = State::default();
        state.open();
        state
    }

    #[test]
    fn starts_closed() {
        assert!(!State::default().is_open());
    }

    #[test]
    fn escape_closes() {
        let mut state = opened();
        state.handle(Message::EscapePressed);
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_and_close_control_close() {
        let mut state = opened();
        state.handle(Message::BackdropPressed);
        assert!(!state.is_open());

        let mut state = opened();
        state.handle(Message::ClosePressed);
        assert!(!state.is_open());
    }

    #[test]
    fn clicking_image_keeps_preview_open() {
        let mut state = opened();
        state.handle(Message::ImagePressed);
        assert!(state.is_open());
    }
}
