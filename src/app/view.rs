// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the header, the input form and the result panel, then stacks the
//! preview overlay and toasts on top.

use super::Message;
use crate::i18n::I18n;
use crate::montage::{Lifecycle, MontageForm};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::preview;
use crate::ui::result_panel;
use crate::ui::uploader;
use crate::ui::{form_panel, styles};
use iced::widget::{scrollable, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a MontageForm,
    pub lifecycle: &'a Lifecycle,
    pub uploaders: &'a [uploader::State],
    pub preview: &'a preview::State,
    pub spinner_rotation: f32,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = form_panel::view(form_panel::ViewContext {
        i18n: ctx.i18n,
        form: ctx.form,
        uploaders: ctx.uploaders,
        can_submit: ctx.lifecycle.can_submit(ctx.form),
        is_loading: ctx.lifecycle.is_loading(),
    })
    .map(Message::Form);

    let result = Container::new(
        result_panel::view(result_panel::ViewContext {
            i18n: ctx.i18n,
            lifecycle: ctx.lifecycle,
            spinner_rotation: ctx.spinner_rotation,
        })
        .map(Message::Result),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::OUTPUT_MIN_HEIGHT + sizing::RESULT_MAX_HEIGHT / 2.0));

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(Container::new(form).width(Length::FillPortion(1)))
        .push(Container::new(result).width(Length::FillPortion(1)));

    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::XL)
        .width(Length::Fill)
        .push(header(ctx.i18n))
        .push(panels);

    let base = Container::new(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.preview.is_open() {
        if let Some(result) = ctx.lifecycle.result() {
            layers = layers.push(
                preview::view(preview::ViewContext {
                    i18n: ctx.i18n,
                    image: result.handle(),
                })
                .map(Message::Preview),
            );
        }
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

/// Title line with the accent words, plus the tagline.
fn header(i18n: &I18n) -> Element<'_, Message> {
    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("header-title-accent"))
                .size(typography::TITLE_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_400),
                }),
        )
        .push(Text::new(i18n.tr("header-title-rest")).size(typography::TITLE_LG));

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(
            Text::new(i18n.tr("header-tagline"))
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                }),
        )
        .into()
}
