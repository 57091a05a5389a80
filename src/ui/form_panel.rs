// SPDX-License-Identifier: MPL-2.0
//! Input panel: both uploaders, the target description, the mode selector,
//! optional details and the submit button.

use crate::i18n::I18n;
use crate::montage::{ImageSlot, MontageForm, MontageMode};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::uploader;
use iced::widget::{button, container, radio, text_input, Column, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Uploader(ImageSlot, uploader::Message),
    TargetChanged(String),
    ModeSelected(MontageMode),
    DetailsChanged(String),
    SubmitPressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a MontageForm,
    pub uploaders: &'a [uploader::State],
    pub can_submit: bool,
    pub is_loading: bool,
}

/// Label of the submit button for the current lifecycle state.
#[must_use]
pub fn submit_label_key(is_loading: bool) -> &'static str {
    if is_loading {
        "submit-generating"
    } else {
        "submit-button"
    }
}

fn section<'a>(title: String, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::BODY))
        .push(body)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let uploaders = ctx.uploaders.iter().fold(
        Row::new().spacing(spacing::MD).width(Length::Fill),
        |row, state| {
            let slot = state.slot();
            row.push(
                uploader::view(uploader::ViewContext { i18n, state })
                    .map(move |msg| Message::Uploader(slot, msg)),
            )
        },
    );

    let target = section(
        i18n.tr("target-label"),
        text_input(&i18n.tr("target-placeholder"), ctx.form.target_description())
            .on_input(Message::TargetChanged)
            .padding(spacing::SM)
            .size(typography::BODY),
    );

    let modes = MontageMode::ALL.into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, mode| {
            column.push(
                radio(
                    i18n.tr(mode.label_key()),
                    mode,
                    Some(ctx.form.mode()),
                    Message::ModeSelected,
                )
                .size(typography::BODY_LG)
                .text_size(typography::BODY),
            )
        },
    );
    let mode = section(i18n.tr("mode-label"), modes);

    let details = section(
        i18n.tr("details-label"),
        text_input(&i18n.tr("details-placeholder"), ctx.form.extra_details())
            .on_input(Message::DetailsChanged)
            .padding(spacing::SM)
            .size(typography::BODY),
    );

    let submit = button(
        Text::new(i18n.tr(submit_label_key(ctx.is_loading)))
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press_maybe(ctx.can_submit.then_some(Message::SubmitPressed))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);

    container(
        Column::new()
            .spacing(spacing::LG)
            .push(uploaders)
            .push(target)
            .push(mode)
            .push(details)
            .push(submit),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}
