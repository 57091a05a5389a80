// SPDX-License-Identifier: MPL-2.0
//! Output panel: placeholder, progress, failure or the generated montage.

use crate::i18n::I18n;
use crate::montage::{FailureMessage, Lifecycle, LifecycleState};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, image, text, Column, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviewPressed,
    SavePressed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lifecycle: &'a Lifecycle,
    pub spinner_rotation: f32,
}

/// Text shown for a failed request.
#[must_use]
pub fn failure_text(failure: &FailureMessage, i18n: &I18n) -> String {
    match failure {
        FailureMessage::Described(message) => message.clone(),
        FailureMessage::Unknown => i18n.tr(FailureMessage::FALLBACK_KEY),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.lifecycle.state() {
        LifecycleState::Idle => Text::new(ctx.i18n.tr("result-placeholder"))
            .size(typography::BODY_LG)
            .style(muted)
            .into(),
        LifecycleState::Loading => Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element())
            .push(Text::new(ctx.i18n.tr("result-loading")).size(typography::BODY_LG))
            .into(),
        LifecycleState::Error => {
            let message = ctx
                .lifecycle
                .error()
                .map(|failure| failure_text(failure, ctx.i18n))
                .unwrap_or_else(|| ctx.i18n.tr(FailureMessage::FALLBACK_KEY));
            Text::new(message)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_400),
                })
                .into()
        }
        LifecycleState::Success => match ctx.lifecycle.result() {
            Some(result) => {
                let picture = image(result.handle().clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::RESULT_MAX_HEIGHT));

                let actions = Row::new()
                    .spacing(spacing::SM)
                    .push(
                        button(Text::new(ctx.i18n.tr("result-preview-button")))
                            .on_press(Message::PreviewPressed)
                            .padding([spacing::XS, spacing::MD])
                            .style(styles::button::secondary),
                    )
                    .push(
                        button(Text::new(ctx.i18n.tr("result-save-button")))
                            .on_press(Message::SavePressed)
                            .padding([spacing::XS, spacing::MD])
                            .style(styles::button::accent),
                    );

                Column::new()
                    .spacing(spacing::MD)
                    .align_x(alignment::Horizontal::Center)
                    .push(picture)
                    .push(actions)
                    .into()
            }
            None => Text::new(ctx.i18n.tr("result-placeholder")).into(),
        },
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(styles::container::muted_text(theme)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn described_failure_is_shown_verbatim() {
        let failure = FailureMessage::Described("quota exceeded".to_string());
        assert_eq!(failure_text(&failure, &i18n()), "quota exceeded");
    }

    #[test]
    fn unknown_failure_uses_fallback_text() {
        assert_eq!(
            failure_text(&FailureMessage::Unknown, &i18n()),
            "An unknown error occurred."
        );
    }
}
