// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background.
pub fn page(theme: &Theme) -> container::Style {
    let base = if matches!(theme, Theme::Light) {
        palette::SLATE_100
    } else {
        palette::SLATE_900
    };
    container::Style {
        background: Some(Background::Color(base)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Card surface of the form and output columns.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Drop zone of an uploader. Highlighted while files hover over it.
pub fn drop_zone(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if highlighted {
            palette::PRIMARY_500
        } else {
            palette.background.strong.color
        };
        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: border_color,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Toast card with a severity-colored border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Muted text color for hints and placeholders.
pub fn muted_text(theme: &Theme) -> Color {
    if matches!(theme, Theme::Light) {
        palette::SLATE_500
    } else {
        palette::SLATE_400
    }
}
