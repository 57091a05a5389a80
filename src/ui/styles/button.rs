// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled button in `base`, lightened on hover and grayed out when disabled.
fn filled(base: Color, hover: Color, status: button::Status, theme: &Theme) -> button::Style {
    let rounded = Border {
        radius: radius::MD.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: rounded,
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: rounded,
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(if matches!(theme, Theme::Light) {
                palette::SLATE_200
            } else {
                palette::SLATE_700
            })),
            text_color: palette::SLATE_400,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// The "Create montage" action.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_600, palette::PRIMARY_700, status, theme)
}

/// The preview action.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::SLATE_500, palette::SLATE_700, status, theme)
}

/// The save action.
pub fn accent(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ACCENT_600, palette::ACCENT_500, status, theme)
}

/// Close control floating over the preview backdrop.
pub fn overlay_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button, used for toast dismissal and the "browse" link.
pub fn plain(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::SLATE_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::SLATE_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_has_no_shadow() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.shadow, shadow::NONE);
        assert_eq!(style.text_color, palette::SLATE_400);
    }

    #[test]
    fn hover_changes_background() {
        let active = accent(&Theme::Dark, button::Status::Active);
        let hovered = accent(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }
}
