use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const BUTTON_RADIUS: f32 = 6.0;
const CARD_RADIUS: f32 = 10.0;

pub fn get_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.067, 0.094, 0.153),
                text: Color::from_rgb(0.95, 0.95, 0.97),
                primary: Color::from_rgb(0.231, 0.510, 0.965),
                success: Color::from_rgb(0.204, 0.827, 0.600),
                danger: Color::from_rgb(0.973, 0.443, 0.443),
                warning: Color::from_rgb(0.984, 0.749, 0.141),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.976, 0.980, 0.984),
                text: Color::from_rgb(0.067, 0.094, 0.153),
                primary: Color::from_rgb(0.145, 0.388, 0.922),
                success: Color::from_rgb(0.086, 0.639, 0.290),
                danger: Color::from_rgb(0.863, 0.149, 0.149),
                warning: Color::from_rgb(0.851, 0.467, 0.024),
            },
        ),
    }
}

pub fn muted_text_color(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => Color::from_rgb(0.612, 0.639, 0.686),
        ThemeMode::Light => Color::from_rgb(0.420, 0.447, 0.502),
    }
}

fn solid_button(
    idle: Color,
    hovered: Color,
    pressed: Color,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let (fill, snap) = match status {
        button::Status::Active => (idle, false),
        button::Status::Hovered => (hovered, false),
        button::Status::Pressed => (pressed, true),
        button::Status::Disabled => {
            return button::Style {
                background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
                text_color: Color::from_rgb(0.5, 0.5, 0.5),
                border: Border {
                    color: Color::from_rgb(0.4, 0.4, 0.4),
                    width: 1.0,
                    radius: BUTTON_RADIUS.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            }
        }
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: fill,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(
        Color::from_rgb(0.145, 0.388, 0.922),
        Color::from_rgb(0.231, 0.510, 0.965),
        Color::from_rgb(0.114, 0.306, 0.847),
        Color::WHITE,
        status,
    )
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(
        Color::from_rgb(0.25, 0.25, 0.25),
        Color::from_rgb(0.35, 0.35, 0.35),
        Color::from_rgb(0.2, 0.2, 0.2),
        Color::from_rgb(0.9, 0.9, 0.9),
        status,
    )
}

pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(
        Color::from_rgb(0.8, 0.25, 0.25),
        Color::from_rgb(0.9, 0.35, 0.35),
        Color::from_rgb(0.7, 0.2, 0.2),
        Color::WHITE,
        status,
    )
}

pub fn link_button_style(
    mode: ThemeMode,
    is_active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let accent = get_theme(mode).palette().primary;
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => accent,
            _ if is_active => accent,
            _ => muted_text_color(mode),
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: false,
        }
    }
}

pub fn card_style(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, border) = match mode {
            ThemeMode::Dark => (
                Color::from_rgb(0.122, 0.161, 0.216),
                Color::from_rgb(0.216, 0.255, 0.318),
            ),
            ThemeMode::Light => (Color::WHITE, Color::from_rgb(0.898, 0.906, 0.922)),
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(get_theme(mode).palette().text),
            border: Border {
                color: border,
                width: 1.0,
                radius: CARD_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub fn page_style(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let palette = get_theme(mode).palette();
        container::Style {
            background: Some(Background::Color(palette.background)),
            text_color: Some(palette.text),
            ..Default::default()
        }
    }
}

pub fn drop_zone_style(
    mode: ThemeMode,
    is_dragging: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = get_theme(mode).palette().primary;
        let (background, border_color) = if is_dragging {
            (Color { a: 0.12, ..accent }, accent)
        } else {
            (Color::TRANSPARENT, muted_text_color(mode))
        };

        container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: CARD_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub fn error_box_style(mode: ThemeMode) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let danger = get_theme(mode).palette().danger;
        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..danger })),
            text_color: Some(danger),
            border: Border {
                color: danger,
                width: 1.0,
                radius: BUTTON_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.067, 0.094, 0.153));
        assert_eq!(palette.text, Color::from_rgb(0.95, 0.95, 0.97));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.976, 0.980, 0.984));
        assert_eq!(palette.text, Color::from_rgb(0.067, 0.094, 0.153));
    }

    #[test]
    fn test_primary_button_style_active_has_blue_background() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.145, 0.388, 0.922));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_pressed_buttons_snap() {
        let style = primary_button_style(&Theme::Dark, button::Status::Pressed);

        assert!(style.snap);
    }

    #[test]
    fn test_disabled_buttons_are_gray() {
        let style = danger_button_style(&Theme::Dark, button::Status::Disabled);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.3, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_button_styles_have_consistent_border_radius() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Active);
        let secondary = secondary_button_style(&Theme::Dark, button::Status::Hovered);

        assert_eq!(primary.border.radius, BUTTON_RADIUS.into());
        assert_eq!(secondary.border.radius, BUTTON_RADIUS.into());
    }

    #[test]
    fn test_active_link_uses_accent_color() {
        let style =
            link_button_style(ThemeMode::Light, true)(&Theme::Light, button::Status::Active);
        let inactive =
            link_button_style(ThemeMode::Light, false)(&Theme::Light, button::Status::Active);

        assert_eq!(style.text_color, get_theme(ThemeMode::Light).palette().primary);
        assert_eq!(inactive.text_color, muted_text_color(ThemeMode::Light));
        assert!(style.background.is_none());
    }

    #[test]
    fn test_drop_zone_highlights_while_dragging() {
        let idle = drop_zone_style(ThemeMode::Dark, false)(&Theme::Dark);
        let dragging = drop_zone_style(ThemeMode::Dark, true)(&Theme::Dark);

        assert_eq!(dragging.border.color, get_theme(ThemeMode::Dark).palette().primary);
        assert_ne!(idle.border.color, dragging.border.color);
    }
}
