use iced::widget::{button, container, pick_list, row, text, Space};
use iced::{Alignment, Color, Element, Length};

use crate::core::models::{ThemeMode, ThemePreference};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    Checking,
    Online,
    Offline,
}

#[derive(Debug, Clone)]
pub enum ChromeMessage {
    Navigate(Page),
    ToggleTheme,
    SetTheme(ThemePreference),
}

pub fn render_header(
    current_page: Page,
    preference: ThemePreference,
    mode: ThemeMode,
    api_status: ApiStatus,
) -> Element<'static, ChromeMessage> {
    let title = row![
        text("📄").size(24),
        text(global_constants::APPLICATION_NAME).size(20),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut navigation = row![].spacing(4).align_y(Alignment::Center);
    for page in Page::NAVIGATION {
        navigation = navigation.push(
            button(text(page.label()).size(14))
                .padding([6, 10])
                .style(app_theme::link_button_style(mode, page == current_page))
                .on_press(ChromeMessage::Navigate(page)),
        );
    }

    let toggle_icon = match mode {
        ThemeMode::Dark => "☀",
        ThemeMode::Light => "☾",
    };
    let theme_toggle = button(text(toggle_icon).size(16))
        .padding([6, 10])
        .style(app_theme::secondary_button_style)
        .on_press(ChromeMessage::ToggleTheme);

    let theme_picker = pick_list(
        ThemePreference::ALL,
        Some(preference),
        ChromeMessage::SetTheme,
    )
    .text_size(13)
    .padding([6, 10]);

    let bar = row![
        title,
        Space::new().width(Length::Fill),
        render_api_status(api_status),
        navigation,
        theme_picker,
        theme_toggle,
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(bar)
        .padding([14, 24])
        .width(Length::Fill)
        .style(app_theme::card_style(mode))
        .into()
}

fn render_api_status(api_status: ApiStatus) -> Element<'static, ChromeMessage> {
    let (status_color, status_icon, label) = match api_status {
        ApiStatus::Online => (Color::from_rgb(0.2, 0.8, 0.4), "●", "Service online"),
        ApiStatus::Checking => (Color::from_rgb(1.0, 0.8, 0.2), "○", "Checking service..."),
        ApiStatus::Offline => (Color::from_rgb(1.0, 0.3, 0.3), "●", "Service unreachable"),
    };

    row![
        text(status_icon)
            .size(12)
            .style(move |_theme: &iced::Theme| text::Style {
                color: Some(status_color),
            }),
        text(label)
            .size(12)
            .style(|_theme: &iced::Theme| text::Style {
                color: Some(Color::from_rgba(0.6, 0.6, 0.6, 1.0)),
            }),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

pub fn render_footer(current_page: Page, mode: ThemeMode) -> Element<'static, ChromeMessage> {
    let muted = app_theme::muted_text_color(mode);

    let notice = text(format!(
        "© {}. All rights reserved.",
        global_constants::APPLICATION_NAME
    ))
    .size(12)
    .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) });

    let links = [Page::Privacy, Page::Terms].into_iter().fold(
        row![].spacing(4).align_y(Alignment::Center),
        |links, page| {
            links.push(
                button(text(page.label()).size(12))
                    .padding([4, 8])
                    .style(app_theme::link_button_style(mode, page == current_page))
                    .on_press(ChromeMessage::Navigate(page)),
            )
        },
    );

    container(
        row![notice, Space::new().width(Length::Fill), links].align_y(Alignment::Center),
    )
    .padding([10, 24])
    .width(Length::Fill)
    .style(app_theme::card_style(mode))
    .into()
}
