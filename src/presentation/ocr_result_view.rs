use iced::widget::{button, column, container, image, progress_bar, row, text, Space};
use iced::{Alignment, Element, Length};

use crate::core::models::{ImagePreview, OcrResponse, ThemeMode};
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum OcrResultMessage {
    CopyText,
    TryAnother,
}

pub fn render_preview_card(
    preview: &ImagePreview,
    mode: ThemeMode,
) -> Element<'_, OcrResultMessage> {
    let remove_btn = button(text("✖").size(14))
        .padding([6, 12])
        .style(app_theme::danger_button_style)
        .on_press(OcrResultMessage::TryAnother);

    let header = row![
        text("Original Image").size(18).width(Length::Fill),
        remove_btn
    ]
    .align_y(Alignment::Center);

    let viewer = image::viewer(preview.handle.clone())
        .width(Length::Fill)
        .height(Length::Fixed(260.0));

    container(column![header, viewer].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(app_theme::card_style(mode))
        .into()
}

pub fn render_result_card(
    result: &OcrResponse,
    copy_feedback: Option<&str>,
    mode: ThemeMode,
) -> Element<'static, OcrResultMessage> {
    let muted = app_theme::muted_text_color(mode);

    let copy_btn = button(text("📋 Copy").size(14))
        .padding([8, 16])
        .style(app_theme::secondary_button_style)
        .on_press(OcrResultMessage::CopyText);

    let try_another_btn = button(text("↻ Try Another").size(14))
        .padding([8, 16])
        .style(app_theme::secondary_button_style)
        .on_press(OcrResultMessage::TryAnother);

    let header = row![
        text("OCR Result").size(18).width(Length::Fill),
        copy_btn,
        try_another_btn,
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let detected_text = if result.has_text() {
        result.text.clone()
    } else {
        "No text was detected in this image.".to_string()
    };

    let text_panel = column![
        text("Detected Text")
            .size(13)
            .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
        container(text(detected_text).size(22))
            .width(Length::Fill)
            .height(Length::Shrink)
            .padding([12, 4]),
    ]
    .spacing(6);

    let mut content = column![header, text_panel].spacing(16);

    if let Some(percent) = result.confidence_percent() {
        let confidence_row = row![
            text("Confidence:")
                .size(13)
                .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
            container(progress_bar(0.0..=100.0, f32::from(percent))).width(Length::Fixed(220.0)),
            text(format!("{}%", percent)).size(13),
        ]
        .spacing(10)
        .align_y(Alignment::Center);
        content = content.push(confidence_row);
    }

    if let Some(feedback) = copy_feedback {
        content = content.push(Space::new().height(Length::Fixed(4.0)));
        content = content.push(
            text(feedback.to_string())
                .size(12)
                .style(move |_theme: &iced::Theme| text::Style {
                    color: Some(app_theme::get_theme(mode).palette().success),
                }),
        );
    }

    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(app_theme::card_style(mode))
        .into()
}
