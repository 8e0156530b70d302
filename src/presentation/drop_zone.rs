use std::path::{Path, PathBuf};

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Color, Element, Length};

use crate::core::imaging;
use crate::core::models::{SelectedImage, ThemeMode};
use crate::global_constants;
use crate::presentation::app_theme;

#[derive(Debug, Default)]
pub struct DropZone {
    is_dragging: bool,
    selected_file: Option<String>,
    file_error: Option<String>,
    path_input: String,
    pending_load: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum DropZoneMessage {
    PathInputChanged(String),
    OpenRequested,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn file_error(&self) -> Option<&str> {
        self.file_error.as_deref()
    }

    pub fn pending_load(&self) -> Option<&Path> {
        self.pending_load.as_deref()
    }

    pub fn handle_drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn handle_drag_leave(&mut self) {
        self.is_dragging = false;
    }

    pub fn handle_drop(&mut self, path: PathBuf) -> Option<PathBuf> {
        log::info!("[DROP_ZONE] File dropped: {:?}", path);
        self.is_dragging = false;
        self.begin_load(path)
    }

    fn begin_load(&mut self, path: PathBuf) -> Option<PathBuf> {
        if let Some(pending) = &self.pending_load {
            log::warn!(
                "[DROP_ZONE] Ignoring {:?} while {:?} is still loading",
                path,
                pending
            );
            return None;
        }

        self.pending_load = Some(path.clone());
        Some(path)
    }

    pub fn finish_load(&mut self) {
        self.pending_load = None;
    }

    pub fn update(&mut self, message: DropZoneMessage) -> Option<PathBuf> {
        match message {
            DropZoneMessage::PathInputChanged(value) => {
                self.path_input = value;
                None
            }
            DropZoneMessage::OpenRequested => {
                let trimmed = self.path_input.trim().trim_matches('"');
                if trimmed.is_empty() {
                    self.file_error = Some(global_constants::MESSAGE_NO_FILE_SELECTED.to_string());
                    return None;
                }

                log::info!("[DROP_ZONE] Opening file from path input: {}", trimmed);
                self.begin_load(PathBuf::from(trimmed))
            }
        }
    }

    pub fn process_file(&mut self, image: &SelectedImage) -> bool {
        self.file_error = None;

        if let Err(e) = imaging::validate_image(image) {
            log::warn!("[DROP_ZONE] {} rejected: {}", image.file_name, e);
            self.file_error = Some(e.to_string());
            return false;
        }

        self.selected_file = Some(image.file_name.clone());
        true
    }

    pub fn report_load_error(&mut self, message: String) {
        log::error!("[DROP_ZONE] Could not load file: {}", message);
        self.file_error = Some(message);
    }

    pub fn reset_upload(&mut self) {
        self.selected_file = None;
        self.file_error = None;
        self.path_input.clear();
    }

    pub fn view(&self, mode: ThemeMode) -> Element<'_, DropZoneMessage> {
        let muted = app_theme::muted_text_color(mode);

        let headline = if self.is_dragging {
            "Release to upload"
        } else {
            "Drag and drop an image here"
        };

        let path_row = row![
            text_input("or paste a file path, e.g. /home/me/note.jpg", &self.path_input)
                .on_input(DropZoneMessage::PathInputChanged)
                .on_submit(DropZoneMessage::OpenRequested)
                .padding(10)
                .width(Length::Fill),
            button(text("Upload a file").size(14))
                .padding([10, 20])
                .style(app_theme::primary_button_style)
                .on_press(DropZoneMessage::OpenRequested),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let hint = text(format!(
            "PNG, JPG, WEBP up to {}MB",
            global_constants::MAX_UPLOAD_SIZE_BYTES / (1024 * 1024)
        ))
        .size(12)
        .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) });

        let zone = container(
            column![text("⬆").size(40), text(headline).size(16), path_row, hint]
                .spacing(14)
                .align_x(Alignment::Center),
        )
        .padding(28)
        .width(Length::Fill)
        .style(app_theme::drop_zone_style(mode, self.is_dragging));

        let mut content = column![zone].spacing(12);

        if let Some(error) = &self.file_error {
            content = content.push(
                container(text(error.clone()).size(14))
                    .padding([8, 12])
                    .width(Length::Fill)
                    .style(app_theme::error_box_style(mode)),
            );
        } else if let Some(file_name) = &self.selected_file {
            content = content.push(
                text(format!("Selected: {}", file_name))
                    .size(13)
                    .style(|_theme: &iced::Theme| text::Style {
                        color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                    }),
            );
        }

        content.into()
    }
}
