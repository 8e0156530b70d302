use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::window::{self, Id};
use iced::{Alignment, Element, Length, Size, Task};

use crate::core::interfaces::adapters::{ClipboardProvider, OcrService, SystemThemeDetector};
use crate::core::models::{
    ErrorDetails, ErrorKind, OcrResponse, SelectedImage, ThemeMode, ThemePreference, UploadState,
    UserSettings,
};
use crate::core::orchestrators::ocr_session::{self, OcrSession};
use crate::global_constants;
use crate::presentation::app_theme;
use crate::presentation::{
    render_footer, render_header, render_preview_card, render_result_card, render_static_page,
    ApiStatus, ChromeMessage, DropZone, DropZoneMessage, OcrResultMessage, Page,
};

const CONTENT_MAX_WIDTH: f32 = 960.0;

async fn detect_system_dark_mode(theme_detector: Arc<dyn SystemThemeDetector>) -> bool {
    tokio::task::spawn_blocking(move || theme_detector.prefers_dark())
        .await
        .unwrap_or_else(|e| {
            log::error!("[THEME] System theme probe failed: {}", e);
            false
        })
}

pub struct AppOrchestrator {
    ocr_service: Arc<dyn OcrService>,
    clipboard: Arc<dyn ClipboardProvider>,
    theme_detector: Arc<dyn SystemThemeDetector>,
    settings: UserSettings,
    settings_path: Option<PathBuf>,
    system_prefers_dark: bool,
    main_window_id: Option<Id>,
    current_page: Page,
    drop_zone: DropZone,
    session: OcrSession,
    api_status: ApiStatus,
    copy_feedback: Option<String>,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    OpenMainWindow,
    WindowClosed(Id),
    Chrome(ChromeMessage),
    DropZone(DropZoneMessage),
    OcrResult(OcrResultMessage),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    FileLoaded(Result<SelectedImage, String>),
    UploadFinished(u64, Result<OcrResponse, ErrorDetails>),
    ResetSession,
    CheckApiHealth,
    ApiHealthChecked(bool),
    PollSystemTheme,
    SystemThemeDetected(bool),
}

impl AppOrchestrator {
    pub fn build(
        ocr_service: Arc<dyn OcrService>,
        clipboard: Arc<dyn ClipboardProvider>,
        theme_detector: Arc<dyn SystemThemeDetector>,
        settings: UserSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            ocr_service,
            clipboard,
            theme_detector,
            settings,
            settings_path,
            system_prefers_dark: false,
            main_window_id: None,
            current_page: Page::default(),
            drop_zone: DropZone::new(),
            session: OcrSession::new(),
            api_status: ApiStatus::Checking,
            copy_feedback: None,
        }
    }

    pub fn get_window_title(&self, _window: Id) -> String {
        match self.current_page {
            Page::Home => global_constants::APPLICATION_NAME.to_string(),
            page => format!("{} - {}", page.label(), global_constants::APPLICATION_NAME),
        }
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings
            .theme_preference
            .resolve(self.system_prefers_dark)
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::OpenMainWindow => {
                return self.handle_open_main_window();
            }
            OrchestratorMessage::WindowClosed(id) => {
                return self.handle_window_closed(id);
            }
            OrchestratorMessage::Chrome(chrome_msg) => {
                self.handle_chrome_message(chrome_msg);
            }
            OrchestratorMessage::DropZone(drop_zone_msg) => {
                if let Some(path) = self.drop_zone.update(drop_zone_msg) {
                    return self.load_file(path);
                }
            }
            OrchestratorMessage::OcrResult(result_msg) => {
                return self.handle_ocr_result_message(result_msg);
            }
            OrchestratorMessage::FileHovered => {
                if self.is_accepting_files() {
                    self.drop_zone.handle_drag_enter();
                }
            }
            OrchestratorMessage::FilesHoveredLeft => {
                self.drop_zone.handle_drag_leave();
            }
            OrchestratorMessage::FileDropped(path) => {
                return self.handle_file_dropped(path);
            }
            OrchestratorMessage::FileLoaded(loaded) => {
                return self.handle_file_loaded(loaded);
            }
            OrchestratorMessage::UploadFinished(generation, outcome) => {
                self.handle_upload_finished(generation, outcome);
            }
            OrchestratorMessage::ResetSession => {
                self.reset_session();
            }
            OrchestratorMessage::CheckApiHealth => {
                let ocr_service = Arc::clone(&self.ocr_service);
                return Task::future(async move {
                    OrchestratorMessage::ApiHealthChecked(ocr_service.check_health().await)
                });
            }
            OrchestratorMessage::ApiHealthChecked(healthy) => {
                self.api_status = if healthy {
                    ApiStatus::Online
                } else {
                    ApiStatus::Offline
                };
                log::debug!("[ORCHESTRATOR] API status: {:?}", self.api_status);
            }
            OrchestratorMessage::PollSystemTheme => {
                let theme_detector = Arc::clone(&self.theme_detector);
                return Task::future(async move {
                    OrchestratorMessage::SystemThemeDetected(
                        detect_system_dark_mode(theme_detector).await,
                    )
                });
            }
            OrchestratorMessage::SystemThemeDetected(prefers_dark) => {
                self.handle_system_theme_detected(prefers_dark);
            }
        }

        Task::none()
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        if Some(window_id) == self.main_window_id {
            self.render_main_window()
        } else {
            text("Loading...").into()
        }
    }

    fn handle_open_main_window(&mut self) -> Task<OrchestratorMessage> {
        if self.main_window_id.is_some() {
            log::warn!("[ORCHESTRATOR] Main window already exists and is open");
            return Task::none();
        }

        let (id, task) = window::open(window::Settings {
            size: Size::new(1040.0, 780.0),
            min_size: Some(Size::new(720.0, 560.0)),
            position: window::Position::Centered,
            ..Default::default()
        });

        self.main_window_id = Some(id);
        log::info!("[ORCHESTRATOR] Main window created with ID: {:?}", id);
        task.discard()
    }

    fn handle_window_closed(&mut self, id: Id) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Window closed: {:?}", id);

        if Some(id) == self.main_window_id {
            self.main_window_id = None;
            self.session.reset();
            log::info!("[ORCHESTRATOR] Main window closed, exiting");
            return iced::exit();
        }

        Task::none()
    }

    fn handle_chrome_message(&mut self, message: ChromeMessage) {
        match message {
            ChromeMessage::Navigate(page) => {
                log::info!("[ORCHESTRATOR] Navigating to {:?}", page);
                self.current_page = page;
            }
            ChromeMessage::ToggleTheme => {
                let next = self.settings.theme_preference.toggled();
                self.set_theme(next);
            }
            ChromeMessage::SetTheme(preference) => {
                self.set_theme(preference);
            }
        }
    }

    fn set_theme(&mut self, preference: ThemePreference) {
        self.settings.theme_preference = preference;
        log::info!(
            "[THEME] Theme preference set to {}, applying {}",
            preference,
            self.theme_mode()
        );

        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                log::error!("[ORCHESTRATOR] Failed to save theme preference: {}", e);
            }
        }
    }

    fn handle_system_theme_detected(&mut self, prefers_dark: bool) {
        if prefers_dark == self.system_prefers_dark {
            return;
        }

        self.system_prefers_dark = prefers_dark;
        if self.settings.theme_preference == ThemePreference::System {
            log::info!(
                "[THEME] System appearance changed, applying {}",
                self.theme_mode()
            );
        }
    }

    fn is_accepting_files(&self) -> bool {
        !self.session.is_processing()
    }

    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        if !self.is_accepting_files() {
            self.drop_zone.handle_drag_leave();
            log::warn!(
                "[ORCHESTRATOR] Ignoring dropped file {:?} while an upload is in progress",
                path
            );
            return Task::none();
        }

        let Some(path) = self.drop_zone.handle_drop(path) else {
            return Task::none();
        };

        self.current_page = Page::Home;
        self.load_file(path)
    }

    fn load_file(&mut self, path: PathBuf) -> Task<OrchestratorMessage> {
        Task::future(async move {
            let loaded = SelectedImage::load_from_path(&path)
                .await
                .map_err(|e| format!("{:#}", e));
            OrchestratorMessage::FileLoaded(loaded)
        })
    }

    fn handle_file_loaded(
        &mut self,
        loaded: Result<SelectedImage, String>,
    ) -> Task<OrchestratorMessage> {
        self.drop_zone.finish_load();

        if !self.is_accepting_files() {
            log::warn!("[ORCHESTRATOR] Ignoring loaded file while an upload is in progress");
            return Task::none();
        }

        // the drop zone only renders while idle
        if matches!(
            self.session.upload_state(),
            UploadState::Success | UploadState::Error
        ) {
            self.reset_session();
        }

        let image = match loaded {
            Ok(image) => image,
            Err(message) => {
                self.drop_zone.report_load_error(message);
                return Task::none();
            }
        };

        if !self.drop_zone.process_file(&image) {
            return Task::none();
        }

        self.start_upload(image)
    }

    fn start_upload(&mut self, image: SelectedImage) -> Task<OrchestratorMessage> {
        self.copy_feedback = None;

        let Some(generation) = self.session.begin_upload(&image) else {
            return Task::none();
        };

        let ocr_service = Arc::clone(&self.ocr_service);
        Task::future(async move {
            let outcome = ocr_session::process_image(ocr_service, image).await;
            OrchestratorMessage::UploadFinished(generation, outcome)
        })
    }

    fn handle_upload_finished(
        &mut self,
        generation: u64,
        outcome: Result<OcrResponse, ErrorDetails>,
    ) {
        let reached_service = match &outcome {
            Ok(_) => Some(true),
            Err(details) if matches!(details.kind, ErrorKind::Network | ErrorKind::Timeout) => {
                Some(false)
            }
            Err(_) => None,
        };

        if self.session.complete_upload(generation, outcome) {
            match reached_service {
                Some(true) => self.api_status = ApiStatus::Online,
                Some(false) => self.api_status = ApiStatus::Offline,
                None => {}
            }
        }
    }

    fn handle_ocr_result_message(&mut self, message: OcrResultMessage) -> Task<OrchestratorMessage> {
        match message {
            OcrResultMessage::CopyText => {
                let Some(result) = self.session.result() else {
                    return Task::none();
                };

                self.copy_feedback = match self.clipboard.copy_text(&result.text) {
                    Ok(()) => Some("Copied to clipboard".to_string()),
                    Err(e) => {
                        log::error!("[ORCHESTRATOR] Failed to copy to clipboard: {:#}", e);
                        Some("Could not copy to clipboard".to_string())
                    }
                };
            }
            OcrResultMessage::TryAnother => {
                self.reset_session();
            }
        }

        Task::none()
    }

    fn reset_session(&mut self) {
        self.session.reset();
        log::info!(
            "[ORCHESTRATOR] OCR session reset ({} live previews)",
            self.session.live_preview_count()
        );
        self.drop_zone.reset_upload();
        self.copy_feedback = None;
    }

    fn render_main_window(&self) -> Element<'_, OrchestratorMessage> {
        let mode = self.theme_mode();

        let header = render_header(
            self.current_page,
            self.settings.theme_preference,
            mode,
            self.api_status,
        )
        .map(OrchestratorMessage::Chrome);

        let footer = render_footer(self.current_page, mode).map(OrchestratorMessage::Chrome);

        let body = match self.current_page.static_content() {
            Some(page) => render_static_page(page, mode),
            None => self.render_home(mode),
        };

        let centered_body = container(container(body).max_width(CONTENT_MAX_WIDTH))
            .padding([32, 24])
            .width(Length::Fill)
            .center_x(Length::Fill);

        let content = column![
            header,
            scrollable(centered_body).height(Length::Fill),
            footer,
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::page_style(mode))
            .into()
    }

    fn render_home(&self, mode: ThemeMode) -> Element<'_, OrchestratorMessage> {
        let muted = app_theme::muted_text_color(mode);

        let hero = column![
            text(global_constants::APPLICATION_NAME).size(34),
            text(global_constants::APPLICATION_TAGLINE)
                .size(17)
                .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let stage: Element<'_, OrchestratorMessage> = match self.session.upload_state() {
            UploadState::Idle => self.render_upload_card(mode),
            UploadState::Uploading => self.render_processing_card(mode),
            UploadState::Success => self.render_success(mode),
            UploadState::Error => self.render_error(mode),
        };

        column![hero, Space::new().height(Length::Fixed(24.0)), stage]
            .spacing(8)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into()
    }

    fn render_upload_card(&self, mode: ThemeMode) -> Element<'_, OrchestratorMessage> {
        let muted = app_theme::muted_text_color(mode);

        let content = column![
            text("Upload Handwritten Text").size(20),
            text("Upload an image containing handwritten Burmese text")
                .size(14)
                .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
            self.drop_zone.view(mode).map(OrchestratorMessage::DropZone),
        ]
        .spacing(12);

        container(content)
            .padding(24)
            .width(Length::Fill)
            .style(app_theme::card_style(mode))
            .into()
    }

    fn render_processing_card(&self, mode: ThemeMode) -> Element<'_, OrchestratorMessage> {
        let muted = app_theme::muted_text_color(mode);

        let mut content = column![
            text("Processing Image").size(20),
            text("⏳").size(36),
            text("Analyzing your handwritten text...")
                .size(15)
                .style(move |_theme: &iced::Theme| text::Style { color: Some(muted) }),
        ]
        .spacing(14)
        .align_x(Alignment::Center);

        if let Some(file_name) = self.drop_zone.selected_file() {
            content = content.push(text(file_name.to_string()).size(12));
        }

        container(content)
            .padding(32)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(app_theme::card_style(mode))
            .into()
    }

    fn render_success(&self, mode: ThemeMode) -> Element<'_, OrchestratorMessage> {
        let Some(result) = self.session.result() else {
            return self.render_upload_card(mode);
        };

        let result_card = render_result_card(result, self.copy_feedback.as_deref(), mode)
            .map(OrchestratorMessage::OcrResult);

        let cards: Element<'_, OrchestratorMessage> = match self.session.preview() {
            Some(preview) => row![
                container(render_preview_card(preview, mode).map(OrchestratorMessage::OcrResult))
                    .width(Length::FillPortion(1)),
                container(result_card).width(Length::FillPortion(1)),
            ]
            .spacing(20)
            .into(),
            None => result_card,
        };

        let process_another = button(text("Process Another Image").size(15))
            .padding([12, 28])
            .style(app_theme::primary_button_style)
            .on_press(OrchestratorMessage::ResetSession);

        column![cards, process_another]
            .spacing(24)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }

    fn render_error(&self, mode: ThemeMode) -> Element<'_, OrchestratorMessage> {
        let message = self
            .session
            .error()
            .unwrap_or(global_constants::MESSAGE_UNEXPECTED_ERROR)
            .to_string();

        let error_box = container(
            row![text("⚠").size(18), text(message).size(15)]
                .spacing(10)
                .align_y(Alignment::Center),
        )
        .padding([14, 18])
        .width(Length::Fill)
        .style(app_theme::error_box_style(mode));

        let try_again = button(text("Try Again").size(15))
            .padding([12, 28])
            .style(app_theme::secondary_button_style)
            .on_press(OrchestratorMessage::ResetSession);

        column![error_box, try_again]
            .spacing(20)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .into()
    }
}
