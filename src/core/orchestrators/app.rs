use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::window::{self, Id};
use iced::{Element, Subscription, Task, Theme};

use crate::adapters::{ArboardClipboardProvider, HttpOcrService, OsThemeDetector};
use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ErrorDetails, ErrorKind, OcrResponse, SelectedImage, UserSettings};
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants;
use crate::presentation::app_theme;

struct UnavailableOcrService {
    reason: String,
}

#[async_trait::async_trait]
impl OcrService for UnavailableOcrService {
    async fn recognize_text(&self, _image: &SelectedImage) -> Result<OcrResponse, ErrorDetails> {
        Err(ErrorDetails::new(ErrorKind::Unknown, self.reason.clone()))
    }

    async fn check_health(&self) -> bool {
        false
    }
}

pub struct OcrApp {
    orchestrator: AppOrchestrator,
}

fn load_settings() -> (UserSettings, Option<PathBuf>) {
    let settings_path = match UserSettings::default_settings_file_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("[APP] No settings location available: {}, using defaults", e);
            return (UserSettings::default(), None);
        }
    };

    let settings = UserSettings::load_from(&settings_path).unwrap_or_else(|e| {
        log::warn!("[APP] Failed to load settings: {}, using defaults", e);
        UserSettings::default()
    });

    (settings, Some(settings_path))
}

fn build_ocr_service(api_base_url: &str) -> Arc<dyn OcrService> {
    match HttpOcrService::new(api_base_url) {
        Ok(service) => {
            log::info!("[APP] OCR service configured for {}", api_base_url);
            Arc::new(service)
        }
        Err(e) => {
            log::error!("[APP] Failed to build HTTP client: {:#}", e);
            Arc::new(UnavailableOcrService {
                reason: global_constants::MESSAGE_UNEXPECTED_ERROR.to_string(),
            })
        }
    }
}

fn polling_subscription(
    interval: Duration,
    message: fn() -> OrchestratorMessage,
) -> impl futures::Stream<Item = OrchestratorMessage> {
    iced::stream::channel(
        10,
        move |mut output: futures::channel::mpsc::Sender<OrchestratorMessage>| async move {
            loop {
                tokio::time::sleep(interval).await;
                let _ = output.try_send(message());
            }
        },
    )
}

fn system_theme_ticks() -> impl futures::Stream<Item = OrchestratorMessage> {
    polling_subscription(
        Duration::from_secs(global_constants::SYSTEM_THEME_POLL_INTERVAL_SECONDS),
        || OrchestratorMessage::PollSystemTheme,
    )
}

fn health_check_ticks() -> impl futures::Stream<Item = OrchestratorMessage> {
    polling_subscription(
        Duration::from_secs(global_constants::HEALTH_CHECK_INTERVAL_SECONDS),
        || OrchestratorMessage::CheckApiHealth,
    )
}

impl OcrApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let (settings, settings_path) = load_settings();
        let env_override = std::env::var(global_constants::API_BASE_URL_ENV_VAR).ok();
        let api_base_url = settings.effective_api_base_url(env_override);

        let orchestrator = AppOrchestrator::build(
            build_ocr_service(&api_base_url),
            Arc::new(ArboardClipboardProvider::new()),
            Arc::new(OsThemeDetector::new()),
            settings,
            settings_path,
        );

        let tasks = vec![
            Task::done(OrchestratorMessage::PollSystemTheme),
            Task::done(OrchestratorMessage::OpenMainWindow),
            Task::done(OrchestratorMessage::CheckApiHealth),
        ];

        (Self { orchestrator }, Task::batch(tasks))
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self, window_id: Id) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view(window_id)
    }

    pub fn window_title(&self, window_id: Id) -> String {
        self.orchestrator.get_window_title(window_id)
    }

    pub fn window_theme(&self, _window_id: Id) -> Theme {
        app_theme::get_theme(self.orchestrator.theme_mode())
    }

    pub fn handle_subscription(&self) -> Subscription<OrchestratorMessage> {
        Subscription::batch(vec![
            iced::event::listen_with(|event, _status, id| match event {
                iced::Event::Window(window::Event::Closed) => {
                    Some(OrchestratorMessage::WindowClosed(id))
                }
                iced::Event::Window(window::Event::FileHovered(_)) => {
                    Some(OrchestratorMessage::FileHovered)
                }
                iced::Event::Window(window::Event::FilesHoveredLeft) => {
                    Some(OrchestratorMessage::FilesHoveredLeft)
                }
                iced::Event::Window(window::Event::FileDropped(path)) => {
                    Some(OrchestratorMessage::FileDropped(path))
                }
                _ => None,
            }),
            Subscription::run(system_theme_ticks),
            Subscription::run(health_check_ticks),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_service_reports_failure() {
        let service = UnavailableOcrService {
            reason: "client missing".to_string(),
        };
        let image = SelectedImage {
            file_name: "page.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };

        let error = service.recognize_text(&image).await.unwrap_err();

        assert_eq!(error.kind, ErrorKind::Unknown);
        assert_eq!(error.message, "client missing");
        assert!(!service.check_health().await);
    }

    #[tokio::test]
    async fn test_build_ocr_service_reports_unreachable_backend_as_unhealthy() {
        let service = build_ocr_service("http://127.0.0.1:9");

        assert!(!service.check_health().await);
    }
}
