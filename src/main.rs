#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod core;
mod global_constants;
mod presentation;

use iced::daemon;

use crate::core::orchestrators::app::OcrApp;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    daemon(OcrApp::build, OcrApp::handle_update, OcrApp::render_view)
        .title(OcrApp::window_title)
        .theme(OcrApp::window_theme)
        .subscription(OcrApp::handle_subscription)
        .run()
}
