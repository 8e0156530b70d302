mod arboard_clipboard_provider;
mod http_ocr_service;
mod os_theme_detector;

pub use arboard_clipboard_provider::ArboardClipboardProvider;
pub use http_ocr_service::HttpOcrService;
pub use os_theme_detector::OsThemeDetector;
