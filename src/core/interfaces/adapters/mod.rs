mod clipboard_provider;
mod ocr_service;
mod system_theme_detector;

pub use clipboard_provider::ClipboardProvider;
pub use ocr_service::OcrService;
pub use system_theme_detector::SystemThemeDetector;
