pub mod app_theme;
mod chrome;
mod drop_zone;
mod ocr_result_view;
mod pages;

pub use chrome::{render_footer, render_header, ApiStatus, ChromeMessage};
pub use drop_zone::{DropZone, DropZoneMessage};
pub use ocr_result_view::{render_preview_card, render_result_card, OcrResultMessage};
pub use pages::{render_static_page, Page};
