mod error_details;
mod image_preview;
mod ocr;
mod selected_image;
mod upload_state;
mod user_settings;

pub use error_details::{ErrorDetails, ErrorKind, TransportFailure};
pub use image_preview::{ImagePreview, PreviewRegistry};
pub use ocr::OcrResponse;
pub use selected_image::SelectedImage;
pub use upload_state::UploadState;
pub use user_settings::{ThemeMode, ThemePreference, UserSettings};
