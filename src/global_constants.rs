pub const APPLICATION_NAME: &str = "Myanmar Handwriting OCR";
pub const APPLICATION_TAGLINE: &str = "Convert handwritten Burmese text to digital format instantly";
pub const CONFIG_DIR_NAME: &str = "myanmar-handwriting-ocr";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const API_BASE_URL_ENV_VAR: &str = "OCR_API_URL";
pub const OCR_ENDPOINT_PATH: &str = "/ocr/";
pub const OCR_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const HEALTH_CHECK_INTERVAL_SECONDS: u64 = 30;
pub const SYSTEM_THEME_POLL_INTERVAL_SECONDS: u64 = 5;

pub const MAX_UPLOAD_SIZE_BYTES: usize = 5 * 1024 * 1024;
pub const ALLOWED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/heic",
    "image/heif",
];

pub const MAX_IMAGE_DIMENSION: u32 = 2048;
pub const OCR_COMPRESSION_MAX_SIZE_MB: f64 = 2.0;
pub const OCR_COMPRESSION_QUALITY: f32 = 0.9;
pub const COMPRESSED_MIME_TYPE: &str = "image/jpeg";

pub const MESSAGE_NO_FILE_SELECTED: &str = "No file selected";
pub const MESSAGE_INVALID_FILE_TYPE: &str =
    "Invalid file type. Please upload a JPEG, PNG, WEBP, HEIC, or HEIF image";

pub const MESSAGE_UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";
pub const MESSAGE_TIMEOUT: &str = "Request timed out. The server might be overloaded or offline.";
pub const MESSAGE_NETWORK_ERROR: &str = "Network error. Please check your internet connection.";
pub const MESSAGE_NO_RESPONSE: &str = "No response from server. Please check your connection.";
pub const MESSAGE_AUTHENTICATION_REQUIRED: &str = "Authentication required. Please log in again.";
pub const MESSAGE_PERMISSION_DENIED: &str = "You do not have permission to perform this action.";
pub const MESSAGE_INVALID_INPUT: &str = "Invalid input. Please check your data.";
pub const MESSAGE_SERVER_ERROR: &str = "Server error. Please try again later.";
