mod compression;
mod validation;

pub use compression::compress_image_if_needed;
pub use validation::validate_image;
