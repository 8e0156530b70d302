use std::io::Cursor;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use crate::core::models::SelectedImage;
use crate::global_constants;

pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }

    let max = max_dimension as f64;
    if width > height {
        let scaled_height = (height as f64 * max / width as f64).round() as u32;
        (max_dimension, scaled_height.max(1))
    } else {
        let scaled_width = (width as f64 * max / height as f64).round() as u32;
        (scaled_width.max(1), max_dimension)
    }
}

pub fn compress_image(image: &SelectedImage, max_size_mb: f64, quality: f32) -> Result<SelectedImage> {
    if image.size_in_megabytes() < max_size_mb {
        log::debug!(
            "[IMAGING] {} is {:.2}MB, below {}MB, skipping compression",
            image.file_name,
            image.size_in_megabytes(),
            max_size_mb
        );
        return Ok(image.clone());
    }

    let decoded = image::load_from_memory(&image.bytes)
        .with_context(|| format!("Error loading image {} for compression", image.file_name))?;

    let (width, height) = scaled_dimensions(
        decoded.width(),
        decoded.height(),
        global_constants::MAX_IMAGE_DIMENSION,
    );

    let resized = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        log::debug!(
            "[IMAGING] Resizing {} from {}x{} to {}x{}",
            image.file_name,
            decoded.width(),
            decoded.height(),
            width,
            height
        );
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    let jpeg_quality = (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8;
    let mut encoded = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut encoded, jpeg_quality)
        .encode_image(&resized.to_rgb8())
        .context("Could not compress image")?;
    let encoded = encoded.into_inner();

    log::info!(
        "[IMAGING] Compressed {} from {} to {} bytes",
        image.file_name,
        image.size_in_bytes(),
        encoded.len()
    );

    Ok(SelectedImage {
        file_name: image.file_name.clone(),
        mime_type: global_constants::COMPRESSED_MIME_TYPE.to_string(),
        bytes: encoded,
    })
}

pub fn optimize_for_ocr(image: &SelectedImage) -> Result<SelectedImage> {
    compress_image(
        image,
        global_constants::OCR_COMPRESSION_MAX_SIZE_MB,
        global_constants::OCR_COMPRESSION_QUALITY,
    )
}

pub fn compress_image_if_needed(image: SelectedImage) -> SelectedImage {
    match optimize_for_ocr(&image) {
        Ok(optimized) => optimized,
        Err(e) => {
            log::error!("[IMAGING] Image compression failed: {:#}", e);
            image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn noisy_png(width: u32, height: u32) -> Vec<u8> {
        let mut seed: u32 = 0x1234_5678;
        let img = RgbImage::from_fn(width, height, |_, _| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let [r, g, b, _] = seed.to_le_bytes();
            Rgb([r, g, b])
        });

        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    fn selected(file_name: &str, bytes: Vec<u8>) -> SelectedImage {
        SelectedImage::build_from_bytes(file_name.to_string(), bytes)
    }

    #[test]
    fn test_scaled_dimensions_keeps_small_images() {
        assert_eq!(scaled_dimensions(800, 600, 2048), (800, 600));
        assert_eq!(scaled_dimensions(2048, 2048, 2048), (2048, 2048));
    }

    #[test]
    fn test_scaled_dimensions_landscape() {
        assert_eq!(scaled_dimensions(4096, 3000, 2048), (2048, 1500));
    }

    #[test]
    fn test_scaled_dimensions_portrait() {
        assert_eq!(scaled_dimensions(3000, 4096, 2048), (1500, 2048));
    }

    #[test]
    fn test_scaled_dimensions_square_uses_height_branch() {
        assert_eq!(scaled_dimensions(3001, 3001, 2048), (2048, 2048));
    }

    #[test]
    fn test_scaled_dimensions_never_collapses_to_zero() {
        assert_eq!(scaled_dimensions(10000, 1, 2048), (2048, 1));
    }

    #[test]
    fn test_small_files_are_returned_unchanged() {
        let image = selected("small.png", noisy_png(16, 16));

        let compressed = compress_image(&image, 1.0, 0.8).unwrap();

        assert_eq!(compressed.bytes, image.bytes);
        assert_eq!(compressed.mime_type, "image/png");
    }

    #[test]
    fn test_large_files_are_reencoded_as_jpeg() {
        let image = selected("page.png", noisy_png(2100, 400));
        assert!(image.size_in_megabytes() >= 2.0);

        let compressed = optimize_for_ocr(&image).unwrap();

        assert_eq!(compressed.file_name, "page.png");
        assert_eq!(compressed.mime_type, "image/jpeg");
        let decoded = image::load_from_memory(&compressed.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2048, 390));
    }

    #[test]
    fn test_zero_threshold_forces_reencoding_without_resizing() {
        let image = selected("tiny.png", noisy_png(20, 10));

        let compressed = compress_image(&image, 0.0, 0.5).unwrap();

        assert_eq!(compressed.mime_type, "image/jpeg");
        let decoded = image::load_from_memory(&compressed.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
    }

    #[test]
    fn test_undecodable_image_is_an_error() {
        let image = SelectedImage {
            file_name: "broken.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![0xAB; 3 * 1024 * 1024],
        };

        assert!(optimize_for_ocr(&image).is_err());
    }

    #[test]
    fn test_compress_if_needed_falls_back_to_original() {
        let image = SelectedImage {
            file_name: "broken.heic".to_string(),
            mime_type: "image/heic".to_string(),
            bytes: vec![0xCD; 3 * 1024 * 1024],
        };

        let result = compress_image_if_needed(image.clone());

        assert_eq!(result.bytes, image.bytes);
        assert_eq!(result.mime_type, "image/heic");
    }
}
