use crate::core::models::SelectedImage;
use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", global_constants::MESSAGE_NO_FILE_SELECTED)]
    NoFileSelected,
    #[error("{}", global_constants::MESSAGE_INVALID_FILE_TYPE)]
    UnsupportedType(String),
    #[error("File size exceeds {}MB limit", .limit_bytes / (1024 * 1024))]
    TooLarge { size_bytes: usize, limit_bytes: usize },
}

pub fn validate_image(image: &SelectedImage) -> Result<(), ValidationError> {
    if image.bytes.is_empty() {
        return Err(ValidationError::NoFileSelected);
    }

    if !global_constants::ALLOWED_MIME_TYPES.contains(&image.mime_type.as_str()) {
        log::debug!(
            "[IMAGING] Rejected {} with content type {}",
            image.file_name,
            image.mime_type
        );
        return Err(ValidationError::UnsupportedType(image.mime_type.clone()));
    }

    if image.size_in_bytes() > global_constants::MAX_UPLOAD_SIZE_BYTES {
        return Err(ValidationError::TooLarge {
            size_bytes: image.size_in_bytes(),
            limit_bytes: global_constants::MAX_UPLOAD_SIZE_BYTES,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with(mime_type: &str, size: usize) -> SelectedImage {
        SelectedImage {
            file_name: "sample".to_string(),
            mime_type: mime_type.to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_accepts_every_allowed_type() {
        for mime_type in global_constants::ALLOWED_MIME_TYPES {
            assert_eq!(validate_image(&image_with(mime_type, 10)), Ok(()));
        }
    }

    #[test]
    fn test_rejects_empty_file() {
        let result = validate_image(&image_with("image/png", 0));

        assert_eq!(result, Err(ValidationError::NoFileSelected));
        assert_eq!(
            result.unwrap_err().to_string(),
            global_constants::MESSAGE_NO_FILE_SELECTED
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let error = validate_image(&image_with("image/gif", 10)).unwrap_err();

        assert_eq!(error, ValidationError::UnsupportedType("image/gif".to_string()));
        assert_eq!(error.to_string(), global_constants::MESSAGE_INVALID_FILE_TYPE);
    }

    #[test]
    fn test_rejects_files_over_limit() {
        let error = validate_image(&image_with(
            "image/jpeg",
            global_constants::MAX_UPLOAD_SIZE_BYTES + 1,
        ))
        .unwrap_err();

        assert_eq!(error.to_string(), "File size exceeds 5MB limit");
    }

    #[test]
    fn test_accepts_file_exactly_at_limit() {
        let image = image_with("image/jpeg", global_constants::MAX_UPLOAD_SIZE_BYTES);

        assert!(validate_image(&image).is_ok());
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let image = image_with("text/plain", global_constants::MAX_UPLOAD_SIZE_BYTES + 1);

        assert!(matches!(
            validate_image(&image),
            Err(ValidationError::UnsupportedType(_))
        ));
    }
}
