use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl OcrResponse {
    pub fn new(text: String, confidence: Option<f32>) -> Self {
        Self { text, confidence }
    }

    pub fn confidence_percent(&self) -> Option<u8> {
        self.confidence
            .filter(|value| value.is_finite())
            .map(|value| (value.clamp(0.0, 1.0) * 100.0).round() as u8)
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response_with_confidence() {
        let json = r#"{"text": "မင်္ဂလာပါ", "confidence": 0.87}"#;

        let response: OcrResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.text, "မင်္ဂလာပါ");
        assert_eq!(response.confidence, Some(0.87));
    }

    #[test]
    fn test_deserialize_response_without_confidence() {
        let json = r#"{"text": "hello"}"#;

        let response: OcrResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.confidence, None);
        assert_eq!(response.confidence_percent(), None);
    }

    #[test]
    fn test_confidence_percent_rounds_to_nearest_whole_number() {
        let response = OcrResponse::new("text".to_string(), Some(0.876));

        assert_eq!(response.confidence_percent(), Some(88));
    }

    #[test]
    fn test_confidence_percent_is_clamped() {
        let above = OcrResponse::new("text".to_string(), Some(1.7));
        let below = OcrResponse::new("text".to_string(), Some(-0.2));
        let not_a_number = OcrResponse::new("text".to_string(), Some(f32::NAN));

        assert_eq!(above.confidence_percent(), Some(100));
        assert_eq!(below.confidence_percent(), Some(0));
        assert_eq!(not_a_number.confidence_percent(), None);
    }

    #[test]
    fn test_has_text_ignores_whitespace() {
        assert!(!OcrResponse::new("  \n".to_string(), None).has_text());
        assert!(OcrResponse::new(" က ".to_string(), None).has_text());
    }
}
