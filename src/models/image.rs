use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";
pub const DEFAULT_IMAGE_QUALITY: &str = "standard";

/// Payload posted to the images/generations endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    pub model: String,
    pub prompt: String,
    pub n: u8,
    pub size: String,
    pub quality: String,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_IMAGE_MODEL.to_string(),
            prompt: prompt.into(),
            n: 1,
            size: DEFAULT_IMAGE_SIZE.to_string(),
            quality: DEFAULT_IMAGE_QUALITY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamImageResult {
    pub data: Vec<UpstreamImage>,
}

/// Result of a single provider call that reached the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageGenerationOutcome {
    Generated { url: String },
    Rejected { status: u16, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_payload() {
        let payload = serde_json::to_value(ImageGenerationRequest::new("white peonies")).unwrap();
        assert_eq!(
            payload,
            json!({
                "model": "dall-e-3",
                "prompt": "white peonies",
                "n": 1,
                "size": "1024x1024",
                "quality": "standard"
            })
        );
    }

    #[test]
    fn test_upstream_result_ignores_extra_fields() {
        let result: UpstreamImageResult = serde_json::from_str(
            r#"{"created":1700000000,"data":[{"url":"https://x/y.png","revised_prompt":"..."}]}"#,
        )
        .unwrap();
        assert_eq!(result.data[0].url, "https://x/y.png");
    }
}
