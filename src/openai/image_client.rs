use crate::{
    config::OpenAiConfig,
    error::{BouquetError, Result},
    logger,
    models::{ImageGenerationOutcome, ImageGenerationRequest, UpstreamImageResult},
    openai::ImageGenerator,
};
use async_trait::async_trait;
use reqwest::{header, redirect, Client, StatusCode};

#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    endpoint: String,
}

impl ImageClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| BouquetError::ClientError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{}/images/generations", config.base_url()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("dall-e-3", "DALL·E 3", "OpenAI"),
            ("dall-e-2", "DALL·E 2", "OpenAI"),
        ]
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(
        &self,
        api_key: &str,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationOutcome> {
        log::info!("Generating image with model: {}", request.model);
        log::debug!("Image generation prompt: {}", request.prompt);

        let _timer = logger::timer("Image generation");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            log::warn!("Image provider answered {}: {}", status.as_u16(), body);
            return Ok(ImageGenerationOutcome::Rejected {
                status: status.as_u16(),
                details: body,
            });
        }

        let result: UpstreamImageResult = serde_json::from_str(&body)
            .map_err(|e| BouquetError::ResponseError(e.to_string()))?;

        let url = result
            .data
            .into_iter()
            .next()
            .map(|image| image.url)
            .ok_or_else(|| BouquetError::ResponseError("No images generated".into()))?;

        Ok(ImageGenerationOutcome::Generated { url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let client = ImageClient::new(&OpenAiConfig::new()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api.openai.com/v1/images/generations"
        );

        let client =
            ImageClient::new(&OpenAiConfig::new().with_base_url("http://localhost:4010/v1/"))
                .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:4010/v1/images/generations");
    }

    #[test]
    fn test_supported_models() {
        let models = ImageClient::supported_models();
        assert!(models.iter().any(|(id, _, _)| *id == "dall-e-3"));
    }
}
