use uuid::Uuid;

use crate::{
    config::OpenAiConfig,
    error::{BouquetError, Result},
    models::{BouquetRequest, ImageGenerationOutcome, ImageGenerationRequest, Request, Response},
    openai::{ImageClient, ImageGenerator},
};

/// Maps one gateway event to one response, calling the image provider for valid POSTs.
pub struct BouquetHandler<G = ImageClient> {
    config: OpenAiConfig,
    generator: G,
}

impl BouquetHandler<ImageClient> {
    pub fn from_config(config: OpenAiConfig) -> Result<Self> {
        let generator = ImageClient::new(&config)?;
        Ok(Self::new(config, generator))
    }
}

impl<G: ImageGenerator> BouquetHandler<G> {
    pub fn new(config: OpenAiConfig, generator: G) -> Self {
        Self { config, generator }
    }

    /// Never fails: every outcome, including provider and transport errors,
    /// becomes a response.
    pub async fn handle(&self, request: Request) -> Response {
        let request_id = Uuid::new_v4();
        log::info!("[req:{}] {} request received", request_id, request.method);

        match request.method.as_str() {
            "OPTIONS" => return Response::preflight(),
            "POST" => {}
            _ => {
                log::warn!("[req:{}] Rejected method {}", request_id, request.method);
                return Response::from(BouquetError::MethodNotAllowed);
            }
        }

        match self.generate(&request).await {
            Ok(url) => {
                log::info!("[req:{}] Image generated", request_id);
                Response::image(&url)
            }
            Err(e) => {
                let status = e.status_code();
                if status >= 500 {
                    log::error!("[req:{}] {} ({})", request_id, e, status);
                } else {
                    log::warn!("[req:{}] {} ({})", request_id, e, status);
                }
                Response::from(&e)
            }
        }
    }

    async fn generate(&self, request: &Request) -> Result<String> {
        let bouquet = BouquetRequest::parse(request.body_or_empty_object())?;

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(BouquetError::MissingApiKey)?;

        let payload = ImageGenerationRequest::new(bouquet.prompt);

        match self.generator.generate(api_key, &payload).await? {
            ImageGenerationOutcome::Generated { url } => Ok(url),
            ImageGenerationOutcome::Rejected { status, details } => {
                Err(BouquetError::Upstream { status, details })
            }
        }
    }
}

/// Handles one event with configuration read from the process environment.
pub async fn handle(request: Request) -> Response {
    match BouquetHandler::from_config(OpenAiConfig::from_env()) {
        Ok(handler) => handler.handle(request).await,
        Err(e) => {
            log::error!("Failed to build image client: {}", e);
            Response::from(&e)
        }
    }
}
