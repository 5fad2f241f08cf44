pub mod image_client;

use crate::{
    error::Result,
    models::{ImageGenerationOutcome, ImageGenerationRequest},
};
use async_trait::async_trait;

pub use image_client::ImageClient;

/// A provider that can turn a prompt into an image URL.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Makes exactly one attempt; transport and decoding failures are errors,
    /// a non-200 answer is an `ImageGenerationOutcome::Rejected`.
    async fn generate(
        &self,
        api_key: &str,
        request: &ImageGenerationRequest,
    ) -> Result<ImageGenerationOutcome>;
}
