pub mod config;
pub mod error;
pub mod handler;
pub mod logger;
pub mod models;
pub mod openai;
#[cfg(feature = "server")]
pub mod server;

pub use config::{Config, OpenAiConfig};
pub use error::{BouquetError, Result};
pub use handler::{handle, BouquetHandler};
pub use models::*;
pub use openai::{ImageClient, ImageGenerator};
