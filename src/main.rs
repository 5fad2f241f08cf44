use bouquet_image::{logger, BouquetHandler, Config, ImageClient, Request};
use std::env;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[cfg_attr(feature = "server", actix_web::main)]
#[cfg_attr(not(feature = "server"), tokio::main)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    logger::init_with_config(config.logger_config())?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    }

    let mode = env::args().nth(1).unwrap_or_else(|| "event".to_string());
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), &mode);
    logger::log_config_info(&config);

    for (id, name, provider) in ImageClient::supported_models() {
        log::debug!("  {} - {} ({})", id, name, provider);
    }

    match mode.as_str() {
        "event" => run_event(config).await,
        #[cfg(feature = "server")]
        "serve" => Ok(bouquet_image::server::serve(config).await?),
        other => {
            log::error!("❌ Unknown mode: {}", other);
            Err(format!("unknown mode '{}', expected 'event' or 'serve'", other).into())
        }
    }
}

/// Reads one gateway event from stdin and writes the response envelope to stdout.
async fn run_event(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;

    let request: Request = serde_json::from_str(&input).map_err(|e| {
        log::error!("❌ Event is not valid JSON: {}", e);
        e
    })?;

    let handler = BouquetHandler::from_config(config.openai)?;
    let response = handler.handle(request).await;

    let mut output = serde_json::to_string(&response)?;
    output.push('\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
