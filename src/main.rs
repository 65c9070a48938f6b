use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use pdf_tts::error::AppError;
use pdf_tts::infrastructure::config::{Config, LogFormat};
use pdf_tts::infrastructure::repositories::{LopdfPdfRepository, PollyTtsRepository};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(AppError::from(e).exit_code());
        }
    };

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        region = %config.aws_region,
        pdf_input = ?config.pdf_input_path,
        use_temp_dir = config.use_temp_dir,
        "Starting PDF text-to-speech run"
    );

    let mut polly = PollyTtsRepository::new(config.aws_region.clone());
    if let Some(endpoint_url) = &config.polly_endpoint_url {
        polly = polly.with_endpoint_url(endpoint_url.clone());
    }

    let pdf_repo = LopdfPdfRepository::new();
    let mut rng = rand::rng();

    match pdf_tts::app::run(&config, &pdf_repo, Arc::new(polly), &mut rng).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "Done");
        }
        Err(e) => {
            e.report();
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pdf_tts=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "pdf_tts=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
