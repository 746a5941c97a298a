use anyhow::Result;
use clap::Parser;
use hotel_description_translator::{config, dispatcher, manifest::Manifest};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Translate hotel descriptions into every supported locale a hotel lacks.
///
/// Flags override the matching environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Manifest of `hotel_id | locale,locale,...` lines [env: MANIFEST_PATH]
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory per-hotel JSON files are written to [env: OUTPUT_DIR]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File hotels without any description are appended to [env: NO_DESCRIPTION_LOG]
    #[arg(long)]
    no_description_log: Option<PathBuf>,

    /// Maximum hotels processed concurrently [env: POOL_SIZE]
    #[arg(short, long)]
    pool_size: Option<usize>,

    /// Per-request timeout in seconds [env: REQUEST_TIMEOUT_SECS]
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Environment variable holding the translation API key
    #[arg(long, default_value = config::DEFAULT_API_KEY_VAR)]
    api_key_env: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hotel_description_translator=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let started = Instant::now();

    // Load configuration from environment, then apply flags
    let mut config = config::Config::from_env(&args.api_key_env)?;
    if let Some(path) = args.manifest {
        config.manifest_path = path;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(path) = args.no_description_log {
        config.no_description_log = path;
    }
    if let Some(size) = args.pool_size {
        config.pool_size = size.max(1);
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout_secs = secs;
    }

    info!("Loading manifest {}", config.manifest_path.display());
    let manifest = Manifest::load(&config.manifest_path)?;
    if manifest.is_empty() {
        info!("No hotels in manifest, nothing to translate");
    } else {
        info!("Loaded {} hotels", manifest.len());
    }

    let summary = dispatcher::run(&config, manifest.hotels()).await?;

    info!(
        "Run complete: {} hotels, {} files written ({} locales), {} already covered, {} without description",
        summary.hotels,
        summary.written,
        summary.translated_locales,
        summary.nothing_to_translate,
        summary.no_description
    );
    if summary.failures() > 0 {
        warn!(
            "{} hotels failed: {} description, {} translation, {} write",
            summary.failures(),
            summary.description_failures,
            summary.translation_failures,
            summary.write_failures
        );
    }
    info!("Total running time: {:?}", started.elapsed());

    Ok(())
}
