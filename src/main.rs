use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oxisplash::application::ImageRepository;
use oxisplash::domain::ports::{DownloaderPort, NotificationPort};
use oxisplash::infrastructure::{
    AppConfig, CliArgs, DesktopNotificationService, PictureDownloader, SqliteFavoriteStore,
    StorageManager, UnsplashClient,
};
use oxisplash::presentation::{CliNotifier, CommandContext};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_context(config: &AppConfig) -> Result<CommandContext> {
    let client_id = config.client_id.clone().ok_or_else(|| {
        eyre!(
            "no Unsplash client id configured; pass --client-id, set UNSPLASH_CLIENT_ID, \
             or add client_id to config.toml"
        )
    })?;

    let api = Arc::new(UnsplashClient::with_base_url(
        config.api_base_url.clone(),
        client_id,
    )?);
    let store = Arc::new(match &config.database_path {
        Some(path) => SqliteFavoriteStore::open(path)?,
        None => SqliteFavoriteStore::open_default()?,
    });
    let repository = ImageRepository::new(api, store);

    let downloader: Arc<dyn DownloaderPort> = Arc::new(match config.download_dir.clone() {
        Some(dir) => PictureDownloader::with_target_dir(dir)?,
        None => PictureDownloader::new()?,
    });

    let desktop: Arc<dyn NotificationPort> = Arc::new(DesktopNotificationService::new(
        config.enable_desktop_notifications,
    ));
    let notifier = Arc::new(CliNotifier::new(desktop));

    Ok(CommandContext {
        repository,
        downloader,
        notifier,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let mut config = StorageManager::new()?.load_config(args.config.as_deref())?;
    config.merge_with_args(&args);

    init_logging(&config)?;
    info!(version = oxisplash::VERSION, "Starting oxisplash");

    let context = create_context(&config)?;
    oxisplash::presentation::run(&context, args.command).await
}
