//! Command execution over the screen state holders.
//!
//! Each CLI invocation plays one screen-worth of the mobile flow: construct
//! the holder, wait for its state to settle, render it as text.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::{Result, eyre};
use tokio::sync::{Notify, watch};
use tokio::time::timeout;

use crate::application::{DetailState, FavoritesState, HomeState, ImageRepository, ViewState};
use crate::domain::entities::Image;
use crate::domain::ports::{DownloaderPort, NotificationPort};
use crate::infrastructure::Command;

const TOGGLE_TIMEOUT: Duration = Duration::from_secs(5);
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// Notifier that mirrors every notification to stdout and stores a wakeup,
/// so a one-shot command can block until a fire-and-forget task reports.
pub struct CliNotifier {
    inner: Arc<dyn NotificationPort>,
    done: Notify,
}

impl CliNotifier {
    /// Wraps a downstream notifier (usually the desktop service).
    #[must_use]
    pub fn new(inner: Arc<dyn NotificationPort>) -> Self {
        Self {
            inner,
            done: Notify::new(),
        }
    }

    /// Waits until the next notification is sent.
    pub async fn wait_notified(&self) {
        self.done.notified().await;
    }
}

impl NotificationPort for CliNotifier {
    fn send(&self, title: &str, body: &str) {
        println!("{title}: {body}");
        self.inner.send(title, body);
        self.done.notify_one();
    }
}

/// Everything a command needs.
pub struct CommandContext {
    /// Shared repository.
    pub repository: ImageRepository,
    /// Download adapter handed to detail holders.
    pub downloader: Arc<dyn DownloaderPort>,
    /// Notification sink handed to detail holders.
    pub notifier: Arc<CliNotifier>,
}

/// Runs one command to completion.
///
/// # Errors
/// Returns an error when the requested screen ends in an error state.
pub async fn run(context: &CommandContext, command: Command) -> Result<()> {
    match command {
        Command::List { page } => list(context, page).await,
        Command::Search { query, page } => search(context, query, page).await,
        Command::Favorites => favorites(context).await,
        Command::Favorite { id } => set_favorite(context, &id, true).await,
        Command::Unfavorite { id } => set_favorite(context, &id, false).await,
        Command::Show { id } => show(context, &id).await,
        Command::Download { id } => download(context, &id).await,
    }
}

/// Returns the current state once it has settled out of `Loading`.
async fn wait_settled<T: Clone>(rx: &mut watch::Receiver<ViewState<T>>) -> Result<ViewState<T>> {
    let state = rx
        .wait_for(|state| !state.is_loading())
        .await
        .map_err(|_| eyre!("state holder went away"))?;
    Ok(state.clone())
}

/// Returns the next settled state published after the current one.
async fn next_settled<T: Clone>(rx: &mut watch::Receiver<ViewState<T>>) -> Result<ViewState<T>> {
    loop {
        rx.changed()
            .await
            .map_err(|_| eyre!("state holder went away"))?;
        let state = rx.borrow_and_update();
        if !state.is_loading() {
            return Ok(state.clone());
        }
    }
}

/// Opens the detail screen for `id` and returns the holder with its settled
/// image.
async fn open_detail(context: &CommandContext, id: &str) -> Result<(DetailState, Image)> {
    let holder = DetailState::new(
        context.repository.clone(),
        context.downloader.clone(),
        context.notifier.clone(),
        id,
    );
    let mut rx = holder.state();
    let state = wait_settled(&mut rx).await?;

    match state {
        ViewState::Success(image) => Ok((holder, image)),
        other => Err(eyre!(other.error().unwrap_or("Unknown error").to_string())),
    }
}

async fn list(context: &CommandContext, page: u32) -> Result<()> {
    let holder = HomeState::new(context.repository.clone());
    let mut rx = holder.state();

    let mut state = wait_settled(&mut rx).await?;
    for _ in 1..page {
        holder.load_next_page();
        state = next_settled(&mut rx).await?;
    }
    render_grid(&state)
}

async fn search(context: &CommandContext, query: String, page: u32) -> Result<()> {
    let holder = HomeState::new(context.repository.clone());
    let mut rx = holder.state();
    wait_settled(&mut rx).await?;

    holder.set_search_query(query);
    holder.execute_search();
    let mut state = next_settled(&mut rx).await?;
    for _ in 1..page {
        holder.load_next_page();
        state = next_settled(&mut rx).await?;
    }
    render_grid(&state)
}

async fn favorites(context: &CommandContext) -> Result<()> {
    let holder = FavoritesState::new(context.repository.clone());
    let mut rx = holder.state();
    let state = wait_settled(&mut rx).await?;

    match state {
        ViewState::Empty => {
            println!("No favorites yet.");
            Ok(())
        }
        other => render_grid(&other),
    }
}

async fn set_favorite(context: &CommandContext, id: &str, favorite: bool) -> Result<()> {
    let (holder, image) = open_detail(context, id).await?;

    if image.is_favorite() == favorite {
        println!(
            "{id} is {} a favorite.",
            if favorite { "already" } else { "not" }
        );
        return Ok(());
    }

    holder.toggle_favorite();

    let mut flag = context.repository.is_image_favorite(id);
    timeout(TOGGLE_TIMEOUT, flag.wait_for(|value| *value == favorite))
        .await
        .map_err(|_| eyre!("favorite toggle timed out"))?
        .map_err(|_| eyre!("favorites store went away"))?;

    if favorite {
        println!("Favorited {id}.");
    } else {
        println!("Removed {id} from favorites.");
    }
    Ok(())
}

async fn show(context: &CommandContext, id: &str) -> Result<()> {
    let (_holder, image) = open_detail(context, id).await?;
    render_detail(&image);
    Ok(())
}

async fn download(context: &CommandContext, id: &str) -> Result<()> {
    let (holder, image) = open_detail(context, id).await?;

    holder.download_image(&image.urls().full);
    timeout(DOWNLOAD_TIMEOUT, context.notifier.wait_notified())
        .await
        .map_err(|_| eyre!("download timed out"))?;
    Ok(())
}

fn render_grid(state: &ViewState<Vec<Image>>) -> Result<()> {
    match state {
        ViewState::Success(images) => {
            render_images(images);
            Ok(())
        }
        ViewState::Empty => {
            println!("Nothing to show.");
            Ok(())
        }
        ViewState::Error(message) => Err(eyre!(message.clone())),
        ViewState::Loading => unreachable!("grid rendered before settling"),
    }
}

fn render_images(images: &[Image]) {
    println!("{} photo(s)", images.len());
    for image in images {
        let dimensions = match (image.width(), image.height()) {
            (Some(width), Some(height)) => format!("{width}x{height}"),
            _ => "?".to_string(),
        };
        let marker = if image.is_favorite() { "*" } else { " " };
        println!(
            "{marker} {:<13} {:>11}  @{:<18} {}",
            image.id(),
            dimensions,
            image.author().username,
            image.description().unwrap_or("(no description)")
        );
    }
}

fn render_detail(image: &Image) {
    println!("id:          {}", image.id());
    if let Some(description) = image.description() {
        println!("description: {description}");
    }
    if let (Some(width), Some(height)) = (image.width(), image.height()) {
        println!("size:        {width}x{height}");
    }
    if let Some(color) = image.color() {
        println!("color:       {color}");
    }
    if let Some(created_at) = image.created_at() {
        println!("created:     {created_at}");
    }
    if let Some(likes) = image.likes() {
        println!("likes:       {likes}");
    }
    println!(
        "author:      {} (@{})",
        image.author().name,
        image.author().username
    );
    println!("full:        {}", image.urls().full);
    println!("download:    {}", image.download_url());
    println!(
        "favorite:    {}",
        if image.is_favorite() { "yes" } else { "no" }
    );
}
