//! # Psalter
//!
//! Verse lookup daemon: a Bible verse and a short personal message for an
//! emotion category.
//!
//! ## Features
//!
//! - **Anti-repetition**: recently served verses are skipped per category
//! - **Seed Corpus**: built-in verses plus optional YAML corpus files
//! - **Upstream Fallback**: empty categories are filled from bible-api.com
//! - **Offline Cache**: the CLI keeps verses it has seen for when the daemon is down

mod cache;
mod config;
mod ipc;
mod service;
mod upstream;

use anyhow::{bail, Result};
use clap::Parser;
use psalter_core::{AddVerseRequest, EmotionCategory, Verse};
use std::path::PathBuf;
use tracing::{info, warn};

/// Psalter - Verse lookup daemon
#[derive(Parser, Debug)]
#[command(name = "psalter", version, about)]
struct Args {
    /// Configuration file
    #[arg(short, long, env = "PSALTER_CONFIG", default_value = "/etc/psalter/psalter.yaml")]
    config: PathBuf,

    /// Socket path
    #[arg(short, long, env = "PSALTER_SOCKET", default_value = "/run/psalter/psalter.sock")]
    socket: PathBuf,

    /// Fetch a verse for a category (CLI mode)
    #[arg(long, value_name = "CATEGORY")]
    verse: Option<String>,

    /// List stored verses for a category (CLI mode)
    #[arg(long, value_name = "CATEGORY")]
    list: Option<String>,

    /// Add a verse to a category (CLI mode)
    #[arg(long, value_name = "CATEGORY", requires_all = ["text", "reference"])]
    add: Option<String>,

    /// Verse text for --add
    #[arg(long)]
    text: Option<String>,

    /// Scripture reference for --add
    #[arg(long)]
    reference: Option<String>,

    /// Personal message for --add
    #[arg(long)]
    message: Option<String>,

    /// Show corpus statistics (CLI mode)
    #[arg(long)]
    stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .init();

    let config = config::load_config(&args.config)?;
    let client = ipc::PsalterClient::new(&args.socket);

    // CLI modes
    if let Some(emotion) = args.verse {
        return show_verse(&client, &config.cache, &emotion).await;
    }

    if let Some(emotion) = args.list {
        for verse in client.list_verses(&emotion).await? {
            println!("[{}] {}", verse.id, verse.quote());
        }
        return Ok(());
    }

    if let Some(emotion) = args.add {
        let verse = client
            .add_verse(AddVerseRequest {
                emotion,
                text: args.text.unwrap_or_default(),
                reference: args.reference.unwrap_or_default(),
                personal_message: args.message.unwrap_or_default(),
            })
            .await?;
        println!("Verse added: {}", verse.id);
        return Ok(());
    }

    if args.stats {
        let stats = client.stats().await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    // Daemon mode
    info!("Psalter v{} starting", env!("CARGO_PKG_VERSION"));

    let service = service::VerseService::from_config(&config)?;
    let server = ipc::PsalterIpcServer::new(service);

    info!("Psalter ready");
    server.start(&args.socket).await
}

/// Ask the daemon, then fall back to the offline cache
async fn show_verse(
    client: &ipc::PsalterClient,
    cache_config: &config::CacheConfig,
    emotion: &str,
) -> Result<()> {
    let category: EmotionCategory = emotion.parse()?;

    let mut cache = cache::VerseCache::new(cache_config.max_per_category, cache_config.path.clone());
    if let Err(e) = cache.load().await {
        warn!("Ignoring unreadable verse cache: {}", e);
    }

    match client.get_verse(emotion).await {
        Ok(verse) => {
            print_verse(&verse);
            if cache.add(verse) {
                if let Err(e) = cache.save().await {
                    warn!("Failed to save verse cache: {}", e);
                }
            }
            Ok(())
        }
        Err(e) => {
            if e.is_transport() {
                warn!("Psalter daemon unreachable: {}", e);
            } else {
                warn!("Could not get a fresh verse: {}", e);
            }
            match cache.random(category, &mut rand::thread_rng()) {
                Some(verse) => {
                    println!("(cached verse)");
                    print_verse(verse);
                    Ok(())
                }
                None => bail!("Unable to load a verse for {}", category),
            }
        }
    }
}

fn print_verse(verse: &Verse) {
    println!("{}\n", verse.emotion.title());
    println!("  {}", verse.quote());
    if !verse.personal_message.is_empty() {
        println!("\n  {}", verse.personal_message);
    }
}
