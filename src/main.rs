use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use release_history::config::ServerConfig;
use release_history::content::ContentSource;
use release_history::render::{render_fragment, render_page, PAGE_TITLE};
use release_history::store::{ReleaseStore, SnapshotHandle};
use release_history::api;

#[derive(Parser)]
#[command(name = "relhist")]
#[command(about = "Serve and render the release history page")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the release history server
    Serve {
        /// Address to listen on
        #[arg(short, long)]
        addr: Option<SocketAddr>,

        /// Release content file (TOML)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
    /// Render the release history to stdout
    Render {
        /// Release content file (TOML)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Wrap the fragment in the full page shell
        #[arg(long)]
        page: bool,
    },
    /// Validate release content and print a summary
    Check {
        /// Release content file (TOML)
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

/// Initialize tracing with output to stderr (for render mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "release_history=debug,history_core=debug,tower_http=debug".into(),
    ));

    if use_stderr {
        // Render mode: stdout carries the HTML
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Loading release history from {}", config.content);

    // Invalid content is fatal: never serve an inconsistent history.
    let store = ReleaseStore::load(&config.content)?;
    let snapshots = SnapshotHandle::new(store);

    #[cfg(unix)]
    tokio::spawn(release_history::reload::reload_on_hangup(
        config.content.clone(),
        snapshots.clone(),
    ));

    let app = api::create_router(snapshots);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        "Release history listening on http://{}{}",
        listener.local_addr()?,
        api::RELEASE_HISTORY_PATH
    );

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = matches!(cli.command, Some(Commands::Render { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { addr, content }) => {
            let config = ServerConfig::from_env()?.with_overrides(addr, content);
            serve(config).await?;
        }
        Some(Commands::Render { content, page }) => {
            let store = ReleaseStore::load(&ContentSource::resolve(content))?;
            let fragment = render_fragment(&store);
            let output = if page {
                render_page(PAGE_TITLE, &fragment)
            } else {
                fragment
            };
            std::io::stdout().write_all(output.as_bytes())?;
        }
        Some(Commands::Check { content }) => {
            let source = ContentSource::resolve(content);
            let store = ReleaseStore::load(&source)?;
            println!(
                "{}: {} releases, {} revisions",
                source,
                store.len(),
                store.revision_count()
            );
            if let Some(latest) = store.latest() {
                println!("latest: go{} (released {})", latest.version, latest.released);
            }
        }
        None => {
            // Default: start server
            serve(ServerConfig::from_env()?).await?;
        }
    }

    Ok(())
}
