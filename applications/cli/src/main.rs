/// soundcn - browse, preview, and install UI sound effects
use clap::{Parser, Subcommand};
use soundcn_catalog::PackageManager;
use soundcn_cli::{commands, AppConfig};
use soundcn_playback::VoiceParams;
use soundcn_registry::DirectoryAssetSource;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "soundcn")]
#[command(about = "Browse, preview, and install soundcn UI sounds", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./soundcn.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sounds matching a search and category
    List {
        /// Search text (slug, title, description, tags)
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category label, or "all"
        #[arg(short = 'C', long, default_value = "all")]
        category: String,
    },
    /// Show category facets with counts
    Categories,
    /// Show a sound's details, install command, and related sounds
    Show {
        /// Sound slug
        name: String,
        /// Package manager for the install command
        #[arg(long)]
        pm: Option<PackageManager>,
    },
    /// Print one install command for several sounds
    Install {
        /// Sound slugs; when omitted, every sound matching the filters
        names: Vec<String>,
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short = 'C', long, default_value = "all")]
        category: String,
        #[arg(long)]
        pm: Option<PackageManager>,
    },
    /// Play a sound on the default output device
    Play {
        /// Sound slug
        name: String,
        /// Volume from 0 to 1
        #[arg(long)]
        volume: Option<f32>,
        /// Playback speed multiplier
        #[arg(long)]
        rate: Option<f32>,
    },
    /// Save a sound's audio file
    Download {
        /// Sound slug
        name: String,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Add registry items for sound modules missing from the manifest
    UpdateRegistry {
        /// Show what would be added without writing
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundcn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::List { query, category } => {
            let catalog = commands::load_catalog(&config)?;
            print!("{}", commands::browse::render_list(&catalog, &query, &category)?);
        }
        Commands::Categories => {
            let catalog = commands::load_catalog(&config)?;
            print!("{}", commands::browse::render_categories(&catalog));
        }
        Commands::Show { name, pm } => {
            let catalog = commands::load_catalog(&config)?;
            let pm = resolve_pm(pm, &config)?;
            print!(
                "{}",
                commands::browse::render_detail(&catalog, &name, pm, config.related.limit)?
            );
        }
        Commands::Install {
            names,
            query,
            category,
            pm,
        } => {
            let catalog = commands::load_catalog(&config)?;
            let pm = resolve_pm(pm, &config)?;
            print!(
                "{}",
                commands::browse::render_install(&catalog, &names, &query, &category, pm)?
            );
        }
        Commands::Play { name, volume, rate } => {
            let params = VoiceParams::new(
                volume.unwrap_or(config.playback.volume),
                rate.unwrap_or(config.playback.playback_rate),
            )?;
            let source = Arc::new(DirectoryAssetSource::scan(&config.catalog.sounds_dir)?);
            commands::play::play(source, &name, params).await?;
        }
        Commands::Download { name, out } => {
            let source = DirectoryAssetSource::scan(&config.catalog.sounds_dir)?;
            match commands::download::download(&source, &name, &out).await {
                Ok(path) => println!("{}", path.display()),
                Err(e) => {
                    tracing::error!("Failed to download {}: {}", name, e);
                    return Err(e.into());
                }
            }
        }
        Commands::UpdateRegistry { dry_run } => {
            print!("{}", commands::registry::update_registry(&config, dry_run)?);
        }
    }

    Ok(())
}

fn resolve_pm(flag: Option<PackageManager>, config: &AppConfig) -> anyhow::Result<PackageManager> {
    match flag {
        Some(pm) => Ok(pm),
        None => Ok(config.package_manager()?),
    }
}
