use clap::{Parser, Subcommand};
use cli::AssetConfig;
use color_eyre::eyre::Result;
use outline::{FourNeighbourExtractor, FsImageStore, TileColor, process_file};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Generate outline variants of colored tile images", long_about = None)]
struct Cli {
    /// Path to a .toml or .json configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the source tiles (overrides the config file)
    #[arg(long, global = true)]
    asset_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Outline every configured tile color (the default)
    Generate {
        /// Only process these colors
        #[arg(long, value_delimiter = ',')]
        colors: Vec<TileColor>,
        /// Write outlines here instead of next to the sources
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// Outline a single image
    Extract {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the JSON schema of the configuration file
    Schema,
    /// List the known tile colors
    Colors,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Generate {
        colors: Vec::new(),
        output_dir: None,
    });

    match command {
        Commands::Generate { colors, output_dir } => {
            let mut config = load_config(cli.config.as_deref(), cli.asset_dir)?;
            if !colors.is_empty() {
                config.colors = colors;
            }
            if output_dir.is_some() {
                config.output_dir = output_dir;
            }
            generate(config)?;
        }
        Commands::Extract { input, output } => {
            extract(&input, &output)?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&AssetConfig::schema())?);
        }
        Commands::Colors => {
            for name in TileColor::names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, asset_dir: Option<PathBuf>) -> Result<AssetConfig> {
    let mut config = match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            AssetConfig::from_file(path)?
        }
        None => AssetConfig::default(),
    };

    if let Some(dir) = asset_dir {
        config.asset_dir = dir;
    }

    Ok(config)
}

fn generate(config: AssetConfig) -> Result<()> {
    let store = FsImageStore::new().with_create_dirs(config.output_dir.is_some());
    let batch = config.into_batch();
    info!("{}", batch.info());

    let entries = batch.run(&store, &FourNeighbourExtractor)?;

    let kept: usize = entries.iter().map(|e| e.stats.boundary_pixels).sum();
    info!("✅ Generated {} outlines ({} boundary pixels)", entries.len(), kept);
    Ok(())
}

fn extract(input: &Path, output: &Path) -> Result<()> {
    let store = FsImageStore::new().with_create_dirs(true);
    let stats = process_file(&store, &FourNeighbourExtractor, input, output)?;

    info!(
        "Saved outline of {:?} to {:?} ({}x{}, {} of {} opaque pixels kept)",
        input, output, stats.width, stats.height, stats.boundary_pixels, stats.opaque_pixels
    );
    Ok(())
}
