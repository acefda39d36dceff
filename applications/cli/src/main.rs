/// Cadence - terminal music player front end
use clap::{Parser, Subcommand};
use cadence_cli::{catalog::Catalog, config::CliConfig, render, session::Session};
use std::{fs::File, io::BufReader, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Cadence playback queue in the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (overrides the configured one)
    #[arg(long, global = true, env = "CADENCE_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands interactively from stdin
    Repl,
    /// Execute commands from a script file
    Run {
        /// Script path, one command per line
        script: PathBuf,
    },
    /// List the catalog
    Catalog,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog;
    }
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    tracing::info!("Catalog ready with {} tracks", catalog.len());

    match cli.command {
        Commands::Repl => {
            let mut session = Session::new(catalog, &config);
            let stdin = std::io::stdin();
            session.run(stdin.lock(), std::io::stdout(), Some(config.prompt.as_str()))?;
        }
        Commands::Run { script } => {
            let mut session = Session::new(catalog, &config);
            let reader = BufReader::new(File::open(&script)?);
            tracing::info!("Running script {}", script.display());
            session.run(reader, std::io::stdout(), None)?;
        }
        Commands::Catalog => {
            println!("{}", render::track_list(catalog.tracks()));
        }
    }

    Ok(())
}
