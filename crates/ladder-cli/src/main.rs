mod cmd;
mod output;

use clap::{Parser, Subcommand};
use ladder_core::config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ladder",
    about = "Clinical skill checklist self-assessment — serve the web UI or manage records",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: ./ladder.yaml; defaults apply if missing)
    #[arg(long, global = true, env = "LADDER_CONFIG")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI server
    Serve {
        /// Port to listen on (0 picks a free port)
        #[arg(long, default_value = "3170")]
        port: u16,
        /// Don't open the browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// Show the guideline catalog
    Catalog,

    /// List the configured user names
    Users,

    /// Show a user's current progress
    Progress {
        /// User name (e.g. 新人A)
        user: String,
    },

    /// Append one progress record
    Record {
        /// User name (e.g. 新人A)
        user: String,
        /// Checklist item id (e.g. tech_1)
        item_id: String,
        /// Attained level, 0..=4
        #[arg(long)]
        level: u8,
        /// Free-text reflection
        #[arg(long, default_value = "")]
        comment: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from("ladder.yaml"));
    let config = Config::load(&config_path)?;

    match cli.command {
        Commands::Serve { port, no_open } => cmd::serve::run(config, port, no_open),
        Commands::Catalog => cmd::catalog::run(cli.json),
        Commands::Users => cmd::users::run(&config, cli.json),
        Commands::Progress { user } => cmd::progress::run(&config, &user, cli.json),
        Commands::Record {
            user,
            item_id,
            level,
            comment,
        } => cmd::record::run(&config, &user, &item_id, level, &comment, cli.json),
    }
}
