//! courseboard - course cohort analytics dashboard

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use courseboard_core::{ApiClient, Preferences, DEFAULT_API_URL};

#[derive(Parser)]
#[command(
    name = "courseboard",
    version,
    about = "Course cohort analytics dashboard",
    long_about = "A terminal dashboard for course cohort analytics: commit activity,\n\
                  tech stacks, git workflow practices, repository health and test\n\
                  practices, served by the course analytics API.\n\
                  \n\
                  Examples:\n\
                    courseboard                      # Run TUI (default)\n\
                    courseboard summary              # Print cohort summary\n\
                    courseboard summary --json       # Machine-readable summary\n\
                    courseboard sync                 # Trigger a progress data sync\n\
                  \n\
                  Environment Variables:\n\
                    COURSEBOARD_API_URL              # Analytics service address"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Analytics service base URL
    #[arg(long, env = "COURSEBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print the cohort summary and exit
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Trigger a progress data sync on the service and exit
    Sync,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api_url)?;
    let prefs = Preferences::load_default();

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => {
            // No subscriber in TUI mode; stderr writes would tear the frame.
            courseboard_tui::run(client, prefs).await?;
        }
        Mode::Summary { json } => {
            init_tracing();
            cli::run_summary(&client, json).await?;
        }
        Mode::Sync => {
            init_tracing();
            cli::run_sync(&client).await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
