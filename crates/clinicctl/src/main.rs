//! clinicctl - orchestrator-side dispatcher for the federated clinic mesh.
//!
//! Feeds routing instructions to the router one at a time and prints the
//! collected step reports; aggregation decisions stay with the caller.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clinicctl::plan::{self, run_plan};
use clinicctl::registry::Registry;
use clinicctl::router::{Instruction, Router};
use clinicctl::transport::HttpTransport;
use std::io::Read;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "clinicctl")]
#[command(about = "Federated clinic dispatcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a plan of routing instructions (JSON lines; "-" for stdin)
    Dispatch {
        #[arg(long)]
        plan: PathBuf,
    },

    /// Dispatch a single ad-hoc tool call
    Call {
        /// Target clinic identifier
        #[arg(long)]
        clinic: String,

        /// Tool name to invoke
        #[arg(long)]
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();
    let router = Router::new(Registry::with_defaults(), HttpTransport::new()?);

    match cli.command {
        Commands::Dispatch { plan: path } => {
            let raw = if path == PathBuf::from("-") {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read plan from stdin")?;
                buffer
            } else {
                std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            };
            let instructions = plan::parse_plan(&raw)?;
            let reports = run_plan(&router, &instructions).await;
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }

        Commands::Call { clinic, tool, args } => {
            let arguments =
                serde_json::from_str(&args).context("--args must be a JSON object")?;
            let instruction = Instruction {
                clinic,
                action: tool,
                arguments,
            };
            let response = router.dispatch(&instruction).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
