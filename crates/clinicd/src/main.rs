//! Clinic daemon — one federated data silo exposing slot-booking tools
//! over JSON-RPC (MCP convention).

use anyhow::{bail, Result};
use clap::Parser;
use clinicd::config::{self, SiloConfig};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "clinicd")]
#[command(about = "Federated clinic data silo (MCP JSON-RPC server)", long_about = None)]
#[command(version)]
struct Cli {
    /// Logical clinic identifier (clinic_a .. clinic_f)
    #[arg(long, default_value = "clinic_a")]
    clinic: String,

    /// Medical specialty label (defaults from the clinic id)
    #[arg(long)]
    specialty: Option<String>,

    /// TCP port to listen on (defaults from the clinic id)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the slot store file
    #[arg(long, default_value = "db.json")]
    db: PathBuf,

    /// Require the caller's cpf to match the record on cancel/reschedule
    #[arg(long)]
    verify_identity: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    let wiring = config::default_wiring(&cli.clinic);
    if wiring.is_none() && (cli.specialty.is_none() || cli.port.is_none()) {
        bail!(
            "unknown clinic '{}': pass --specialty and --port explicitly",
            cli.clinic
        );
    }
    let specialty = cli
        .specialty
        .or_else(|| wiring.map(|(s, _)| s.to_string()))
        .unwrap_or_default();
    let port = cli.port.or_else(|| wiring.map(|(_, p)| p)).unwrap_or_default();

    info!("clinicd v{} starting as {}", env!("CARGO_PKG_VERSION"), cli.clinic);

    clinicd::server::run(SiloConfig {
        clinic_id: cli.clinic,
        specialty,
        port,
        db_path: cli.db,
        verify_identity: cli.verify_identity,
    })
    .await
}
