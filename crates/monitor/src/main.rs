//! Light Monitor Node - Main Entry Point

use monitor::{init_logging, run_node, NodeConfig};
use std::path::PathBuf;
use tracing::info;

// One execution unit for every task
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = NodeConfig::load(config_path.as_deref())?;
    init_logging(&config.logging)?;

    info!("=== Light Monitor Node v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Starting light-level monitoring...");

    run_node(config).await?;

    Ok(())
}
