use std::io;

use anyhow::Context;

use warehouse_cli::CliConfig;
use warehouse_inventory::Warehouse;

fn main() -> anyhow::Result<()> {
    let (config, ignored) = CliConfig::from_env();
    warehouse_observability::init(config.log_format);
    for message in &ignored {
        tracing::warn!("{message}");
    }

    tracing::info!("warehouse ledger ready; type `help` for commands");

    let mut warehouse = Warehouse::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    warehouse_cli::run(&config, &mut warehouse, stdin.lock(), stdout.lock())
        .context("command loop failed")?;

    tracing::info!(goods = warehouse.len(), "warehouse ledger closed");
    Ok(())
}
