use std::path::PathBuf;

use taxonomy::domain::a001_taxonomy::{EditingSession, SessionSettings};
use taxonomy::shared::{config, data::seed, format::format_stats, logger};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = config::load_config(config_path.as_deref())?;

    logger::init_tracing(&config.logging)?;
    source.report();

    let seed = seed::load_seed(&config)?;
    let session = EditingSession::new(seed, SessionSettings::from(&config.search));

    tracing::info!("{}", format_stats(&session.stats()));
    tracing::info!(cursor = %session.cursor().to_path(), "Initial selection");

    println!("{}", session.to_json()?);
    Ok(())
}
