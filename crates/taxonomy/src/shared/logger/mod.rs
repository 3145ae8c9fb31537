//! Tracing initialization for the host binary

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use super::config::{resolve_path, LoggingConfig};

/// Фильтр логов: `RUST_LOG` имеет приоритет над конфигурацией
pub fn filter_directive(config: &LoggingConfig) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| config.filter.clone())
}

/// Инициализация логирования: консоль (stderr) и, опционально, файл
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let file_layer = match resolve_path(&config.file) {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let log_file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(log_file))
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter_directive(config)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(())
}
