//! Seed loading: the data source the editing session starts from

use anyhow::Context;
use contracts::domain::a001_taxonomy::CategorySeed;
use serde::Deserialize;
use std::path::Path;

use crate::shared::config::{resolve_path, Config};

/// Demo seed embedded in the binary
const DEFAULT_SEED: &str = include_str!("seed.json");

/// Seed file is either a bare list or an object with a `categories` list
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedDocument {
    List(Vec<CategorySeed>),
    Wrapped { categories: Vec<CategorySeed> },
}

pub fn parse_seed(json: &str) -> anyhow::Result<Vec<CategorySeed>> {
    let document: SeedDocument = serde_json::from_str(json)?;
    Ok(match document {
        SeedDocument::List(categories) => categories,
        SeedDocument::Wrapped { categories } => categories,
    })
}

pub fn load_seed_file(path: &Path) -> anyhow::Result<Vec<CategorySeed>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read seed {}", path.display()))?;
    parse_seed(&contents).with_context(|| format!("invalid seed {}", path.display()))
}

pub fn default_seed() -> anyhow::Result<Vec<CategorySeed>> {
    parse_seed(DEFAULT_SEED).context("embedded seed is invalid")
}

/// Загрузить seed согласно конфигурации (файл или встроенные данные)
pub fn load_seed(config: &Config) -> anyhow::Result<Vec<CategorySeed>> {
    let seed = match resolve_path(&config.seed.path) {
        Some(path) => {
            tracing::info!("Loading seed from: {}", path.display());
            load_seed_file(&path)?
        }
        None => {
            tracing::info!("Using embedded demo seed");
            default_seed()?
        }
    };
    tracing::info!("Seed contains {} categories", seed.len());
    Ok(seed)
}
