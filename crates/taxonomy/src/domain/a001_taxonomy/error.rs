use contracts::domain::a001_taxonomy::NodePath;
use thiserror::Error;

/// Ошибки операций над деревом таксономии
///
/// Жесты перетаскивания сюда не попадают: некорректный drop это no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// Путь не разрешается в текущем дереве (устаревшая ссылка)
    #[error("Node not found: {0}")]
    NotFound(NodePath),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type TaxonomyResult<T> = Result<T, TaxonomyError>;
