use serde::{Deserialize, Serialize};

// ============================================================================
// Seed DTO
// ============================================================================
//
// Входные данные для первичной инициализации дерева. Slug и id опциональны:
// недостающие значения проставляются при нормализации. Альтернативные имена
// полей покрывают разные формы ответов backend.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CategorySeed {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(
        rename = "subCategories",
        alias = "sub_categories",
        alias = "subcategories",
        default
    )]
    pub sub_categories: Vec<SubCategorySeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubCategorySeed {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(alias = "params", alias = "attributes", default)]
    pub parameters: Vec<ParameterSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParameterSeed {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(alias = "values", default)]
    pub options: Vec<OptionSeed>,
}

/// Опция в seed: либо голая строка, либо запись с id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionSeed {
    Value(String),
    Record {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(alias = "name", alias = "label")]
        value: String,
    },
}

impl OptionSeed {
    pub fn value(&self) -> &str {
        match self {
            OptionSeed::Value(value) => value,
            OptionSeed::Record { value, .. } => value,
        }
    }

    /// Явно заданный непустой id
    pub fn id(&self) -> Option<&str> {
        match self {
            OptionSeed::Value(_) => None,
            OptionSeed::Record { id, .. } => id.as_deref().filter(|s| !s.trim().is_empty()),
        }
    }
}

impl CategorySeed {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
