use serde::{Deserialize, Serialize};

// ============================================================================
// Option
// ============================================================================

/// Значение параметра
///
/// Идентичность опции задаётся непрозрачным `id`, а не slug: одинаковые
/// значения ("Samsung") встречаются под разными параметрами.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub id: String,
    pub value: String,
}

impl OptionItem {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Parameter
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub options: Vec<OptionItem>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            options: Vec::new(),
        }
    }

    /// Поиск опции по id
    pub fn option(&self, id: &str) -> Option<&OptionItem> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn option_mut(&mut self, id: &str) -> Option<&mut OptionItem> {
        self.options.iter_mut().find(|o| o.id == id)
    }
}

// ============================================================================
// SubCategory
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl SubCategory {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            parameters: Vec::new(),
        }
    }

    /// Поиск параметра по slug (при дублях возвращается первый)
    pub fn parameter(&self, slug: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.slug == slug)
    }

    pub fn parameter_mut(&mut self, slug: &str) -> Option<&mut Parameter> {
        self.parameters.iter_mut().find(|p| p.slug == slug)
    }
}

// ============================================================================
// Category
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
    #[serde(rename = "subCategories", default)]
    pub sub_categories: Vec<SubCategory>,
}

impl Category {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
            sub_categories: Vec::new(),
        }
    }

    /// Поиск подкатегории по slug (при дублях возвращается первая)
    pub fn sub_category(&self, slug: &str) -> Option<&SubCategory> {
        self.sub_categories.iter().find(|s| s.slug == slug)
    }

    pub fn sub_category_mut(&mut self, slug: &str) -> Option<&mut SubCategory> {
        self.sub_categories.iter_mut().find(|s| s.slug == slug)
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Снимок дерева таксономии: категории → подкатегории → параметры → опции
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Поиск категории по slug (при дублях возвращается первая)
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn category_mut(&mut self, slug: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_children() {
        let mut category = Category::new("Electronics", "electronics");
        category
            .sub_categories
            .push(SubCategory::new("Mobile Phones", "mobile-phones"));
        let tree = Taxonomy::new(vec![category]);

        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json["categories"][0]["subCategories"][0]["slug"],
            "mobile-phones"
        );

        let back: Taxonomy = serde_json::from_value(json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_lookup_returns_first_duplicate() {
        let tree = Taxonomy::new(vec![
            Category::new("Cars", "cars"),
            Category::new("CARS", "cars"),
        ]);
        assert_eq!(tree.category("cars").map(|c| c.name.as_str()), Some("Cars"));
        assert!(tree.category("bikes").is_none());
    }
}
