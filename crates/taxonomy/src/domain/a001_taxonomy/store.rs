//! Taxonomy store: seed normalization and read access by path

use contracts::domain::a001_taxonomy::{
    Category, CategorySeed, NodePath, OptionItem, OptionSeed, Parameter, ParameterSeed,
    SubCategory, SubCategorySeed, Taxonomy,
};
use contracts::enums::TreeLevel;
use contracts::shared::slug::slugify;
use serde::Serialize;

use super::id_gen;

/// Ссылка на узел любого уровня
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Category(&'a Category),
    SubCategory(&'a SubCategory),
    Parameter(&'a Parameter),
    Option(&'a OptionItem),
}

impl<'a> NodeRef<'a> {
    pub fn level(&self) -> TreeLevel {
        match self {
            NodeRef::Category(_) => TreeLevel::Category,
            NodeRef::SubCategory(_) => TreeLevel::SubCategory,
            NodeRef::Parameter(_) => TreeLevel::Parameter,
            NodeRef::Option(_) => TreeLevel::Option,
        }
    }

    /// Идентичность узла: slug для именованных уровней, id для опций
    pub fn key(&self) -> &'a str {
        match self {
            NodeRef::Category(c) => &c.slug,
            NodeRef::SubCategory(s) => &s.slug,
            NodeRef::Parameter(p) => &p.slug,
            NodeRef::Option(o) => &o.id,
        }
    }

    /// Отображаемый текст: имя или значение опции
    pub fn label(&self) -> &'a str {
        match self {
            NodeRef::Category(c) => &c.name,
            NodeRef::SubCategory(s) => &s.name,
            NodeRef::Parameter(p) => &p.name,
            NodeRef::Option(o) => &o.value,
        }
    }
}

/// Количество узлов по уровням
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxonomyStats {
    pub categories: usize,
    pub sub_categories: usize,
    pub parameters: usize,
    pub options: usize,
}

impl TaxonomyStats {
    pub fn total(&self) -> usize {
        self.categories + self.sub_categories + self.parameters + self.options
    }
}

/// Нормализация seed-данных в дерево
///
/// Missing slugs are derived from names, missing option ids are generated.
/// Explicit slugs and ids are kept as supplied.
pub fn initialize(seed: Vec<CategorySeed>) -> Taxonomy {
    let categories = seed.into_iter().map(normalize_category).collect();
    Taxonomy::new(categories)
}

fn normalize_category(seed: CategorySeed) -> Category {
    let slug = resolve_slug(seed.slug, &seed.name);
    let sub_categories = seed
        .sub_categories
        .into_iter()
        .map(|sub| normalize_sub_category(&slug, sub))
        .collect();

    Category {
        name: seed.name,
        slug,
        sub_categories,
    }
}

fn normalize_sub_category(category_slug: &str, seed: SubCategorySeed) -> SubCategory {
    let slug = resolve_slug(seed.slug, &seed.name);
    let parameters = seed
        .parameters
        .into_iter()
        .map(|param| normalize_parameter(category_slug, &slug, param))
        .collect();

    SubCategory {
        name: seed.name,
        slug,
        parameters,
    }
}

fn normalize_parameter(category_slug: &str, sub_slug: &str, seed: ParameterSeed) -> Parameter {
    let slug = resolve_slug(seed.slug, &seed.name);
    let options = seed
        .options
        .into_iter()
        .map(|option| normalize_option(category_slug, sub_slug, &slug, option))
        .collect();

    Parameter {
        name: seed.name,
        slug,
        options,
    }
}

fn normalize_option(category: &str, sub: &str, param: &str, seed: OptionSeed) -> OptionItem {
    let id = match seed.id() {
        Some(id) => id.to_string(),
        None => id_gen::option_id(category, sub, param, seed.value()),
    };
    OptionItem::new(id, seed.value())
}

fn resolve_slug(explicit: Option<String>, name: &str) -> String {
    match explicit {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(name),
    }
}

/// Получить узел по пути; `None` при любом разрыве цепочки
pub fn get_by_path<'a>(tree: &'a Taxonomy, path: &NodePath) -> Option<NodeRef<'a>> {
    if path.depth() > NodePath::MAX_DEPTH {
        return None;
    }

    let category = tree.category(path.get(0)?)?;
    let Some(sub_slug) = path.get(1) else {
        return Some(NodeRef::Category(category));
    };

    let sub = category.sub_category(sub_slug)?;
    let Some(param_slug) = path.get(2) else {
        return Some(NodeRef::SubCategory(sub));
    };

    let param = sub.parameter(param_slug)?;
    let Some(option_id) = path.get(3) else {
        return Some(NodeRef::Parameter(param));
    };

    param.option(option_id).map(NodeRef::Option)
}

/// Подсчёт узлов по уровням
pub fn stats(tree: &Taxonomy) -> TaxonomyStats {
    let mut stats = TaxonomyStats {
        categories: tree.categories.len(),
        ..Default::default()
    };

    for category in &tree.categories {
        stats.sub_categories += category.sub_categories.len();
        for sub in &category.sub_categories {
            stats.parameters += sub.parameters.len();
            for param in &sub.parameters {
                stats.options += param.options.len();
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_taxonomy::test_support::{scenario_seed, scenario_tree};

    fn strip_option_ids(tree: &Taxonomy) -> Taxonomy {
        let mut tree = tree.clone();
        for category in &mut tree.categories {
            for sub in &mut category.sub_categories {
                for param in &mut sub.parameters {
                    for option in &mut param.options {
                        option.id.clear();
                    }
                }
            }
        }
        tree
    }

    #[test]
    fn test_initialize_assigns_slugs_and_ids() {
        let seed = vec![CategorySeed {
            name: "Home & Garden".into(),
            slug: None,
            sub_categories: vec![SubCategorySeed {
                name: "Garden Tools".into(),
                slug: Some("tools".into()),
                parameters: vec![ParameterSeed {
                    name: "Power Source".into(),
                    slug: None,
                    options: vec![OptionSeed::Value("Battery".into())],
                }],
            }],
        }];

        let tree = initialize(seed);
        let category = &tree.categories[0];
        assert_eq!(category.slug, "home-garden");
        assert_eq!(category.sub_categories[0].slug, "tools");

        let param = &category.sub_categories[0].parameters[0];
        assert_eq!(param.slug, "power-source");
        assert!(param.options[0].id.starts_with("home-garden-tools-power-source-battery-"));
        assert_eq!(param.options[0].value, "Battery");
    }

    #[test]
    fn test_initialize_is_idempotent_modulo_option_ids() {
        let seed = vec![CategorySeed {
            name: "Vehicles".into(),
            slug: None,
            sub_categories: vec![SubCategorySeed {
                name: "Cars".into(),
                slug: None,
                parameters: vec![ParameterSeed {
                    name: "Fuel".into(),
                    slug: None,
                    options: vec![
                        OptionSeed::Value("Petrol".into()),
                        OptionSeed::Value("Diesel".into()),
                    ],
                }],
            }],
        }];

        let first = initialize(seed.clone());
        let second = initialize(seed);
        assert_eq!(strip_option_ids(&first), strip_option_ids(&second));
    }

    #[test]
    fn test_initialize_keeps_explicit_option_ids() {
        let first = initialize(scenario_seed());
        let second = initialize(scenario_seed());
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_by_path_resolves_every_level() {
        let (tree, samsung, _) = scenario_tree();

        let category = get_by_path(&tree, &NodePath::new(["electronics"])).unwrap();
        assert_eq!(category.level(), TreeLevel::Category);
        assert_eq!(category.label(), "Electronics");

        let param =
            get_by_path(&tree, &NodePath::new(["electronics", "mobile-phones", "brand"])).unwrap();
        assert_eq!(param.key(), "brand");

        let option = get_by_path(
            &tree,
            &NodePath::new(["electronics", "mobile-phones", "brand", samsung.as_str()]),
        )
        .unwrap();
        assert_eq!(option.level(), TreeLevel::Option);
        assert_eq!(option.label(), "Samsung");
    }

    #[test]
    fn test_get_by_path_returns_none_on_broken_link() {
        let (tree, samsung, _) = scenario_tree();

        assert!(get_by_path(&tree, &NodePath::root()).is_none());
        assert!(get_by_path(&tree, &NodePath::new(["vehicles"])).is_none());
        assert!(get_by_path(&tree, &NodePath::new(["electronics", "laptops", "brand"])).is_none());
        assert!(get_by_path(
            &tree,
            &NodePath::new(["electronics", "mobile-phones", "brand", samsung.as_str(), "extra"])
        )
        .is_none());
    }

    #[test]
    fn test_stats_counts_levels() {
        let (tree, _, _) = scenario_tree();
        let stats = stats(&tree);
        assert_eq!(stats.categories, 1);
        assert_eq!(stats.sub_categories, 1);
        assert_eq!(stats.parameters, 1);
        assert_eq!(stats.options, 2);
        assert_eq!(stats.total(), 5);
    }
}
