//! Global search over the taxonomy tree
//!
//! The index is a flat list of nodes in document order (depth-first,
//! left-to-right: category, its sub-categories, their parameters, their
//! options). The first entry that matches wins.

use contracts::domain::a001_taxonomy::{Cursor, NodePath, Taxonomy};
use contracts::enums::TreeLevel;
use serde::Serialize;

/// Найденный узел
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub level: TreeLevel,
    pub label: String,
    pub cursor: Cursor,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    level: TreeLevel,
    label: String,
    path: NodePath,
    /// lowercased name (or option value) and slug
    haystacks: Vec<String>,
}

impl IndexEntry {
    fn matches(&self, needle: &str) -> bool {
        self.haystacks.iter().any(|h| h.contains(needle))
    }

    fn to_hit(&self) -> SearchHit {
        SearchHit {
            level: self.level,
            label: self.label.clone(),
            cursor: Cursor::from_path(&self.path),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn build(tree: &Taxonomy) -> Self {
        let mut entries = Vec::new();

        for category in &tree.categories {
            let category_path = NodePath::new([category.slug.as_str()]);
            entries.push(IndexEntry {
                level: TreeLevel::Category,
                label: category.name.clone(),
                haystacks: vec![category.name.to_lowercase(), category.slug.to_lowercase()],
                path: category_path.clone(),
            });

            for sub in &category.sub_categories {
                let sub_path = category_path.child(sub.slug.as_str());
                entries.push(IndexEntry {
                    level: TreeLevel::SubCategory,
                    label: sub.name.clone(),
                    haystacks: vec![sub.name.to_lowercase(), sub.slug.to_lowercase()],
                    path: sub_path.clone(),
                });

                for param in &sub.parameters {
                    let param_path = sub_path.child(param.slug.as_str());
                    entries.push(IndexEntry {
                        level: TreeLevel::Parameter,
                        label: param.name.clone(),
                        haystacks: vec![param.name.to_lowercase(), param.slug.to_lowercase()],
                        path: param_path.clone(),
                    });

                    for option in &param.options {
                        entries.push(IndexEntry {
                            level: TreeLevel::Option,
                            label: option.value.clone(),
                            haystacks: vec![option.value.to_lowercase()],
                            path: param_path.child(option.id.as_str()),
                        });
                    }
                }
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Запрос не обрезается: пробелы входят в подстроку
    fn needle(query: &str) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        Some(query.to_lowercase())
    }

    /// Первое совпадение в порядке документа
    pub fn find_first(&self, query: &str) -> Option<Cursor> {
        let needle = Self::needle(query)?;
        self.entries
            .iter()
            .find(|entry| entry.matches(&needle))
            .map(|entry| Cursor::from_path(&entry.path))
    }

    /// Все совпадения в порядке документа, не более `limit`
    pub fn find_all(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let Some(needle) = Self::needle(query) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .take(limit)
            .map(IndexEntry::to_hit)
            .collect()
    }
}

/// Найти первый узел, содержащий `query` (без учёта регистра)
pub fn find_first_match(tree: &Taxonomy, query: &str) -> Option<Cursor> {
    SearchIndex::build(tree).find_first(query)
}
