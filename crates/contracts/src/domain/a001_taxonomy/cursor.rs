use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// NodePath
// ============================================================================

/// Путь к узлу дерева: до четырёх селекторов
/// (category slug, sub slug, param slug, option id).
///
/// Пустой путь обозначает неявный корень (родитель категорий).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<String>);

impl NodePath {
    pub const MAX_DEPTH: usize = 4;

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Путь к дочернему узлу
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self(segments)
    }

    /// Путь к родителю (для корня — `None`)
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        write!(f, "{}", self.0.join("/"))
    }
}

impl<S: Into<String>> FromIterator<S> for NodePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Текущий выбор в редакторе (по одному селектору на колонку)
///
/// Селекторы образуют цепочку зависимостей: `sub` имеет смысл только при
/// разрешённой `category`, `param` только при разрешённой `sub` и т.д.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub category: Option<String>,
    pub sub: Option<String>,
    pub param: Option<String>,
    pub option: Option<String>,
}

impl Cursor {
    pub fn new(
        category: Option<String>,
        sub: Option<String>,
        param: Option<String>,
        option: Option<String>,
    ) -> Self {
        Self {
            category,
            sub,
            param,
            option,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }

    /// Непрерывный префикс заданных селекторов в виде пути
    pub fn to_path(&self) -> NodePath {
        [&self.category, &self.sub, &self.param, &self.option]
            .into_iter()
            .map_while(|s| s.clone())
            .collect()
    }

    /// Курсор, указывающий ровно на узел по пути (нижние уровни пустые)
    pub fn from_path(path: &NodePath) -> Self {
        let at = |i: usize| path.get(i).map(str::to_string);
        Self {
            category: at(0),
            sub: at(1),
            param: at(2),
            option: at(3),
        }
    }
}
