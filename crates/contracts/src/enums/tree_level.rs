use serde::{Deserialize, Serialize};

/// Уровни дерева таксономии (колонки редактора)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TreeLevel {
    Category,
    SubCategory,
    Parameter,
    Option,
}

impl TreeLevel {
    /// Получить код уровня
    pub fn code(&self) -> &'static str {
        match self {
            TreeLevel::Category => "category",
            TreeLevel::SubCategory => "sub",
            TreeLevel::Parameter => "param",
            TreeLevel::Option => "option",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            TreeLevel::Category => "Category",
            TreeLevel::SubCategory => "Sub-category",
            TreeLevel::Parameter => "Parameter",
            TreeLevel::Option => "Option",
        }
    }

    /// Глубина уровня = длина пути к родителю (0 для категорий)
    pub fn depth(&self) -> usize {
        match self {
            TreeLevel::Category => 0,
            TreeLevel::SubCategory => 1,
            TreeLevel::Parameter => 2,
            TreeLevel::Option => 3,
        }
    }

    /// Уровень по глубине пути
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(TreeLevel::Category),
            1 => Some(TreeLevel::SubCategory),
            2 => Some(TreeLevel::Parameter),
            3 => Some(TreeLevel::Option),
            _ => None,
        }
    }

    /// Дочерний уровень (у опций детей нет)
    pub fn child(&self) -> Option<Self> {
        Self::from_depth(self.depth() + 1)
    }

    /// Все уровни в порядке обхода
    pub fn all() -> Vec<TreeLevel> {
        vec![
            TreeLevel::Category,
            TreeLevel::SubCategory,
            TreeLevel::Parameter,
            TreeLevel::Option,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "category" => Some(TreeLevel::Category),
            "sub" => Some(TreeLevel::SubCategory),
            "param" => Some(TreeLevel::Parameter),
            "option" => Some(TreeLevel::Option),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
