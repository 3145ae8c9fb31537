use crate::domain::a001_taxonomy::TaxonomyStats;

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use taxonomy::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Сводка по дереву для логов
pub fn format_stats(stats: &TaxonomyStats) -> String {
    format!(
        "{} categories | {} sub-categories | {} parameters | {} options ({} nodes)",
        format_number(stats.categories),
        format_number(stats.sub_categories),
        format_number(stats.parameters),
        format_number(stats.options),
        format_number(stats.total())
    )
}
