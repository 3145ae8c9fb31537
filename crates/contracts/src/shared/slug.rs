//! Slug generation for taxonomy node names

/// Построить slug из отображаемого имени
///
/// Lowercase, every run of non-alphanumeric characters becomes a single
/// `-`, leading and trailing hyphens are trimmed.
///
/// # Примеры
/// ```
/// use contracts::shared::slug::slugify;
/// assert_eq!(slugify("Mobile Phones"), "mobile-phones");
/// assert_eq!(slugify("  TVs & Audio!! "), "tvs-audio");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Проверка, что строка уже является корректным slug
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && slugify(value) == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Electronics"), "electronics");
        assert_eq!(slugify("Mobile Phones"), "mobile-phones");
        assert_eq!(slugify("Consumer Electronics"), "consumer-electronics");
    }

    #[test]
    fn test_slugify_collapses_and_trims() {
        assert_eq!(slugify("--Cars,  Vans & Trucks--"), "cars-vans-trucks");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("RAM (GB)"), "ram-gb");
    }

    #[test]
    fn test_slugify_keeps_unicode_letters() {
        assert_eq!(slugify("Électroménager"), "électroménager");
        assert_eq!(slugify("Дом и сад"), "дом-и-сад");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for name in ["Mobile Phones", "  a--b  ", "Hi-Fi / Audio", "x", "4K TVs"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
        assert!(is_valid_slug("mobile-phones"));
        assert!(!is_valid_slug("Mobile Phones"));
        assert!(!is_valid_slug(""));
    }
}
