//! Mutation API: add, rename/edit and delete for each of the four levels
//!
//! Every operation takes the current tree and returns a new one; the input is
//! never modified. A path that does not resolve yields `TaxonomyError::NotFound`
//! carrying the path down to the first segment that is missing, whatever the
//! operation (for adds the addressed path is the parent). Duplicate names are
//! allowed.

use contracts::domain::a001_taxonomy::{
    Category, NodePath, OptionItem, Parameter, SubCategory, Taxonomy,
};
use contracts::shared::slug::slugify;

use super::error::{TaxonomyError, TaxonomyResult};
use super::id_gen;

// ============================================================================
// Validation
// ============================================================================

/// Имя узла: обрезается, не может быть пустым и должно давать непустой slug
fn validate_name(name: &str, what: &str) -> TaxonomyResult<(String, String)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaxonomyError::Validation(format!(
            "{} name cannot be empty",
            what
        )));
    }

    let slug = slugify(name);
    if slug.is_empty() {
        return Err(TaxonomyError::Validation(format!(
            "{} name '{}' has no letters or digits",
            what, name
        )));
    }

    Ok((name.to_string(), slug))
}

fn validate_value(value: &str) -> TaxonomyResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(TaxonomyError::Validation(
            "Option value cannot be empty".into(),
        ));
    }
    Ok(value.to_string())
}

// ============================================================================
// Resolution helpers
// ============================================================================

/// Путь до первого отсутствующего сегмента
fn missing(path: &NodePath, depth: usize) -> TaxonomyError {
    TaxonomyError::NotFound(path.segments().iter().take(depth).cloned().collect())
}

fn category_mut<'a>(tree: &'a mut Taxonomy, path: &NodePath) -> TaxonomyResult<&'a mut Category> {
    let slug = path.get(0).unwrap_or_default();
    tree.category_mut(slug).ok_or_else(|| missing(path, 1))
}

fn sub_category_mut<'a>(
    tree: &'a mut Taxonomy,
    path: &NodePath,
) -> TaxonomyResult<&'a mut SubCategory> {
    let slug = path.get(1).unwrap_or_default();
    category_mut(tree, path)?
        .sub_category_mut(slug)
        .ok_or_else(|| missing(path, 2))
}

fn parameter_mut<'a>(tree: &'a mut Taxonomy, path: &NodePath) -> TaxonomyResult<&'a mut Parameter> {
    let slug = path.get(2).unwrap_or_default();
    sub_category_mut(tree, path)?
        .parameter_mut(slug)
        .ok_or_else(|| missing(path, 3))
}

/// Удалить первый элемент с заданным ключом
fn remove_first<T>(items: &mut Vec<T>, key: impl Fn(&T) -> &str, wanted: &str) -> bool {
    match items.iter().position(|item| key(item) == wanted) {
        Some(index) => {
            items.remove(index);
            true
        }
        None => false,
    }
}

// ============================================================================
// Add
// ============================================================================

/// Добавить категорию в конец списка (коллизия slug не проверяется)
pub fn add_category(tree: &Taxonomy, name: &str) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(name, "Category")?;
    let mut next = tree.clone();
    next.categories.push(Category::new(name, slug));
    Ok(next)
}

pub fn add_sub_category(
    tree: &Taxonomy,
    category_slug: &str,
    name: &str,
) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(name, "Sub-category")?;
    let mut next = tree.clone();
    category_mut(&mut next, &NodePath::new([category_slug]))?
        .sub_categories
        .push(SubCategory::new(name, slug));
    Ok(next)
}

pub fn add_parameter(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    name: &str,
) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(name, "Parameter")?;
    let mut next = tree.clone();
    sub_category_mut(&mut next, &NodePath::new([category_slug, sub_slug]))?
        .parameters
        .push(Parameter::new(name, slug));
    Ok(next)
}

/// Добавить опцию; id генерируется из пути, значения и времени создания
pub fn add_option(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    param_slug: &str,
    value: &str,
) -> TaxonomyResult<Taxonomy> {
    let value = validate_value(value)?;
    let mut next = tree.clone();
    let param = parameter_mut(
        &mut next,
        &NodePath::new([category_slug, sub_slug, param_slug]),
    )?;
    let id = id_gen::option_id(category_slug, sub_slug, param_slug, &value);
    param.options.push(OptionItem::new(id, value));
    Ok(next)
}

// ============================================================================
// Rename / edit
// ============================================================================

/// Переименовать категорию: slug пересчитывается, потомки не меняются
pub fn rename_category(
    tree: &Taxonomy,
    category_slug: &str,
    new_name: &str,
) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(new_name, "Category")?;
    let mut next = tree.clone();
    let category = category_mut(&mut next, &NodePath::new([category_slug]))?;
    category.name = name;
    category.slug = slug;
    Ok(next)
}

pub fn rename_sub_category(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    new_name: &str,
) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(new_name, "Sub-category")?;
    let mut next = tree.clone();
    let sub = sub_category_mut(&mut next, &NodePath::new([category_slug, sub_slug]))?;
    sub.name = name;
    sub.slug = slug;
    Ok(next)
}

pub fn rename_parameter(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    param_slug: &str,
    new_name: &str,
) -> TaxonomyResult<Taxonomy> {
    let (name, slug) = validate_name(new_name, "Parameter")?;
    let mut next = tree.clone();
    let param = parameter_mut(
        &mut next,
        &NodePath::new([category_slug, sub_slug, param_slug]),
    )?;
    param.name = name;
    param.slug = slug;
    Ok(next)
}

/// Изменить значение опции; id остаётся прежним
pub fn edit_option(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    param_slug: &str,
    option_id: &str,
    new_value: &str,
) -> TaxonomyResult<Taxonomy> {
    let value = validate_value(new_value)?;
    let mut next = tree.clone();
    let path = NodePath::new([category_slug, sub_slug, param_slug, option_id]);
    parameter_mut(&mut next, &path)?
        .option_mut(option_id)
        .ok_or_else(|| TaxonomyError::NotFound(path.clone()))?
        .value = value;
    Ok(next)
}

// ============================================================================
// Delete (cascading)
// ============================================================================

pub fn delete_category(tree: &Taxonomy, category_slug: &str) -> TaxonomyResult<Taxonomy> {
    let mut next = tree.clone();
    if !remove_first(&mut next.categories, |c| c.slug.as_str(), category_slug) {
        return Err(TaxonomyError::NotFound(NodePath::new([category_slug])));
    }
    Ok(next)
}

pub fn delete_sub_category(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
) -> TaxonomyResult<Taxonomy> {
    let mut next = tree.clone();
    let path = NodePath::new([category_slug, sub_slug]);
    let category = category_mut(&mut next, &path)?;
    if !remove_first(&mut category.sub_categories, |s| s.slug.as_str(), sub_slug) {
        return Err(TaxonomyError::NotFound(path));
    }
    Ok(next)
}

pub fn delete_parameter(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    param_slug: &str,
) -> TaxonomyResult<Taxonomy> {
    let mut next = tree.clone();
    let path = NodePath::new([category_slug, sub_slug, param_slug]);
    let sub = sub_category_mut(&mut next, &path)?;
    if !remove_first(&mut sub.parameters, |p| p.slug.as_str(), param_slug) {
        return Err(TaxonomyError::NotFound(path));
    }
    Ok(next)
}

pub fn delete_option(
    tree: &Taxonomy,
    category_slug: &str,
    sub_slug: &str,
    param_slug: &str,
    option_id: &str,
) -> TaxonomyResult<Taxonomy> {
    let mut next = tree.clone();
    let path = NodePath::new([category_slug, sub_slug, param_slug, option_id]);
    let param = parameter_mut(&mut next, &path)?;
    if !remove_first(&mut param.options, |o| o.id.as_str(), option_id) {
        return Err(TaxonomyError::NotFound(path));
    }
    Ok(next)
}
