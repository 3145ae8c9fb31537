//! Selection cursor: reconciliation after mutations and direct selection
//!
//! `reconcile` is a repair action: a selector that no longer resolves is
//! replaced with the first child of its (still valid) parent and everything
//! below it is cleared. Direct selection is a user intent signal and drills
//! down to the first child at every level below the chosen node.

use contracts::domain::a001_taxonomy::{Cursor, NodePath, Taxonomy};
use contracts::enums::TreeLevel;

use super::error::{TaxonomyError, TaxonomyResult};
use super::store::get_by_path;

fn find<'a, T>(items: &'a [T], key: impl Fn(&T) -> &str, wanted: &str) -> Option<&'a T> {
    items.iter().find(|item| key(item) == wanted)
}

/// Первый ребёнок в списке, если он есть
fn first_key<T>(items: &[T], key: impl Fn(&T) -> &str) -> Option<String> {
    items.first().map(|item| key(item).to_string())
}

/// Восстановить курсор после изменения дерева
pub fn reconcile(tree: &Taxonomy, cursor: &Cursor) -> Cursor {
    let mut next = Cursor::default();

    let Some(selected) = cursor.category.as_deref() else {
        return next;
    };
    let Some(category) = find(&tree.categories, |c| c.slug.as_str(), selected) else {
        next.category = first_key(&tree.categories, |c| c.slug.as_str());
        return next;
    };
    next.category = Some(category.slug.clone());

    let Some(selected) = cursor.sub.as_deref() else {
        return next;
    };
    let Some(sub) = find(&category.sub_categories, |s| s.slug.as_str(), selected) else {
        next.sub = first_key(&category.sub_categories, |s| s.slug.as_str());
        return next;
    };
    next.sub = Some(sub.slug.clone());

    let Some(selected) = cursor.param.as_deref() else {
        return next;
    };
    let Some(param) = find(&sub.parameters, |p| p.slug.as_str(), selected) else {
        next.param = first_key(&sub.parameters, |p| p.slug.as_str());
        return next;
    };
    next.param = Some(param.slug.clone());

    let Some(selected) = cursor.option.as_deref() else {
        return next;
    };
    next.option = match find(&param.options, |o| o.id.as_str(), selected) {
        Some(option) => Some(option.id.clone()),
        None => first_key(&param.options, |o| o.id.as_str()),
    };
    next
}

/// Дополнить курсор первыми детьми ниже последнего выбранного уровня
pub fn drill_down(tree: &Taxonomy, cursor: &Cursor) -> Cursor {
    let mut next = reconcile(tree, cursor);

    let category = match next.category.as_deref() {
        Some(slug) => find(&tree.categories, |c| c.slug.as_str(), slug),
        None => tree.categories.first(),
    };
    let Some(category) = category else {
        return Cursor::default();
    };
    next.category = Some(category.slug.clone());

    let sub = match next.sub.as_deref() {
        Some(slug) => find(&category.sub_categories, |s| s.slug.as_str(), slug),
        None => category.sub_categories.first(),
    };
    let Some(sub) = sub else {
        return next;
    };
    next.sub = Some(sub.slug.clone());

    let param = match next.param.as_deref() {
        Some(slug) => find(&sub.parameters, |p| p.slug.as_str(), slug),
        None => sub.parameters.first(),
    };
    let Some(param) = param else {
        return next;
    };
    next.param = Some(param.slug.clone());

    if next.option.is_none() {
        next.option = first_key(&param.options, |o| o.id.as_str());
    }
    next
}

/// Начальный курсор: первый путь в дереве
pub fn first_path(tree: &Taxonomy) -> Cursor {
    drill_down(tree, &Cursor::default())
}

/// Курсор либо полностью разрешается, либо пуст начиная с уровня разрыва
pub fn is_consistent(tree: &Taxonomy, cursor: &Cursor) -> bool {
    let selectors = [&cursor.category, &cursor.sub, &cursor.param, &cursor.option];
    let set = selectors.iter().take_while(|s| s.is_some()).count();
    if selectors[set..].iter().any(|s| s.is_some()) {
        return false;
    }
    set == 0 || get_by_path(tree, &cursor.to_path()).is_some()
}

fn select_at(tree: &Taxonomy, cursor: &Cursor, level: TreeLevel, key: &str) -> TaxonomyResult<Cursor> {
    let path: NodePath = cursor
        .to_path()
        .segments()
        .iter()
        .take(level.depth())
        .cloned()
        .collect::<NodePath>()
        .child(key);

    if path.depth() != level.depth() + 1 || get_by_path(tree, &path).is_none() {
        return Err(TaxonomyError::NotFound(path));
    }
    Ok(drill_down(tree, &Cursor::from_path(&path)))
}

pub fn select_category(tree: &Taxonomy, slug: &str) -> TaxonomyResult<Cursor> {
    select_at(tree, &Cursor::default(), TreeLevel::Category, slug)
}

pub fn select_sub(tree: &Taxonomy, cursor: &Cursor, slug: &str) -> TaxonomyResult<Cursor> {
    select_at(tree, cursor, TreeLevel::SubCategory, slug)
}

pub fn select_param(tree: &Taxonomy, cursor: &Cursor, slug: &str) -> TaxonomyResult<Cursor> {
    select_at(tree, cursor, TreeLevel::Parameter, slug)
}

pub fn select_option(tree: &Taxonomy, cursor: &Cursor, id: &str) -> TaxonomyResult<Cursor> {
    select_at(tree, cursor, TreeLevel::Option, id)
}
