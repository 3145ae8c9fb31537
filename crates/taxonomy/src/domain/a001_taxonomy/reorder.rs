//! Reorder engine: array-move of one sibling onto another sibling's slot
//!
//! A reorder is scoped to one level and one parent. Anything that cannot be
//! applied (unknown endpoints, a parent path of the wrong depth, fewer than
//! two siblings, `from == to`) is a no-op and returns the tree unchanged.

use contracts::domain::a001_taxonomy::{NodePath, Taxonomy};
use contracts::enums::TreeLevel;

/// Переместить элемент с позиции `from` на позицию `to` со сдвигом соседей
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

fn move_by_key<T>(items: &mut Vec<T>, key: impl Fn(&T) -> &str, from_id: &str, to_id: &str) -> bool {
    if items.len() < 2 {
        return false;
    }
    let from = items.iter().position(|item| key(item) == from_id);
    let to = items.iter().position(|item| key(item) == to_id);
    match (from, to) {
        (Some(from), Some(to)) => move_item(items, from, to),
        _ => false,
    }
}

/// Переупорядочить соседей; `None`, если перестановка не применима
pub fn try_reorder(
    tree: &Taxonomy,
    level: TreeLevel,
    parent: &NodePath,
    from_id: &str,
    to_id: &str,
) -> Option<Taxonomy> {
    if from_id == to_id || parent.depth() != level.depth() {
        return None;
    }

    let mut next = tree.clone();
    let moved = match level {
        TreeLevel::Category => move_by_key(&mut next.categories, |c| c.slug.as_str(), from_id, to_id),
        TreeLevel::SubCategory => {
            let category = next.category_mut(parent.get(0)?)?;
            move_by_key(&mut category.sub_categories, |s| s.slug.as_str(), from_id, to_id)
        }
        TreeLevel::Parameter => {
            let sub = next
                .category_mut(parent.get(0)?)?
                .sub_category_mut(parent.get(1)?)?;
            move_by_key(&mut sub.parameters, |p| p.slug.as_str(), from_id, to_id)
        }
        TreeLevel::Option => {
            let param = next
                .category_mut(parent.get(0)?)?
                .sub_category_mut(parent.get(1)?)?
                .parameter_mut(parent.get(2)?)?;
            move_by_key(&mut param.options, |o| o.id.as_str(), from_id, to_id)
        }
    };

    if !moved {
        return None;
    }
    tracing::debug!(
        "Reordered {} '{}' onto '{}' under {}",
        level,
        from_id,
        to_id,
        parent
    );
    Some(next)
}

/// Переупорядочить соседей; при невозможности дерево возвращается как есть
pub fn reorder(
    tree: &Taxonomy,
    level: TreeLevel,
    parent: &NodePath,
    from_id: &str,
    to_id: &str,
) -> Taxonomy {
    try_reorder(tree, level, parent, from_id, to_id).unwrap_or_else(|| tree.clone())
}
