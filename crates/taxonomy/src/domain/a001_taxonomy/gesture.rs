//! Drag-and-drop reorder gesture tracking
//!
//! The UI reports two events: a drag started on a node and a drag ended over
//! a node. Both carry a `DragTag` (column level + parent path). A drop is
//! applied only when it matches an active drag with the same tag; everything
//! else is ignored and leaves the tree untouched.

use contracts::domain::a001_taxonomy::{NodePath, Taxonomy};
use contracts::enums::TreeLevel;
use serde::{Deserialize, Serialize};

use super::reorder;

/// Метка колонки и родителя перетаскиваемого элемента
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragTag {
    pub level: TreeLevel,
    pub parent: NodePath,
}

impl DragTag {
    pub fn new(level: TreeLevel, parent: NodePath) -> Self {
        Self { level, parent }
    }

    pub fn categories() -> Self {
        Self::new(TreeLevel::Category, NodePath::root())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveDrag {
    tag: DragTag,
    node_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReorderGesture {
    active: Option<ActiveDrag>,
}

impl ReorderGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Id перетаскиваемого узла
    pub fn dragged(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.node_id.as_str())
    }

    /// Начало перетаскивания; предыдущий незавершённый жест отбрасывается
    pub fn begin(&mut self, tag: DragTag, node_id: impl Into<String>) {
        let node_id = node_id.into();
        tracing::debug!("Drag started on {} '{}' under {}", tag.level, node_id, tag.parent);
        self.active = Some(ActiveDrag { tag, node_id });
    }

    /// Завершение перетаскивания над `target_id`
    ///
    /// Returns the reordered tree, or `None` when the drop is ignored. The
    /// active drag is consumed either way.
    pub fn complete(&mut self, tree: &Taxonomy, tag: &DragTag, target_id: &str) -> Option<Taxonomy> {
        let Some(active) = self.active.take() else {
            tracing::debug!("Drop over '{}' without an active drag ignored", target_id);
            return None;
        };

        if active.tag != *tag {
            tracing::debug!(
                "Drop of '{}' ({} under {}) over '{}' ({} under {}) ignored",
                active.node_id,
                active.tag.level,
                active.tag.parent,
                target_id,
                tag.level,
                tag.parent
            );
            return None;
        }

        reorder::try_reorder(tree, tag.level, &tag.parent, &active.node_id, target_id)
    }

    /// Жест прерван (отпущен вне допустимой цели)
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::debug!("Drag of '{}' cancelled", active.node_id);
        }
    }
}
