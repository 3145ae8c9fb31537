//! Editing session: the single owner of the current tree and cursor
//!
//! The UI layer sends `Command`s; the session applies them one at a time,
//! reconciles the cursor after every tree change and keeps a lazily built
//! search index that is dropped whenever the tree changes.

use contracts::domain::a001_taxonomy::{CategorySeed, Cursor, NodePath, Taxonomy};
use contracts::shared::slug::slugify;
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cursor;
use super::error::TaxonomyResult;
use super::gesture::{DragTag, ReorderGesture};
use super::search::{SearchHit, SearchIndex};
use super::service;
use super::store::{self, TaxonomyStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    pub max_search_results: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            max_search_results: 50,
        }
    }
}

/// Команды редактора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    AddCategory { name: String },
    AddSubCategory { category: String, name: String },
    AddParameter { category: String, sub: String, name: String },
    AddOption { category: String, sub: String, param: String, value: String },

    RenameCategory { category: String, name: String },
    RenameSubCategory { category: String, sub: String, name: String },
    RenameParameter { category: String, sub: String, param: String, name: String },
    EditOption { category: String, sub: String, param: String, option: String, value: String },

    DeleteCategory { category: String },
    DeleteSubCategory { category: String, sub: String },
    DeleteParameter { category: String, sub: String, param: String },
    DeleteOption { category: String, sub: String, param: String, option: String },

    SelectCategory { category: String },
    SelectSub { sub: String },
    SelectParam { param: String },
    SelectOption { option: String },

    BeginDrag { tag: DragTag, node: String },
    CompleteDrag { tag: DragTag, target: String },
    CancelDrag,

    /// Перейти к первому совпадению
    Search { query: String },
}

/// Результат применения команды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandOutcome {
    TreeUpdated,
    SelectionChanged,
    DragStarted,
    /// Жест без эффекта: дерево и курсор не изменились
    Ignored,
    NoMatch,
}

#[derive(Debug)]
pub struct EditingSession {
    id: Uuid,
    tree: Taxonomy,
    cursor: Cursor,
    gesture: ReorderGesture,
    index: OnceCell<SearchIndex>,
    settings: SessionSettings,
}

impl EditingSession {
    /// Новая сессия из seed-данных; курсор указывает на первый путь
    pub fn new(seed: Vec<CategorySeed>, settings: SessionSettings) -> Self {
        Self::from_tree(store::initialize(seed), settings)
    }

    pub fn from_tree(tree: Taxonomy, settings: SessionSettings) -> Self {
        let cursor = cursor::first_path(&tree);
        let session = Self {
            id: Uuid::new_v4(),
            tree,
            cursor,
            gesture: ReorderGesture::new(),
            index: OnceCell::new(),
            settings,
        };
        tracing::info!(
            session = %session.id,
            categories = session.tree.categories.len(),
            "Taxonomy session started"
        );
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn tree(&self) -> &Taxonomy {
        &self.tree
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }

    /// Копия текущего дерева для внешнего хранилища
    pub fn snapshot(&self) -> Taxonomy {
        self.tree.clone()
    }

    pub fn stats(&self) -> TaxonomyStats {
        store::stats(&self.tree)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.tree)
    }

    fn index(&self) -> &SearchIndex {
        self.index.get_or_init(|| {
            tracing::debug!(session = %self.id, "Rebuilding search index");
            SearchIndex::build(&self.tree)
        })
    }

    /// Все совпадения (ограничено настройками сессии)
    pub fn search_all(&self, query: &str) -> Vec<SearchHit> {
        self.index().find_all(query, self.settings.max_search_results)
    }

    fn replace_tree(&mut self, tree: Taxonomy) -> CommandOutcome {
        self.tree = tree;
        self.cursor = cursor::reconcile(&self.tree, &self.cursor);
        self.index = OnceCell::new();
        debug_assert!(cursor::is_consistent(&self.tree, &self.cursor));
        CommandOutcome::TreeUpdated
    }

    fn set_cursor(&mut self, cursor: Cursor) -> CommandOutcome {
        self.cursor = cursor;
        CommandOutcome::SelectionChanged
    }

    /// Применить команду; при ошибке дерево и курсор не меняются
    pub fn apply(&mut self, command: Command) -> TaxonomyResult<CommandOutcome> {
        let span = tracing::debug_span!("taxonomy_session", id = %self.id);
        let _guard = span.enter();
        tracing::debug!(?command, "Applying command");

        let outcome = match command {
            Command::AddCategory { name } => {
                let tree = service::add_category(&self.tree, &name)?;
                self.replace_tree(tree)
            }
            Command::AddSubCategory { category, name } => {
                let tree = service::add_sub_category(&self.tree, &category, &name)?;
                self.replace_tree(tree)
            }
            Command::AddParameter { category, sub, name } => {
                let tree = service::add_parameter(&self.tree, &category, &sub, &name)?;
                self.replace_tree(tree)
            }
            Command::AddOption {
                category,
                sub,
                param,
                value,
            } => {
                let tree = service::add_option(&self.tree, &category, &sub, &param, &value)?;
                self.replace_tree(tree)
            }

            Command::RenameCategory { category, name } => {
                let tree = service::rename_category(&self.tree, &category, &name)?;
                self.follow_rename(tree, NodePath::new([category]), &name)
            }
            Command::RenameSubCategory {
                category,
                sub,
                name,
            } => {
                let tree = service::rename_sub_category(&self.tree, &category, &sub, &name)?;
                self.follow_rename(tree, NodePath::new([category, sub]), &name)
            }
            Command::RenameParameter {
                category,
                sub,
                param,
                name,
            } => {
                let tree = service::rename_parameter(&self.tree, &category, &sub, &param, &name)?;
                self.follow_rename(tree, NodePath::new([category, sub, param]), &name)
            }
            Command::EditOption {
                category,
                sub,
                param,
                option,
                value,
            } => {
                let tree =
                    service::edit_option(&self.tree, &category, &sub, &param, &option, &value)?;
                self.replace_tree(tree)
            }

            Command::DeleteCategory { category } => {
                let tree = service::delete_category(&self.tree, &category)?;
                self.replace_tree(tree)
            }
            Command::DeleteSubCategory { category, sub } => {
                let tree = service::delete_sub_category(&self.tree, &category, &sub)?;
                self.replace_tree(tree)
            }
            Command::DeleteParameter {
                category,
                sub,
                param,
            } => {
                let tree = service::delete_parameter(&self.tree, &category, &sub, &param)?;
                self.replace_tree(tree)
            }
            Command::DeleteOption {
                category,
                sub,
                param,
                option,
            } => {
                let tree = service::delete_option(&self.tree, &category, &sub, &param, &option)?;
                self.replace_tree(tree)
            }

            Command::SelectCategory { category } => {
                let next = cursor::select_category(&self.tree, &category)?;
                self.set_cursor(next)
            }
            Command::SelectSub { sub } => {
                let next = cursor::select_sub(&self.tree, &self.cursor, &sub)?;
                self.set_cursor(next)
            }
            Command::SelectParam { param } => {
                let next = cursor::select_param(&self.tree, &self.cursor, &param)?;
                self.set_cursor(next)
            }
            Command::SelectOption { option } => {
                let next = cursor::select_option(&self.tree, &self.cursor, &option)?;
                self.set_cursor(next)
            }

            Command::BeginDrag { tag, node } => {
                self.gesture.begin(tag, node);
                CommandOutcome::DragStarted
            }
            Command::CompleteDrag { tag, target } => {
                let reordered = self.gesture.complete(&self.tree, &tag, &target);
                match reordered {
                    Some(tree) => self.replace_tree(tree),
                    None => CommandOutcome::Ignored,
                }
            }
            Command::CancelDrag => {
                self.gesture.cancel();
                CommandOutcome::Ignored
            }

            Command::Search { query } => {
                let found = self.index().find_first(&query);
                match found {
                    Some(hit) => {
                        let next = cursor::drill_down(&self.tree, &hit);
                        self.set_cursor(next)
                    }
                    None => CommandOutcome::NoMatch,
                }
            }
        };

        tracing::debug!(?outcome, cursor = ?self.cursor, "Command applied");
        Ok(outcome)
    }

    /// После переименования выбранного узла курсор следует за новым slug
    fn follow_rename(&mut self, tree: Taxonomy, renamed: NodePath, new_name: &str) -> CommandOutcome {
        let selected = self.cursor.to_path();
        if selected.segments().starts_with(renamed.segments()) {
            let slug = Some(slugify(new_name.trim()));
            match renamed.depth() {
                1 => self.cursor.category = slug,
                2 => self.cursor.sub = slug,
                3 => self.cursor.param = slug,
                _ => {}
            }
        }
        self.replace_tree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_taxonomy::error::TaxonomyError;
    use crate::domain::a001_taxonomy::test_support::{marketplace_tree, scenario_seed};
    use contracts::enums::TreeLevel;

    fn session() -> EditingSession {
        EditingSession::from_tree(marketplace_tree(), SessionSettings::default())
    }

    #[test]
    fn test_new_session_starts_on_first_path() {
        let session = EditingSession::new(scenario_seed(), SessionSettings::default());
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["electronics", "mobile-phones", "brand", "opt-samsung"])
        );
        assert_eq!(session.stats().options, 2);
    }

    #[test]
    fn test_delete_selected_sub_repairs_cursor() {
        let mut session = session();
        let outcome = session
            .apply(Command::DeleteSubCategory {
                category: "electronics".into(),
                sub: "mobile-phones".into(),
            })
            .unwrap();

        assert_eq!(outcome, CommandOutcome::TreeUpdated);
        assert_eq!(
            session.cursor(),
            &Cursor::new(Some("electronics".into()), Some("laptops".into()), None, None)
        );
    }

    #[test]
    fn test_failed_command_leaves_state_untouched() {
        let mut session = session();
        let before_tree = session.snapshot();
        let before_cursor = session.cursor().clone();

        let result = session.apply(Command::AddParameter {
            category: "electronics".into(),
            sub: "tablets".into(),
            name: "Brand".into(),
        });
        assert_eq!(
            result,
            Err(TaxonomyError::NotFound(NodePath::new(["electronics", "tablets"])))
        );
        assert_eq!(session.tree(), &before_tree);
        assert_eq!(session.cursor(), &before_cursor);
    }

    #[test]
    fn test_drag_gesture_through_commands() {
        let mut session = session();
        let tag = DragTag::new(TreeLevel::Category, NodePath::root());

        // drop without a drag
        let outcome = session
            .apply(Command::CompleteDrag {
                tag: tag.clone(),
                target: "electronics".into(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Ignored);

        session
            .apply(Command::BeginDrag {
                tag: tag.clone(),
                node: "property".into(),
            })
            .unwrap();
        assert!(session.is_dragging());

        let outcome = session
            .apply(Command::CompleteDrag {
                tag,
                target: "electronics".into(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::TreeUpdated);
        assert_eq!(session.tree().categories[0].slug, "property");
        // reorder does not move the selection
        assert_eq!(session.cursor().category.as_deref(), Some("electronics"));
    }

    #[test]
    fn test_cancelled_drag_changes_nothing() {
        let mut session = session();
        let before = session.snapshot();
        let tag = DragTag::categories();

        session
            .apply(Command::BeginDrag {
                tag: tag.clone(),
                node: "vehicles".into(),
            })
            .unwrap();
        session.apply(Command::CancelDrag).unwrap();
        let outcome = session
            .apply(Command::CompleteDrag {
                tag,
                target: "electronics".into(),
            })
            .unwrap();

        assert_eq!(outcome, CommandOutcome::Ignored);
        assert_eq!(session.tree(), &before);
    }

    #[test]
    fn test_search_jumps_and_index_refreshes() {
        let mut session = session();

        let outcome = session
            .apply(Command::Search {
                query: "diesel".into(),
            })
            .unwrap();
        assert_eq!(outcome, CommandOutcome::SelectionChanged);
        assert_eq!(session.cursor().option.as_deref(), Some("car-diesel"));

        assert_eq!(
            session
                .apply(Command::Search {
                    query: "hybrid".into()
                })
                .unwrap(),
            CommandOutcome::NoMatch
        );

        session
            .apply(Command::AddOption {
                category: "vehicles".into(),
                sub: "cars".into(),
                param: "fuel-type".into(),
                value: "Hybrid".into(),
            })
            .unwrap();
        session
            .apply(Command::Search {
                query: "hybrid".into(),
            })
            .unwrap();
        let option = session.cursor().option.clone().unwrap();
        assert!(option.starts_with("vehicles-cars-fuel-type-hybrid-"));
    }

    #[test]
    fn test_search_on_category_drills_down() {
        let mut session = session();
        session
            .apply(Command::Search {
                query: "vehic".into(),
            })
            .unwrap();
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["vehicles", "cars", "fuel-type", "car-petrol"])
        );
    }

    #[test]
    fn test_rename_selected_category_keeps_selection() {
        let mut session = session();
        session
            .apply(Command::RenameCategory {
                category: "electronics".into(),
                name: "Consumer Electronics".into(),
            })
            .unwrap();
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["consumer-electronics", "mobile-phones", "brand", "mp-samsung"])
        );
    }

    #[test]
    fn test_rename_selected_sub_and_param_keeps_selection() {
        let mut session = session();
        session
            .apply(Command::RenameSubCategory {
                category: "electronics".into(),
                sub: "mobile-phones".into(),
                name: "Smartphones".into(),
            })
            .unwrap();
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["electronics", "smartphones", "brand", "mp-samsung"])
        );

        session
            .apply(Command::RenameParameter {
                category: "electronics".into(),
                sub: "smartphones".into(),
                param: "brand".into(),
                name: "Manufacturer".into(),
            })
            .unwrap();
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["electronics", "smartphones", "manufacturer", "mp-samsung"])
        );
    }

    #[test]
    fn test_rename_unselected_sibling_leaves_selection() {
        let mut session = session();
        session
            .apply(Command::RenameSubCategory {
                category: "electronics".into(),
                sub: "laptops".into(),
                name: "Notebooks".into(),
            })
            .unwrap();
        assert_eq!(
            session.cursor().to_path(),
            NodePath::new(["electronics", "mobile-phones", "brand", "mp-samsung"])
        );
        assert!(session.tree().category("electronics").unwrap().sub_category("notebooks").is_some());
    }

    #[test]
    fn test_search_all_uses_limit() {
        let session = EditingSession::from_tree(
            marketplace_tree(),
            SessionSettings {
                max_search_results: 2,
            },
        );
        assert_eq!(session.search_all("a").len(), 2);
    }

    #[test]
    fn test_command_json_shape() {
        let command: Command = serde_json::from_str(
            r#"{ "type": "addSubCategory", "category": "electronics", "name": "Tablets" }"#,
        )
        .unwrap();
        assert_eq!(
            command,
            Command::AddSubCategory {
                category: "electronics".into(),
                name: "Tablets".into()
            }
        );
    }
}
