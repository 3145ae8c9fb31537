pub mod cursor;
pub mod error;
pub mod gesture;
pub mod id_gen;
pub mod reorder;
pub mod search;
pub mod service;
pub mod session;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{TaxonomyError, TaxonomyResult};
pub use gesture::{DragTag, ReorderGesture};
pub use search::{find_first_match, SearchHit, SearchIndex};
pub use session::{Command, CommandOutcome, EditingSession, SessionSettings};
pub use store::{get_by_path, initialize, NodeRef, TaxonomyStats};
