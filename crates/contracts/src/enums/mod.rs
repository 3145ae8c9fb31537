pub mod tree_level;

pub use tree_level::TreeLevel;
