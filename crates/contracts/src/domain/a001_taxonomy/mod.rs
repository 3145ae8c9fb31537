pub mod aggregate;
pub mod cursor;
pub mod dto;

pub use aggregate::{Category, OptionItem, Parameter, SubCategory, Taxonomy};
pub use cursor::{Cursor, NodePath};
pub use dto::{CategorySeed, OptionSeed, ParameterSeed, SubCategorySeed};
