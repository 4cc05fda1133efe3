pub mod types;
pub mod render;
pub mod catalog;


pub use types::*;
pub use catalog::{Catalog, LoadError, DEFAULT_CATALOG_PATH};
