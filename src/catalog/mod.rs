pub mod mock;
pub mod store;

pub use mock::{MockCatalog, MockDetailSource};
pub use store::{CatalogError, CatalogStore, DetailSource, LoadReport};
