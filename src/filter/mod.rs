pub mod facet;
pub mod state;

pub use facet::Facet;
pub use state::{FilterAction, FilterState};
