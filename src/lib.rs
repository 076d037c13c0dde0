//! Deterministic faceted query engine for a catalog of software projects.
//!
//! `catalog-query` holds a read-only project catalog, a copy-on-write filter
//! state (free-text query plus multi-select campus, language and topic
//! facets), and a pure engine that derives the visible result list from the
//! two. Identical inputs always produce identical outputs, in catalog order.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod project;
pub mod query;
pub mod session;
pub mod types;
