use serde::{Deserialize, Serialize};
use std::fmt;

use crate::project::ProjectRecord;

/// The filter dimensions the engine knows how to apply.
///
/// Selections are keyed by plain strings so a stale or foreign facet id can
/// sit in a filter state; [`Facet::from_id`] returns `None` for those and the
/// engine applies no predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Campus,
    Language,
    Topic,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Campus, Facet::Language, Facet::Topic];

    pub const fn id(self) -> &'static str {
        match self {
            Facet::Campus => "campus",
            Facet::Language => "language",
            Facet::Topic => "topic",
        }
    }

    /// Heading shown above the facet's option list.
    pub const fn display_name(self) -> &'static str {
        match self {
            Facet::Campus => "Campus",
            Facet::Language => "Programming Language",
            Facet::Topic => "Topic",
        }
    }

    pub fn from_id(id: &str) -> Option<Facet> {
        Facet::ALL.into_iter().find(|facet| facet.id() == id)
    }

    /// The record's values along this facet. Campus is single-valued.
    pub fn values(self, record: &ProjectRecord) -> &[String] {
        match self {
            Facet::Campus => std::slice::from_ref(&record.campus),
            Facet::Language => &record.languages,
            Facet::Topic => &record.topics,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
