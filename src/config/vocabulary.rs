use serde::{Deserialize, Serialize};

use crate::filter::Facet;

const UC_CAMPUSES: &[&str] = &[
    "UC Berkeley",
    "UC Davis",
    "UC Los Angeles",
    "UC San Diego",
    "UC Santa Barbara",
    "UC Santa Cruz",
];

const UC_LANGUAGES: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "TypeScript",
    "Go", "Rust", "C#", "R", "Jupyter", "PHP", "Ruby",
    "Swift", "Kotlin", "Scala", "C",
];

const UC_TOPICS: &[&str] = &[
    "Machine Learning", "Data Science", "Web Development",
    "Mobile Development", "Computer Vision", "Natural Language Processing",
    "IoT", "Robotics", "Bioinformatics", "Climate Science",
    "Education", "Health", "Security", "Database", "Visualization",
    "API", "Tools", "Libraries", "Frameworks", "Documentation",
];

const UC_DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Electrical Engineering",
    "Bioengineering",
    "Environmental Science",
    "Information Science",
    "Physics",
    "Chemistry",
    "Biology",
    "Mathematics",
    "Medical School",
    "Earth Sciences",
    "Astronomy",
];

/// The fixed option lists for each facet.
///
/// These are supplied from outside the catalog and are not derived from it,
/// so an option may have zero matching projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetVocabulary {
    pub campuses: Vec<String>,
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    /// Not a facet; the mock generator draws from it.
    pub departments: Vec<String>,
}

impl FacetVocabulary {
    pub fn uc_system() -> Self {
        Self {
            campuses: owned(UC_CAMPUSES),
            languages: owned(UC_LANGUAGES),
            topics: owned(UC_TOPICS),
            departments: owned(UC_DEPARTMENTS),
        }
    }

    pub fn domain(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Campus => &self.campuses,
            Facet::Language => &self.languages,
            Facet::Topic => &self.topics,
        }
    }
}

impl Default for FacetVocabulary {
    fn default() -> Self {
        Self::uc_system()
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
