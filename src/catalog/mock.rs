//! Deterministic stand-in for a remote catalog.
//!
//! Every pseudo-random choice is drawn from a SHA-256 stream keyed by a seed,
//! so the same seed and reference date always yield the same catalog.

use chrono::{Months, NaiveDate, Utc};
use sha2::{Digest, Sha256};

use crate::catalog::store::{CatalogError, CatalogStore, DetailSource};
use crate::config::FacetVocabulary;
use crate::project::{Contributor, ProjectRecord};
use crate::types::identifiers::ProjectId;

const LICENSES: [&str; 3] = ["MIT", "Apache-2.0", "GPL-3.0"];
const CONTRIBUTORS_PER_PROJECT: usize = 5;

struct DigestStream {
    seed: u64,
    counter: u64,
}

impl DigestStream {
    fn new(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.seed.to_be_bytes());
        hasher.update(self.counter.to_be_bytes());
        self.counter += 1;

        let digest = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }

    /// Uniform-enough index in `0..n`; 0 when `n` is 0.
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        (self.next_u64() % n as u64) as usize
    }

    /// Between `min` and `max` distinct items, in shuffled order.
    fn pick_distinct(&mut self, items: &[String], min: usize, max: usize) -> Vec<String> {
        let wanted = (min + self.below(max - min + 1)).min(items.len());
        let mut pool: Vec<usize> = (0..items.len()).collect();
        // Partial Fisher-Yates over the front `wanted` slots
        for slot in 0..wanted {
            let swap = slot + self.below(pool.len() - slot);
            pool.swap(slot, swap);
        }
        pool[..wanted].iter().map(|&i| items[i].clone()).collect()
    }
}

pub struct MockCatalog {
    vocabulary: FacetVocabulary,
    seed: u64,
    reference_date: NaiveDate,
}

impl MockCatalog {
    pub fn new(vocabulary: FacetVocabulary, seed: u64, reference_date: NaiveDate) -> Self {
        Self {
            vocabulary,
            seed,
            reference_date,
        }
    }

    /// Dates are spread over the twelve months before today (UTC).
    pub fn as_of_today(vocabulary: FacetVocabulary, seed: u64) -> Self {
        Self::new(vocabulary, seed, Utc::now().date_naive())
    }

    /// Projects `1..=count`, in id order.
    pub fn generate(&self, count: usize) -> Vec<ProjectRecord> {
        let mut stream = DigestStream::new(self.seed);
        let vocab = &self.vocabulary;

        (1..=count as u64)
            .map(|i| {
                let campus = pick_one(&mut stream, &vocab.campuses);
                let languages = stream.pick_distinct(&vocab.languages, 1, 4);
                let topics = stream.pick_distinct(&vocab.topics, 1, 6);
                let department = pick_one(&mut stream, &vocab.departments);
                let lead_topic = topics.first().cloned().unwrap_or_default();

                ProjectRecord {
                    id: ProjectId::new(i),
                    name: format!("Project {i}"),
                    description: format!(
                        "This is a description for Project {i}. It's a {lead_topic} project developed at {campus}."
                    ),
                    campus,
                    department,
                    languages,
                    topics,
                    stars: stream.below(1000) as u32,
                    forks: stream.below(200) as u32,
                    last_updated: self.date_within_year(&mut stream),
                    url: format!("https://github.com/uc-{i}"),
                    readme: None,
                    contributors: None,
                    license: None,
                }
            })
            .collect()
    }

    pub fn store(&self, count: usize) -> Result<CatalogStore, CatalogError> {
        CatalogStore::new(self.generate(count))
    }

    fn date_within_year(&self, stream: &mut DigestStream) -> String {
        let months_ago = stream.below(12) as u32;
        let date = self
            .reference_date
            .checked_sub_months(Months::new(months_ago))
            .unwrap_or(self.reference_date);
        date.format("%b %-d, %Y").to_string()
    }
}

fn pick_one(stream: &mut DigestStream, items: &[String]) -> String {
    items.get(stream.below(items.len())).cloned().unwrap_or_default()
}

/// Fills readme, contributors and license the way the demo backend did.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDetailSource {
    pub seed: u64,
}

impl DetailSource for MockDetailSource {
    fn enrich(&self, record: &ProjectRecord) -> ProjectRecord {
        let mut stream = DigestStream::new(self.seed ^ record.id.get());
        let slug = record
            .name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        let readme = format!(
            "# {name}\n\n## Overview\nThis is a detailed readme for {name}. This project is developed at {campus} by the {department} department.\n\n## Features\n- Feature 1\n- Feature 2\n- Feature 3\n\n## Installation\n```bash\nnpm install {slug}\n```\n\n## Usage\n```javascript\nimport {{ exampleFunction }} from '{slug}';\n\nexampleFunction();\n```\n\n## Contributing\nContributions are welcome!",
            name = record.name,
            campus = record.campus,
            department = record.department,
        );

        let contributors = (1..=CONTRIBUTORS_PER_PROJECT)
            .map(|n| Contributor {
                name: format!("Contributor {n}"),
                avatar: format!("https://i.pravatar.cc/150?u={}-{n}", record.id),
            })
            .collect();

        ProjectRecord {
            readme: Some(readme),
            contributors: Some(contributors),
            license: Some(LICENSES[stream.below(LICENSES.len())].to_string()),
            ..record.clone()
        }
    }
}
