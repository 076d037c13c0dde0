use catalog_query::catalog::{DetailSource, MockCatalog, MockDetailSource};
use catalog_query::config::FacetVocabulary;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[test]
fn same_seed_same_catalog() {
    let a = MockCatalog::new(FacetVocabulary::uc_system(), 99, reference()).generate(25);
    let b = MockCatalog::new(FacetVocabulary::uc_system(), 99, reference()).generate(25);
    let c = MockCatalog::new(FacetVocabulary::uc_system(), 100, reference()).generate(25);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn generated_records_respect_vocabulary_and_shape() {
    let vocab = FacetVocabulary::uc_system();
    let records = MockCatalog::new(vocab.clone(), 4, reference()).generate(50);

    assert_eq!(records.len(), 50);
    for (i, record) in records.iter().enumerate() {
        let n = i as u64 + 1;
        assert_eq!(record.id.get(), n);
        assert_eq!(record.name, format!("Project {n}"));
        assert_eq!(record.url, format!("https://github.com/uc-{n}"));
        assert!(record.validate().is_ok(), "record {n} should be well-formed");

        assert!(vocab.campuses.contains(&record.campus));
        assert!(vocab.departments.contains(&record.department));
        assert!((1..=4).contains(&record.languages.len()));
        assert!((1..=6).contains(&record.topics.len()));
        assert!(record.languages.iter().all(|l| vocab.languages.contains(l)));
        assert!(record.topics.iter().all(|t| vocab.topics.contains(t)));
        assert!(record.stars < 1000);
        assert!(record.forks < 200);

        let lead = &record.topics[0];
        assert_eq!(
            record.description,
            format!(
                "This is a description for Project {n}. It's a {lead} project developed at {}.",
                record.campus
            )
        );
        assert!(!record.has_details());
    }
}

#[test]
fn dates_fall_within_the_prior_year() {
    let records = MockCatalog::new(FacetVocabulary::uc_system(), 8, reference()).generate(40);

    for record in &records {
        let date = NaiveDate::parse_from_str(&record.last_updated, "%b %d, %Y")
            .unwrap_or_else(|e| panic!("unparseable date {:?}: {e}", record.last_updated));
        assert!(date <= reference());
        assert!(date > NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
    }
}

#[test]
fn detail_source_is_deterministic_per_project() {
    let records = MockCatalog::new(FacetVocabulary::uc_system(), 1, reference()).generate(3);
    let source = MockDetailSource { seed: 5 };

    let first = source.enrich(&records[1]);
    let again = source.enrich(&records[1]);
    assert_eq!(first, again);

    let contributors = first.contributors.unwrap();
    assert_eq!(contributors[0].name, "Contributor 1");
    assert_eq!(contributors[4].avatar, "https://i.pravatar.cc/150?u=2-5");
    assert!(first
        .readme
        .unwrap()
        .starts_with("# Project 2\n\n## Overview\n"));
}
