use catalog_query::catalog::CatalogStore;
use catalog_query::filter::FilterState;
use catalog_query::project::{Contributor, ProjectId, ProjectRecord};
use catalog_query::query::{FacetOption, QueryEngine};
use catalog_query::types::QueryResult;

fn make_record(id: u64) -> ProjectRecord {
    ProjectRecord {
        id: ProjectId::new(id),
        name: "Reef Watch".to_string(),
        description: "Coral bleaching monitor".to_string(),
        campus: "UC San Diego".to_string(),
        department: "Earth Sciences".to_string(),
        languages: vec!["Python".to_string(), "R".to_string()],
        topics: vec!["Climate Science".to_string()],
        stars: 412,
        forks: 37,
        last_updated: "Mar 4, 2025".to_string(),
        url: "https://github.com/uc-7".to_string(),
        readme: None,
        contributors: None,
        license: None,
    }
}

fn normalize(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_project_record_serialization() {
    let json_str = serde_json::to_string_pretty(&make_record(7)).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "id": 7,
      "name": "Reef Watch",
      "description": "Coral bleaching monitor",
      "campus": "UC San Diego",
      "department": "Earth Sciences",
      "languages": ["Python", "R"],
      "topics": ["Climate Science"],
      "stars": 412,
      "forks": 37,
      "lastUpdated": "Mar 4, 2025",
      "url": "https://github.com/uc-7"
    }"#;

    assert_eq!(normalize(&json_str), normalize(EXPECTED_JSON), "record JSON mismatch");
}

#[test]
fn golden_detail_fields_serialize_when_present() {
    let mut record = make_record(7);
    record.license = Some("MIT".to_string());
    record.contributors = Some(vec![Contributor {
        name: "Contributor 1".to_string(),
        avatar: "https://i.pravatar.cc/150?u=7-1".to_string(),
    }]);

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["license"], "MIT");
    assert_eq!(value["contributors"][0]["name"], "Contributor 1");
    assert!(value.get("readme").is_none());

    let back: ProjectRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back, record);
}

#[test]
fn golden_query_result_layout() {
    let store = CatalogStore::new(vec![make_record(7)]).unwrap();
    let state = FilterState::new().set_query("reef").toggle_option("campus", "UC San Diego");
    let result = QueryEngine::default().evaluate(&store, &state);

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    let projects_pos = json_str.find("\"projects\":").expect("Missing projects key");
    let evaluation_pos = json_str.find("\"evaluation\":").expect("Missing evaluation key");
    assert!(projects_pos < evaluation_pos, "projects should appear before evaluation metadata");

    let expected = format!(
        r#"{{
          "query": "reef",
          "active_filters": 1,
          "projects_considered": 1,
          "projects_matched": 1,
          "projects_excluded_malformed": 0,
          "catalog_version": "{}"
        }}"#,
        store.version().as_str()
    );
    let evaluation = serde_json::to_string(&result.evaluation).unwrap();
    assert_eq!(normalize(&evaluation), normalize(&expected));

    let deserialized: QueryResult = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, result);
}

#[test]
fn golden_facet_option_omits_missing_count() {
    let bare = FacetOption {
        id: "Go".to_string(),
        label: "Go".to_string(),
        count: None,
    };
    let counted = FacetOption {
        count: Some(3),
        ..bare.clone()
    };

    assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"id":"Go","label":"Go"}"#);
    assert_eq!(
        serde_json::to_string(&counted).unwrap(),
        r#"{"id":"Go","label":"Go","count":3}"#
    );
}
