use geia_impact::filter::{distinct_communities, filter_by_community};
use geia_impact::types::ImpactRecord;

fn record(community: &str, sentiment: f64) -> ImpactRecord {
    ImpactRecord {
        community: community.to_string(),
        sentiment,
        income_growth: 3.2,
        employment_rate: 91.0,
        food_security: 6.8,
        education_access: 88.0,
    }
}

#[test]
fn returns_only_matching_records_in_input_order() {
    let data = vec![
        record("Riverside", 1.0),
        record("Lakeside", 2.0),
        record("Riverside", 3.0),
        record("Hillcrest", 4.0),
        record("Riverside", 5.0),
    ];

    let filtered = filter_by_community(&data, "Riverside");
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().all(|r| r.community == "Riverside"));
    let sentiments: Vec<f64> = filtered.iter().map(|r| r.sentiment).collect();
    assert_eq!(sentiments, vec![1.0, 3.0, 5.0]);
}

#[test]
fn filtering_twice_is_idempotent() {
    let data = vec![
        record("Riverside", 1.0),
        record("Lakeside", 2.0),
        record("Riverside", 3.0),
    ];

    let once = filter_by_community(&data, "Riverside");
    let twice = filter_by_community(&once, "Riverside");
    assert_eq!(once, twice);
}

#[test]
fn unknown_community_yields_empty_not_error() {
    let data = vec![record("Riverside", 1.0)];
    assert!(filter_by_community(&data, "Atlantis").is_empty());
}

#[test]
fn empty_table_filters_to_empty() {
    assert!(filter_by_community(&[], "Riverside").is_empty());
}

#[test]
fn distinct_communities_keep_first_seen_order() {
    let data = vec![
        record("Lakeside", 1.0),
        record("Riverside", 2.0),
        record("Lakeside", 3.0),
        record("Hillcrest", 4.0),
        record("Riverside", 5.0),
    ];

    assert_eq!(
        distinct_communities(&data),
        vec!["Lakeside", "Riverside", "Hillcrest"]
    );
}

#[test]
fn empty_table_has_no_communities() {
    assert!(distinct_communities(&[]).is_empty());
}
