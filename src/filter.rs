use crate::types::ImpactRecord;
use std::collections::HashSet;

/// Distinct Community values in first-seen order.
///
/// This is the selection set offered for both metric views and report
/// generation, so only communities actually present in the table can be
/// selected.
pub fn distinct_communities(data: &[ImpactRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut communities: Vec<String> = Vec::new();
    for r in data {
        if seen.insert(r.community.as_str()) {
            communities.push(r.community.clone());
        }
    }
    communities
}

/// The ordered subsequence of records whose Community equals `community`.
///
/// Zero matches is a valid, silent result; the caller decides how to
/// present an empty subset.
pub fn filter_by_community(data: &[ImpactRecord], community: &str) -> Vec<ImpactRecord> {
    data.iter()
        .filter(|r| r.community == community)
        .cloned()
        .collect()
}
