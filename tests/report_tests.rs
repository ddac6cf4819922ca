use geia_impact::output::write_pdf;
use geia_impact::report::{generate_report, NO_DATA_NOTICE, REPORT_FILE_NAME};
use geia_impact::types::ImpactRecord;
use tempfile::TempDir;

fn record(community: &str) -> ImpactRecord {
    ImpactRecord {
        community: community.to_string(),
        sentiment: 7.5,
        income_growth: 3.2,
        employment_rate: 91.0,
        food_security: 6.8,
        education_access: 88.0,
    }
}

#[test]
fn single_record_block_matches_the_contract() {
    let doc = generate_report("Riverside", &[record("Riverside")]);

    assert_eq!(doc.title, "GEIA Social Impact Report - Riverside");
    assert_eq!(doc.blocks.len(), 1);
    let expected: Vec<String> = [
        "Community: Riverside",
        "Income Growth: 3.20%,",
        "Employment Rate: 91.00%,",
        "Food Security Index: 6.80,",
        "Education Access: 88.00%,",
        "Community Sentiment: 7.50,",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(doc.blocks[0], expected);
}

#[test]
fn block_count_scales_with_record_count() {
    let rows = vec![record("Riverside"), record("Riverside"), record("Riverside")];
    let doc = generate_report("Riverside", &rows);

    assert_eq!(doc.blocks.len(), 3);
    assert!(doc.blocks.iter().all(|b| b.len() == 6));
}

#[test]
fn whole_numbers_render_with_two_decimals() {
    let mut row = record("Riverside");
    row.education_access = 82.0;
    let doc = generate_report("Riverside", &[row]);

    assert_eq!(doc.blocks[0][4], "Education Access: 82.00%,");
}

#[test]
fn empty_subset_yields_title_and_notice() {
    let doc = generate_report("Riverside", &[]);

    assert_eq!(doc.title, "GEIA Social Impact Report - Riverside");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0], vec![NO_DATA_NOTICE.to_string()]);
}

#[test]
fn pdf_artifact_is_written_and_returned() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(REPORT_FILE_NAME);
    let doc = generate_report("Riverside", &[record("Riverside")]);

    let bytes = write_pdf(path.to_str().unwrap(), &doc).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn regeneration_overwrites_the_artifact() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(REPORT_FILE_NAME);

    let first = generate_report("Riverside", &[record("Riverside")]);
    write_pdf(path.to_str().unwrap(), &first).unwrap();

    let rows = vec![record("Lakeside"), record("Lakeside")];
    let second = generate_report("Lakeside", &rows);
    let bytes = write_pdf(path.to_str().unwrap(), &second).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn long_reports_span_multiple_pages() {
    // Enough blocks to run past the first page's bottom margin.
    let rows: Vec<ImpactRecord> = (0..40).map(|_| record("Riverside")).collect();
    let doc = generate_report("Riverside", &rows);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join(REPORT_FILE_NAME);
    let bytes = write_pdf(path.to_str().unwrap(), &doc).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
