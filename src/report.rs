use crate::types::ImpactRecord;
use crate::util::format_metric;

/// Fixed artifact name, overwritten on every generation request.
pub const REPORT_FILE_NAME: &str = "GEIA_Social_Impact_Report.pdf";

/// Body line used when the selected community has no matching records.
pub const NO_DATA_NOTICE: &str = "No impact records available for this community.";

/// In-memory report: a title line plus one block of labelled lines per
/// record. Kept as plain text so the document content can be tested without
/// parsing PDF bytes; `output::write_pdf` handles layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub blocks: Vec<Vec<String>>,
}

/// Build the report document for one community from its filtered subset.
///
/// Every record in the subset gets its own block, in input order. An empty
/// subset produces the explicit no-data notice rather than a silently empty
/// body.
pub fn generate_report(community: &str, rows: &[ImpactRecord]) -> ReportDocument {
    let title = format!("GEIA Social Impact Report - {}", community);

    let mut blocks: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                format!("Community: {}", r.community),
                format!("Income Growth: {}%,", format_metric(r.income_growth)),
                format!("Employment Rate: {}%,", format_metric(r.employment_rate)),
                format!("Food Security Index: {},", format_metric(r.food_security)),
                format!("Education Access: {}%,", format_metric(r.education_access)),
                format!("Community Sentiment: {},", format_metric(r.sentiment)),
            ]
        })
        .collect();

    if blocks.is_empty() {
        blocks.push(vec![NO_DATA_NOTICE.to_string()]);
    }

    ReportDocument { title, blocks }
}
