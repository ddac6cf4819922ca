use serde::Deserialize;
use tabled::Tabled;

/// Exact header names the upload must carry, checked before any row is read.
/// Extra columns in the file are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Community",
    "Community Sentiment (1-10)",
    "Income Growth (%)",
    "Employment Rate (%)",
    "Food Security Index",
    "Education Access (%)",
];

/// One row of the uploaded impact table. Values are trusted as provided;
/// no numeric ranges are enforced.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactRecord {
    #[serde(rename = "Community")]
    pub community: String,
    #[serde(rename = "Community Sentiment (1-10)")]
    pub sentiment: f64,
    #[serde(rename = "Income Growth (%)")]
    pub income_growth: f64,
    #[serde(rename = "Employment Rate (%)")]
    pub employment_rate: f64,
    #[serde(rename = "Food Security Index")]
    pub food_security: f64,
    #[serde(rename = "Education Access (%)")]
    pub education_access: f64,
}

/// Full data-table view, one row per record with every metric.
#[derive(Debug, Clone, Tabled)]
pub struct MetricsRow {
    #[tabled(rename = "Community")]
    pub community: String,
    #[tabled(rename = "Sentiment (1-10)")]
    pub sentiment: String,
    #[tabled(rename = "Income Growth (%)")]
    pub income_growth: String,
    #[tabled(rename = "Employment Rate (%)")]
    pub employment_rate: String,
    #[tabled(rename = "Food Security Index")]
    pub food_security: String,
    #[tabled(rename = "Education Access (%)")]
    pub education_access: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct SentimentRow {
    #[tabled(rename = "Community")]
    pub community: String,
    #[tabled(rename = "Sentiment Score")]
    pub sentiment: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct IncomeEmploymentRow {
    #[tabled(rename = "Community")]
    pub community: String,
    #[tabled(rename = "Income Growth (%)")]
    pub income_growth: String,
    #[tabled(rename = "Employment Rate (%)")]
    pub employment_rate: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct FoodSecurityRow {
    #[tabled(rename = "Community")]
    pub community: String,
    #[tabled(rename = "Food Security Score")]
    pub food_security: String,
}

#[derive(Debug, Clone, Tabled)]
pub struct EducationRow {
    #[tabled(rename = "Community")]
    pub community: String,
    #[tabled(rename = "Education Access (%)")]
    pub education_access: String,
}
