// Pure builders from a filtered subset to the console metric views. Each
// view preserves record order; every numeric is rendered through
// `format_metric` so the console matches the report's two-decimal contract.
use crate::types::{
    EducationRow, FoodSecurityRow, ImpactRecord, IncomeEmploymentRow, MetricsRow, SentimentRow,
};
use crate::util::format_metric;

pub fn metrics_rows(data: &[ImpactRecord]) -> Vec<MetricsRow> {
    data.iter()
        .map(|r| MetricsRow {
            community: r.community.clone(),
            sentiment: format_metric(r.sentiment),
            income_growth: format_metric(r.income_growth),
            employment_rate: format_metric(r.employment_rate),
            food_security: format_metric(r.food_security),
            education_access: format_metric(r.education_access),
        })
        .collect()
}

pub fn sentiment_rows(data: &[ImpactRecord]) -> Vec<SentimentRow> {
    data.iter()
        .map(|r| SentimentRow {
            community: r.community.clone(),
            sentiment: format_metric(r.sentiment),
        })
        .collect()
}

pub fn income_employment_rows(data: &[ImpactRecord]) -> Vec<IncomeEmploymentRow> {
    data.iter()
        .map(|r| IncomeEmploymentRow {
            community: r.community.clone(),
            income_growth: format_metric(r.income_growth),
            employment_rate: format_metric(r.employment_rate),
        })
        .collect()
}

pub fn food_security_rows(data: &[ImpactRecord]) -> Vec<FoodSecurityRow> {
    data.iter()
        .map(|r| FoodSecurityRow {
            community: r.community.clone(),
            food_security: format_metric(r.food_security),
        })
        .collect()
}

pub fn education_rows(data: &[ImpactRecord]) -> Vec<EducationRow> {
    data.iter()
        .map(|r| EducationRow {
            community: r.community.clone(),
            education_access: format_metric(r.education_access),
        })
        .collect()
}
