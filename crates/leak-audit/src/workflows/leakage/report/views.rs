use super::super::domain::{RiskTier, Severity};
use super::super::impact::ImpactEstimate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IssueView {
    pub area: &'static str,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub description: String,
    pub suggested_fix: &'static str,
}

/// Everything a renderer needs for one business, labels already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReportView {
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub score: u8,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub issues: Vec<IssueView>,
    pub impact: ImpactEstimate,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCountEntry {
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MostExposedEntry {
    pub identifier: String,
    pub name: String,
    pub score: u8,
    pub annual_loss: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub audited: usize,
    pub duplicates_skipped: usize,
    pub tier_counts: Vec<TierCountEntry>,
    pub total_monthly_loss_min: f64,
    pub total_monthly_loss_max: f64,
    pub total_annual_loss: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_exposed: Option<MostExposedEntry>,
}
