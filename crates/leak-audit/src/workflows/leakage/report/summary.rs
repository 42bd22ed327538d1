use super::super::domain::{Issue, LeakageAssessment, RiskTier};
use super::super::impact::ImpactEstimate;
use super::views::{AuditReportView, BatchSummary, IssueView, MostExposedEntry, TierCountEntry};
use crate::workflows::listings::BusinessProfile;
use serde::Serialize;

/// Result of auditing one listing.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub profile: BusinessProfile,
    pub assessment: LeakageAssessment,
    pub impact: ImpactEstimate,
}

impl AuditReport {
    /// The currency label is cosmetic; amounts are not converted or rounded.
    pub fn view(&self, currency: &str) -> AuditReportView {
        AuditReportView {
            identifier: self.profile.identifier.clone(),
            name: self.profile.name.clone(),
            address: self.profile.address.clone(),
            phone: self.profile.phone.clone(),
            score: self.assessment.score,
            tier: self.assessment.tier,
            tier_label: self.assessment.tier.label(),
            issues: self.assessment.issues.iter().map(Issue::to_view).collect(),
            impact: self.impact,
            currency: currency.to_string(),
        }
    }
}

impl Issue {
    pub fn to_view(&self) -> IssueView {
        IssueView {
            area: self.area,
            severity: self.severity,
            severity_label: self.severity.label(),
            description: self.description.clone(),
            suggested_fix: self.suggested_fix,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditBatch {
    pub reports: Vec<AuditReport>,
    pub duplicates_skipped: usize,
}

impl AuditBatch {
    pub fn views(&self, currency: &str) -> Vec<AuditReportView> {
        self.reports
            .iter()
            .map(|report| report.view(currency))
            .collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let tier_counts = RiskTier::ordered()
            .into_iter()
            .map(|tier| TierCountEntry {
                tier,
                tier_label: tier.label(),
                count: self
                    .reports
                    .iter()
                    .filter(|report| report.assessment.tier == tier)
                    .count(),
            })
            .collect();

        let (total_monthly_loss_min, total_monthly_loss_max, total_annual_loss) =
            self.reports.iter().fold((0.0, 0.0, 0.0), |(min, max, annual), report| {
                (
                    min + report.impact.monthly_loss_min,
                    max + report.impact.monthly_loss_max,
                    annual + report.impact.annual_loss,
                )
            });

        // Ties go to the earliest listing.
        let most_exposed = self
            .reports
            .iter()
            .fold(None::<&AuditReport>, |best, report| match best {
                Some(current) if current.assessment.score >= report.assessment.score => {
                    Some(current)
                }
                _ => Some(report),
            })
            .filter(|report| report.assessment.score > 0)
            .map(|report| MostExposedEntry {
                identifier: report.profile.identifier.clone(),
                name: report.profile.name.clone(),
                score: report.assessment.score,
                annual_loss: report.impact.annual_loss,
            });

        BatchSummary {
            audited: self.reports.len(),
            duplicates_skipped: self.duplicates_skipped,
            tier_counts,
            total_monthly_loss_min,
            total_monthly_loss_max,
            total_annual_loss,
            most_exposed,
        }
    }
}
