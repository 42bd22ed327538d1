//! Rule-based revenue leakage scoring and its monetary impact.

mod auditor;
mod domain;
mod impact;
pub mod report;
mod rules;

#[cfg(test)]
mod tests;

pub use auditor::LeakageAuditor;
pub use domain::{
    Issue, LeakageAssessment, RiskTier, Severity, CRITICAL_THRESHOLD, MAX_SCORE,
    MEDIUM_THRESHOLD,
};
pub use impact::{
    estimate_impact, ImpactEstimate, ImpactParameters, LOSS_RANGE_MULTIPLIER, MAX_LOSS_PERCENT,
};
pub use report::{AuditBatch, AuditReport, AuditReportView, BatchSummary};

use crate::workflows::listings::BusinessProfile;

/// Scores a canonical profile against the fixed rule table.
///
/// Deterministic and side-effect free: the score is the sum of the weights of
/// every triggered rule capped at [`MAX_SCORE`], the tier follows from the
/// capped score, and issues appear in rule order.
pub fn assess(profile: &BusinessProfile) -> LeakageAssessment {
    let (raw_total, issues) = rules::score_profile(profile);
    let score = raw_total.min(u32::from(MAX_SCORE)) as u8;

    LeakageAssessment {
        score,
        tier: RiskTier::from_score(score),
        issues,
    }
}
