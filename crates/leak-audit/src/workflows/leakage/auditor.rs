use super::impact::ImpactParameters;
use super::report::{AuditBatch, AuditReport};
use crate::workflows::listings::{normalize, RawListing};
use std::collections::HashSet;
use tracing::{debug, info};

/// Stateless pipeline running normalize, assess and estimate for listings
/// under one set of business parameters.
#[derive(Debug, Clone, Copy)]
pub struct LeakageAuditor {
    parameters: ImpactParameters,
}

impl LeakageAuditor {
    pub fn new(parameters: ImpactParameters) -> Self {
        Self { parameters }
    }

    pub fn audit(&self, raw: &RawListing) -> AuditReport {
        let profile = normalize(raw);
        let assessment = super::assess(&profile);
        let impact = self.parameters.estimate(assessment.score);

        AuditReport {
            profile,
            assessment,
            impact,
        }
    }

    /// Audits every listing once. Listings repeating an identifier already
    /// seen in this batch are skipped; the first occurrence wins and input
    /// order is kept.
    pub fn audit_batch(&self, listings: &[RawListing]) -> AuditBatch {
        let mut seen: HashSet<String> = HashSet::new();
        let mut reports = Vec::with_capacity(listings.len());
        let mut duplicates_skipped = 0;

        for raw in listings {
            let report = self.audit(raw);
            if !seen.insert(report.profile.identifier.clone()) {
                debug!(
                    identifier = %report.profile.identifier,
                    "skipping duplicate listing"
                );
                duplicates_skipped += 1;
                continue;
            }
            reports.push(report);
        }

        info!(
            audited = reports.len(),
            duplicates_skipped, "leakage audit batch complete"
        );

        AuditBatch {
            reports,
            duplicates_skipped,
        }
    }
}
