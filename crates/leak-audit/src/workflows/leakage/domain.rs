use serde::{Deserialize, Serialize};

/// Upper bound of the composite leakage score.
pub const MAX_SCORE: u8 = 100;

/// Scores strictly above this are at least [`RiskTier::Medium`].
pub const MEDIUM_THRESHOLD: u8 = 30;

/// Scores strictly above this are [`RiskTier::Critical`].
pub const CRITICAL_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Coarse risk bucket derived from the capped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    Critical,
}

impl RiskTier {
    /// Boundary scores (30, 60) belong to the lower tier.
    pub const fn from_score(score: u8) -> Self {
        if score > CRITICAL_THRESHOLD {
            Self::Critical
        } else if score > MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk (Optimization Opportunity)",
            Self::Medium => "Moderate Revenue Loss",
            Self::Critical => "Severe Revenue Leakage",
        }
    }
}

/// One deficiency found on a listing, detailed enough for a report renderer
/// to present without re-running any rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub area: &'static str,
    pub severity: Severity,
    pub description: String,
    pub suggested_fix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeakageAssessment {
    pub score: u8,
    pub tier: RiskTier,
    pub issues: Vec<Issue>,
}

impl LeakageAssessment {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|issue| issue.severity).max()
    }
}
