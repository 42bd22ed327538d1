use super::domain::MAX_SCORE;
use serde::{Deserialize, Serialize};

/// Share of contact volume assumed lost at the maximum score, in percent.
pub const MAX_LOSS_PERCENT: u64 = 60;

/// Multiplier from the low to the high end of the monthly loss range.
pub const LOSS_RANGE_MULTIPLIER: f64 = 1.5;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Business inputs the caller supplies for every estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    pub average_transaction_value: f64,
    pub estimated_monthly_contacts: u32,
}

/// Monetary consequence of a leakage score. Money stays unrounded; currency
/// formatting belongs to whoever renders it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactEstimate {
    pub lost_contacts_per_month: u32,
    pub monthly_loss_min: f64,
    pub monthly_loss_max: f64,
    pub annual_loss: f64,
}

/// Converts a score into lost contacts and revenue.
///
/// The score acts as the fraction of potential customers lost, scaled so
/// that even a perfect 100 models a 60% loss rather than a total one. Lost
/// contacts are floored to whole contacts. The upper monthly bound is a flat
/// 1.5x band around the lower one and the annual figure projects the lower
/// bound over twelve months. Scores above 100 are treated as 100.
pub fn estimate_impact(
    score: u8,
    average_transaction_value: f64,
    estimated_monthly_contacts: u32,
) -> ImpactEstimate {
    let score = u64::from(score.min(MAX_SCORE));

    // contacts * (score / 100) * 0.60, floored in integer space.
    let lost = u64::from(estimated_monthly_contacts) * score * MAX_LOSS_PERCENT
        / (u64::from(MAX_SCORE) * 100);
    let lost_contacts_per_month = u32::try_from(lost).unwrap_or(u32::MAX);

    let monthly_loss_min = f64::from(lost_contacts_per_month) * average_transaction_value;

    ImpactEstimate {
        lost_contacts_per_month,
        monthly_loss_min,
        monthly_loss_max: monthly_loss_min * LOSS_RANGE_MULTIPLIER,
        annual_loss: monthly_loss_min * MONTHS_PER_YEAR,
    }
}

impl ImpactParameters {
    pub fn estimate(&self, score: u8) -> ImpactEstimate {
        estimate_impact(
            score,
            self.average_transaction_value,
            self.estimated_monthly_contacts,
        )
    }
}
