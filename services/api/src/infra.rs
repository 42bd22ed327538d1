use chrono::{DateTime, Local};
use leak_audit::config::AuditDefaults;
use leak_audit::workflows::leakage::{AuditBatch, AuditReportView, BatchSummary, ImpactParameters};
use leak_audit::workflows::listings::ListingSource;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) defaults: Arc<AuditDefaults>,
    pub(crate) source: Arc<dyn ListingSource>,
}

/// Parameters one audit run resolved to, echoed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ResolvedParameters {
    pub(crate) currency: String,
    pub(crate) average_transaction_value: f64,
    pub(crate) estimated_monthly_contacts: u32,
}

impl ResolvedParameters {
    /// Caller overrides win; configured defaults fill the gaps.
    pub(crate) fn resolve(
        defaults: &AuditDefaults,
        currency: Option<String>,
        average_transaction_value: Option<f64>,
        estimated_monthly_contacts: Option<u32>,
    ) -> Result<Self, String> {
        let average_transaction_value =
            average_transaction_value.unwrap_or(defaults.average_transaction_value);
        if !average_transaction_value.is_finite() || average_transaction_value < 0.0 {
            return Err(format!(
                "average transaction value must be a non-negative number (got {average_transaction_value})"
            ));
        }

        let currency = currency
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| defaults.currency.clone());

        Ok(Self {
            currency,
            average_transaction_value,
            estimated_monthly_contacts: estimated_monthly_contacts
                .unwrap_or(defaults.estimated_monthly_contacts),
        })
    }

    pub(crate) fn impact(&self) -> ImpactParameters {
        ImpactParameters {
            average_transaction_value: self.average_transaction_value,
            estimated_monthly_contacts: self.estimated_monthly_contacts,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AuditResponse {
    pub(crate) generated_at: DateTime<Local>,
    pub(crate) parameters: ResolvedParameters,
    pub(crate) summary: BatchSummary,
    pub(crate) reports: Vec<AuditReportView>,
}

impl AuditResponse {
    pub(crate) fn new(
        batch: &AuditBatch,
        parameters: ResolvedParameters,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            generated_at,
            summary: batch.summary(),
            reports: batch.views(&parameters.currency),
            parameters,
        }
    }
}

/// Formats an amount with thousands separators and two decimals, prefixed by
/// the currency label, e.g. `USD 14,250.00`.
pub(crate) fn format_money(currency: &str, amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}.{cents}")
}

pub(crate) fn parse_transaction_value(raw: &str) -> Result<f64, String> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a number ({err})"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("'{raw}' must be a non-negative number"))
    }
}
