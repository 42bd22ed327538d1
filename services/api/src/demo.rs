use crate::infra::{format_money, parse_transaction_value, AuditResponse, ResolvedParameters};
use chrono::Local;
use clap::Args;
use leak_audit::config::AppConfig;
use leak_audit::error::AppError;
use leak_audit::workflows::leakage::{AuditBatch, LeakageAuditor};
use leak_audit::workflows::listings::{
    ListingImporter, ListingQuery, ListingSource, RawListing, SampleListingSource,
};
use std::path::PathBuf;

/// Business parameters shared by the `audit` and `demo` commands.
#[derive(Args, Debug, Default)]
pub(crate) struct ImpactArgs {
    /// Currency label printed next to money (defaults to AUDIT_CURRENCY)
    #[arg(long)]
    pub(crate) currency: Option<String>,
    /// Average revenue per customer transaction (defaults to AUDIT_AVG_TRANSACTION_VALUE)
    #[arg(long, value_parser = parse_transaction_value)]
    pub(crate) avg_transaction_value: Option<f64>,
    /// Estimated inbound calls/clicks per month (defaults to AUDIT_MONTHLY_CONTACTS)
    #[arg(long)]
    pub(crate) monthly_contacts: Option<u32>,
    /// Print the audit as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct AuditArgs {
    /// Listing export to audit (.json array / provider response, or .csv)
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[command(flatten)]
    pub(crate) impact: ImpactArgs,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Business type to search for
    #[arg(long, default_value = "Dentist")]
    pub(crate) keyword: String,
    /// City to search in
    #[arg(long, default_value = "Austin")]
    pub(crate) location: String,
    #[command(flatten)]
    pub(crate) impact: ImpactArgs,
}

pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs { input, impact } = args;
    let listings = ListingImporter::from_path(&input)?;
    let source_label = format!("Listing export {}", input.display());
    audit_and_render(&listings, impact, &source_label)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        keyword,
        location,
        impact,
    } = args;

    let query = ListingQuery::new(keyword, location);
    let listings = SampleListingSource.fetch(&query)?;
    let source_label = format!(
        "Sample listings for '{}' in {}",
        query.keyword, query.location
    );
    audit_and_render(&listings, impact, &source_label)
}

fn audit_and_render(
    listings: &[RawListing],
    args: ImpactArgs,
    source_label: &str,
) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let parameters = ResolvedParameters::resolve(
        &config.audit,
        args.currency,
        args.avg_transaction_value,
        args.monthly_contacts,
    )
    .map_err(AppError::InvalidRequest)?;

    let batch = LeakageAuditor::new(parameters.impact()).audit_batch(listings);

    if args.json {
        let response = AuditResponse::new(&batch, parameters, Local::now());
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        render_audit_report(&batch, &parameters, source_label);
    }

    Ok(())
}

fn render_audit_report(batch: &AuditBatch, parameters: &ResolvedParameters, source_label: &str) {
    let currency = parameters.currency.as_str();
    let summary = batch.summary();

    println!("Revenue leakage audit");
    println!("Data source: {source_label}");
    println!(
        "Assumptions: {} per transaction, {} contacts per month",
        format_money(currency, parameters.average_transaction_value),
        parameters.estimated_monthly_contacts
    );
    if summary.duplicates_skipped > 0 {
        println!(
            "Skipped {} duplicate listing(s)",
            summary.duplicates_skipped
        );
    }

    if batch.reports.is_empty() {
        println!("\nNo listings found.");
        return;
    }

    for report in &batch.reports {
        let view = report.view(currency);
        println!("\n{} ({})", view.name, view.identifier);
        println!("  {} | {}", view.address, view.phone);
        println!(
            "  Leakage score: {}/100 - {}",
            view.score, view.tier_label
        );

        if view.issues.is_empty() {
            println!("  Issues: none");
        } else {
            println!("  Issues");
            for issue in &view.issues {
                println!(
                    "  - [{}] {}: {}",
                    issue.severity_label, issue.area, issue.description
                );
                println!("    Fix: {}", issue.suggested_fix);
            }
        }

        println!(
            "  Estimated impact: {} missed contacts/month | {} - {} per month | {} per year",
            view.impact.lost_contacts_per_month,
            format_money(currency, view.impact.monthly_loss_min),
            format_money(currency, view.impact.monthly_loss_max),
            format_money(currency, view.impact.annual_loss)
        );
    }

    println!("\nPortfolio summary");
    for entry in &summary.tier_counts {
        println!("- {}: {}", entry.tier_label, entry.count);
    }
    println!(
        "- Combined monthly loss: {} - {}",
        format_money(currency, summary.total_monthly_loss_min),
        format_money(currency, summary.total_monthly_loss_max)
    );
    println!(
        "- Combined annual loss: {}",
        format_money(currency, summary.total_annual_loss)
    );
    if let Some(most_exposed) = &summary.most_exposed {
        println!(
            "- Most exposed: {} (score {}, {} per year)",
            most_exposed.name,
            most_exposed.score,
            format_money(currency, most_exposed.annual_loss)
        );
    }
}
