use crate::demo::{run_audit, run_demo, AuditArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use leak_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Money-Leak Audit",
    about = "Score local business listings for revenue leakage and estimate the lost revenue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Audit a saved listing export and print the leakage report
    Audit(AuditArgs),
    /// Audit the bundled sample listings for a keyword and location
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Audit(args) => run_audit(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn audit_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "leak-audit-api",
            "audit",
            "--input",
            "listings.csv",
            "--currency",
            "EUR",
            "--avg-transaction-value",
            "250",
            "--monthly-contacts",
            "80",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Audit(args)) => {
                assert_eq!(args.input.to_str(), Some("listings.csv"));
                assert_eq!(args.impact.currency.as_deref(), Some("EUR"));
                assert_eq!(args.impact.avg_transaction_value, Some(250.0));
                assert_eq!(args.impact.monthly_contacts, Some(80));
                assert!(args.impact.json);
            }
            other => panic!("expected audit command, got {other:?}"),
        }
    }

    #[test]
    fn audit_rejects_negative_transaction_value() {
        let result = Cli::try_parse_from([
            "leak-audit-api",
            "audit",
            "--input",
            "listings.json",
            "--avg-transaction-value=-5",
        ]);
        assert!(result.is_err());
    }
}
