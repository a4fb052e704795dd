//! aws-costs - Show AWS blended cost for a given time frame

use aws_costs::{
    cli::Cli,
    client::CostExplorerClient,
    credentials::Credentials,
    error::{AwsCostsError, Result},
    output::format_report,
    range::{month_start, validate_range, TerminalConfirm},
    report_fetcher::ReportFetcher,
    types::ReportRequest,
};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::process;
use std::time::Duration;
use tracing::debug;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "info",
        _ => "debug",
    };

    // RUST_LOG still wins when set, matching the usual tracing convention.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("aws_costs={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let today = Utc::now().date_naive();
    let start = cli.start.unwrap_or_else(|| month_start(today));
    let end = cli.end.unwrap_or(today);

    let range = validate_range(start, end, today, &TerminalConfirm)?;
    let credentials = Credentials::from_env()?;

    debug!("Start date: {}", range.start);
    debug!("End date: {}", range.end);

    let client = CostExplorerClient::new(
        credentials,
        &cli.region,
        Duration::from_secs(cli.timeout),
    )?;
    let fetcher = ReportFetcher::new(client);
    let periods = fetcher.fetch(&ReportRequest::monthly(range)).await?;

    for line in format_report(&periods, &cli.currency)? {
        println!("{line}");
    }

    Ok(())
}

fn report_failure(error: &AwsCostsError) {
    match error {
        AwsCostsError::Api(_) | AwsCostsError::Network(_) | AwsCostsError::Json(_) => {
            eprintln!(
                "{}",
                "Error retrieving AWS Cost and Usage report".red().bold()
            );
            eprintln!("{error}");
        }
        other => eprintln!("{}", other.to_string().red().bold()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = run(cli).await {
        report_failure(&error);
        process::exit(error.exit_code());
    }
}
