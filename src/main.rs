use anyhow::Context;
use clap::Parser;
use tracing::info;

use academic_screener::cli::Cli;
use academic_screener::config::Config;
use academic_screener::logging;
use academic_screener::pipeline::Pipeline;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    let result = Pipeline::run(&cli.input, &cli.output_dir, &config)
        .with_context(|| format!("Screening '{}' failed", cli.input.display()))?;

    info!(
        rows_loaded = result.rows_loaded,
        retained = result.records_retained,
        dropped = result.duplicates_dropped,
        journal_likely = result.journal_likely,
        "Pipeline finished"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    // anyhow prints the error chain on stderr and exits with status 1
    run(&cli)?;

    println!("Done.");
    Ok(())
}
