//! Fetches every chart from the search API and writes them to a JSON file.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use chart_harvester::config::{DEFAULT_RESULT_TYPE, DEFAULT_SEARCH_URL};
use chart_harvester::report::{self, SAMPLE_SIZE};
use chart_harvester::{logging, AppError, Harvester, HttpPageSource, SearchConfig};

#[derive(Parser)]
#[command(name = "list-charts")]
#[command(about = "List all charts from the Our World in Data search API", long_about = None)]
struct Cli {
    /// Output file path
    #[arg(long, default_value = "charts.json")]
    output: PathBuf,

    /// Results requested per page
    #[arg(long, default_value = "100")]
    page_size: NonZeroU32,

    /// Search endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    base_url: String,

    /// Result type to list
    #[arg(long = "type", default_value = DEFAULT_RESULT_TYPE)]
    result_type: String,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = SearchConfig::default()
        .with_base_url(cli.base_url)
        .with_result_type(cli.result_type)
        .with_page_size(cli.page_size);

    let source = HttpPageSource::new(&config)?;
    let charts = Harvester::new(source)
        .harvest()?
        .into_records();

    println!();
    report::print_sample(&charts, SAMPLE_SIZE)?;

    println!(
        "\nWriting all {} charts to {}...",
        charts.len(),
        cli.output.display()
    );
    report::write_json(&cli.output, &charts)?;
    println!("Done.");

    Ok(())
}

fn main() -> ExitCode {
    logging::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
