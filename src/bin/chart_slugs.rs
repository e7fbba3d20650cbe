//! Reduces a charts file to title, slug, and chart URL.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use chart_harvester::config::DEFAULT_GRAPHER_URL;
use chart_harvester::{logging, report, AppError, ShapeConfig, Shaper};

#[derive(Parser)]
#[command(name = "chart-slugs")]
#[command(about = "Write a simplified title/slug/url list from a charts file", long_about = None)]
struct Cli {
    /// Charts file written by list-charts
    #[arg(long, default_value = "charts.json")]
    input: PathBuf,

    /// Output file path
    #[arg(long, default_value = "chart-slugs.json")]
    output: PathBuf,

    /// Prefix each slug is appended to
    #[arg(long, default_value = DEFAULT_GRAPHER_URL)]
    url_base: String,
}

fn run(cli: Cli) -> Result<(), AppError> {
    let charts = report::read_records(&cli.input)?;
    info!(charts = charts.len(), input = %cli.input.display(), "Loaded charts");

    let shaper = Shaper::new(ShapeConfig::default().with_url_base(cli.url_base));
    let slugs = shaper.shape(&charts);

    report::write_json(&cli.output, &slugs)?;
    println!("Wrote {} entries to {}", slugs.len(), cli.output.display());

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
