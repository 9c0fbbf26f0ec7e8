mod cli;
mod extract;
mod input;
mod logging;
mod page_range;
mod pipeline;

use std::io;

use clap::Parser;
use cli::Cli;
use extract::PdfplumberSource;
use pipeline::PipelineError;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    logging::init();

    let config = cli.into_config();
    debug!(pages = %config.pages, strategy = ?config.strategy, "starting");

    let source = PdfplumberSource::new(config.pages, config.strategy, config.password);
    let result = pipeline::run(
        io::stdin().lock(),
        io::stdout().lock(),
        &source,
        &config.missing,
    );

    match result {
        Ok(summary) => {
            info!(
                tables = summary.tables,
                rows = summary.rows,
                columns = summary.columns,
                "done"
            );
        }
        Err(err) => {
            if !matches!(err, PipelineError::EmptyInput) {
                eprintln!("Error: {err}");
            }
            std::process::exit(err.exit_code());
        }
    }
}
