//! Sales Report Engine CLI
//!
//! Watches a directory for flat data files, decodes their records and
//! writes a four-line summary report per file. With a FILE argument it
//! processes that single file and prints the report to stdout instead.
//!
//! # Usage
//!
//! ```bash
//! sales-report-engine --input-dir in --output-dir out
//! sales-report-engine data/sample.dat
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use clap::Parser;
use sales_report_engine::{DirectoryWatcher, ReportEngine, Result, Separators, WatchConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// Reads flat files of sales data and reports per-file summary statistics.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Process a single file and print the report to stdout instead of watching
    file: Option<PathBuf>,

    /// Character that delimits the fields of a line
    #[arg(long, default_value_t = 'ç')]
    field_separator: char,

    /// Character that delimits the components of one sale item
    #[arg(long, default_value_t = '-')]
    item_separator: char,

    /// Character that delimits the items inside a sale's item block
    #[arg(long, default_value_t = ',')]
    inter_item_separator: char,

    /// Extension of the files to pick up from the input directory
    #[arg(long, default_value = ".dat")]
    extension: String,

    /// Directory scanned for input files
    #[arg(long, default_value = "in")]
    input_dir: PathBuf,

    /// Directory the reports are written to
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// Seconds to wait between directory scans
    #[arg(long, default_value_t = 1)]
    poll_interval: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let separators = Separators {
        field: args.field_separator,
        item: args.item_separator,
        inter_item: args.inter_item_separator,
    };

    match args.file {
        Some(path) => {
            let file = File::open(path)?;
            let mut engine = ReportEngine::new(separators);
            engine.process_lines(BufReader::new(file))?;

            let stdout = io::stdout();
            engine.write_report(stdout.lock())
        }
        None => {
            let config = WatchConfig {
                input_dir: args.input_dir,
                output_dir: args.output_dir,
                extension: args.extension,
                poll_interval: Duration::from_secs(args.poll_interval),
            };
            DirectoryWatcher::new(config, separators).run()
        }
    }
}
