use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::io;
use std::path::PathBuf;

use formseed::dataset::Dataset;
use formseed::orchestrator::{self, Selection};
use formseed::utils::inspect_dataset;

/// Seed CSV form data generator for DHCP pool and host records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory the CSV files are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// YAML file with `pools` and `hosts` lists replacing the built-in records
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Emit only one of the two files
    #[arg(long, value_enum, default_value_t = Selection::All)]
    only: Selection,

    /// Print the CSV data to standard output instead of writing files
    #[arg(long, conflicts_with = "output")]
    stdout: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    run(args)
}

fn run(args: Args) -> Result<()> {
    info!("Starting formseed");

    let dataset = match &args.data {
        Some(path) => {
            let dataset = Dataset::from_yaml_file(path)?;
            for hint in inspect_dataset(&dataset) {
                warn!("{}", hint);
            }
            dataset
        }
        None => Dataset::builtin(),
    };

    if args.stdout {
        orchestrator::render(&dataset, args.only, io::stdout().lock())
            .wrap_err("Failed to write form data to stdout")?;
        return Ok(());
    }

    info!("Output directory: {:?}", args.output);
    let generated = orchestrator::generate(&dataset, &args.output, args.only)?;
    for file in generated.files() {
        info!("{:?}: {} row(s)", file.path, file.rows);
    }

    info!("Form data generation completed successfully");
    Ok(())
}
