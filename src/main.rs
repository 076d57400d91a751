use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use sam_pair_filter::{FilterOptions, filter_sam_files};

#[derive(Parser)]
#[command(name = "sam-pair-filter")]
#[command(about = "Keep adjacent read-name pairs from a SAM file", long_about = None)]
#[command(version)]
struct Cli {
    /// Input SAM file
    #[arg(value_name = "INPUT_SAM")]
    input: PathBuf,

    /// Output SAM file (created or truncated)
    #[arg(value_name = "OUTPUT_SAM")]
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                println!("{}", Cli::command().render_usage());
                std::process::exit(1);
            }
        },
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = filter_sam_files(&cli.input, &cli.output, &FilterOptions::default()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
