use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use rref_latex::io::run;
use rref_latex::Matrix;
use tracing::{info, Level};

/// Row-reduces a rational matrix and writes every step as a LaTeX derivation.
#[derive(Debug, Parser)]
#[command(name = "rref-latex", long_about = None)]
struct Cli {
    #[arg(long, default_value = "mtx.txt")]
    input: PathBuf,

    #[arg(long, default_value = "latex_out.tex")]
    output: PathBuf,

    /// Cell separator; any whitespace character splits on runs of whitespace
    #[arg(long, default_value_t = ' ')]
    delimiter: char,

    /// Print the reduced matrix to stdout
    #[arg(long)]
    print: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    info!(?args);

    let (matrix, trace) = run(&args.input, &args.output, args.delimiter)?;

    info!(rank = matrix.rank(), steps = trace.steps.len(), "reduced");
    if args.print {
        println!("{}", matrix);
    }
    Ok(())
}
