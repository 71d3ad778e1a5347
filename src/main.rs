//! Sums the numbers in a delimited string passed as a command-line argument and prints the total
//! on stdout.

#![forbid(unsafe_code)]

mod colour;
mod logging;

use addup::escape;
use addup::Accumulator;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// The string to sum. Backslash escapes like \n and \t are decoded before parsing, so a
    /// custom delimiter header fits in a single shell argument.
    #[clap(allow_hyphen_values = true)]
    input: String,

    /// Maximum number of values a single input may contain. Zero means unlimited.
    #[clap(long, default_value = "6")]
    max_count: usize,

    /// Whether to use coloured output.
    #[clap(long, alias = "color", default_value = "auto")]
    colour: colour::Colour,

    /// Log progress to stderr.
    #[clap(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let mut args = Args::parse();
    args.colour = args.colour.detect();
    logging::init(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    })?;
    match run(args) {
        Ok(total) => println!("{total}"),
        Err(error) => {
            println!("{} {:#}", "ERROR:".red(), error);
            std::process::exit(-1);
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<i64> {
    let input = escape::unescape(&args.input);
    Ok(Accumulator::new(args.max_count).add(&input)?)
}
