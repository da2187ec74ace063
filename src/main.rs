// src/main.rs

use clap::Parser;

use dv_scrape::runner;

/// Scrape the DepartureVision boards once and append to the daily log.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Only keep departures whose destination contains this text
    /// (case-insensitive).
    #[arg(long)]
    destination: Option<String>,
}

fn main() {
    pretty_env_logger::init_timed();
    let args = Args::parse();

    match runner::run(args.destination.as_deref()) {
        Ok(summary) => match summary.file {
            Some(path) => println!("Appended {} records to {}", summary.records, path.display()),
            None => println!("No departures captured; nothing written."),
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
