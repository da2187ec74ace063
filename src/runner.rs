// src/runner.rs

use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::config::{BOARD_TZ, OUT_DIR};
use crate::daylog;
use crate::error::Error;
use crate::record::DepartureRecord;
use crate::scrape;
use crate::stations::STATIONS;

/// What one run produced.
pub struct RunSummary {
    pub records: usize,
    pub file: Option<PathBuf>,
}

/// One complete run: every station once, in table order, then at most one
/// append. A failed station only empties its own slice of the output;
/// a writer failure is the one thing that aborts the run.
pub fn run(filter: Option<&str>) -> Result<RunSummary, Error> {
    let mut all: Vec<DepartureRecord> = Vec::new();

    for station in &STATIONS {
        let captured_at = Utc::now().with_timezone(&BOARD_TZ);
        let records = scrape::scrape_station(station, filter, captured_at);
        info!("{}: {} departures", station.display_name(), records.len());
        all.extend(records);
    }

    let count = all.len();
    let now = Utc::now().with_timezone(&BOARD_TZ);
    let file = daylog::append_records(Path::new(OUT_DIR), &all, now)?;
    Ok(RunSummary {
        records: count,
        file,
    })
}
