// src/daylog.rs
// Appends run output to the per-service-day CSV. A "day" here ends at 04:00
// local rather than midnight, so an overnight operating period stays in one
// file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::config::DAY_ROLLOVER_HOUR;
use crate::error::Error;
use crate::record::{COLUMNS, DepartureRecord};

/// Calendar-day bucket for a capture moment. Hours before the rollover
/// belong to the previous day's file.
pub fn service_day(now: DateTime<Tz>) -> NaiveDate {
    let date = now.date_naive();
    if now.hour() < DAY_ROLLOVER_HOUR {
        date - Duration::days(1)
    } else {
        date
    }
}

/// `<base>/<date>/departures_<date>.csv`
pub fn day_file_path(base: &Path, day: NaiveDate) -> PathBuf {
    let d = day.format("%Y-%m-%d").to_string();
    base.join(&d).join(format!("departures_{d}.csv"))
}

/// Append `records` to the current bucket's file, writing the header row
/// only when the file is first created. Empty input does no I/O. A
/// pre-existing file is appended to as-is; its column order is not checked.
pub fn append_records(
    base: &Path,
    records: &[DepartureRecord],
    now: DateTime<Tz>,
) -> Result<Option<PathBuf>, Error> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = day_file_path(base, service_day(now));
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let new_file = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if new_file {
        w.write_record(COLUMNS)?;
    }
    for rec in records {
        w.serialize(rec)?;
    }
    w.flush()?;

    Ok(Some(path))
}
