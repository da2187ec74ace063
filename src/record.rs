// src/record.rs

use serde::Serialize;

/// Column order of the daily log. The writer emits exactly this header once
/// per file; `DepartureRecord` serializes its fields in the same order.
pub const COLUMNS: [&str; 13] = [
    "timestamp",
    "station",
    "destination",
    "line",
    "train_number",
    "departure_time",
    "status",
    "track",
    "car_sections",
    "occupancy_light",
    "occupancy_medium",
    "occupancy_heavy",
    "occupancy_no_data",
];

/// One observed departure at one station at one capture moment.
/// Text fields hold whatever the board displayed; absent elements are "".
/// Never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct DepartureRecord {
    pub timestamp: String,
    pub station: String,
    pub destination: String,
    pub line: String,
    pub train_number: String,
    pub departure_time: String,
    pub status: String,
    pub track: String,
    pub car_sections: u32,
    pub occupancy_light: u32,
    pub occupancy_medium: u32,
    pub occupancy_heavy: u32,
    pub occupancy_no_data: u32,
}
