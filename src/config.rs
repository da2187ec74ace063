// src/config.rs

use chrono_tz::Tz;

// Time
// The boards render Eastern local times; file bucketing uses the same zone.
pub const BOARD_TZ: Tz = chrono_tz::America::New_York;
// A service day ends at 04:00 local, not midnight, so one overnight
// operating period stays in one file.
pub const DAY_ROLLOVER_HOUR: u32 = 4;

// Output
pub const OUT_DIR: &str = "departures";

// Net
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
