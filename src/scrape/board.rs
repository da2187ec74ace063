// src/scrape/board.rs
// Extracts departure entries from one station's rendered board page.
//
// The board is a Vue app; its markup carries no semantic attributes beyond
// the scoped data-v-* component ids, so those ids plus a few styling
// classes are the structural signature of an entry. Assumptions:
// - an entry is <li class="border" data-v-403a649a>
// - the first <strong data-v-403a649a> is the destination
// - train number and track only exist as "Train NNN" / "Track N" text

use chrono::DateTime;
use chrono_tz::Tz;
use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::core::{net, text};
use crate::error::Error;
use crate::record::DepartureRecord;
use crate::stations::Station;

use super::occupancy;

// Labels scanned for in descendant text; these fields have no structural marker.
const TRAIN_LABEL: &str = "Train";
const TRACK_LABEL: &str = "Track";

struct BoardSelectors {
    entry: Selector,
    destination: Selector,
    line: Selector,
    departure_time: Selector,
    status: Selector,
}

impl BoardSelectors {
    fn new() -> Self {
        Self {
            entry: Selector::parse("li.border[data-v-403a649a]").unwrap(),
            destination: Selector::parse("strong[data-v-403a649a]").unwrap(),
            line: Selector::parse("span[data-v-403a649a]").unwrap(),
            departure_time: Selector::parse("strong.h2").unwrap(),
            status: Selector::parse("strong.h3").unwrap(),
        }
    }
}

/// Fetch one station's board and parse it. Fetch failures are logged and
/// yield an empty list; the orchestrator never sees an error from here.
pub fn scrape_station(
    station: &Station,
    filter: Option<&str>,
    captured_at: DateTime<Tz>,
) -> Vec<DepartureRecord> {
    let name = station.display_name();
    let html = match net::http_get(station.url) {
        Ok(body) => body,
        Err(e) => {
            warn!("{name}: {e}");
            return Vec::new();
        }
    };
    parse_board(&html, &name, filter, captured_at)
}

/// Parse a full board page into records. Pure function of its inputs; a
/// malformed entry is logged and skipped without touching its siblings.
pub fn parse_board(
    html: &str,
    station: &str,
    filter: Option<&str>,
    captured_at: DateTime<Tz>,
) -> Vec<DepartureRecord> {
    let sel = BoardSelectors::new();
    let doc = Html::parse_document(html);
    let timestamp = captured_at.format("%Y-%m-%d %H:%M:%S").to_string();
    let filter_lc = filter.map(str::to_lowercase);

    let mut records = Vec::new();
    for entry in doc.select(&sel.entry) {
        match parse_entry(entry, &sel, station, filter_lc.as_deref(), &timestamp) {
            Ok(Some(rec)) => records.push(rec),
            Ok(None) => {} // filtered out
            Err(e) => warn!("{station}: skipping entry: {e}"),
        }
    }
    records
}

/// One entry → one record, or None when the destination filter drops it.
/// Only the destination is required; every other field defaults to "".
fn parse_entry(
    entry: ElementRef,
    sel: &BoardSelectors,
    station: &str,
    filter_lc: Option<&str>,
    timestamp: &str,
) -> Result<Option<DepartureRecord>, Error> {
    let destination = entry
        .select(&sel.destination)
        .next()
        .map(text::collect_text)
        .ok_or(Error::MissingDestination)?;

    // Filtered entries are dropped before any further extraction work.
    if let Some(f) = filter_lc {
        if !destination.to_lowercase().contains(f) {
            return Ok(None);
        }
    }

    let line = first_text(entry, &sel.line);
    let departure_time = first_text(entry, &sel.departure_time);
    let status = first_text(entry, &sel.status);
    let train_number = text::labeled_value(entry, TRAIN_LABEL);
    let track = text::labeled_value(entry, TRACK_LABEL);
    let occ = occupancy::parse_occupancy(entry);

    Ok(Some(DepartureRecord {
        timestamp: timestamp.to_string(),
        station: station.to_string(),
        destination,
        line,
        train_number,
        departure_time,
        status,
        track,
        car_sections: occ.total_sections,
        occupancy_light: occ.light,
        occupancy_medium: occ.medium,
        occupancy_heavy: occ.heavy,
        occupancy_no_data: occ.no_data,
    }))
}

fn first_text(entry: ElementRef, sel: &Selector) -> String {
    entry
        .select(sel)
        .next()
        .map(text::collect_text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::config::BOARD_TZ;

    fn captured_at() -> DateTime<Tz> {
        BOARD_TZ.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    fn entry(destination: &str) -> String {
        format!(
            r#"<li class="border" data-v-403a649a>
                 <strong data-v-403a649a>{destination}</strong>
                 <span data-v-403a649a>NEC</span>
                 <span>Train 3847</span>
                 <strong class="h2">9:42 AM</strong>
                 <strong class="h3">All Aboard</strong>
                 <span>Track 2</span>
                 <ol data-v-5d9f6349 class="list-inline d-inline-block align-self-end m-0 cur--pointer">
                   <li data-v-b5fd45da><ol><li data-v-8927eb98 style="background-color: rgb(11, 102, 35);"></li></ol></li>
                   <li data-v-b5fd45da><ol><li data-v-8927eb98 style="background-color: rgb(220, 53, 69);"></li></ol></li>
                 </ol>
               </li>"#
        )
    }

    fn page(entries: &str) -> String {
        format!("<html><body><ul data-v-403a649a>{entries}</ul></body></html>")
    }

    #[test]
    fn extracts_all_fields_from_a_full_entry() {
        let html = page(&entry("New York Penn Station"));
        let records = parse_board(&html, "Newark", None, captured_at());

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.timestamp, "2026-01-15 09:30:00");
        assert_eq!(rec.station, "Newark");
        assert_eq!(rec.destination, "New York Penn Station");
        assert_eq!(rec.line, "NEC");
        assert_eq!(rec.train_number, "3847");
        assert_eq!(rec.departure_time, "9:42 AM");
        assert_eq!(rec.status, "All Aboard");
        assert_eq!(rec.track, "2");
        assert_eq!(rec.car_sections, 2);
        assert_eq!(rec.occupancy_light, 1);
        assert_eq!(rec.occupancy_heavy, 1);
    }

    #[test]
    fn occupancy_counts_sum_to_car_sections() {
        let html = page(&[entry("Newark Penn Station"), entry("Hoboken")].concat());
        for rec in parse_board(&html, "Secaucus Upper", None, captured_at()) {
            let sum = rec.occupancy_light
                + rec.occupancy_medium
                + rec.occupancy_heavy
                + rec.occupancy_no_data;
            assert_eq!(sum, rec.car_sections);
        }
    }

    #[test]
    fn destination_filter_is_case_insensitive() {
        let html = page(&[entry("Newark Penn Station"), entry("Hoboken")].concat());

        let kept = parse_board(&html, "Secaucus Upper", Some("Newark"), captured_at());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].destination, "Newark Penn Station");

        let kept_lc = parse_board(&html, "Secaucus Upper", Some("newark"), captured_at());
        assert_eq!(kept_lc.len(), 1);
        assert_eq!(kept_lc[0].destination, "Newark Penn Station");
    }

    #[test]
    fn entry_without_destination_is_skipped_alone() {
        let broken = r#"<li class="border" data-v-403a649a>
                          <span data-v-403a649a>NEC</span>
                        </li>"#;
        let html = page(&[broken.to_string(), entry("Hoboken")].concat());
        let records = parse_board(&html, "Newark", None, captured_at());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].destination, "Hoboken");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let bare = r#"<li class="border" data-v-403a649a>
                        <strong data-v-403a649a>Hoboken</strong>
                      </li>"#;
        let records = parse_board(&page(bare), "Watsessing", None, captured_at());

        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.line, "");
        assert_eq!(rec.train_number, "");
        assert_eq!(rec.departure_time, "");
        assert_eq!(rec.status, "");
        assert_eq!(rec.track, "");
        assert_eq!(rec.car_sections, 0);
        assert_eq!(rec.occupancy_no_data, 0);
    }

    #[test]
    fn page_without_entries_yields_empty_list() {
        let html = page("");
        assert!(parse_board(&html, "Maplewood", None, captured_at()).is_empty());
    }
}
