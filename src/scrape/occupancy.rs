// src/scrape/occupancy.rs
// Crowding is encoded purely in presentation styling: each car section
// carries an indicator dot whose inline background color is the level.
// The exact color values are the matching contract with the site; anything
// off-palette lands in no_data rather than failing the entry.

use std::sync::OnceLock;

use scraper::{ElementRef, Selector};

// Reference palette, verbatim from the rendered style attributes.
const COLOR_LIGHT: &str = "background-color: rgb(11, 102, 35)";
const COLOR_MEDIUM: &str = "background-color: rgb(255, 193, 7)";
const COLOR_HEAVY: &str = "background-color: rgb(220, 53, 69)";

/// Per-entry crowding summary. The four level counts sum to
/// `total_sections`; an all-zero summary means "no occupancy published".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancySummary {
    pub total_sections: u32,
    pub light: u32,
    pub medium: u32,
    pub heavy: u32,
    pub no_data: u32,
}

struct OccupancySelectors {
    list: Selector,
    dot: Selector,
}

impl OccupancySelectors {
    fn new() -> Self {
        Self {
            list: Selector::parse(
                "ol[data-v-5d9f6349].list-inline.d-inline-block.align-self-end.m-0.cur--pointer",
            )
            .unwrap(),
            dot: Selector::parse("li[data-v-8927eb98]").unwrap(),
        }
    }

    // Compiled once; this runs per entry, not per page.
    fn get() -> &'static Self {
        static SELECTORS: OnceLock<OccupancySelectors> = OnceLock::new();
        SELECTORS.get_or_init(OccupancySelectors::new)
    }
}

/// Extract the five-count summary for one departure entry.
/// A missing occupancy list is a valid "not published" state, not an error.
pub fn parse_occupancy(entry: ElementRef) -> OccupancySummary {
    let sel = OccupancySelectors::get();

    let Some(list) = entry.select(&sel.list).next() else {
        return OccupancySummary::default();
    };

    let mut occ = OccupancySummary::default();
    for section in list.children().filter_map(ElementRef::wrap) {
        if section.value().name() != "li" || section.value().attr("data-v-b5fd45da").is_none() {
            continue;
        }
        occ.total_sections += 1;

        let mut saw_dot = false;
        for dot in section.select(&sel.dot) {
            saw_dot = true;
            let style = dot.value().attr("style").unwrap_or("");
            if style.contains(COLOR_LIGHT) {
                occ.light += 1;
            } else if style.contains(COLOR_MEDIUM) {
                occ.medium += 1;
            } else if style.contains(COLOR_HEAVY) {
                occ.heavy += 1;
            } else {
                occ.no_data += 1;
            }
        }
        // A section that renders no dot at all still occupies a car slot.
        if !saw_dot {
            occ.no_data += 1;
        }
    }
    occ
}
