// src/stations.rs
// The fixed DepartureVision deployment: five boards, scraped in table order.

/// One scrape target. The display name is derived from the key, so the
/// table stays a plain (key, url) pair.
pub struct Station {
    pub key: &'static str,
    pub url: &'static str,
}

pub const STATIONS: [Station; 5] = [
    Station {
        key: "secaucus_upper",
        url: "https://www.njtransit.com/dv-to/Secaucus%20Junction%20Upper%20Level",
    },
    Station {
        key: "secaucus_lower",
        url: "https://www.njtransit.com/dv-to/Secaucus%20Junction%20Lower%20Level",
    },
    Station {
        key: "newark",
        url: "https://www.njtransit.com/dv-to/Newark%20Penn%20Station",
    },
    Station {
        key: "watsessing",
        url: "https://www.njtransit.com/dv-to/Watsessing%20Avenue%20Station",
    },
    Station {
        key: "maplewood",
        url: "https://www.njtransit.com/dv-to/Maplewood%20Station",
    },
];

impl Station {
    /// "secaucus_upper" → "Secaucus Upper"
    pub fn display_name(&self) -> String {
        self.key
            .split('_')
            .filter(|w| !w.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
