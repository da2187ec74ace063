// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure or non-success status while fetching a board page.
    #[error("fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A departure entry with no destination text cannot become a record.
    #[error("departure entry has no destination")]
    MissingDestination,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
