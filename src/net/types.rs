//! Payload types for the workshop filter endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// One workshop as returned by `filter-workshops/`. Field names are fixed
/// by the server's JSON.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Workshop {
    pub workshopname: String,
    pub workshopstartdate: String,
    pub workshopenddate: String,
}

impl Workshop {
    /// Display label for the workshop's date range.
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.workshopstartdate, self.workshopenddate)
    }
}
