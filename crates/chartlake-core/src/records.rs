//! Normalized chart records — the unit written to the data lake.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Substituted for `artist_name` when a credit string yields no artists.
pub const FALLBACK_ARTIST: &str = "None";

/// One normalized chart position for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Chart date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,

    /// 1-based chart position, contiguous in fetch order.
    pub rank: u32,

    /// Track title, verbatim from the source.
    pub track_name: String,

    /// Canonicalized primary artist, or [`FALLBACK_ARTIST`] when the credit
    /// string yields no artists.
    pub artist_name: String,
}

/// The complete ranked record set for one date — the atomic unit of storage.
///
/// Constructed fresh per invocation and never mutated afterwards. Every
/// record carries the snapshot's date; construction stamps it.
#[derive(Debug, Clone)]
pub struct ChartSnapshot {
    date: NaiveDate,
    records: Vec<ChartRecord>,
}

impl ChartSnapshot {
    #[must_use]
    pub fn new(date: NaiveDate, records: Vec<ChartRecord>) -> Self {
        Self { date, records }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn records(&self) -> &[ChartRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Deterministic data-lake key for this snapshot.
    #[must_use]
    pub fn object_key(&self) -> String {
        format!(
            "top100tracks/billboard_top100_{}.json",
            self.date.format("%Y-%m-%d")
        )
    }

    /// Serializes the record list as a pretty-printed JSON array.
    ///
    /// The indentation is cosmetic; consumers parse the array, not the layout.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(&self.records)
    }
}
