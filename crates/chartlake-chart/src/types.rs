//! Raw chart types as extracted from the Billboard chart page.
//!
//! ## Observed shape of the Hot 100 page
//!
//! Each chart position is rendered inside a row container whose class list
//! includes `o-chart-results-list-row-container`. Within a row, the track
//! title is an `<h3>` carrying a `c-title` class and the artist credit is
//! the first `<span>` carrying a `c-label` class **after** the title —
//! `c-label` spans before the title hold the rank number and movement
//! markers, so document order matters when pairing them up.
//!
//! Text content is HTML-escaped: multi-artist credits arrive as
//! `Billie Eilish &amp; Khalid`, so entity decoding has to happen before
//! artist splitting sees the string.

/// One raw chart position: title plus unsplit artist credit.
///
/// List order is rank order; the page carries no explicit rank we rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    /// Track title, tag-stripped and whitespace-collapsed.
    pub title: String,

    /// Free-text artist credit, possibly naming several collaborators
    /// (`"X feat. Y"`, `"A & B"`). May be empty when the row has no
    /// artist span.
    pub artist: String,
}
