//! Row extraction from the Billboard chart page HTML.

use regex::Regex;

use crate::types::ChartEntry;

/// Class marking one chart-position row container.
const ROW_MARKER: &str = "o-chart-results-list-row-container";

/// Extracts `(title, artist)` pairs from the chart page, in document order.
///
/// The page is split on the row-container marker; within each row the title
/// is the first `c-title` heading and the artist is the first `c-label`
/// span **after** the title (the spans before it hold the rank number and
/// movement markers). Rows without a title are skipped; a missing artist
/// span leaves the credit empty for the normalizer's fallback to handle.
pub(crate) fn parse_chart_entries(html: &str) -> Vec<ChartEntry> {
    let title_re = Regex::new(r"(?is)<h3[^>]*c-title[^>]*>(.*?)</h3>").expect("valid title regex");
    let artist_re =
        Regex::new(r"(?is)<span[^>]*c-label[^>]*>(.*?)</span>").expect("valid artist regex");

    let mut entries = Vec::new();
    for row in html.split(ROW_MARKER).skip(1) {
        let Some(title_cap) = title_re.captures(row) else {
            continue;
        };
        let title = clean_text(title_cap.get(1).map_or("", |m| m.as_str()));
        if title.is_empty() {
            continue;
        }

        let after_title = title_cap.get(0).map_or(row, |m| &row[m.end()..]);
        let artist = artist_re
            .captures(after_title)
            .and_then(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
            .unwrap_or_default();

        entries.push(ChartEntry { title, artist });
    }
    entries
}

/// Strips tags, decodes the handful of entities Billboard emits in titles
/// and credits, and collapses whitespace.
fn clean_text(input: &str) -> String {
    let tags = Regex::new(r"(?is)<[^>]+>").expect("valid tags regex");
    let no_tags = tags.replace_all(input, " ");
    let decoded = decode_entities(&no_tags);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Minimal entity decoding; `&amp;` goes last so already-decoded text is
/// not decoded twice. The credit splitter needs a literal `&` to see
/// multi-artist boundaries.
fn decode_entities(input: &str) -> String {
    input
        .replace("&nbsp;", " ")
        .replace("&#039;", "'")
        .replace("&#8217;", "\u{2019}")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#038;", "&")
        .replace("&amp;", "&")
}
