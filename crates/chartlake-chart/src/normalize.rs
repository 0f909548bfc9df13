//! Normalization from raw chart entries to [`chartlake_core::ChartRecord`]s.
//!
//! The interesting part is artist-credit segmentation: a credit string may
//! name several collaborators joined by conjunction words or `&`, and the
//! record keeps only the primary (first) one. The conjunction-word and
//! punctuation rule sets are data, not embedded pattern literals.

use chartlake_core::{ChartRecord, ChartSnapshot, FALLBACK_ARTIST};
use chrono::NaiveDate;
use regex::Regex;

use crate::types::ChartEntry;

/// Whole words that mark an additional collaborator in a credit string.
/// Matched case-insensitively and word-bounded, then rewritten to `&`.
const CONJUNCTION_WORDS: [&str; 5] = ["feat", "featuring", "ft", "with", "and"];

/// Punctuation removed (not replaced) from credit strings before splitting.
const STRIPPED_PUNCTUATION: [char; 2] = ['.', ','];

/// Splits a free-text artist credit into canonicalized individual names.
///
/// Conjunction words become `&` boundaries, `.` and `,` are stripped, the
/// string is split on `&` (with optional leading whitespace), and each
/// non-empty segment is trimmed and title-cased. Order is preserved — the
/// first segment is the primary artist.
///
/// Total over all inputs: malformed punctuation degrades to best-effort
/// segments, and an input of nothing but conjunctions and punctuation
/// collapses to an empty list.
#[must_use]
pub fn split_artist_credit(credit: &str) -> Vec<String> {
    if credit.is_empty() {
        return Vec::new();
    }

    let conjunction_re = Regex::new(&format!(r"(?i)\b(?:{})\b", CONJUNCTION_WORDS.join("|")))
        .expect("valid conjunction regex");
    let rewritten = conjunction_re.replace_all(credit, "&");

    // Strip punctuation after the conjunction rewrite so `feat.` loses its
    // period only once the word itself has become a boundary.
    let stripped: String = rewritten
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    let separator_re = Regex::new(r"\s*&").expect("valid separator regex");
    separator_re
        .split(&stripped)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(title_case)
        .collect()
}

/// Uppercases the first letter of each alphabetic run and lowercases the
/// rest. Naive: stylized names ("ROSÉ") lose their styling; accepted as the
/// cost of a canonical display form.
fn title_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_word = false;
    for c in segment.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Shapes raw chart entries into the snapshot for `date`.
///
/// Ranks are assigned from fetch order starting at 1. The track title is
/// kept verbatim; the artist credit is segmented and the primary artist
/// kept, falling back to [`FALLBACK_ARTIST`] when segmentation yields
/// nothing. The snapshot length is whatever the fetcher returned — a short
/// chart produces a short snapshot.
#[must_use]
pub fn build_snapshot(date: NaiveDate, entries: Vec<ChartEntry>) -> ChartSnapshot {
    let records = (1u32..)
        .zip(entries)
        .map(|(rank, entry)| {
            let artist_name = split_artist_credit(&entry.artist)
                .into_iter()
                .next()
                .unwrap_or_else(|| FALLBACK_ARTIST.to_string());
            ChartRecord {
                date,
                rank,
                track_name: entry.title,
                artist_name,
            }
        })
        .collect();

    ChartSnapshot::new(date, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, artist: &str) -> ChartEntry {
        ChartEntry {
            title: title.to_owned(),
            artist: artist.to_owned(),
        }
    }

    // -----------------------------------------------------------------------
    // split_artist_credit
    // -----------------------------------------------------------------------

    #[test]
    fn single_canonical_name_unchanged() {
        assert_eq!(split_artist_credit("Billie Eilish"), vec!["Billie Eilish"]);
    }

    #[test]
    fn feat_marker_splits_primary_and_featured() {
        assert_eq!(
            split_artist_credit("Billie Eilish Feat. Khalid"),
            vec!["Billie Eilish", "Khalid"]
        );
    }

    #[test]
    fn conjunction_matching_is_case_insensitive() {
        assert_eq!(
            split_artist_credit("Drake FEATURING Rihanna"),
            vec!["Drake", "Rihanna"]
        );
    }

    #[test]
    fn mixed_case_and_stray_punctuation() {
        assert_eq!(split_artist_credit("A&b, & C."), vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_credit_yields_empty_list() {
        assert_eq!(split_artist_credit(""), Vec::<String>::new());
    }

    #[test]
    fn conjunctions_and_punctuation_only_collapse_to_empty() {
        assert_eq!(split_artist_credit("feat. & and"), Vec::<String>::new());
    }

    #[test]
    fn consecutive_conjunctions_one_boundary_each() {
        assert_eq!(
            split_artist_credit("A feat. B and C"),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn conjunction_words_inside_other_words_do_not_split() {
        // "Withers" contains "with" and "Swift" contains "ft"; the word
        // boundary must keep both whole.
        assert_eq!(split_artist_credit("Bill Withers"), vec!["Bill Withers"]);
        assert_eq!(split_artist_credit("Taylor Swift"), vec!["Taylor Swift"]);
    }

    #[test]
    fn ampersand_without_surrounding_space_splits() {
        assert_eq!(
            split_artist_credit("Simon&Garfunkel"),
            vec!["Simon", "Garfunkel"]
        );
    }

    #[test]
    fn order_encodes_precedence() {
        assert_eq!(
            split_artist_credit("Y with X featuring Z"),
            vec!["Y", "X", "Z"]
        );
    }

    #[test]
    fn title_casing_lowercases_the_rest() {
        assert_eq!(split_artist_credit("dua LIPA"), vec!["Dua Lipa"]);
    }

    #[test]
    fn periods_and_commas_are_removed_not_replaced() {
        // "J. Cole" → "J Cole", not "J  Cole" or "J.Cole".
        assert_eq!(split_artist_credit("J. Cole"), vec!["J Cole"]);
    }

    // -----------------------------------------------------------------------
    // build_snapshot
    // -----------------------------------------------------------------------

    #[test]
    fn snapshot_ranks_are_contiguous_from_one() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snapshot = build_snapshot(
            date,
            vec![entry("A", "X"), entry("B", "Y"), entry("C", "Z")],
        );
        let ranks: Vec<u32> = snapshot.records().iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn snapshot_records_all_carry_the_snapshot_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let snapshot = build_snapshot(date, vec![entry("A", "X"), entry("B", "Y")]);
        assert!(snapshot.records().iter().all(|r| r.date == date));
    }

    #[test]
    fn snapshot_keeps_title_verbatim_and_primary_artist() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snapshot = build_snapshot(date, vec![entry("Song A", "X feat. Y")]);
        assert_eq!(snapshot.records()[0].track_name, "Song A");
        assert_eq!(snapshot.records()[0].artist_name, "X");
    }

    #[test]
    fn empty_artist_credit_falls_back_to_none_label() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snapshot = build_snapshot(date, vec![entry("Song B", "")]);
        assert_eq!(snapshot.records()[0].artist_name, "None");
    }

    #[test]
    fn empty_entry_list_builds_empty_snapshot() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let snapshot = build_snapshot(date, vec![]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.date(), date);
    }

    #[test]
    fn snapshot_length_follows_the_fetched_list() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries: Vec<ChartEntry> = (0..37).map(|i| entry(&format!("T{i}"), "A")).collect();
        let snapshot = build_snapshot(date, entries);
        assert_eq!(snapshot.len(), 37);
        assert_eq!(snapshot.records().last().unwrap().rank, 37);
    }
}
