// src/models.rs

use clap::ValueEnum;
use regex::Regex;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::LazyLock;

// The portal labels its entries in Czech; a recording is either a lecture
// ("přednáška") or a demonstration exercise ("demonstrační cvičení"), with
// board-only captures qualified by "- plátno". The patterns are anchored so
// labels of unrelated event types never match.
static BOARD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:přednáška|demonstrační cvičení) - plátno,").unwrap());
static FULL_VIEW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:přednáška|demonstrační cvičení),").unwrap());
static BOTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:přednáška|demonstrační cvičení)").unwrap());

/// Which capture variant of a recording to download. Lectures are captured
/// twice: a full view of the hall including the instructor, and a capture of
/// the presentation surface only.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingType {
    Board,
    #[value(name = "full_view")]
    FullView,
    Both,
}

impl RecordingType {
    /// Classifies a listing type label. This is the only filtering gate
    /// before a detail page fetch is issued.
    pub fn matches(self, label: &str) -> bool {
        match self {
            RecordingType::Board => BOARD_RE.is_match(label),
            RecordingType::FullView => FULL_VIEW_RE.is_match(label),
            RecordingType::Both => BOTH_RE.is_match(label),
        }
    }
}

/// One row of the course listing page. Lives only while the listing is
/// being iterated.
#[derive(Debug, Clone)]
pub struct RecordingCandidate {
    /// Relative link to the detail page, e.g. "records.php?id=40841&categ_id=1315".
    pub detail_href: String,
    /// Human-readable type label, e.g. "přednáška, 29. 9. 2016".
    pub type_label: String,
}

/// Metadata scraped from a record detail page. Only constructed for
/// candidates that passed classification.
#[derive(Debug, Clone)]
pub struct RecordingDetail {
    /// Direct download link, e.g. "https://video3.fit.vutbr.cz/av/record-download.php?id=40841".
    pub download_url: String,
    pub course_title: String,
    /// Raw creation timestamp text, e.g. "29. 9. 2016, 08:00 - 09:55".
    pub created: String,
    pub type_label: String,
}

/// What happened to a single recording's file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Written(PathBuf),
    /// A same-named file was already on disk; it is never reopened or
    /// truncated.
    AlreadyExists(PathBuf),
    /// The response carried no attachment disposition: the portal's daily
    /// download limit is exhausted. An operating condition, not an error.
    QuotaReached,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORTAL_LABELS: &[&str] = &[
        "přednáška, 29. 9. 2016",
        "přednáška - plátno, 29. 9. 2016",
        "demonstrační cvičení, 8. 12. 2016",
        "demonstrační cvičení - plátno, 8. 12. 2016",
    ];

    #[test]
    fn board_matches_are_a_subset_of_both() {
        for label in PORTAL_LABELS {
            if RecordingType::Board.matches(label) {
                assert!(
                    RecordingType::Both.matches(label),
                    "board matched but both did not: {label}"
                );
            }
        }
    }

    #[test]
    fn full_view_excludes_board_captures() {
        assert!(RecordingType::FullView.matches("přednáška, 29. 9. 2016"));
        assert!(!RecordingType::FullView.matches("přednáška - plátno, 29. 9. 2016"));
    }

    #[test]
    fn board_requires_the_screen_qualifier() {
        assert!(RecordingType::Board.matches("demonstrační cvičení - plátno, 8. 12. 2016"));
        assert!(!RecordingType::Board.matches("demonstrační cvičení, 8. 12. 2016"));
    }

    #[test]
    fn both_accepts_either_qualifier() {
        for label in PORTAL_LABELS {
            assert!(RecordingType::Both.matches(label));
        }
    }

    #[test]
    fn unrelated_event_labels_never_match() {
        for ty in [RecordingType::Board, RecordingType::FullView, RecordingType::Both] {
            assert!(!ty.matches("obhajoba, 29. 9. 2016"));
            // not anchored at the start -> no match
            assert!(!ty.matches("záznam: přednáška, 29. 9. 2016"));
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(RecordingType::Both.matches("Přednáška, 29. 9. 2016"));
        assert!(RecordingType::Board.matches("PŘEDNÁŠKA - PLÁTNO, 29. 9. 2016"));
    }
}
