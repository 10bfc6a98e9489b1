// src/naming.rs

use crate::error::{AppError, AppResult};
use crate::models::RecordingDetail;
use deunicode::deunicode;

/// Canonical, filesystem-safe file base name derived from scraped metadata.
/// Deterministic given identical input text. The extension is appended later
/// from the server's Content-Disposition, never guessed from content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedName {
    /// Lowercase three-letter course code, e.g. "iel".
    pub course: String,
    /// Reversed date tokens, e.g. "2016-9-29".
    pub date: String,
    /// Start/end time without spaces, e.g. "08:00-09:55".
    pub time_range: String,
    /// ASCII type slug, e.g. "demonstracni_cviceni-platno".
    pub type_slug: String,
}

impl NormalizedName {
    pub fn base_name(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.course, self.date, self.time_range, self.type_slug
        )
    }
}

/// Pure transformation of scraped detail metadata into a [`NormalizedName`].
/// The only failure is a creation timestamp without the date/time comma
/// separator; anything else passes through the token rules below verbatim.
pub fn normalize(detail: &RecordingDetail) -> AppResult<NormalizedName> {
    let course = detail
        .course_title
        .chars()
        .take(3)
        .collect::<String>()
        .to_lowercase();

    let (date_part, time_part) = detail.created.split_once(',').ok_or_else(|| {
        AppError::UnexpectedPageStructure(format!(
            "creation timestamp {:?} has no date/time separator",
            detail.created
        ))
    })?;

    // "29. 9. 2016" reverses token-wise to "2016-9-29". This is a literal
    // positional reversal of the portal's "D. M. YYYY" order, not calendar
    // parsing; unexpected date text yields a garbled but stable name.
    let date = date_part
        .replace('.', "")
        .split_whitespace()
        .rev()
        .collect::<Vec<_>>()
        .join("-");

    let time_range: String = time_part.chars().filter(|c| !c.is_whitespace()).collect();

    let label_head = detail.type_label.split(',').next().unwrap_or_default();
    let type_slug = label_head
        .split(" - ")
        .map(|piece| deunicode(&piece.replace(' ', "_")))
        .collect::<Vec<_>>()
        .join("-");

    Ok(NormalizedName {
        course,
        date,
        time_range,
        type_slug,
    })
}
