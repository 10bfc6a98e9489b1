// src/extractor/detail.rs

use crate::error::{AppError, AppResult};
use crate::models::{RecordingCandidate, RecordingDetail};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static DOWNLOAD_ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a.button").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

static CREATED_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Záznam vytvořen").unwrap());

/// Extracts the direct download link and naming metadata from a record
/// detail page. The creation timestamp sits in the table cell *following*
/// the labelled cell, so extraction walks to the next sibling element, not
/// the matched cell itself.
pub fn fields(html: &str, candidate: &RecordingCandidate) -> AppResult<RecordingDetail> {
    let document = Html::parse_document(html);

    let download_url = document
        .select(&DOWNLOAD_ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| {
            AppError::UnexpectedPageStructure("detail page without a download button".into())
        })?
        .to_string();

    let course_title = document
        .select(&TITLE)
        .next()
        .map(|h3| h3.text().collect::<String>().trim().to_string())
        .ok_or_else(|| {
            AppError::UnexpectedPageStructure("detail page without a course heading".into())
        })?;

    let created = document
        .select(&CELL)
        .find(|td| CREATED_LABEL_RE.is_match(&td.text().collect::<String>()))
        .and_then(|td| td.next_siblings().filter_map(ElementRef::wrap).next())
        .map(|td| td.text().collect::<String>().trim().to_string())
        .ok_or_else(|| {
            AppError::UnexpectedPageStructure("detail page without a creation timestamp cell".into())
        })?;

    Ok(RecordingDetail {
        download_url,
        course_title,
        created,
        type_label: candidate.type_label.clone(),
    })
}
