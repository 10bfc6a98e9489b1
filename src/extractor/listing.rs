// src/extractor/listing.rs

use crate::error::{AppError, AppResult};
use crate::models::RecordingCandidate;
use scraper::{Html, Selector};
use std::sync::LazyLock;

// The portal marks entry rows with an inline style attribute on the <li>;
// plain list items elsewhere on the page are navigation, not entries.
static ENTRY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li[style]").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static LABEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());

/// Extracts the candidate rows of a course listing page, in page order.
/// A styled row missing its detail link or type label means the markup
/// contract broke.
pub fn candidates(html: &str) -> AppResult<Vec<RecordingCandidate>> {
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    for item in document.select(&ENTRY) {
        let detail_href = item
            .select(&ANCHOR)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| {
                AppError::UnexpectedPageStructure("listing entry without a detail link".into())
            })?;
        let type_label = item
            .select(&LABEL)
            .next()
            .map(|div| div.text().collect::<String>().trim().to_string())
            .ok_or_else(|| {
                AppError::UnexpectedPageStructure("listing entry without a type label".into())
            })?;

        entries.push(RecordingCandidate {
            detail_href: detail_href.to_string(),
            type_label,
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <ul>
          <li style="margin: 2px">
            <a href="records.php?id=40841&amp;categ_id=1315">IEL 29. 9. 2016</a>
            <div>přednáška, 29. 9. 2016</div>
          </li>
          <li style="margin: 2px">
            <a href="records.php?id=40842&amp;categ_id=1315">IEL 29. 9. 2016</a>
            <div>přednáška - plátno, 29. 9. 2016</div>
          </li>
          <li><a href="index.php">zpět na seznam</a></li>
        </ul>"#;

    #[test]
    fn extracts_styled_rows_only() {
        let entries = candidates(LISTING).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].detail_href, "records.php?id=40841&categ_id=1315");
        assert_eq!(entries[0].type_label, "přednáška, 29. 9. 2016");
        assert_eq!(entries[1].type_label, "přednáška - plátno, 29. 9. 2016");
    }

    #[test]
    fn preserves_page_order() {
        let entries = candidates(LISTING).unwrap();
        assert!(entries[0].detail_href < entries[1].detail_href);
    }

    #[test]
    fn a_styled_row_without_a_link_is_a_contract_violation() {
        let html = r#"<ul><li style="margin: 2px"><div>přednáška, 29. 9. 2016</div></li></ul>"#;
        assert!(matches!(
            candidates(html),
            Err(AppError::UnexpectedPageStructure(_))
        ));
    }

    #[test]
    fn an_empty_listing_yields_no_candidates() {
        assert!(candidates("<html><body><ul></ul></body></html>").unwrap().is_empty());
    }
}
