// src/extractor/login.rs

use crate::{
    constants,
    error::{AppError, AppResult},
};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static HEADING: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());

/// The CAS service answers 200 to good and bad credentials alike; success is
/// decided by comparing the first level-1 heading against the exact
/// post-login banner. A missing heading counts as a failed login too.
pub fn verify_login(html: &str) -> AppResult<()> {
    let document = Html::parse_document(html);
    let banner = document
        .select(&HEADING)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string());

    match banner {
        Some(text) if text == constants::LOGIN_SUCCESS_BANNER => Ok(()),
        _ => Err(AppError::AuthenticationFailed),
    }
}
