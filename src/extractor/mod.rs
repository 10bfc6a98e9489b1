// src/extractor/mod.rs

// Page contracts for the portal, one adapter per page type. Every markup
// assumption (tag classes, heading text, sibling-cell walking) lives here;
// when the portal's layout changes these adapters are the only place to
// touch. Each adapter either extracts its fields or fails with
// `UnexpectedPageStructure` -- guessing on a changed layout is worse than
// stopping.

pub mod detail;
pub mod listing;
pub mod login;
