// src/downloader/mod.rs

mod auth;
mod job;
mod writer;

pub use auth::authenticate;
pub use job::CourseDownloader;
pub use writer::write_video;

use crate::symbols;
use colored::*;
use log::info;
use std::collections::HashSet;

/// Calendar days that already yielded a download in this run. Run-local and
/// never persisted; the pipeline is single-threaded, so plain mutable state
/// is enough.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    days: HashSet<String>,
}

impl DuplicateTracker {
    /// Returns true when the download step should be skipped. When the
    /// guard is enabled and the day is new, the day is recorded as taken.
    pub fn should_skip(&mut self, date: &str, one_per_day: bool) -> bool {
        if !one_per_day {
            return false;
        }
        !self.days.insert(date.to_string())
    }
}

/// Per-course outcome counters, printed as the run report.
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Entries that passed type classification.
    pub matched: usize,
    pub downloaded: usize,
    pub skipped_existing: usize,
    pub skipped_duplicate_day: usize,
    /// Entries enumerated after the daily limit was hit.
    pub skipped_after_quota: usize,
    pub failed: usize,
    pub quota_reached: bool,
}

impl RunReport {
    pub fn print(&self) {
        info!(
            "run report: matched={} downloaded={} existing={} duplicate_day={} after_quota={} failed={} quota_reached={}",
            self.matched,
            self.downloaded,
            self.skipped_existing,
            self.skipped_duplicate_day,
            self.skipped_after_quota,
            self.failed,
            self.quota_reached
        );

        println!();
        if self.quota_reached {
            println!(
                "{} The portal's daily download limit was reached; {} recording(s) wait for a future run.",
                *symbols::WARN,
                self.skipped_after_quota + 1
            );
        }
        let skipped = self.skipped_existing + self.skipped_duplicate_day + self.skipped_after_quota;
        println!(
            "{} | {} | {}",
            format!("downloaded: {}", self.downloaded).green(),
            format!("skipped: {}", skipped).yellow(),
            format!("failed: {}", self.failed).red()
        );
    }
}
