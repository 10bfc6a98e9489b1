// src/downloader/job.rs

use crate::{
    client::PortalClient,
    config::{CourseJob, Credentials, PortalEndpoints},
    downloader::{self, DuplicateTracker, RunReport},
    error::AppResult,
    extractor,
    models::DownloadOutcome,
    naming, symbols,
};
use log::{debug, info, warn};

/// Drives a single course through the whole pipeline: CAS login, listing
/// scrape, per-entry detail resolution and streaming download. One instance
/// owns one authenticated session; batch runs build a fresh one per course.
pub struct CourseDownloader {
    client: PortalClient,
    endpoints: PortalEndpoints,
    credentials: Credentials,
    job: CourseJob,
}

impl CourseDownloader {
    pub fn new(credentials: Credentials, job: CourseJob) -> AppResult<Self> {
        Self::with_endpoints(credentials, job, PortalEndpoints::default())
    }

    pub fn with_endpoints(
        credentials: Credentials,
        job: CourseJob,
        endpoints: PortalEndpoints,
    ) -> AppResult<Self> {
        Ok(Self {
            client: PortalClient::new()?,
            endpoints,
            credentials,
            job,
        })
    }

    pub async fn run(&self) -> AppResult<RunReport> {
        downloader::authenticate(&self.client, &self.endpoints.login_url, &self.credentials)
            .await?;
        println!("{} Signed in to the CAS service.", *symbols::OK);

        let listing = self.client.get_text(&self.job.video_url).await?;
        let candidates = extractor::listing::candidates(&listing)?;
        info!(
            "listing at {} has {} entries",
            self.job.video_url,
            candidates.len()
        );

        let mut report = RunReport::default();
        let mut seen_days = DuplicateTracker::default();

        for candidate in &candidates {
            if !self.job.video_type.matches(&candidate.type_label) {
                debug!("skipping entry of type {:?}", candidate.type_label);
                continue;
            }
            report.matched += 1;

            let detail_url = format!("{}{}", self.endpoints.video_base_url, candidate.detail_href);
            let page = match self.client.get_text(&detail_url).await {
                Ok(page) => page,
                Err(e) => {
                    warn!("detail page {detail_url} failed: {e}");
                    eprintln!("{} Could not open {detail_url}: {e}", *symbols::ERROR);
                    report.failed += 1;
                    continue;
                }
            };
            // A malformed page means the markup contract broke; stop the
            // course instead of mis-naming files.
            let detail = extractor::detail::fields(&page, candidate)?;
            let name = naming::normalize(&detail)?;

            if seen_days.should_skip(&name.date, self.job.one_video_per_day) {
                println!(
                    "{} Another recording from {} was already taken, skipping.",
                    *symbols::INFO,
                    name.date
                );
                report.skipped_duplicate_day += 1;
                continue;
            }
            if report.quota_reached {
                debug!("quota already hit, not attempting {}", name.base_name());
                report.skipped_after_quota += 1;
                continue;
            }

            println!(
                "{} Downloading recording from {} {} ({}).",
                *symbols::INFO,
                name.date,
                name.time_range,
                name.type_slug
            );
            match downloader::write_video(
                &self.client,
                &detail.download_url,
                &self.job.video_dir,
                &name.base_name(),
            )
            .await
            {
                Ok(DownloadOutcome::Written(path)) => {
                    println!("{} Saved {}.", *symbols::OK, path.display());
                    report.downloaded += 1;
                }
                Ok(DownloadOutcome::AlreadyExists(path)) => {
                    println!("{} {} already exists, skipping.", *symbols::INFO, path.display());
                    report.skipped_existing += 1;
                }
                Ok(DownloadOutcome::QuotaReached) => {
                    println!(
                        "{} The daily download limit is exhausted; remaining recordings are left for tomorrow.",
                        *symbols::WARN
                    );
                    report.quota_reached = true;
                }
                Err(e) => {
                    warn!("download of {} failed: {e}", detail.download_url);
                    eprintln!("{} Download failed: {e}", *symbols::ERROR);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
