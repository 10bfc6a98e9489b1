// src/downloader/writer.rs

use crate::{
    client::PortalClient,
    constants,
    error::{AppError, AppResult},
    models::DownloadOutcome,
    ui,
};
use futures::StreamExt;
use log::{debug, warn};
use reqwest::header::CONTENT_DISPOSITION;
use std::io::Write;
use std::{fs, io::BufWriter, path::Path};

/// Streams one recording to `video_dir/<base_name>.<ext>`.
///
/// The `Content-Disposition` header doubles as the quota signal: when the
/// portal's daily limit is hit it serves an HTML notice without the header
/// instead of the video, so the header is inspected before any byte lands on
/// disk. Existing files are never reopened or truncated.
pub async fn write_video(
    client: &PortalClient,
    url: &str,
    video_dir: &Path,
    base_name: &str,
) -> AppResult<DownloadOutcome> {
    let response = client.get_raw(url).await?;

    let Some(disposition) = response.headers().get(CONTENT_DISPOSITION) else {
        warn!("no content disposition for {url}; treating as quota notice");
        return Ok(DownloadOutcome::QuotaReached);
    };
    let disposition = disposition.to_str().unwrap_or_default().to_string();
    let extension = extension_from_disposition(&disposition)
        .ok_or_else(|| AppError::MalformedDisposition(disposition.clone()))?;

    let path = video_dir.join(format!("{base_name}.{extension}"));
    if path.exists() {
        debug!("{} already exists, leaving it untouched", path.display());
        return Ok(DownloadOutcome::AlreadyExists(path));
    }

    let response = response.error_for_status()?;
    let total = response.content_length();

    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)?;
    let mut sink = BufWriter::with_capacity(constants::DOWNLOAD_CHUNK_SIZE, file);

    let pbar = match total {
        Some(len) => ui::new_bytes_progress_bar(len),
        None => ui::new_bytes_spinner(),
    };

    // A mid-stream failure leaves the partial file in place; the next run
    // sees it as existing, which the operator resolves by hand.
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        sink.write_all(&chunk)?;
        pbar.inc(chunk.len() as u64);
    }
    sink.flush()?;
    pbar.finish_and_clear();

    debug!("wrote {}", path.display());
    Ok(DownloadOutcome::Written(path))
}

/// Pulls the target extension out of a `Content-Disposition` header. The
/// portal quotes the filename, so the value between the first pair of double
/// quotes is the filename; everything after its final period is the
/// extension. Dotted basenames like `lecture.v2.mp4` keep only `mp4`.
fn extension_from_disposition(disposition: &str) -> Option<String> {
    let filename = disposition.split('"').nth(1)?;
    let (_, extension) = filename.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(extension.to_string())
}
