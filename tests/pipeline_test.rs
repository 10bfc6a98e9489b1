// tests/pipeline_test.rs

use fitvid_dl::{
    config::{CourseJob, Credentials, PortalEndpoints},
    downloader::CourseDownloader,
    error::AppResult,
    models::RecordingType,
};
use mockito::{Mock, Server};
use std::fs;
use std::path::Path;

const VIDEO_BYTES: &[u8] = b"not really an mp4, but bytes are bytes";

fn credentials() -> Credentials {
    Credentials {
        user: "xlogin00".into(),
        password: "secret".into(),
    }
}

fn endpoints(server: &Server) -> PortalEndpoints {
    PortalEndpoints {
        login_url: format!("{}/", server.url()),
        video_base_url: format!("{}/av/", server.url()),
    }
}

fn job(server: &Server, dir: &Path, video_type: RecordingType, one_per_day: bool) -> CourseJob {
    CourseJob {
        video_url: format!("{}/av/records-categ.php?id=1315", server.url()),
        video_dir: dir.to_path_buf(),
        video_type,
        one_video_per_day: one_per_day,
    }
}

async fn mock_login(server: &mut Server) {
    server
        .mock("GET", "/")
        .with_status(200)
        .with_body("<html><body><form></form></body></html>")
        .create_async()
        .await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_body(fs::read_to_string("tests/fixtures/cas_login_ok.html").unwrap())
        .create_async()
        .await;
}

async fn mock_listing(server: &mut Server) {
    server
        .mock("GET", "/av/records-categ.php?id=1315")
        .with_status(200)
        .with_body(fs::read_to_string("tests/fixtures/listing.html").unwrap())
        .create_async()
        .await;
}

async fn mock_detail(server: &mut Server, id: u32, created: &str, expect: usize) -> Mock {
    let body = fs::read_to_string("tests/fixtures/detail.html")
        .unwrap()
        .replace(
            "__DOWNLOAD_URL__",
            &format!("{}/av/record-download.php?id={id}", server.url()),
        )
        .replace("__STREAM_URL__", "stream.m3u8")
        .replace("__CREATED__", created);
    server
        .mock("GET", format!("/av/records.php?id={id}&categ_id=1315").as_str())
        .with_status(200)
        .with_body(body)
        .expect(expect)
        .create_async()
        .await
}

async fn mock_download(server: &mut Server, id: u32, expect: usize) -> Mock {
    server
        .mock("GET", format!("/av/record-download.php?id={id}").as_str())
        .with_status(200)
        .with_header("content-disposition", r#"attachment; filename="video.mp4""#)
        .with_body(VIDEO_BYTES)
        .expect(expect)
        .create_async()
        .await
}

#[tokio::test]
async fn test_full_view_run_downloads_only_matching_entries() -> AppResult<()> {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir()?;

    mock_login(&mut server).await;
    mock_listing(&mut server).await;
    let detail_1 = mock_detail(&mut server, 40841, "29. 9. 2016, 08:00 - 09:55", 1).await;
    // The board capture must be filtered out before any detail fetch.
    let detail_board = mock_detail(&mut server, 40842, "29. 9. 2016, 08:00 - 09:55", 0).await;
    let detail_2 = mock_detail(&mut server, 40901, "30. 9. 2016, 08:00 - 09:55", 1).await;
    mock_download(&mut server, 40841, 1).await;
    mock_download(&mut server, 40901, 1).await;

    let downloader = CourseDownloader::with_endpoints(
        credentials(),
        job(&server, dir.path(), RecordingType::FullView, false),
        endpoints(&server),
    )?;
    let report = downloader.run().await?;

    detail_1.assert_async().await;
    detail_board.assert_async().await;
    detail_2.assert_async().await;

    assert_eq!(report.matched, 2);
    assert_eq!(report.downloaded, 2);
    assert_eq!(report.failed, 0);
    assert!(!report.quota_reached);

    let first = dir.path().join("iel_2016-9-29_08:00-09:55_prednaska.mp4");
    let second = dir.path().join("iel_2016-9-30_08:00-09:55_prednaska.mp4");
    assert_eq!(fs::read(&first)?, VIDEO_BYTES);
    assert_eq!(fs::read(&second)?, VIDEO_BYTES);
    Ok(())
}

#[tokio::test]
async fn test_quota_notice_stops_further_download_attempts() -> AppResult<()> {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir()?;

    mock_login(&mut server).await;
    mock_listing(&mut server).await;
    mock_detail(&mut server, 40841, "29. 9. 2016, 08:00 - 09:55", 1).await;
    mock_detail(&mut server, 40901, "30. 9. 2016, 08:00 - 09:55", 1).await;

    // No attachment disposition: the portal serves its quota notice page.
    server
        .mock("GET", "/av/record-download.php?id=40841")
        .with_status(200)
        .with_body("<html><body>Denní limit stahování byl vyčerpán.</body></html>")
        .create_async()
        .await;
    let second_download = mock_download(&mut server, 40901, 0).await;

    let downloader = CourseDownloader::with_endpoints(
        credentials(),
        job(&server, dir.path(), RecordingType::FullView, false),
        endpoints(&server),
    )?;
    let report = downloader.run().await?;

    second_download.assert_async().await;
    assert!(report.quota_reached);
    assert_eq!(report.downloaded, 0);
    assert_eq!(report.skipped_after_quota, 1);
    assert!(
        fs::read_dir(dir.path())?.next().is_none(),
        "the quota notice must not leave any file behind"
    );
    Ok(())
}

#[tokio::test]
async fn test_one_video_per_day_skips_a_second_recording_of_the_day() -> AppResult<()> {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir()?;

    mock_login(&mut server).await;
    mock_listing(&mut server).await;
    mock_detail(&mut server, 40841, "29. 9. 2016, 08:00 - 09:55", 1).await;
    // Same calendar day as the first entry, so its download is skipped.
    mock_detail(&mut server, 40842, "29. 9. 2016, 10:00 - 11:55", 1).await;
    mock_detail(&mut server, 40901, "30. 9. 2016, 08:00 - 09:55", 1).await;
    mock_download(&mut server, 40841, 1).await;
    let duplicate_download = mock_download(&mut server, 40842, 0).await;
    mock_download(&mut server, 40901, 1).await;

    let downloader = CourseDownloader::with_endpoints(
        credentials(),
        job(&server, dir.path(), RecordingType::Both, true),
        endpoints(&server),
    )?;
    let report = downloader.run().await?;

    duplicate_download.assert_async().await;
    assert_eq!(report.matched, 3);
    assert_eq!(report.downloaded, 2);
    assert_eq!(report.skipped_duplicate_day, 1);
    Ok(())
}

#[tokio::test]
async fn test_an_existing_file_is_never_touched_again() -> AppResult<()> {
    let mut server = Server::new_async().await;
    let dir = tempfile::tempdir()?;

    mock_login(&mut server).await;
    mock_listing(&mut server).await;
    mock_detail(&mut server, 40841, "29. 9. 2016, 08:00 - 09:55", 1).await;
    mock_detail(&mut server, 40901, "30. 9. 2016, 08:00 - 09:55", 1).await;
    mock_download(&mut server, 40841, 1).await;
    mock_download(&mut server, 40901, 1).await;

    let existing = dir.path().join("iel_2016-9-29_08:00-09:55_prednaska.mp4");
    fs::write(&existing, b"bytes from an earlier run")?;

    let downloader = CourseDownloader::with_endpoints(
        credentials(),
        job(&server, dir.path(), RecordingType::FullView, false),
        endpoints(&server),
    )?;
    let report = downloader.run().await?;

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.skipped_existing, 1);
    assert_eq!(
        fs::read(&existing)?,
        b"bytes from an earlier run",
        "a pre-existing file must keep its original content"
    );
    Ok(())
}
