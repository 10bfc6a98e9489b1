// src/workflows.rs

use crate::{
    cli::Cli,
    config::{BatchConfig, CourseJob, Credentials},
    downloader::CourseDownloader,
    error::{AppError, AppResult},
    symbols, ui,
};
use colored::*;
use log::{error, info};

/// Single-course mode: arguments come from the command line and the password
/// may be prompted interactively.
pub async fn run_single(args: &Cli) -> AppResult<()> {
    // clap guarantees these in single-course mode (mode group + requires_all)
    let video_url = args.video_url.clone().unwrap();
    let video_dir = args.video_dir.clone().unwrap();
    let user = args.user.clone().unwrap();

    if !video_dir.is_dir() {
        return Err(AppError::Config(format!(
            "bad video directory: '{}'",
            video_dir.display()
        )));
    }

    let password = match &args.password {
        Some(password) => password.clone(),
        None => ui::prompt_hidden(&format!("WIS password for {user}"))?,
    };

    let credentials = Credentials { user, password };
    let job = CourseJob {
        video_url,
        video_dir,
        video_type: args.video_type,
        one_video_per_day: args.one_video_per_day,
    };

    let report = CourseDownloader::new(credentials, job)?.run().await?;
    report.print();
    Ok(())
}

/// Batch mode: one YAML file describes the credentials and every course to
/// sweep. A course that fails is reported and the sweep moves on; only a
/// broken config file aborts the run.
pub async fn run_batch(args: &Cli) -> AppResult<()> {
    // clap guarantees this in batch mode
    let config_path = args.config_file.as_deref().unwrap();
    let config = BatchConfig::load(config_path)?;
    let credentials = config.credentials();
    let jobs = config.jobs();
    info!("batch run over {} course(s)", jobs.len());

    let total = jobs.len();
    let mut failed_courses = 0usize;
    for (index, job) in jobs.into_iter().enumerate() {
        ui::print_header(&format!(
            "Course {}/{} — {}",
            index + 1,
            total,
            job.video_url
        ));

        // Fresh session per course; a stale CAS cookie from a failed course
        // must not leak into the next one.
        let run = async {
            CourseDownloader::new(credentials.clone(), job)?.run().await
        };
        match run.await {
            Ok(report) => report.print(),
            Err(e) => {
                failed_courses += 1;
                error!("course failed: {e}");
                eprintln!("{} {}", *symbols::ERROR, e.to_string().red());
            }
        }
    }

    if failed_courses > 0 {
        println!(
            "\n{} {} of {} course(s) did not finish cleanly; see the log for details.",
            *symbols::WARN,
            failed_courses,
            total
        );
    }
    Ok(())
}
