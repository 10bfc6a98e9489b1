// src/cli.rs

use crate::models::RecordingType;
use clap::{Parser, ValueEnum, crate_version};
use std::path::PathBuf;

/// File-log verbosity.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about = "Download lecture recordings from FIT BUT courses",
    long_about = None,
    arg_required_else_help = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["video_url", "config_file"]),
))]
pub struct Cli {
    // --- Mode ---
    /// URL of the recording list for a course in a specific semester
    #[arg(
        short = 'l',
        long,
        value_name = "URL",
        help_heading = "Mode",
        requires_all = ["user", "video_dir"]
    )]
    pub video_url: Option<String>,
    /// YAML file describing multiple course jobs (for scheduled runs)
    #[arg(short = 'c', long, value_name = "FILE", help_heading = "Mode")]
    pub config_file: Option<PathBuf>,

    // --- Options (single-course mode) ---
    /// WIS username like "xlogin00"
    #[arg(short, long, help_heading = "Options")]
    pub user: Option<String>,
    /// WIS password; prompted interactively when omitted
    #[arg(short, long, help_heading = "Options")]
    pub password: Option<String>,
    /// Existing directory where downloaded recordings are stored
    #[arg(short = 'd', long, value_name = "DIR", help_heading = "Options")]
    pub video_dir: Option<PathBuf>,
    /// Which capture variant to download. Lectures are recorded twice: a full
    /// view including the instructor, and a board-only capture
    #[arg(
        short = 't',
        long,
        value_enum,
        default_value_t = RecordingType::Board,
        help_heading = "Options"
    )]
    pub video_type: RecordingType,
    /// Courses can run more than once per day with the same content; with
    /// this option repeats within a day are skipped
    #[arg(
        short = 'x',
        long = "one-video-per-day",
        action = clap::ArgAction::SetTrue,
        help_heading = "Options"
    )]
    pub one_video_per_day: bool,

    /// (hidden argument) File-log level, for debugging
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
