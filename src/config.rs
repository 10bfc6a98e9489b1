// src/config.rs

use crate::{
    constants,
    error::{AppError, AppResult},
    models::RecordingType,
};
use anyhow::Context;
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// WIS credential pair shared by every course job of a run.
#[derive(Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

// The CLI arguments get debug-logged; keep the password out of that.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// One course to download, already validated.
#[derive(Debug, Clone)]
pub struct CourseJob {
    /// URL of the recording list for the course in a specific semester.
    pub video_url: String,
    /// Existing directory the recordings are written into.
    pub video_dir: PathBuf,
    pub video_type: RecordingType,
    /// Skip further recordings of a day that already yielded a download.
    pub one_video_per_day: bool,
}

/// Portal endpoints, overridable so tests can point the pipeline at a mock
/// server.
#[derive(Debug, Clone)]
pub struct PortalEndpoints {
    pub login_url: String,
    pub video_base_url: String,
}

impl Default for PortalEndpoints {
    fn default() -> Self {
        Self {
            login_url: constants::LOGIN_PAGE_URL.into(),
            video_base_url: constants::VIDEO_BASE_URL.into(),
        }
    }
}

/// On-disk schema of the batch config file. Unknown keys are rejected so a
/// typo in an option name fails loudly instead of silently defaulting.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    pub user: String,
    pub password: String,
    pub videos: Vec<BatchCourseEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchCourseEntry {
    pub url: String,
    pub dir_path: PathBuf,
    pub video_type: RecordingType,
    /// Courses can run more than once per day with the same content; opt in
    /// per course to skip the repeats. Defaults to off.
    #[serde(default)]
    pub one_video_per_day: bool,
}

impl BatchConfig {
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).with_context(|| {
            format!(
                "config file '{}' does not exist or is not accessible",
                path.display()
            )
        })?;
        let config: BatchConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.videos.is_empty() {
            return Err(AppError::Config("no videos configured".into()));
        }
        for entry in &self.videos {
            if !entry.dir_path.is_dir() {
                return Err(AppError::Config(format!(
                    "bad video directory: '{}'",
                    entry.dir_path.display()
                )));
            }
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }

    pub fn jobs(&self) -> Vec<CourseJob> {
        self.videos
            .iter()
            .map(|entry| CourseJob {
                video_url: entry.url.clone(),
                video_dir: entry.dir_path.clone(),
                video_type: entry.video_type,
                one_video_per_day: entry.one_video_per_day,
            })
            .collect()
    }
}
