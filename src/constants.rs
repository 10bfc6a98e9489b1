// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const CONFIG_DIR_NAME: &str = ".fitvid-dl";
pub const LOG_FILE_NAME: &str = "fitvid-dl.log";
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";

/// Central campus authentication service. Visiting it unauthenticated hands
/// out the `cosign` session cookie the credential POST relies on.
pub const LOGIN_PAGE_URL: &str = "https://cas.fit.vutbr.cz/";

/// Base path the listing page's relative detail links are resolved against.
pub const VIDEO_BASE_URL: &str = "https://video1.fit.vutbr.cz/av/";

/// Exact text of the first <h1> the CAS service renders after a successful
/// login. The service answers 200 to bad credentials too, so this banner is
/// the only reliable success signal.
pub const LOGIN_SUCCESS_BANNER: &str = "Aplikace autentizované CAS FIT VUT";

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36";

pub const DOWNLOAD_CHUNK_SIZE: usize = 8192;
