// src/downloader/auth.rs

use crate::{client::PortalClient, config::Credentials, error::AppResult, extractor};
use log::{debug, info};

/// Signs the shared client's cookie jar into the CAS service.
///
/// The handshake has two legs: a plain GET that makes the service plant its
/// session cookie, then a form POST carrying the credentials plus the hidden
/// fields the login form submits. The POST answers 200 either way, so the
/// response body is checked for the post-login banner.
pub async fn authenticate(
    client: &PortalClient,
    login_url: &str,
    credentials: &Credentials,
) -> AppResult<()> {
    debug!("priming CAS session cookie at {login_url}");
    client.get_text(login_url).await?;

    let form: &[(&str, &str)] = &[
        ("login", &credentials.user),
        ("password", &credentials.password),
        ("doLogin", "Log In"),
        ("required", ""),
        ("ref", ""),
        ("service", ""),
    ];
    let body = client.post_form(login_url, form).await?;

    extractor::login::verify_login(&body)?;
    info!("CAS login succeeded for user {}", credentials.user);
    Ok(())
}
