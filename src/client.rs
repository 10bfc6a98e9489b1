// src/client.rs

use crate::{constants, error::AppResult};
use reqwest::{Client, IntoUrl, Response};

/// One HTTP session with the portal. Cookies are shared across requests, so
/// the CAS login carries over to the video servers. A client lives for
/// exactly one course run and is never shared between runs.
pub struct PortalClient {
    client: Client,
}

impl PortalClient {
    pub fn new() -> AppResult<Self> {
        // Certificate validation is deliberately disabled: the faculty video
        // servers present self-signed/legacy certificates that fail normal
        // verification. The opt-out is scoped to this client, which only
        // ever talks to the portal hosts.
        let client = Client::builder()
            .user_agent(constants::USER_AGENT)
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { client })
    }

    /// GET a page and return its body, failing on HTTP error statuses.
    pub async fn get_text<T: IntoUrl>(&self, url: T) -> AppResult<String> {
        let res = self.client.get(url).send().await?.error_for_status()?;
        Ok(res.text().await?)
    }

    /// GET without consuming the body or checking the status; the file
    /// writer inspects the quota signal in the headers before deciding what
    /// an error status means.
    pub async fn get_raw<T: IntoUrl>(&self, url: T) -> AppResult<Response> {
        Ok(self.client.get(url).send().await?)
    }

    /// POST a form and return the response body.
    pub async fn post_form<T: IntoUrl>(&self, url: T, form: &[(&str, &str)]) -> AppResult<String> {
        let res = self
            .client
            .post(url)
            .form(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }
}
