use std::time::Duration;

use reqwest::{blocking, Url};

use crate::{error::WikiError, models::Page, request::ApiUrl, response};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("wiki/", env!("CARGO_PKG_VERSION"), " (https://dee.ink)");

#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Certificate validation; turning it off is meant for self-signed wikis.
    pub verify_tls: bool,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Issues single GET requests against a MediaWiki API.
#[derive(Debug, Clone)]
pub struct Client {
    http: blocking::Client,
}

impl Client {
    pub fn new(options: &ClientOptions) -> Result<Self, WikiError> {
        if !options.verify_tls {
            log::warn!("TLS certificate verification is disabled");
        }
        let http = blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .danger_accept_invalid_certs(!options.verify_tls)
            .build()?;
        Ok(Self { http })
    }

    /// Fetches the raw response body for `url`.
    pub fn fetch(&self, url: &ApiUrl) -> Result<Vec<u8>, WikiError> {
        let target =
            Url::parse(url.as_str()).map_err(|err| WikiError::invalid_url(url.as_str(), err))?;
        if !matches!(target.scheme(), "http" | "https") {
            return Err(WikiError::invalid_url(
                url.as_str(),
                format!("unsupported scheme '{}'", target.scheme()),
            ));
        }

        log::debug!("GET {target}");
        let response = self.http.get(target).send()?.error_for_status()?;
        log::debug!("status {}", response.status());

        let body = response.bytes()?;
        log::debug!("received {} bytes", body.len());
        Ok(body.to_vec())
    }

    /// Fetches and parses the page behind `url`.
    pub fn page(&self, url: &ApiUrl) -> Result<Page, WikiError> {
        let body = self.fetch(url)?;
        response::parse(&body)
    }
}
