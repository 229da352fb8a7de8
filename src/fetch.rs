use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info, warn};
use url::{ParseError, Url};

use crate::config::Settings;
use crate::error::{Result, TarsierError};

/// Something that can turn a URL into page text.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Blocking HTTP fetcher with an explicit total timeout. No retries.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let timeout = settings.timeout();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|e| TarsierError::Transport {
                url: "(client setup)".to_string(),
                source: e,
            })?;
        Ok(HttpFetcher { client, timeout })
    }

    fn classify(&self, url: &Url, e: reqwest::Error) -> TarsierError {
        if e.is_timeout() {
            TarsierError::FetchTimeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            TarsierError::Transport {
                url: url.to_string(),
                source: e,
            }
        }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        info!("Fetching {}", url);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| self.classify(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered {}, reading body anyway", url, status);
        }

        let body = resp.text().map_err(|e| self.classify(url, e))?;
        debug!(bytes = body.len(), %status, "Fetched {}", url);
        Ok(body)
    }
}

/// Parse a user-supplied URL, prepending `https://` when no scheme is given.
pub fn normalize_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let invalid = |reason: String| TarsierError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = match Url::parse(raw) {
        // "localhost:8080" parses with scheme "localhost"
        Ok(u) if !is_web_scheme(u.scheme()) && !raw.contains("://") => {
            Url::parse(&format!("https://{}", raw))
        }
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", raw)),
        other => other,
    }
    .map_err(|e| invalid(e.to_string()))?;

    if !is_web_scheme(parsed.scheme()) {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(parsed)
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}
