//! Fragment loading from a published site.

use std::time::Duration;

use reqwest::blocking::Client;
use uswds_blocks::FragmentLoader;

/// Fetches `<origin><path>.plain.html`.
pub struct HttpLoader {
    origin: String,
    client: Client,
}

impl HttpLoader {
    pub fn new(origin: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("uswds-blocks/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}.plain.html", self.origin, path.trim_matches('/'))
    }
}

impl FragmentLoader for HttpLoader {
    fn load(&self, path: &str) -> Option<String> {
        let url = self.url(path);
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                log::warn!("fetch {} failed: {}", url, e);
                return None;
            }
        };
        if !response.status().is_success() {
            log::warn!("fetch {}: HTTP {}", url, response.status());
            return None;
        }
        match response.text() {
            Ok(html) if !html.trim().is_empty() => Some(html),
            Ok(_) => {
                log::warn!("fetch {}: empty body", url);
                None
            }
            Err(e) => {
                log::warn!("fetch {}: {}", url, e);
                None
            }
        }
    }
}
