//! # Repo File Fetching
//!
//! Trunk repo files are downloaded from the RDO mirror over HTTP. The
//! `RepoFetcher` trait separates the pipeline from the transport so the
//! resolver and orchestrator can be exercised with canned responses.
//! `HttpFetcher` is the real implementation, built on a blocking `reqwest`
//! client: runs are sequential, so there is nothing to gain from async.
//!
//! There is no retry. Any non-success status ends the run with
//! `Error::Fetch`, and a transport failure with `Error::Network`.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Trait for retrieving repo file text - allows mocking in tests
pub trait RepoFetcher {
    /// Returns the body served at `url`.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches repo files over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network {
                url: String::new(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

impl RepoFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().map_err(|e| Error::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| Error::Network {
            url: url.to_string(),
            message: format!("Failed to read response body: {}", e),
        })
    }
}
