use std::time::Duration;

use crate::{error::MavgenError, traits::Fetch};
use url::Url;

/// True when `address` is an absolute `http`/`https` URL.
pub fn is_remote_address(address: &str) -> bool {
    Url::parse(address)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Reads definitions from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, MavgenError> {
        std::fs::read(address).map_err(|e| MavgenError::Fetch {
            address: address.to_string(),
            msg:     format!("unable to open: {}", e),
        })
    }
}

/// Downloads definitions with blocking HTTP GET requests.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl From<reqwest::blocking::Client> for HttpFetcher {
    fn from(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, address: &str) -> Result<Vec<u8>, MavgenError> {
        let fail = |msg: String| MavgenError::Fetch {
            address: address.to_string(),
            msg,
        };

        let res = self
            .client
            .get(address)
            .send()
            .map_err(|e| fail(format!("unable to download: {}", e)))?;

        if res.status() != reqwest::StatusCode::OK {
            return Err(fail(format!("bad return code: {}", res.status().as_u16())));
        }

        res.bytes()
            .map(|b| b.to_vec())
            .map_err(|e| fail(format!("unable to download: {}", e)))
    }
}

/// Picks the fetcher matching the kind of the root address.
pub fn fetcher_for(root: &str, timeout: Option<Duration>) -> Result<Box<dyn Fetch>, MavgenError> {
    if is_remote_address(root) {
        let fetcher = HttpFetcher::new(timeout).map_err(|e| MavgenError::Fetch {
            address: root.to_string(),
            msg:     format!("unable to create HTTP client: {}", e),
        })?;
        Ok(Box::new(fetcher))
    } else {
        Ok(Box::new(FileFetcher))
    }
}
