//! Status page loading from the modem, a saved file, or standard input
//!
//! The page is read whole before extraction starts, so a slow or failing
//! source never leaves the encoder with a half-assembled report.

use super::page_encoding::decode_page;
use crate::{Error, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Where the status page document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Fetched over HTTP from the modem
    Url(String),
    /// A saved copy of the page
    File(PathBuf),
    /// Piped in on standard input
    Stdin,
}

impl PageSource {
    /// Interpret an `--input` argument; `-` means standard input
    pub fn from_input(input: PathBuf) -> Self {
        if input.as_os_str() == "-" {
            PageSource::Stdin
        } else {
            PageSource::File(input)
        }
    }
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Url(url) => f.write_str(url),
            PageSource::File(path) => write!(f, "{}", path.display()),
            PageSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Read the whole document from `source`
///
/// `timeout` bounds the HTTP request only. Non-success HTTP statuses are
/// failures. The document is decoded with the charset declared by the HTTP
/// response or the page itself (see [`decode_page`]).
pub async fn load_page(source: &PageSource, timeout: Duration) -> Result<String> {
    let name = source.to_string();
    debug!("Loading status page from {}", name);

    let page = match source {
        PageSource::Url(url) => fetch_url(url, timeout).await?,
        PageSource::File(path) => {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| Error::fetch(&name, e.to_string()))?;
            decode_page(&bytes, None)
        }
        PageSource::Stdin => {
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .map_err(|e| Error::fetch(&name, e.to_string()))?;
            decode_page(&bytes, None)
        }
    };

    info!("Loaded {} bytes from {}", page.len(), name);
    Ok(page)
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::fetch(url, format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::fetch(url, e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::fetch(url, e.to_string()))?;

    debug!("{} responded with {}", url, response.status());

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::fetch(url, format!("failed to read response body: {}", e)))?;

    Ok(decode_page(&body, content_type.as_deref()))
}
