//! Article page fetching from URLs, files, and stdin.
//!
//! This module provides functions for retrieving HTML content from an
//! HTTP/HTTPS URL, a local file, or standard input. The URL path carries
//! the response status code through so the extractor can refuse non-200
//! responses before parsing.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

use crate::{GrabError, Result};

/// HTTP client configuration for fetching article pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
        }
    }
}

/// A fetched page: response status plus the body decoded as UTF-8.
///
/// The body is decoded unconditionally (lossy), ignoring whatever charset
/// the server declared. CSDN serves UTF-8 regardless of its headers.
#[derive(Debug, Clone)]
pub struct Page {
    /// HTTP status code of the response.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl Page {
    /// Wraps already-loaded HTML (file or stdin input) as a 200 response.
    pub fn from_html(body: String) -> Self {
        Self { status: 200, body }
    }
}

/// Fetches an article page from a URL.
///
/// This function performs a single HTTP GET request with a browser-like
/// User-Agent and returns the status code together with the body. A non-200
/// status is not an error here; the extractor decides what to do with it.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<Page> {
    let parsed_url = Url::parse(url).map_err(|e| GrabError::InvalidUrl(e.to_string()))?;

    if parsed_url.scheme().is_empty() {
        return Err(GrabError::InvalidUrl(
            "URL must include a scheme (http:// or https://)".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(GrabError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                GrabError::Timeout { timeout: config.timeout }
            } else {
                GrabError::HttpError(e)
            }
        })?;

    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok(Page { status, body })
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(GrabError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(GrabError::from)
    }
}

/// Reads HTML content from standard input.
///
/// This function reads all available input from stdin until EOF.
/// Useful for piping a saved page from another command.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(GrabError::from)?;

    Ok(buffer)
}
