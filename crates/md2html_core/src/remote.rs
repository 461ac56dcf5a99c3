//! Client for the remote markdown conversion service.
//!
//! The service takes `{"text": "<markdown>"}` as a JSON body and answers with
//! the rendered HTML fragment, which is what GitHub's `/markdown` endpoint does.

use crate::error::{Error, Result};
use serde::Serialize;
use std::time::Duration;

/// GitHub's markdown rendering endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/markdown";

/// GitHub rejects API requests without a user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("md2html/", env!("CARGO_PKG_VERSION"));

/// Converts markdown text to an HTML fragment.
pub trait MarkdownConverter {
    fn convert(&self, markdown: &str) -> Result<String>;
}

/// Options for [`ConversionClient`].
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Total request timeout, `None` waits forever.
    pub timeout: Option<Duration>,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ConversionRequest<'a> {
    text: &'a str,
}

/// Blocking HTTP client for a markdown conversion API.
///
/// Each [`convert`](MarkdownConverter::convert) call performs exactly one
/// request, there is no retry.
#[derive(Debug, Clone)]
pub struct ConversionClient {
    client: reqwest::blocking::Client,
    api_url: String,
}

impl ConversionClient {
    pub fn new(api_url: impl Into<String>, options: ConversionOptions) -> Result<Self> {
        let ConversionOptions {
            timeout,
            user_agent,
        } = options;

        // The blocking client times out after 30s unless told otherwise.
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

impl MarkdownConverter for ConversionClient {
    fn convert(&self, markdown: &str) -> Result<String> {
        tracing::debug!(
            api_url = %self.api_url,
            markdown_len = markdown.len(),
            "Sending markdown to the conversion service"
        );

        let response = self
            .client
            .post(&self.api_url)
            .json(&ConversionRequest { text: markdown })
            .send()?;

        let status = response.status();

        if !status.is_success() {
            // Keep the status even when the error body can't be read.
            let body = response
                .text()
                .unwrap_or_else(|err| format!("<unreadable response body: {err}>"));
            return Err(Error::Conversion {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;

        tracing::debug!(status = %status, html_len = body.len(), "Received converted markdown");

        Ok(body)
    }
}
