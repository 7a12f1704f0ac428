use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};

const ACCEPT: &str = "text/html, application/xhtml+xml;q=0.9, */*;q=0.1";

#[derive(Debug)]
pub struct FetchedPage {
    /// The URL as requested; relative links resolve against it.
    pub url: Url,
    pub body: String,
}

/// Blocking HTTP GET with status checking.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        info!(url = %parsed, "fetching");
        let response = self
            .client
            .get(parsed.clone())
            .header("Accept", ACCEPT)
            .send()
            .map_err(|source| Error::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(url = %parsed, bytes = body.len(), "fetched");

        Ok(FetchedPage { url: parsed, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_invalid_url_is_a_fetch_error() {
        let fetcher = Fetcher::new().unwrap();
        let err = fetcher.fetch("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[test]
    fn test_success_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><body>hello</body></html>")
            .create();

        let url = format!("{}/page", server.url());
        let page = Fetcher::new().unwrap().fetch(&url).unwrap();

        mock.assert();
        assert_eq!(page.url.as_str(), url);
        assert!(page.body.contains("hello"));
    }

    #[test]
    fn test_non_success_status() {
        let mut server = mockito::Server::new();
        let _gone = server.mock("GET", "/gone").with_status(500).create();

        let err = Fetcher::new()
            .unwrap()
            .fetch(&format!("{}/gone", server.url()))
            .unwrap_err();

        match err {
            Error::Status { status, .. } => assert_eq!(status.as_u16(), 500),
            other => panic!("unexpected error: {other}"),
        }
    }
}
