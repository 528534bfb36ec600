use crate::errors::fetch_context;
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

/// Plain HTTP client; one GET per call, no retries
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body, failing on any non-success status
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.send_get_request(url).await?;
        Self::check_response_status(&response)?;
        response.text().await.with_context(|| fetch_context(url))
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| fetch_context(url))
    }

    fn check_response_status(response: &reqwest::Response) -> Result<()> {
        if !response.status().is_success() {
            anyhow::bail!("HTTP error: {} ({})", response.status(), response.url());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> reqwest::Response {
        let raw = ::http::Response::builder()
            .status(status)
            .body("<response/>")
            .unwrap();
        reqwest::Response::from(raw)
    }

    #[test]
    fn test_not_found_is_an_error() {
        let err = HttpClient::check_response_status(&response(404)).unwrap_err();

        assert!(err.to_string().starts_with("HTTP error: 404 Not Found"));
    }

    #[test]
    fn test_server_error_is_an_error() {
        let err = HttpClient::check_response_status(&response(503)).unwrap_err();

        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_success_passes() {
        assert!(HttpClient::check_response_status(&response(200)).is_ok());
    }

    #[test]
    fn test_client_builds_with_and_without_timeout() {
        assert!(HttpClient::new("LeaderboardTiers/1.0", None).is_ok());
        assert!(HttpClient::new("LeaderboardTiers/1.0", Some(5)).is_ok());
    }
}
