//! Foreman HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{ForemanError, Result};
use crate::foreman::models::{Host, HostsPage};
use crate::foreman::reference::ReferenceKind;
use crate::foreman::settings::Settings;

/// Foreman API client
pub struct ForemanClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ForemanClient {
    /// Create a new Foreman client with optimized connection settings
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_idle_timeout(Duration::from_secs(90))
            // TCP keepalive to maintain connections
            .tcp_keepalive(Duration::from_secs(60))
            // Timeouts
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        }
    }

    /// Build the URL for an API path (e.g. "hosts/7")
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            api::BASE_PATH.trim_start_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Create a GET request builder with credentials and headers
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", api::ACCEPT)
    }

    /// Parse an API response, returning error for non-success status codes
    async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(ForemanError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Probe the API once so an unreachable or misconfigured server fails fast
    pub async fn check_connection(&self) -> Result<()> {
        let url = self.api_url(api::STATUS);
        debug!("Checking Foreman API at: {}", url);

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| ForemanError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ForemanError::Unreachable(format!(
                "{} answered with status {}",
                url,
                response.status().as_u16()
            )));
        }
        Ok(())
    }

    /// Fetch a single record by kind and identifier
    ///
    /// Returns `None` for 404 and an error for other non-success codes.
    /// The v1 `{ "<kind>": {...} }` envelope is stripped when present.
    pub async fn show(&self, kind: ReferenceKind, id: &str) -> Result<Option<Value>> {
        let url = self.api_url(&format!(
            "{}/{}",
            kind.collection(),
            urlencoding::encode(id)
        ));
        debug!("Fetching {} '{}' from: {}", kind, id, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let body: Value = response.json().await?;
                Ok(Some(kind.unwrap_envelope(body)))
            }
            404 => Ok(None),
            status => Err(ForemanError::Api {
                status,
                message: format!("Failed to fetch {} '{}'", kind, id),
            }),
        }
    }

    /// Fetch one page of the host index
    pub async fn index_hosts(&self, page: u32) -> Result<Vec<Host>> {
        let url = format!(
            "{}?page={}&per_page={}",
            self.api_url(api::HOSTS),
            page,
            api::DEFAULT_PAGE_SIZE
        );
        debug!("Fetching hosts page {} from: {}", page, url);

        let response = self.get(&url).send().await?;
        let page_context = format!("hosts (page {})", page);
        let resp: HostsPage = self.parse_api_response(response, &page_context).await?;
        let hosts = resp.into_hosts();

        debug!("Page {} returned {} hosts", page, hosts.len());
        Ok(hosts)
    }

    /// Fetch every host, one page at a time, until a page comes back empty
    pub async fn fetch_all_hosts(&self) -> Result<Vec<Host>> {
        let mut all_hosts = Vec::new();
        let mut page = api::FIRST_PAGE;

        loop {
            let hosts = self.index_hosts(page).await?;
            if hosts.is_empty() {
                break;
            }
            all_hosts.extend(hosts);
            page += 1;
        }

        debug!(
            "Fetched {} hosts across {} pages",
            all_hosts.len(),
            page - api::FIRST_PAGE
        );
        Ok(all_hosts)
    }
}

#[cfg(test)]
impl ForemanClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Settings {
            base_url: base_url.to_string(),
            username: "admin".to_string(),
            password: "changeme".to_string(),
        })
    }
}
