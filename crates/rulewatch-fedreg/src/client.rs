//! HTTP client for the Federal Register documents-search API.
//!
//! Wraps `reqwest` with a fixed per-request timeout, builds the proposed-rule
//! search query, and deserializes each page into [`DocumentsPage`].

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};

use crate::error::FedRegError;
use crate::types::DocumentsPage;

const DEFAULT_BASE_URL: &str = "https://www.federalregister.gov/api/v1/";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_USER_AGENT: &str = "rulewatch/0.1 (regulatory-tracking)";

/// Agency filter applied to every search.
pub const AGENCY_SLUG: &str = "environmental-protection-agency";

/// Federal Register document type code for proposed rules.
pub const PROPOSED_RULE_TYPE: &str = "PRORULE";

/// Client for the Federal Register `documents.json` endpoint.
///
/// Use [`FedRegClient::new`] for production or [`FedRegClient::with_base_url`]
/// to point at a mock server in tests.
pub struct FedRegClient {
    client: Client,
    endpoint: Url,
}

impl FedRegClient {
    /// Creates a client pointed at the production API with the default
    /// 20-second timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FedRegError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new() -> Result<Self, FedRegError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }

    /// Creates a client with a custom base URL, timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`FedRegError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`FedRegError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, FedRegError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("documents.json"))
            .map_err(|e| FedRegError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Fetches one page of EPA proposed rules published on or after
    /// `start_date`, newest first.
    ///
    /// # Errors
    ///
    /// - [`FedRegError::Http`] on network failure, timeout, or non-2xx status.
    /// - [`FedRegError::Deserialize`] if the body is not the expected shape.
    pub async fn fetch_page(
        &self,
        start_date: NaiveDate,
        per_page: u32,
        page: u32,
    ) -> Result<DocumentsPage, FedRegError> {
        let url = self.build_url(start_date, per_page, page);
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| FedRegError::Deserialize {
            context: format!("documents.json(page={page})"),
            source: e,
        })
    }

    /// Builds the search URL with percent-encoded query parameters.
    pub(crate) fn build_url(&self, start_date: NaiveDate, per_page: u32, page: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string())
            .append_pair("order", "newest")
            .append_pair("conditions[agencies][]", AGENCY_SLUG)
            .append_pair("conditions[type][]", PROPOSED_RULE_TYPE)
            .append_pair(
                "conditions[publication_date][gte]",
                &start_date.format("%Y-%m-%d").to_string(),
            )
            .append_pair("page", &page.to_string());
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, FedRegError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FedRegError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
