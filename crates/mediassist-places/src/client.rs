use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::types::{Clinic, TextSearchResponse};
use crate::ClinicSearch;

pub const PLACES_API_BASE: &str = "https://maps.googleapis.com/maps/api/place";

/// Number of raw results considered per search
pub const MAX_RESULTS: usize = 5;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Places text-search API
/// 
/// The API key travels as a query parameter, so the request URL is never
/// logged.
#[derive(Debug)]
pub struct PlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    max_results: usize,
}

impl PlacesClient {
    /// Create a client against the public endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }
    
    pub fn builder() -> PlacesClientBuilder {
        PlacesClientBuilder::default()
    }
    
    /// Text query sent for a user-entered location
    pub fn search_query(location: &str) -> String {
        format!("clinics or hospitals near {}", location.trim())
    }
    
    /// Run the raw text search
    pub async fn text_search(&self, query: &str) -> Result<TextSearchResponse> {
        let url = format!("{}/textsearch/json", self.base_url);
        
        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .send()
            .await
            .context("Error connecting to the Places API")?;
        
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Places API error ({}): {}", status, error_text);
        }
        
        let body = response
            .text()
            .await
            .context("Failed to read Places API response")?;
        let parsed: TextSearchResponse = serde_json::from_str(&body)
            .context("Error decoding JSON response from the Places API")?;
        
        match parsed.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => Ok(parsed),
            Some(status) => {
                let detail = parsed.error_message.as_deref().unwrap_or("no details");
                anyhow::bail!("Places API returned {}: {}", status, detail)
            }
        }
    }
}

#[async_trait]
impl ClinicSearch for PlacesClient {
    async fn find_clinics(&self, location: &str) -> Result<Vec<Clinic>> {
        let response = self.text_search(&Self::search_query(location)).await?;
        
        // Limit first, then drop incomplete entries
        let clinics: Vec<Clinic> = response
            .results
            .iter()
            .take(self.max_results)
            .filter_map(Clinic::from_place)
            .collect();
        
        tracing::debug!(
            raw_results = response.results.len(),
            clinics = clinics.len(),
            "Clinic search completed"
        );
        
        Ok(clinics)
    }
}

/// Builder for PlacesClient
#[derive(Default)]
pub struct PlacesClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_results: Option<usize>,
}

impl PlacesClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
    
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }
    
    pub fn build(self) -> Result<PlacesClient> {
        let api_key = self.api_key.context("API key is required")?;
        if api_key.trim().is_empty() {
            anyhow::bail!("API key is required");
        }
        
        let client = reqwest::Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .context("Failed to create HTTP client")?;
        
        Ok(PlacesClient {
            client,
            base_url: self
                .base_url
                .unwrap_or_else(|| PLACES_API_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            max_results: self.max_results.unwrap_or(MAX_RESULTS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_search_query() {
        assert_eq!(
            PlacesClient::search_query(" 226001 "),
            "clinics or hospitals near 226001"
        );
    }
    
    #[test]
    fn test_builder_defaults() {
        let client = PlacesClient::new("key").unwrap();
        assert_eq!(client.base_url, PLACES_API_BASE);
        assert_eq!(client.max_results, MAX_RESULTS);
    }
    
    #[test]
    fn test_builder_requires_key() {
        assert!(PlacesClient::builder().build().is_err());
        assert!(PlacesClient::new("").is_err());
    }
}
