//! Clinic search over the Places text-search endpoint.
//!
//! [`PlacesClient`] issues one `textsearch` call per lookup and maps the raw
//! results to display-ready [`Clinic`] entries with a maps link.

pub mod client;
pub mod types;

pub use client::{PlacesClient, PlacesClientBuilder, PLACES_API_BASE, MAX_RESULTS};
pub use types::{Clinic, PlaceResult, TextSearchResponse};

use anyhow::Result;
use async_trait::async_trait;

/// Anything that can turn a free-text location into a list of clinics
#[async_trait]
pub trait ClinicSearch: Send + Sync {
    async fn find_clinics(&self, location: &str) -> Result<Vec<Clinic>>;
}
