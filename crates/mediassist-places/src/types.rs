use serde::{Deserialize, Serialize};
use serde_json::Number;
use url::form_urlencoded;

/// Raw `textsearch/json` response body
#[derive(Debug, Clone, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One raw place entry; only the fields the clinic list needs
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<Number>,
    pub place_id: Option<String>,
}

/// Display-ready clinic entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    pub name: String,
    pub address: String,
    /// Rating as text, `"N/A"` when the place has none
    pub rating: String,
    pub link: String,
}

impl Clinic {
    /// Convert a raw result, skipping entries without name, address or place id
    pub fn from_place(place: &PlaceResult) -> Option<Self> {
        let name = place.name.as_deref().filter(|s| !s.is_empty())?;
        let address = place.formatted_address.as_deref().filter(|s| !s.is_empty())?;
        let place_id = place.place_id.as_deref().filter(|s| !s.is_empty())?;
        
        Some(Self {
            name: name.to_string(),
            address: address.to_string(),
            rating: place
                .rating
                .as_ref()
                .map(Number::to_string)
                .unwrap_or_else(|| "N/A".to_string()),
            link: maps_link(name, address, place_id),
        })
    }
}

/// Maps search URL pointing at a specific place
pub fn maps_link(name: &str, address: &str, place_id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", &format!("{},{}", name, address))
        .append_pair("query_place_id", place_id)
        .finish();
    format!("https://www.google.com/maps/search/?{}", query)
}
