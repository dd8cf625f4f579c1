//! Startup wiring of the three external services.
//!
//! Each builder turns configuration into an [`Integration`]. A missing key or
//! an initialisation failure yields `Unavailable` with the text the page shows,
//! so the server always starts.

use std::sync::Arc;
use std::time::Duration;

use mediassist_llm::{ChatClient, ClientFactory, GeminiConfig, ProviderConfig};
use mediassist_persist::{InMemoryReminderStore, MongoReminderStore, ReminderStore};
use mediassist_places::{ClinicSearch, PlacesClient};

use crate::config::Config;
use crate::state::Integration;

pub const CHAT_KEY_MISSING: &str =
    "Gemini API key not found. Please set GEMINI_API_KEY in your .env file.";
pub const PLACES_KEY_MISSING: &str =
    "Google Maps API key is not set. Please add GOOGLE_MAPS_API_KEY to your .env file.";
pub const STORE_CREDENTIALS_MISSING: &str =
    "Database credentials not found. Please set MONGODB_URI or MONGODB_URI_FILE in your .env file.";

pub fn chat_integration(config: &Config) -> Integration<dyn ChatClient> {
    let Some(api_key) = config.gemini_api_key.clone() else {
        tracing::warn!("{}", CHAT_KEY_MISSING);
        return Integration::Unavailable(CHAT_KEY_MISSING.to_string());
    };
    
    let mut gemini = GeminiConfig::new(api_key).with_timeout_secs(config.llm.timeout_secs);
    if let Some(base_url) = &config.llm.base_url {
        gemini = gemini.with_base_url(base_url.clone());
    }
    
    match ClientFactory::create_chat_client(ProviderConfig::Gemini(gemini)) {
        Ok(client) => {
            tracing::info!(model = %config.llm.model, "Chat client initialized");
            Integration::Ready(client)
        }
        Err(e) => {
            tracing::error!("Failed to initialize chat client: {:#}", e);
            Integration::Unavailable(format!("Error initializing the AI model client: {}", e))
        }
    }
}

pub fn places_integration(config: &Config) -> Integration<dyn ClinicSearch> {
    let Some(api_key) = config.google_maps_api_key.clone() else {
        tracing::warn!("{}", PLACES_KEY_MISSING);
        return Integration::Unavailable(PLACES_KEY_MISSING.to_string());
    };
    
    let mut builder = PlacesClient::builder()
        .api_key(api_key)
        .max_results(config.places.max_results)
        .timeout(Duration::from_secs(config.places.timeout_secs));
    if let Some(base_url) = &config.places.base_url {
        builder = builder.base_url(base_url.clone());
    }
    
    match builder.build() {
        Ok(client) => {
            tracing::info!("Places client initialized");
            let client: Arc<dyn ClinicSearch> = Arc::new(client);
            Integration::Ready(client)
        }
        Err(e) => {
            tracing::error!("Failed to initialize places client: {:#}", e);
            Integration::Unavailable(format!("Error initializing the places client: {}", e))
        }
    }
}

pub async fn reminder_integration(config: &Config) -> Integration<dyn ReminderStore> {
    let uri = match config.resolve_mongodb_uri() {
        Ok(Some(uri)) => uri,
        Ok(None) if config.mongodb.in_memory_fallback => {
            tracing::warn!("No database configured; reminders are kept in memory only");
            let store: Arc<dyn ReminderStore> = Arc::new(InMemoryReminderStore::new());
            return Integration::Ready(store);
        }
        Ok(None) => {
            tracing::warn!("{}", STORE_CREDENTIALS_MISSING);
            return Integration::Unavailable(STORE_CREDENTIALS_MISSING.to_string());
        }
        Err(e) => {
            tracing::error!("{}", e);
            return Integration::Unavailable(e.to_string());
        }
    };
    
    tracing::info!(database = %config.mongodb.database, "Connecting to MongoDB");
    match MongoReminderStore::connect(&uri, &config.mongodb.database).await {
        Ok(store) => {
            let store: Arc<dyn ReminderStore> = Arc::new(store);
            Integration::Ready(store)
        }
        Err(e) => {
            tracing::error!("Error initializing reminder store: {}", e);
            Integration::Unavailable(format!("Error initializing reminder store: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::sample;
    use std::path::PathBuf;
    
    #[test]
    fn test_missing_keys_are_unavailable() {
        let config = sample();
        
        let Integration::Unavailable(reason) = chat_integration(&config) else {
            panic!("chat should be unavailable without a key");
        };
        assert_eq!(reason, CHAT_KEY_MISSING);
        
        let Integration::Unavailable(reason) = places_integration(&config) else {
            panic!("places should be unavailable without a key");
        };
        assert_eq!(reason, PLACES_KEY_MISSING);
    }
    
    #[test]
    fn test_keys_make_clients_ready() {
        let mut config = sample();
        config.gemini_api_key = Some("g-key".to_string());
        config.google_maps_api_key = Some("m-key".to_string());
        
        assert!(chat_integration(&config).is_ready());
        assert!(places_integration(&config).is_ready());
    }
    
    #[tokio::test]
    async fn test_store_without_credentials() {
        let mut config = sample();
        
        let store = reminder_integration(&config).await;
        let Integration::Unavailable(reason) = store else {
            panic!("store should be unavailable without credentials");
        };
        assert_eq!(reason, STORE_CREDENTIALS_MISSING);
        
        config.mongodb.in_memory_fallback = true;
        assert!(reminder_integration(&config).await.is_ready());
    }
    
    #[tokio::test]
    async fn test_store_with_missing_credentials_file() {
        let mut config = sample();
        config.mongodb_uri_file = Some(PathBuf::from("/nonexistent/mongo-uri"));
        config.mongodb.in_memory_fallback = true;
        
        let Integration::Unavailable(reason) = reminder_integration(&config).await else {
            panic!("a broken credentials file must not fall back silently");
        };
        assert!(reason.contains("credentials file not found"));
    }
}
