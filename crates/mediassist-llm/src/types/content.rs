use serde::{Deserialize, Serialize};

/// Text carried by a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(String);

impl Content {
    /// Create text content
    pub fn text(s: impl Into<String>) -> Self {
        Self(s.into())
    }
    
    pub fn as_text(&self) -> &str {
        &self.0
    }
    
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
