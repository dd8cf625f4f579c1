use std::sync::Arc;
use mediassist_llm::ChatClient;
use mediassist_persist::ReminderStore;
use mediassist_places::ClinicSearch;
use crate::config::Config;
use crate::error::ApiError;

/// An external service that may be missing at runtime
/// 
/// `Unavailable` carries the message shown to the user whenever the
/// integration is used.
pub enum Integration<T: ?Sized> {
    Ready(Arc<T>),
    Unavailable(String),
}

impl<T: ?Sized> Integration<T> {
    pub fn get(&self) -> Result<&Arc<T>, ApiError> {
        match self {
            Integration::Ready(inner) => Ok(inner),
            Integration::Unavailable(reason) => Err(ApiError::NotConfigured(reason.clone())),
        }
    }
    
    pub fn is_ready(&self) -> bool {
        matches!(self, Integration::Ready(_))
    }
}

impl<T: ?Sized> Clone for Integration<T> {
    fn clone(&self) -> Self {
        match self {
            Integration::Ready(inner) => Integration::Ready(Arc::clone(inner)),
            Integration::Unavailable(reason) => Integration::Unavailable(reason.clone()),
        }
    }
}

/// Shared application state passed to all handlers
/// 
/// Immutable after startup; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chat: Integration<dyn ChatClient>,
    pub reminders: Integration<dyn ReminderStore>,
    pub clinics: Integration<dyn ClinicSearch>,
}

impl AppState {
    pub fn new(
        config: Config,
        chat: Integration<dyn ChatClient>,
        reminders: Integration<dyn ReminderStore>,
        clinics: Integration<dyn ClinicSearch>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            chat,
            reminders,
            clinics,
        }
    }
}
