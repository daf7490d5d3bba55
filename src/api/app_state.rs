use crate::coach::service::CoachService;
use crate::observability::AppMetrics;
use crate::storage::DataStore;
use std::sync::Arc;

/// Application state containing all shared services
#[derive(Clone)]
pub struct AppState {
    /// Data store collaborator (records, users, interaction log)
    pub store: Arc<dyn DataStore>,
    /// Coaching response pipeline
    pub coach_service: Arc<CoachService>,
    /// Application metrics
    pub metrics: AppMetrics,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"Arc<dyn DataStore>")
            .field("coach_service", &"Arc<CoachService>")
            .field("metrics", &"AppMetrics")
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn DataStore>, coach_service: CoachService) -> Self {
        Self {
            store,
            coach_service: Arc::new(coach_service),
            metrics: AppMetrics::default(),
        }
    }
}
