use crate::insight::TextGenerator;
use crate::insight_task::InsightTracker;
use crate::repository::ReadingRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Mutex<ReadingRepository>>,
    pub insight: InsightTracker,
    /// `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(repo: ReadingRepository, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
            insight: InsightTracker::new(),
            generator,
        }
    }
}
