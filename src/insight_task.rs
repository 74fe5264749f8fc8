use crate::errors::GlucoseError;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum InsightStatus {
    Idle,
    Pending,
    Ready(String),
    Failed(String),
}

impl InsightStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, InsightStatus::Pending)
    }
}

/// Tracks the one insight request the dashboard may have outstanding.
#[derive(Clone, Debug)]
pub struct InsightTracker {
    status: Arc<Mutex<InsightStatus>>,
}

impl Default for InsightTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightTracker {
    pub fn new() -> Self {
        Self {
            status: Arc::new(Mutex::new(InsightStatus::Idle)),
        }
    }

    pub async fn status(&self) -> InsightStatus {
        self.status.lock().await.clone()
    }

    /// Moves to `Pending` unless a request is already in flight. Returns
    /// whether the caller now owns the request.
    pub async fn try_begin(&self) -> bool {
        let mut status = self.status.lock().await;
        if status.is_pending() {
            return false;
        }
        *status = InsightStatus::Pending;
        true
    }

    /// Records the outcome of the in-flight request. `Ok(None)` means there
    /// was nothing to analyze.
    pub async fn settle(&self, result: Result<Option<String>, GlucoseError>) {
        let next = match result {
            Ok(Some(text)) => InsightStatus::Ready(text),
            Ok(None) => InsightStatus::Idle,
            Err(err) => InsightStatus::Failed(err.to_string()),
        };
        *self.status.lock().await = next;
    }

    /// Hides a settled insight. A pending request is left alone.
    pub async fn dismiss(&self) -> InsightStatus {
        let mut status = self.status.lock().await;
        if !status.is_pending() {
            *status = InsightStatus::Idle;
        }
        status.clone()
    }
}
