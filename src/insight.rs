//! Insight requests: pick the recent readings, build the prompt and hand it
//! to a text-generation backend.
//!
//! Backends implement [`TextGenerator`]. [`GeminiClient`](crate::gemini::GeminiClient)
//! talks to the hosted API; [`MockGenerator`] returns canned text for tests
//! and local development (`INSIGHT_BACKEND=mock`).

use crate::classify::{Category, Context};
use crate::errors::{GlucoseError, Result};
use crate::models::Reading;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{info, warn};

/// How many of the most recent readings are sent along with the prompt.
pub const INSIGHT_WINDOW: usize = 10;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ReadingProjection {
    value: f64,
    context: Context,
    category: Category,
    timestamp: DateTime<Utc>,
}

pub fn recent_window(readings: &[Reading]) -> &[Reading] {
    &readings[readings.len().saturating_sub(INSIGHT_WINDOW)..]
}

pub fn build_prompt(readings: &[Reading]) -> Result<String> {
    let projection: Vec<_> = recent_window(readings)
        .iter()
        .map(|r| ReadingProjection {
            value: r.value,
            context: r.context,
            category: r.category,
            timestamp: r.timestamp,
        })
        .collect();
    let data = serde_json::to_string(&projection)?;

    Ok(format!(
        "Analyze the following recent blood glucose readings (mg/dL) for an individual:\n\
         {data}\n\n\
         Provide a concise analysis (under 150 words) including:\n\
         1. Overall trend observation.\n\
         2. Two actionable health tips based on these values.\n\
         3. A clear medical disclaimer stating this is not professional medical advice.\n\n\
         Format the response with Markdown for readability."
    ))
}

/// Asks `generator` for a summary of the recent readings.
///
/// Returns `Ok(None)` without contacting the backend when there is nothing to
/// analyze. Backend failures are returned to the caller unchanged.
pub async fn request_insight(
    generator: &dyn TextGenerator,
    readings: &[Reading],
) -> Result<Option<String>> {
    if readings.is_empty() {
        return Ok(None);
    }

    let prompt = build_prompt(readings)?;
    let sent = recent_window(readings).len();
    info!(backend = generator.name(), readings = sent, "requesting insight");

    match generator.generate(&prompt).await {
        Ok(text) => Ok(Some(text)),
        Err(err) => {
            warn!(backend = generator.name(), "insight request failed: {err}");
            Err(err)
        }
    }
}

/// Deterministic backend that never touches the network.
#[derive(Debug, Default)]
pub struct MockGenerator {
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.fail_with {
            return Err(GlucoseError::Collaborator(message.clone()));
        }

        let readings = prompt.matches("\"value\":").count();
        Ok(format!(
            "**Trend:** {readings} recent readings reviewed.\n\
             - Keep logging fasting and after-meal values.\n\
             - Pair carbohydrates with protein or fiber.\n\n\
             _This is not professional medical advice._"
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use chrono::{Duration, TimeZone};

    fn readings(count: usize) -> Vec<Reading> {
        let base = Utc.with_ymd_and_hms(2026, 4, 2, 9, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                let value = 80.0 + i as f64;
                Reading {
                    id: format!("id-{i}"),
                    value,
                    timestamp: base + Duration::minutes(i as i64),
                    context: Context::AfterMeal,
                    category: classify(value, Context::AfterMeal),
                }
            })
            .collect()
    }

    #[tokio::test]
    async fn empty_readings_skip_the_backend() {
        let generator = MockGenerator::new();
        let result = request_insight(&generator, &[]).await.unwrap();
        assert!(result.is_none());
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn sends_only_the_most_recent_window() {
        let generator = MockGenerator::new();
        let data = readings(14);
        let text = request_insight(&generator, &data).await.unwrap().unwrap();

        assert_eq!(generator.calls(), 1);
        assert!(text.contains("10 recent readings"));
    }

    #[test]
    fn prompt_holds_projection_without_ids() {
        let data = readings(12);
        let prompt = build_prompt(&data).unwrap();

        assert!(!prompt.contains("id-"));
        assert!(!prompt.contains("\"value\":80.0"));
        assert!(prompt.contains("\"value\":82.0"));
        assert!(prompt.contains("\"value\":91.0"));
        assert!(prompt.contains("\"context\":\"AFTER_MEAL\""));
        assert!(prompt.contains("\"category\":\"NORMAL\""));
        assert!(prompt.contains("2026-04-02T09:11:00Z"));
        assert!(prompt.contains("under 150 words"));
        assert!(prompt.contains("disclaimer"));
    }

    #[tokio::test]
    async fn backend_failure_propagates() {
        let generator = MockGenerator::failing("quota exceeded");
        let err = request_insight(&generator, &readings(3)).await.unwrap_err();
        match err {
            GlucoseError::Collaborator(message) => assert_eq!(message, "quota exceeded"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(generator.calls(), 1);
    }
}
