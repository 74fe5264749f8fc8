use crate::classify::{classify, Context};
use crate::errors::{GlucoseError, Result};
use crate::models::Reading;
use crate::storage::{load_readings, persist_readings};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// Ordered collection of readings backed by a single JSON slot on disk.
///
/// Insertion order is preserved and is what `latest` and the insight window
/// use; display ordering by timestamp is left to callers. Every mutation
/// rewrites the slot first and only changes the in-memory collection once
/// the write succeeded.
#[derive(Debug)]
pub struct ReadingRepository {
    path: PathBuf,
    readings: Vec<Reading>,
}

impl ReadingRepository {
    pub fn new(path: PathBuf, readings: Vec<Reading>) -> Self {
        Self { path, readings }
    }

    pub async fn load(path: PathBuf) -> Self {
        let readings = load_readings(&path).await;
        debug!(count = readings.len(), "loaded readings");
        Self::new(path, readings)
    }

    pub async fn add(&mut self, value: f64, context: Context, now: DateTime<Utc>) -> Result<Reading> {
        if !value.is_finite() || value <= 0.0 {
            return Err(GlucoseError::InvalidValue(value));
        }

        let reading = Reading {
            id: Uuid::new_v4().to_string(),
            value,
            timestamp: now,
            context,
            category: classify(value, context),
        };
        let mut next = self.readings.clone();
        next.push(reading.clone());
        self.commit(next).await?;
        debug!(id = %reading.id, value, category = ?reading.category, "added reading");

        Ok(reading)
    }

    /// Removes the reading with `id`. Unknown ids are a no-op.
    pub async fn remove(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.readings.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        let mut next = self.readings.clone();
        next.remove(index);
        self.commit(next).await?;
        debug!(id, "removed reading");

        Ok(true)
    }

    pub async fn clear(&mut self) -> Result<()> {
        let dropped = self.readings.len();
        self.commit(Vec::new()).await?;
        debug!(dropped, "cleared readings");
        Ok(())
    }

    pub fn all(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn average(&self) -> Option<f64> {
        if self.readings.is_empty() {
            return None;
        }
        let sum: f64 = self.readings.iter().map(|r| r.value).sum();
        Some(sum / self.readings.len() as f64)
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.last()
    }

    async fn commit(&mut self, next: Vec<Reading>) -> Result<()> {
        persist_readings(&self.path, &next).await?;
        self.readings = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;
    use chrono::{Duration, TimeZone};

    fn at(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    async fn empty_repo(dir: &tempfile::TempDir) -> ReadingRepository {
        ReadingRepository::load(dir.path().join("readings.json")).await
    }

    #[tokio::test]
    async fn add_classifies_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = empty_repo(&dir).await;

        let first = repo.add(95.0, Context::Fasting, at(0)).await.unwrap();
        let second = repo.add(180.0, Context::AfterMeal, at(5)).await.unwrap();

        assert_eq!(first.category, Category::Normal);
        assert_eq!(second.category, Category::Prediabetes);
        assert_eq!(first.timestamp, at(0));
        assert_ne!(first.id, second.id);
        assert_eq!(repo.all(), &[first, second.clone()]);
        assert_eq!(repo.latest(), Some(&second));
    }

    #[tokio::test]
    async fn add_rejects_non_positive_and_nan() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = empty_repo(&dir).await;
        repo.add(110.0, Context::Random, at(0)).await.unwrap();

        for value in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = repo.add(value, Context::Fasting, at(1)).await.unwrap_err();
            assert!(matches!(err, GlucoseError::InvalidValue(_)));
        }
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn insertion_order_is_kept_for_out_of_order_clocks() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = empty_repo(&dir).await;
        repo.add(100.0, Context::Random, at(30)).await.unwrap();
        let older = repo.add(120.0, Context::Random, at(0)).await.unwrap();

        assert_eq!(repo.latest(), Some(&older));
        assert_eq!(repo.all()[0].value, 100.0);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = empty_repo(&dir).await;
        let reading = repo.add(88.0, Context::Fasting, at(0)).await.unwrap();

        assert!(repo.remove(&reading.id).await.unwrap());
        assert!(repo.all().iter().all(|r| r.id != reading.id));
        assert!(!repo.remove(&reading.id).await.unwrap());
        assert!(!repo.remove("never-existed").await.unwrap());
    }

    #[tokio::test]
    async fn average_is_none_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut repo = empty_repo(&dir).await;
        assert_eq!(repo.average(), None);
        assert_eq!(repo.latest(), None);

        repo.add(90.0, Context::Fasting, at(0)).await.unwrap();
        repo.add(150.0, Context::AfterMeal, at(1)).await.unwrap();
        assert_eq!(repo.average(), Some(120.0));

        repo.clear().await.unwrap();
        assert!(repo.is_empty());
        assert_eq!(repo.average(), None);
    }

    #[tokio::test]
    async fn every_mutation_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.json");
        let mut repo = ReadingRepository::load(path.clone()).await;

        let kept = repo.add(65.0, Context::Fasting, at(0)).await.unwrap();
        let dropped = repo.add(210.0, Context::Random, at(1)).await.unwrap();
        assert_eq!(ReadingRepository::load(path.clone()).await.len(), 2);

        repo.remove(&dropped.id).await.unwrap();
        let reloaded = ReadingRepository::load(path.clone()).await;
        assert_eq!(reloaded.all(), &[kept]);

        repo.clear().await.unwrap();
        assert!(ReadingRepository::load(path).await.is_empty());
    }

    #[tokio::test]
    async fn failed_write_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let existing = Reading {
            id: "kept".into(),
            value: 101.0,
            timestamp: at(0),
            context: Context::Fasting,
            category: Category::Prediabetes,
        };
        // A directory cannot be written as a file, so every persist fails.
        let mut repo = ReadingRepository::new(dir.path().to_path_buf(), vec![existing.clone()]);

        for _ in 0..2 {
            assert!(repo.add(100.0, Context::Fasting, at(1)).await.is_err());
            assert_eq!(repo.len(), 1);
        }

        assert!(repo.remove("kept").await.is_err());
        assert_eq!(repo.all(), &[existing.clone()]);

        assert!(repo.clear().await.is_err());
        assert_eq!(repo.all(), &[existing]);
    }

    #[tokio::test]
    async fn stored_category_is_not_recomputed_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.json");
        let historical = Reading {
            id: "legacy".into(),
            value: 130.0,
            timestamp: at(0),
            context: Context::Fasting,
            category: Category::Prediabetes,
        };
        persist_readings(&path, std::slice::from_ref(&historical))
            .await
            .unwrap();

        let repo = ReadingRepository::load(path).await;
        assert_eq!(repo.all()[0].category, Category::Prediabetes);
    }
}
