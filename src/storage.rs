use crate::errors::{GlucoseError, Result};
use crate::models::Reading;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const DEFAULT_DATA_PATH: &str = "data/readings.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Decodes the slot contents: a JSON array of readings in insertion order.
pub fn parse_slot(bytes: &[u8]) -> Result<Vec<Reading>> {
    serde_json::from_slice(bytes).map_err(|err| GlucoseError::StorageCorrupt(err.to_string()))
}

pub fn encode_slot(readings: &[Reading]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(readings)?)
}

/// Loads the stored readings. A missing, unreadable or corrupt slot yields an
/// empty collection.
pub async fn load_readings(path: &Path) -> Vec<Reading> {
    match fs::read(path).await {
        Ok(bytes) => match parse_slot(&bytes) {
            Ok(readings) => readings,
            Err(err) => {
                warn!(path = %path.display(), "{err}; starting with no readings");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!(path = %path.display(), "failed to read data file: {err}");
            Vec::new()
        }
    }
}

/// Overwrites the slot with the whole collection.
pub async fn persist_readings(path: &Path, readings: &[Reading]) -> Result<()> {
    let payload = encode_slot(readings)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, Context};
    use chrono::{TimeZone, Utc};

    fn reading(id: &str, value: f64, context: Context, nanos: u32) -> Reading {
        Reading {
            id: id.to_string(),
            value,
            timestamp: Utc
                .with_ymd_and_hms(2026, 3, 14, 7, 30, 0)
                .unwrap()
                .checked_add_signed(chrono::Duration::nanoseconds(i64::from(nanos)))
                .unwrap(),
            context,
            category: classify(value, context),
        }
    }

    #[tokio::test]
    async fn slot_round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.json");
        let readings = vec![
            reading("a", 62.0, Context::Fasting, 1),
            reading("b", 95.5, Context::Fasting, 123_456_789),
            reading("c", 150.0, Context::AfterMeal, 0),
            reading("d", 240.0, Context::Random, 999_999_999),
            reading("e", 120.25, Context::Random, 42),
        ];

        persist_readings(&path, &readings).await.unwrap();
        let loaded = load_readings(&path).await;

        assert_eq!(loaded, readings);
        let categories: std::collections::BTreeSet<_> =
            loaded.iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn slot_uses_string_enums_and_iso_timestamps() {
        let bytes = encode_slot(&[reading("x", 140.0, Context::AfterMeal, 0)]).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let record = &json[0];
        assert_eq!(record["id"], "x");
        assert_eq!(record["value"], 140.0);
        assert_eq!(record["context"], "AFTER_MEAL");
        assert_eq!(record["category"], "PREDIABETES");
        assert_eq!(record["timestamp"], "2026-03-14T07:30:00Z");
    }

    #[tokio::test]
    async fn corrupt_slot_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readings.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert!(load_readings(&path).await.is_empty());

        std::fs::write(&path, br#"[{"id":"a","value":"high"}]"#).unwrap();
        assert!(load_readings(&path).await.is_empty());
    }

    #[tokio::test]
    async fn missing_slot_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_readings(&dir.path().join("absent.json")).await.is_empty());
    }

    #[test]
    fn parse_slot_reports_corruption() {
        assert!(matches!(
            parse_slot(b"[1, 2"),
            Err(GlucoseError::StorageCorrupt(_))
        ));
    }
}
