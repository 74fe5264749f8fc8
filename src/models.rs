use crate::classify::{Category, CategoryInfo, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded glucose measurement. `category` is fixed when the reading is
/// created and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub context: Context,
    pub category: Category,
}

/// Largest value accepted from the dashboard or the API, in mg/dL.
pub const MAX_INPUT_VALUE: f64 = 1000.0;

#[derive(Debug, Deserialize)]
pub struct AddReadingRequest {
    pub value: f64,
    pub context: Context,
}

/// HTML form fallback; the value stays a string so non-numeric input reaches
/// validation instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct AddReadingForm {
    pub value: String,
    pub context: Context,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize)]
pub struct LatestReading {
    pub reading: Reading,
    pub info: CategoryInfo,
}

#[derive(Debug, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub count: usize,
    pub average: Option<f64>,
    pub latest: Option<LatestReading>,
    pub category_counts: Vec<CategoryCount>,
    pub chart: Vec<ChartPoint>,
    pub reference_lines: Vec<ReferenceLine>,
    pub history: Vec<Reading>,
}
