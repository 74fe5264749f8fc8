use crate::classify::{category_info, Category};
use crate::models::{
    CategoryCount, ChartPoint, LatestReading, Reading, ReferenceLine, SummaryResponse,
};
use crate::repository::ReadingRepository;

pub const CHART_WINDOW: usize = 10;
pub const LOW_LINE: f64 = 70.0;
pub const TARGET_MAX_LINE: f64 = 140.0;

pub fn build_summary(repo: &ReadingRepository) -> SummaryResponse {
    build_summary_from(repo.all(), repo.average(), repo.latest())
}

fn build_summary_from(
    readings: &[Reading],
    average: Option<f64>,
    latest: Option<&Reading>,
) -> SummaryResponse {
    let category_counts = Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: readings.iter().filter(|r| r.category == category).count(),
        })
        .collect();

    let start = readings.len().saturating_sub(CHART_WINDOW);
    let chart = readings[start..]
        .iter()
        .map(|r| ChartPoint {
            timestamp: r.timestamp,
            value: r.value,
            category: r.category,
        })
        .collect();

    let mut history = readings.to_vec();
    history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    SummaryResponse {
        count: readings.len(),
        average,
        latest: latest.map(|reading| LatestReading {
            reading: reading.clone(),
            info: category_info(reading.category),
        }),
        category_counts,
        chart,
        reference_lines: vec![
            ReferenceLine {
                value: TARGET_MAX_LINE,
                label: "Target Max",
            },
            ReferenceLine {
                value: LOW_LINE,
                label: "Low",
            },
        ],
        history,
    }
}
