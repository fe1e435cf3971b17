use chrono::{DateTime, NaiveDate, Utc};

/// Recency factor: linear decay over the configured window.
///
/// Formula: `1 - max(daysSincePresentation, 0) / windowDays`, clamped.
/// Range: 0.0 – 1.0. A proposal presented today scores 1.0; one presented
/// `windowDays` or more ago scores 0.0.
///
/// Dates are compared at day granularity in UTC to avoid timezone drift.
pub fn calculate(presentation_date: NaiveDate, now: DateTime<Utc>, window_days: i64) -> f64 {
    let days_since = (now.date_naive() - presentation_date).num_days().max(0) as f64;
    let ratio = 1.0 - days_since / window_days as f64;
    ratio.clamp(0.0, 1.0)
}
