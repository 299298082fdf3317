#![allow(dead_code)]

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub recency: f64,
    pub impact: f64,
    pub jd_relevance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            recency: 0.5,
            impact: 0.3,
            jd_relevance: 0.2,
        }
    }
}

/// Computes recency score with 18-month half-life exponential decay.
/// Returns 1.0 for current positions (end_date = None) and evergreen entries.
pub fn compute_recency_score(
    end_date: Option<NaiveDate>,
    flagged_evergreen: bool,
    half_life_months: f64,
) -> f64 {
    if flagged_evergreen {
        return 1.0;
    }
    let end_date = match end_date {
        Some(d) => d,
        None => return 1.0, // current position
    };
    let now = Utc::now().naive_utc().date();
    let months_since = months_between(end_date, now);
    if months_since <= 0.0 {
        return 1.0;
    }
    (0.5_f64)
        .powf(months_since / half_life_months)
        .clamp(0.0, 1.0)
}

/// Combined relevance score: 0.5*recency + 0.3*impact + 0.2*jd_relevance
pub fn compute_combined_score(
    recency: f64,
    impact: f64,
    jd_relevance: f64,
    weights: &ScoringWeights,
) -> f64 {
    (weights.recency * recency + weights.impact * impact + weights.jd_relevance * jd_relevance)
        .clamp(0.0, 1.0)
}

fn months_between(start: NaiveDate, end: NaiveDate) -> f64 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    let total = years * 12 + months;
    let day_frac = (end.day() as f64 - start.day() as f64) / 30.0;
    (total as f64 + day_frac).max(0.0)
}
