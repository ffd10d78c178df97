use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    Period,
    Follicular,
    Fertile,
    Ovulation,
    Luteal,
}

impl CyclePhase {
    pub fn label(self) -> &'static str {
        match self {
            CyclePhase::Period => "Period",
            CyclePhase::Follicular => "Follicular",
            CyclePhase::Fertile => "Fertile window",
            CyclePhase::Ovulation => "Ovulation",
            CyclePhase::Luteal => "Luteal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleSnapshot {
    pub today: NaiveDate,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
    pub cycle_day: i64,
    pub cycle_progress_pct: i64,
    pub next_period_start: NaiveDate,
    pub days_until_next_period: i64,
    pub phase: CyclePhase,
    pub phase_label: String,
    pub last_period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleSettings {
    pub last_period_start: Option<NaiveDate>,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    pub last_period_start: Option<NaiveDate>,
    pub cycle_length_days: i64,
    pub period_length_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BabySize {
    pub comparison: String,
    pub length_cm: f64,
    pub weight_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestationSnapshot {
    pub week: i64,
    pub total_weeks: i64,
    pub progress_pct: i64,
    pub baby_size: BabySize,
}
