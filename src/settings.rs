use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};

use crate::calendar::{parse_iso_date, to_iso_date};
use crate::cycle::{default_cycle_settings, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
use crate::models::{CycleSettings, SettingsUpdate};

/// File-backed settings store. The whole state is one JSON blob using the
/// legacy mobile-app key names, so previously persisted data keeps loading.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Never fails: a missing file, unreadable file, or corrupt blob all
    /// come back as defaults.
    pub async fn load(&self) -> CycleSettings {
        let today = Local::now().date_naive();
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => decode_settings(&raw, today),
            Err(_) => default_cycle_settings(today),
        }
    }

    /// Stamps `updated_at` to today and replaces the blob atomically.
    pub async fn save(&self, update: SettingsUpdate) -> Result<()> {
        let settings = CycleSettings {
            last_period_start: update.last_period_start,
            cycle_length_days: update.cycle_length_days,
            period_length_days: update.period_length_days,
            updated_at: Local::now().date_naive(),
        };

        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, encode_settings(&settings))
            .await
            .with_context(|| format!("writing {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Field-by-field tolerant decode of the persisted blob. Each field falls
/// back to its default independently, so partial corruption still yields
/// usable settings.
pub fn decode_settings(raw: &str, today: NaiveDate) -> CycleSettings {
    let Ok(value) = serde_json::from_str::<Value>(raw) else {
        return default_cycle_settings(today);
    };

    CycleSettings {
        last_period_start: value
            .get("lastPeriodStartISO")
            .and_then(Value::as_str)
            .and_then(|s| parse_iso_date(s).ok()),
        cycle_length_days: number_field(&value, "cycleLengthDays", DEFAULT_CYCLE_LENGTH),
        period_length_days: number_field(&value, "periodLengthDays", DEFAULT_PERIOD_LENGTH),
        updated_at: value
            .get("updatedAtISO")
            .and_then(Value::as_str)
            .and_then(|s| parse_iso_date(s).ok())
            .unwrap_or(today),
    }
}

// Wrong type or non-finite falls back; fractional values round to the
// nearest whole day.
fn number_field(value: &Value, key: &str, default: i64) -> i64 {
    match value.get(key).and_then(Value::as_f64) {
        Some(n) if n.is_finite() => n.round() as i64,
        _ => default,
    }
}

pub fn encode_settings(settings: &CycleSettings) -> String {
    json!({
        "lastPeriodStartISO": settings.last_period_start.map(to_iso_date),
        "cycleLengthDays": settings.cycle_length_days,
        "periodLengthDays": settings.period_length_days,
        "updatedAtISO": to_iso_date(settings.updated_at),
    })
    .to_string()
}
