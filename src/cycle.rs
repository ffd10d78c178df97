use chrono::NaiveDate;

use crate::calendar::{add_days, diff_days};
use crate::models::{CyclePhase, CycleSettings, CycleSnapshot};

pub const DEFAULT_CYCLE_LENGTH: i64 = 28;
pub const DEFAULT_PERIOD_LENGTH: i64 = 5;

const MIN_CYCLE_LENGTH: i64 = 20;
const MAX_CYCLE_LENGTH: i64 = 45;
const MIN_PERIOD_LENGTH: i64 = 2;
const MAX_PERIOD_LENGTH: i64 = 10;
const LUTEAL_PHASE_DAYS: i64 = 14;

/// Fresh defaults stamped with the supplied date. Computed per call so the
/// timestamp never goes stale.
pub fn default_cycle_settings(today: NaiveDate) -> CycleSettings {
    CycleSettings {
        last_period_start: None,
        cycle_length_days: DEFAULT_CYCLE_LENGTH,
        period_length_days: DEFAULT_PERIOD_LENGTH,
        updated_at: today,
    }
}

/// Computes the point-in-time cycle snapshot. Out-of-range lengths are
/// clamped, a future start date counts as day 1, and no input makes this
/// fail: the health screen always gets something to render.
pub fn cycle_snapshot(
    last_period_start: NaiveDate,
    cycle_length_days: i64,
    period_length_days: i64,
    today: NaiveDate,
) -> CycleSnapshot {
    let cycle_length = cycle_length_days.clamp(MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH);
    let period_length = period_length_days.clamp(MIN_PERIOD_LENGTH, MAX_PERIOD_LENGTH);

    let elapsed = diff_days(today, last_period_start).max(0);
    let cycle_day = elapsed % cycle_length + 1;

    // The prediction rolls forward cycle by cycle; on an exact cycle
    // multiple the next period lands on today itself.
    let cycles_to_next = ((elapsed + cycle_length - 1) / cycle_length).max(1);
    let next_period_start = add_days(last_period_start, cycles_to_next * cycle_length);
    let days_until_next_period = diff_days(next_period_start, today);

    let cycle_progress_pct =
        ((cycle_day as f64 / cycle_length as f64 * 100.0).round() as i64).clamp(0, 100);

    // Fixed 14-day luteal phase, guarded so the estimate never lands inside
    // the period or past cycle end.
    let ovulation_day = (cycle_length - LUTEAL_PHASE_DAYS).clamp(8, cycle_length - 6);
    let fertile_start_day = (ovulation_day - 5).clamp(1, cycle_length);
    let fertile_end_day = (ovulation_day + 1).clamp(1, cycle_length);

    let phase = classify_phase(
        cycle_day,
        period_length,
        ovulation_day,
        fertile_start_day,
        fertile_end_day,
    );

    CycleSnapshot {
        today,
        cycle_length_days: cycle_length,
        period_length_days: period_length,
        cycle_day,
        cycle_progress_pct,
        next_period_start,
        days_until_next_period,
        phase,
        phase_label: phase.label().to_string(),
        last_period_start,
        period_end: add_days(last_period_start, period_length - 1),
        fertile_window_start: add_days(last_period_start, fertile_start_day - 1),
        fertile_window_end: add_days(last_period_start, fertile_end_day - 1),
        ovulation_date: add_days(last_period_start, ovulation_day - 1),
        insight: insight_for(phase, days_until_next_period),
    }
}

// Rule order matters: the period days win outright, then the single
// ovulation day, then the rest of the fertile window. The displayed window
// runs through ovulation + 1, but the day after ovulation already counts
// as luteal.
fn classify_phase(
    cycle_day: i64,
    period_length: i64,
    ovulation_day: i64,
    fertile_start_day: i64,
    fertile_end_day: i64,
) -> CyclePhase {
    if cycle_day <= period_length {
        CyclePhase::Period
    } else if cycle_day == ovulation_day {
        CyclePhase::Ovulation
    } else if (fertile_start_day..fertile_end_day).contains(&cycle_day) {
        CyclePhase::Fertile
    } else if cycle_day < fertile_start_day {
        CyclePhase::Follicular
    } else {
        CyclePhase::Luteal
    }
}

// Always hedged; the engine estimates, it never asserts.
fn insight_for(phase: CyclePhase, days_until_next_period: i64) -> String {
    match phase {
        CyclePhase::Period => "You're likely on your period right now.",
        CyclePhase::Ovulation => "Today is likely your ovulation day.",
        CyclePhase::Fertile => "You're likely in your fertile window.",
        CyclePhase::Luteal if (0..=3).contains(&days_until_next_period) => {
            "Your period may be approaching in the next few days."
        }
        CyclePhase::Luteal => "You're likely in the post-ovulation phase.",
        CyclePhase::Follicular => "You're likely in the pre-ovulation phase.",
    }
    .to_string()
}
