use chrono::NaiveDate;

use crate::calendar::{diff_days, parse_iso_date};
use crate::models::{BabySize, GestationSnapshot};

pub const TOTAL_WEEKS: i64 = 40;

struct Milestone {
    week: i64,
    comparison: &'static str,
    length_cm: f64,
    weight_g: f64,
}

// Fixed anchors for every even week; size estimates between anchors are
// interpolated linearly.
static MILESTONES: [Milestone; 19] = [
    Milestone { week: 4, comparison: "poppy seed", length_cm: 0.1, weight_g: 0.2 },
    Milestone { week: 6, comparison: "sweet pea", length_cm: 0.6, weight_g: 0.5 },
    Milestone { week: 8, comparison: "raspberry", length_cm: 1.6, weight_g: 1.0 },
    Milestone { week: 10, comparison: "strawberry", length_cm: 3.1, weight_g: 4.0 },
    Milestone { week: 12, comparison: "lime", length_cm: 5.4, weight_g: 14.0 },
    Milestone { week: 14, comparison: "lemon", length_cm: 8.7, weight_g: 43.0 },
    Milestone { week: 16, comparison: "avocado", length_cm: 11.6, weight_g: 100.0 },
    Milestone { week: 18, comparison: "bell pepper", length_cm: 14.2, weight_g: 190.0 },
    Milestone { week: 20, comparison: "banana", length_cm: 25.6, weight_g: 300.0 },
    Milestone { week: 22, comparison: "papaya", length_cm: 27.8, weight_g: 430.0 },
    Milestone { week: 24, comparison: "corn", length_cm: 30.0, weight_g: 600.0 },
    Milestone { week: 26, comparison: "zucchini", length_cm: 35.6, weight_g: 760.0 },
    Milestone { week: 28, comparison: "eggplant", length_cm: 37.6, weight_g: 1005.0 },
    Milestone { week: 30, comparison: "cabbage", length_cm: 39.9, weight_g: 1320.0 },
    Milestone { week: 32, comparison: "squash", length_cm: 42.4, weight_g: 1700.0 },
    Milestone { week: 34, comparison: "cantaloupe", length_cm: 45.0, weight_g: 2150.0 },
    Milestone { week: 36, comparison: "honeydew", length_cm: 47.4, weight_g: 2620.0 },
    Milestone { week: 38, comparison: "leek", length_cm: 49.8, weight_g: 3080.0 },
    Milestone { week: 40, comparison: "pumpkin", length_cm: 51.2, weight_g: 3460.0 },
];

/// Computes the gestation snapshot from the persisted due-date string.
/// A due date that fails to parse yields a fixed mid-pregnancy fallback
/// instead of an error, so stale or corrupt stored data never takes the
/// screen down.
pub fn gestation_snapshot(due_date_iso: &str, today: NaiveDate) -> GestationSnapshot {
    let Ok(due_date) = parse_iso_date(due_date_iso) else {
        return fallback_snapshot();
    };

    let days_until_due = diff_days(due_date, today);
    let weeks_until_due = days_until_due as f64 / 7.0;
    let raw_week = TOTAL_WEEKS as f64 - weeks_until_due;
    let week = (raw_week.round() as i64).clamp(1, TOTAL_WEEKS);

    GestationSnapshot {
        week,
        total_weeks: TOTAL_WEEKS,
        progress_pct: ((week as f64 / TOTAL_WEEKS as f64 * 100.0).round() as i64).clamp(0, 100),
        baby_size: size_for_week(week),
    }
}

fn fallback_snapshot() -> GestationSnapshot {
    GestationSnapshot {
        week: 24,
        total_weeks: TOTAL_WEEKS,
        progress_pct: 60,
        baby_size: BabySize {
            comparison: "corn".to_string(),
            length_cm: 30.0,
            weight_g: 600.0,
        },
    }
}

fn size_for_week(week: i64) -> BabySize {
    let last = &MILESTONES[MILESTONES.len() - 1];

    // Bracketing anchors; outside the table both collapse to the boundary
    // anchor, so extrapolation stays flat.
    let mut left = &MILESTONES[0];
    for m in &MILESTONES {
        if m.week <= week {
            left = m;
        } else {
            break;
        }
    }
    let right = MILESTONES.iter().find(|m| m.week >= week).unwrap_or(last);

    let t = if left.week == right.week {
        0.0
    } else {
        (week - left.week) as f64 / (right.week - left.week) as f64
    };

    // The label is not interpolated: nearest anchor wins, ties go to the
    // earlier week.
    let mut nearest = &MILESTONES[0];
    for m in &MILESTONES {
        if (m.week - week).abs() < (nearest.week - week).abs() {
            nearest = m;
        }
    }

    BabySize {
        comparison: nearest.comparison.to_string(),
        length_cm: round_to_tenth(lerp(left.length_cm, right.length_cm, t)),
        weight_g: lerp(left.weight_g, right.weight_g, t).round(),
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
