use chrono::NaiveDate;
use cyclesight::calendar::{add_days, to_iso_date};
use cyclesight::gestation::gestation_snapshot;

fn d(iso: &str) -> NaiveDate {
    cyclesight::calendar::parse_iso_date(iso).unwrap()
}

#[test]
fn sixteen_weeks_out_hits_the_corn_milestone_exactly() {
    let today = d("2025-03-01");
    let due = to_iso_date(add_days(today, 16 * 7));

    let snap = gestation_snapshot(&due, today);
    assert_eq!(snap.week, 24);
    assert_eq!(snap.total_weeks, 40);
    assert_eq!(snap.progress_pct, 60);
    assert_eq!(snap.baby_size.comparison, "corn");
    assert_eq!(snap.baby_size.length_cm, 30.0);
    assert_eq!(snap.baby_size.weight_g, 600.0);
}

#[test]
fn fifteen_weeks_out_interpolates_between_anchors() {
    let today = d("2025-03-01");
    let due = to_iso_date(add_days(today, 15 * 7));

    let snap = gestation_snapshot(&due, today);
    assert_eq!(snap.week, 25);
    // Halfway between the week-24 and week-26 anchors.
    assert!(snap.baby_size.length_cm > 30.0 && snap.baby_size.length_cm < 35.6);
    assert_eq!(snap.baby_size.length_cm, 32.8);
    assert!(snap.baby_size.weight_g > 600.0 && snap.baby_size.weight_g < 760.0);
    assert_eq!(snap.baby_size.weight_g, 680.0);
    // Label ties resolve to the earlier anchor.
    assert_eq!(snap.baby_size.comparison, "corn");
}

#[test]
fn unparseable_due_date_returns_the_fallback_snapshot() {
    let snap = gestation_snapshot("not-a-date", d("2025-03-01"));
    assert_eq!(snap.week, 24);
    assert_eq!(snap.progress_pct, 60);
    assert_eq!(snap.baby_size.comparison, "corn");
    assert_eq!(snap.baby_size.length_cm, 30.0);
    assert_eq!(snap.baby_size.weight_g, 600.0);
}

#[test]
fn week_is_non_increasing_as_the_due_date_moves_out() {
    let today = d("2025-03-01");
    let mut previous_week = i64::MAX;
    for days_out in 0..400 {
        let due = to_iso_date(add_days(today, days_out));
        let snap = gestation_snapshot(&due, today);
        assert!(snap.week <= previous_week);
        assert!(snap.week >= 1 && snap.week <= 40);
        previous_week = snap.week;
    }
}

#[test]
fn far_future_due_date_clamps_to_week_one() {
    let today = d("2025-03-01");
    let due = to_iso_date(add_days(today, 50 * 7));

    let snap = gestation_snapshot(&due, today);
    assert_eq!(snap.week, 1);
    assert_eq!(snap.progress_pct, 3);
    assert_eq!(snap.baby_size.comparison, "poppy seed");
}

#[test]
fn overdue_pregnancy_clamps_to_week_forty() {
    let today = d("2025-03-01");
    let due = to_iso_date(add_days(today, -21));

    let snap = gestation_snapshot(&due, today);
    assert_eq!(snap.week, 40);
    assert_eq!(snap.progress_pct, 100);
    assert_eq!(snap.baby_size.comparison, "pumpkin");
    assert_eq!(snap.baby_size.length_cm, 51.2);
    assert_eq!(snap.baby_size.weight_g, 3460.0);
}

#[test]
fn snapshot_serializes_size_fields() {
    let today = d("2025-03-01");
    let due = to_iso_date(add_days(today, 16 * 7));
    let json = serde_json::to_value(gestation_snapshot(&due, today)).unwrap();
    assert_eq!(json["week"], 24);
    assert_eq!(json["baby_size"]["comparison"], "corn");
    assert_eq!(json["baby_size"]["weight_g"], 600.0);
}
