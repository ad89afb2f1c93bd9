use super::*;
use chrono::TimeZone;

/// 2026-08-26 is a Wednesday. Build a UTC instant whose Hong Kong local time
/// is the given hour/minute on that date.
fn hk_wednesday_at(h: u32, m: u32) -> DateTime<Utc> {
    hong_kong()
        .with_ymd_and_hms(2026, 8, 26, h, m, 0)
        .single()
        .expect("valid fixture datetime")
        .with_timezone(&Utc)
}

fn nine_to_five() -> DaySchedule {
    DaySchedule::Intervals(vec![Interval {
        from: TimeOfDay { h: 9, m: 0 },
        to: TimeOfDay { h: 17, m: 0 },
    }])
}

fn schedule_with_wed(day: DaySchedule) -> WeeklySchedule {
    WeeklySchedule {
        wed: Some(day),
        ..WeeklySchedule::default()
    }
}

#[test]
fn absent_day_is_no_info() {
    let schedule = WeeklySchedule::default();
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(12, 0), hong_kong()),
        BusinessStatus::NoInfo
    );
}

#[test]
fn no_business_day_is_closed_regardless_of_time() {
    let schedule = schedule_with_wed(DaySchedule::NoBusiness);
    for (h, m) in [(0, 0), (12, 30), (23, 59)] {
        assert_eq!(
            evaluate(&schedule, hk_wednesday_at(h, m), hong_kong()),
            BusinessStatus::Closed
        );
    }
}

#[test]
fn no_info_day_is_no_info() {
    let schedule = schedule_with_wed(DaySchedule::NoInfo);
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(12, 0), hong_kong()),
        BusinessStatus::NoInfo
    );
}

#[test]
fn interval_boundaries_are_inclusive() {
    let schedule = schedule_with_wed(nine_to_five());
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(9, 0), hong_kong()),
        BusinessStatus::Open
    );
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(17, 0), hong_kong()),
        BusinessStatus::Open
    );
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(8, 59), hong_kong()),
        BusinessStatus::Closed
    );
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(17, 1), hong_kong()),
        BusinessStatus::Closed
    );
}

#[test]
fn split_hours_close_over_lunch() {
    let schedule = schedule_with_wed(DaySchedule::Intervals(vec![
        Interval {
            from: TimeOfDay { h: 9, m: 0 },
            to: TimeOfDay { h: 13, m: 0 },
        },
        Interval {
            from: TimeOfDay { h: 14, m: 30 },
            to: TimeOfDay { h: 18, m: 0 },
        },
    ]));
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(13, 45), hong_kong()),
        BusinessStatus::Closed
    );
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(15, 0), hong_kong()),
        BusinessStatus::Open
    );
}

#[test]
fn unsorted_intervals_still_match() {
    // Producer order is not guaranteed; the later interval comes first here.
    let schedule = schedule_with_wed(DaySchedule::Intervals(vec![
        Interval {
            from: TimeOfDay { h: 15, m: 0 },
            to: TimeOfDay { h: 19, m: 0 },
        },
        Interval {
            from: TimeOfDay { h: 9, m: 0 },
            to: TimeOfDay { h: 12, m: 0 },
        },
    ]));
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(10, 0), hong_kong()),
        BusinessStatus::Open
    );
}

#[test]
fn empty_interval_list_is_closed() {
    let schedule = schedule_with_wed(DaySchedule::Intervals(vec![]));
    assert_eq!(
        evaluate(&schedule, hk_wednesday_at(12, 0), hong_kong()),
        BusinessStatus::Closed
    );
}

#[test]
fn evaluate_is_pure() {
    let schedule = schedule_with_wed(nine_to_five());
    let now = hk_wednesday_at(10, 15);
    let first = evaluate(&schedule, now, hong_kong());
    let second = evaluate(&schedule, now, hong_kong());
    assert_eq!(first, second);
}

#[test]
fn weekday_resolved_in_fixed_zone_not_utc() {
    // 2026-08-25 23:00 UTC is already Wednesday 07:00 in Hong Kong.
    let now = Utc.with_ymd_and_hms(2026, 8, 25, 23, 0, 0).single().unwrap();
    let mut schedule = WeeklySchedule::default();
    schedule.tue = Some(nine_to_five());
    schedule.wed = Some(DaySchedule::NoBusiness);
    assert_eq!(
        evaluate(&schedule, now, hong_kong()),
        BusinessStatus::Closed
    );
}

#[test]
fn deserializes_sentinels_and_intervals() {
    let json = r#"{
        "byAppointment": true,
        "MON": [{"from": {"h": 9, "m": 30}, "to": {"h": 18, "m": 0}}],
        "TUE": "NO_BUSINESS",
        "WED": "NO_INFO",
        "SAT": []
    }"#;
    let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.by_appointment, Some(true));
    assert_eq!(
        schedule.mon,
        Some(DaySchedule::Intervals(vec![Interval {
            from: TimeOfDay { h: 9, m: 30 },
            to: TimeOfDay { h: 18, m: 0 },
        }]))
    );
    assert_eq!(schedule.tue, Some(DaySchedule::NoBusiness));
    assert_eq!(schedule.wed, Some(DaySchedule::NoInfo));
    assert_eq!(schedule.sat, Some(DaySchedule::Intervals(vec![])));
    assert_eq!(schedule.thu, None);
}

#[test]
fn unknown_sentinel_degrades_to_no_info() {
    let json = r#"{"FRI": "SOMETIMES"}"#;
    let schedule: WeeklySchedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.fri, Some(DaySchedule::NoInfo));
}
