//! Weekly opening-hours model and the open/closed/unknown evaluator.
//!
//! Schedules arrive from the spatial store as JSON serialized into a string
//! column; decoding happens once at that boundary (see `medmap-store`) and
//! everything here operates on typed values. Evaluation takes an explicit
//! instant and fixed civil timezone so callers (and tests) control "now".

use chrono::{DateTime, Datelike, FixedOffset, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// The fixed civil timezone used by production callers (UTC+8).
///
/// Opening hours in the source data are wall-clock Hong Kong times, so the
/// evaluator must never use the host's local zone.
#[must_use]
pub fn hong_kong() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid fixed offset")
}

/// Live business status of a practitioner, derived from the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "CLOSED")]
    Closed,
    #[serde(rename = "NO_INFO")]
    NoInfo,
}

/// Hour/minute wall-clock time in 24-hour local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub h: u32,
    pub m: u32,
}

impl TimeOfDay {
    #[must_use]
    pub fn minutes_since_midnight(self) -> u32 {
        self.h * 60 + self.m
    }
}

/// A closed time-of-day range; both endpoints count as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub from: TimeOfDay,
    pub to: TimeOfDay,
}

impl Interval {
    #[must_use]
    pub fn contains_minute(&self, minute: u32) -> bool {
        self.from.minutes_since_midnight() <= minute && minute <= self.to.minutes_since_midnight()
    }
}

/// One weekday's schedule.
///
/// Stored as either a sentinel string (`"NO_BUSINESS"`, `"NO_INFO"`) or a
/// list of intervals. Intervals are not guaranteed sorted by the producer,
/// and an empty list is valid (the upstream scraper writes `[]` for a day
/// marked closed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DayScheduleRepr", into = "DayScheduleRepr")]
pub enum DaySchedule {
    NoBusiness,
    NoInfo,
    Intervals(Vec<Interval>),
}

/// Wire shape of [`DaySchedule`]. Unrecognized sentinel strings degrade to
/// `NoInfo` rather than failing the whole row decode.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DayScheduleRepr {
    Marker(String),
    Intervals(Vec<Interval>),
}

impl From<DayScheduleRepr> for DaySchedule {
    fn from(repr: DayScheduleRepr) -> Self {
        match repr {
            DayScheduleRepr::Marker(s) if s == "NO_BUSINESS" => DaySchedule::NoBusiness,
            DayScheduleRepr::Marker(_) => DaySchedule::NoInfo,
            DayScheduleRepr::Intervals(list) => DaySchedule::Intervals(list),
        }
    }
}

impl From<DaySchedule> for DayScheduleRepr {
    fn from(day: DaySchedule) -> Self {
        match day {
            DaySchedule::NoBusiness => DayScheduleRepr::Marker("NO_BUSINESS".to_owned()),
            DaySchedule::NoInfo => DayScheduleRepr::Marker("NO_INFO".to_owned()),
            DaySchedule::Intervals(list) => DayScheduleRepr::Intervals(list),
        }
    }
}

/// Monday-start weekday key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

/// A practitioner's weekly opening hours.
///
/// Absent days mean "no information", not "closed".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(rename = "byAppointment", default, skip_serializing_if = "Option::is_none")]
    pub by_appointment: Option<bool>,
    #[serde(rename = "MON", default, skip_serializing_if = "Option::is_none")]
    pub mon: Option<DaySchedule>,
    #[serde(rename = "TUE", default, skip_serializing_if = "Option::is_none")]
    pub tue: Option<DaySchedule>,
    #[serde(rename = "WED", default, skip_serializing_if = "Option::is_none")]
    pub wed: Option<DaySchedule>,
    #[serde(rename = "THU", default, skip_serializing_if = "Option::is_none")]
    pub thu: Option<DaySchedule>,
    #[serde(rename = "FRI", default, skip_serializing_if = "Option::is_none")]
    pub fri: Option<DaySchedule>,
    #[serde(rename = "SAT", default, skip_serializing_if = "Option::is_none")]
    pub sat: Option<DaySchedule>,
    #[serde(rename = "SUN", default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<DaySchedule>,
}

impl WeeklySchedule {
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        match weekday {
            Weekday::Mon => self.mon.as_ref(),
            Weekday::Tue => self.tue.as_ref(),
            Weekday::Wed => self.wed.as_ref(),
            Weekday::Thu => self.thu.as_ref(),
            Weekday::Fri => self.fri.as_ref(),
            Weekday::Sat => self.sat.as_ref(),
            Weekday::Sun => self.sun.as_ref(),
        }
    }
}

/// Evaluate a schedule against an instant in a fixed civil timezone.
///
/// Pure: identical inputs yield identical results. Missing or malformed data
/// degrades to [`BusinessStatus::NoInfo`]; this never errors.
#[must_use]
pub fn evaluate(
    schedule: &WeeklySchedule,
    now: DateTime<Utc>,
    tz: FixedOffset,
) -> BusinessStatus {
    let local = now.with_timezone(&tz);
    let Some(day) = schedule.day(local.weekday().into()) else {
        return BusinessStatus::NoInfo;
    };

    match day {
        DaySchedule::NoBusiness => BusinessStatus::Closed,
        DaySchedule::NoInfo => BusinessStatus::NoInfo,
        DaySchedule::Intervals(intervals) => {
            let minute = local.hour() * 60 + local.minute();
            if intervals.iter().any(|iv| iv.contains_minute(minute)) {
                BusinessStatus::Open
            } else {
                BusinessStatus::Closed
            }
        }
    }
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod tests;
