//! Built-in holiday table for Rheinland-Pfalz.

use crate::core::calendar::DATE_FMT;
use crate::models::holiday::{PublicHoliday, SchoolHolidayPeriod, YearHolidayData};
use chrono::NaiveDate;

pub const REGION: &str = "Rheinland-Pfalz";

type PublicRow = (&'static str, &'static str);
type SchoolRow = (&'static str, &'static str, &'static str);

const PUBLIC_2025: &[PublicRow] = &[
    ("2025-01-01", "Neujahr"),
    ("2025-04-18", "Karfreitag"),
    ("2025-04-21", "Ostermontag"),
    ("2025-05-01", "Tag der Arbeit"),
    ("2025-05-29", "Christi Himmelfahrt"),
    ("2025-06-09", "Pfingstmontag"),
    ("2025-06-19", "Fronleichnam"),
    ("2025-10-03", "Tag der Deutschen Einheit"),
    ("2025-11-01", "Allerheiligen"),
    ("2025-12-25", "1. Weihnachtstag"),
    ("2025-12-26", "2. Weihnachtstag"),
];

const SCHOOL_2025: &[SchoolRow] = &[
    ("Osterferien", "2025-04-14", "2025-04-25"),
    ("Pfingstferien", "2025-06-10", "2025-06-13"),
    ("Sommerferien", "2025-07-07", "2025-08-15"),
    ("Herbstferien", "2025-10-13", "2025-10-24"),
    ("Weihnachtsferien", "2025-12-22", "2026-01-07"),
];

const PUBLIC_2026: &[PublicRow] = &[
    ("2026-01-01", "Neujahr"),
    ("2026-04-03", "Karfreitag"),
    ("2026-04-06", "Ostermontag"),
    ("2026-05-01", "Tag der Arbeit"),
    ("2026-05-14", "Christi Himmelfahrt"),
    ("2026-05-25", "Pfingstmontag"),
    ("2026-06-04", "Fronleichnam"),
    ("2026-10-03", "Tag der Deutschen Einheit"),
    ("2026-11-01", "Allerheiligen"),
    ("2026-12-25", "1. Weihnachtstag"),
    ("2026-12-26", "2. Weihnachtstag"),
];

const SCHOOL_2026: &[SchoolRow] = &[
    ("Osterferien", "2026-03-30", "2026-04-10"),
    ("Pfingstferien", "2026-05-26", "2026-05-29"),
    ("Sommerferien", "2026-06-29", "2026-08-07"),
    ("Herbstferien", "2026-10-05", "2026-10-16"),
    ("Weihnachtsferien", "2026-12-23", "2026-12-31"),
];

fn date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

fn build(public: &[PublicRow], school: &[SchoolRow]) -> YearHolidayData {
    YearHolidayData {
        public_holidays: public
            .iter()
            .filter_map(|(d, name)| Some(PublicHoliday::new(date(d)?, *name)))
            .collect(),
        school_holidays: school
            .iter()
            .filter_map(|(name, s, e)| Some(SchoolHolidayPeriod::new(*name, date(s)?, date(e)?)))
            .collect(),
    }
}

/// (year, data) pairs compiled into the binary.
pub fn builtin_years() -> Vec<(i32, YearHolidayData)> {
    vec![
        (2025, build(PUBLIC_2025, SCHOOL_2025)),
        (2026, build(PUBLIC_2026, SCHOOL_2026)),
    ]
}
