//! Cell classification for the month grid.
//!
//! Category precedence is data: [`PRECEDENCE`] lists the rules in the order
//! they are tried and the first rule that matches decides the category.
//! Interactivity and the today marker are computed independently.

use crate::core::calendar::{is_today, is_weekend};
use crate::core::holidays::HolidayMaps;
use crate::models::absence::AbsenceByDate;
use crate::models::absence_type::AbsenceType;
use crate::models::cell::{Cell, CellCategory};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Absence,
    PublicHoliday,
    SchoolHoliday,
    Weekend,
}

/// Highest priority first. A day matching no rule is [`CellCategory::Plain`].
pub const PRECEDENCE: [Rule; 4] = [
    Rule::Absence,
    Rule::PublicHoliday,
    Rule::SchoolHoliday,
    Rule::Weekend,
];

/// Everything known about one (employee, date) pair.
#[derive(Debug, Clone, Copy)]
pub struct CellInput<'a> {
    pub date: NaiveDate,
    pub absence: Option<AbsenceType>,
    pub public_holiday: Option<&'a str>,
    pub school_holiday: Option<&'a str>,
    pub weekend: bool,
    pub today: bool,
}

impl<'a> CellInput<'a> {
    pub fn gather(
        date: NaiveDate,
        absences: &AbsenceByDate,
        maps: &'a HolidayMaps,
        today: NaiveDate,
    ) -> Self {
        Self {
            date,
            absence: absences.get(&date).copied(),
            public_holiday: maps.public_holiday(date),
            school_holiday: maps.school_holiday(date),
            weekend: is_weekend(date),
            today: is_today(date, today),
        }
    }
}

impl Rule {
    fn apply(&self, input: &CellInput<'_>) -> Option<(CellCategory, String)> {
        match self {
            Rule::Absence => input
                .absence
                .map(|kind| (CellCategory::from(kind), kind.label().to_string())),
            Rule::PublicHoliday => input
                .public_holiday
                .map(|name| (CellCategory::PublicHoliday, name.to_string())),
            Rule::SchoolHoliday => input
                .school_holiday
                .map(|name| (CellCategory::SchoolHoliday, name.to_string())),
            Rule::Weekend => input
                .weekend
                .then(|| (CellCategory::Weekend, String::new())),
        }
    }
}

/// A weekday always accepts input; a weekend only when it already carries
/// an absence (so it can be changed or cleared).
pub fn is_interactive(input: &CellInput<'_>) -> bool {
    !input.weekend || input.absence.is_some()
}

pub fn classify_with(precedence: &[Rule], input: &CellInput<'_>) -> Cell {
    let (category, label) = precedence
        .iter()
        .find_map(|rule| rule.apply(input))
        .unwrap_or((CellCategory::Plain, String::new()));

    Cell {
        date: input.date,
        category,
        label,
        interactive: is_interactive(input),
        is_today: input.today,
    }
}

pub fn classify(input: &CellInput<'_>) -> Cell {
    classify_with(&PRECEDENCE, input)
}

pub fn classify_day(
    date: NaiveDate,
    absences: &AbsenceByDate,
    maps: &HolidayMaps,
    today: NaiveDate,
) -> Cell {
    classify(&CellInput::gather(date, absences, maps, today))
}
