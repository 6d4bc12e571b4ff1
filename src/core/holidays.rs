//! Holiday resolution per year.
//!
//! A year's view is its own public holidays plus its own school-holiday
//! periods, plus every period of the previous year that ends inside it
//! (the winter break that starts in December). Public holidays never carry
//! over.

use crate::core::calendar::is_weekend;
use crate::core::holiday_data;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::{PublicHoliday, SchoolHolidayPeriod, YearHolidayData};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// Reference holiday data keyed by year.
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    years: BTreeMap<i32, YearHolidayData>,
}

/// Effective holidays for one year, carry-over included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedYear {
    pub year: i32,
    pub public_holidays: Vec<PublicHoliday>,
    pub school_holidays: Vec<SchoolHolidayPeriod>,
}

/// Day-level lookup tables derived from a [`ResolvedYear`].
#[derive(Debug, Clone, Default)]
pub struct HolidayMaps {
    pub public: HashMap<NaiveDate, String>,
    pub school: HashMap<NaiveDate, String>,
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (year, data) in holiday_data::builtin_years() {
            table.insert(year, data);
        }
        table
    }

    pub fn insert(&mut self, year: i32, data: YearHolidayData) {
        self.years.insert(year, data);
    }

    /// Years present in `other` replace the entries of `self`.
    pub fn merge(&mut self, other: HolidayTable) {
        self.years.extend(other.years);
    }

    pub fn has_year(&self, year: i32) -> bool {
        self.years.contains_key(&year)
    }

    pub fn get(&self, year: i32) -> Option<&YearHolidayData> {
        self.years.get(&year)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Effective holiday sets of `year`. A missing year resolves to empty sets.
    pub fn resolve_year(&self, year: i32) -> ResolvedYear {
        let empty = YearHolidayData::default();
        let current = self.get(year).unwrap_or(&empty);
        let previous = self.get(year - 1).unwrap_or(&empty);

        let public_holidays = current
            .public_holidays
            .iter()
            .filter(|h| h.date.year() == year)
            .cloned()
            .collect();

        let mut school_holidays = current.school_holidays.clone();
        school_holidays.extend(
            previous
                .school_holidays
                .iter()
                .filter(|p| p.end_date.year() == year)
                .cloned(),
        );

        ResolvedYear {
            year,
            public_holidays,
            school_holidays,
        }
    }

    /// Parse a JSON table of the form `{"2027": {"publicHolidays": [...], "schoolHolidays": [...]}}`.
    /// Every period must satisfy `startDate <= endDate`.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, YearHolidayData> =
            serde_json::from_str(json).map_err(|e| AppError::HolidayData(e.to_string()))?;

        let mut table = Self::new();
        for (key, data) in raw {
            let year: i32 = key
                .trim()
                .parse()
                .map_err(|_| AppError::HolidayData(format!("invalid year key '{}'", key)))?;
            validate_year(&data)?;
            table.insert(year, data);
        }
        Ok(table)
    }

    pub fn load_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::HolidayData(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }
}

fn validate_year(data: &YearHolidayData) -> AppResult<()> {
    for p in &data.school_holidays {
        if p.end_date < p.start_date {
            return Err(AppError::InvalidDateRange {
                name: p.name.clone(),
                start: p.start_date.to_string(),
                end: p.end_date.to_string(),
            });
        }
    }
    Ok(())
}

impl HolidayMaps {
    /// Expand a resolved year into per-day maps.
    ///
    /// The year is `resolved.year`. Days outside it are dropped, also for
    /// hand-built [`ResolvedYear`] values. School-holiday days on a weekend are
    /// dropped; public holidays keep weekend dates. On duplicate dates the later entry wins.
    /// A period with `end_date < start_date` contributes no days.
    pub fn expand(resolved: &ResolvedYear) -> Self {
        let year = resolved.year;

        let public = resolved
            .public_holidays
            .iter()
            .filter(|h| h.date.year() == year)
            .map(|h| (h.date, h.name.clone()))
            .collect();

        let mut school = HashMap::new();
        for period in &resolved.school_holidays {
            for day in period
                .start_date
                .iter_days()
                .take_while(|d| *d <= period.end_date)
            {
                if day.year() == year && !is_weekend(day) {
                    school.insert(day, period.name.clone());
                }
            }
        }

        Self { public, school }
    }

    pub fn public_holiday(&self, date: NaiveDate) -> Option<&str> {
        self.public.get(&date).map(String::as_str)
    }

    pub fn school_holiday(&self, date: NaiveDate) -> Option<&str> {
        self.school.get(&date).map(String::as_str)
    }
}
