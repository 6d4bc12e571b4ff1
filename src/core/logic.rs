use crate::core::calendar::days_in_month;
use crate::core::classifier::classify_day;
use crate::core::holidays::{HolidayMaps, HolidayTable};
use crate::core::roster;
use crate::models::absence::{AbsenceByDate, AbsenceRecord, index_by_employee};
use crate::models::employee::Employee;
use crate::models::month_grid::{DepartmentBlock, EmployeeRow, MonthGrid};
use chrono::NaiveDate;

/// Holds the derived calendar state for the selected month.
///
/// Holiday maps are rebuilt only when the year changes, the day list only
/// when (year, month) changes.
pub struct MonthContext<'t> {
    table: &'t HolidayTable,
    year: i32,
    month: u32,
    days: Vec<NaiveDate>,
    maps: HolidayMaps,
    maps_year: i32,
}

impl<'t> MonthContext<'t> {
    pub fn new(table: &'t HolidayTable, year: i32, month: u32) -> Self {
        Self {
            table,
            year,
            month,
            days: days_in_month(year, month),
            maps: HolidayMaps::expand(&table.resolve_year(year)),
            maps_year: year,
        }
    }

    pub fn select(&mut self, year: i32, month: u32) {
        if year != self.maps_year {
            self.maps = HolidayMaps::expand(&self.table.resolve_year(year));
            self.maps_year = year;
        }
        if (year, month) != (self.year, self.month) {
            self.days = days_in_month(year, month);
        }
        self.year = year;
        self.month = month;
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn maps(&self) -> &HolidayMaps {
        &self.maps
    }

    /// Year the current holiday maps were computed for.
    pub fn maps_year(&self) -> i32 {
        self.maps_year
    }

    pub fn grid(
        &self,
        employees: &[Employee],
        absences: &[AbsenceRecord],
        today: NaiveDate,
    ) -> MonthGrid {
        let by_employee = index_by_employee(absences);
        let none = AbsenceByDate::new();

        let blocks = roster::group(employees)
            .into_iter()
            .map(|(department, members)| DepartmentBlock {
                department,
                rows: members
                    .into_iter()
                    .map(|employee| {
                        let own = by_employee.get(&employee.id).unwrap_or(&none);
                        let cells = self
                            .days
                            .iter()
                            .map(|d| classify_day(*d, own, &self.maps, today))
                            .collect();
                        EmployeeRow { employee, cells }
                    })
                    .collect(),
            })
            .collect();

        let public_holidays = self
            .days
            .iter()
            .filter_map(|d| self.maps.public_holiday(*d).map(|n| (*d, n.to_string())))
            .collect();

        let mut school_holidays: Vec<String> = Vec::new();
        for name in self.days.iter().filter_map(|d| self.maps.school_holiday(*d)) {
            if !school_holidays.iter().any(|s| s == name) {
                school_holidays.push(name.to_string());
            }
        }

        MonthGrid {
            year: self.year,
            month: self.month,
            days: self.days.clone(),
            blocks,
            today,
            public_holidays,
            school_holidays,
            has_holiday_data: self.table.has_year(self.year),
        }
    }
}

pub struct Core;

impl Core {
    pub fn build_month_grid(
        year: i32,
        month: u32,
        employees: &[Employee],
        absences: &[AbsenceRecord],
        table: &HolidayTable,
        today: NaiveDate,
    ) -> MonthGrid {
        MonthContext::new(table, year, month).grid(employees, absences, today)
    }
}
