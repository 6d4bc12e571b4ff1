use teamcal::core::classifier::{CellInput, PRECEDENCE, Rule, classify, classify_day, classify_with};
use teamcal::core::holidays::{HolidayMaps, HolidayTable};
use teamcal::models::absence::AbsenceByDate;
use teamcal::models::absence_type::AbsenceType;
use teamcal::models::cell::CellCategory;

mod common;
use common::d;

fn maps_for(year: i32) -> HolidayMaps {
    HolidayMaps::expand(&HolidayTable::builtin().resolve_year(year))
}

fn input(date: &str) -> CellInput<'static> {
    CellInput {
        date: d(date),
        absence: None,
        public_holiday: None,
        school_holiday: None,
        weekend: false,
        today: false,
    }
}

#[test]
fn test_precedence_table_order() {
    assert_eq!(
        PRECEDENCE,
        [
            Rule::Absence,
            Rule::PublicHoliday,
            Rule::SchoolHoliday,
            Rule::Weekend
        ]
    );
}

#[test]
fn test_absence_beats_public_holiday() {
    let maps = maps_for(2025);
    let mut absences = AbsenceByDate::new();
    absences.insert(d("2025-04-18"), AbsenceType::Vacation);

    let cell = classify_day(d("2025-04-18"), &absences, &maps, d("2025-04-01"));
    assert_eq!(cell.category, CellCategory::Vacation);
    assert_eq!(cell.label, "Urlaub");
    assert!(cell.interactive);
    assert!(!cell.is_today);
}

#[test]
fn test_public_holiday_on_sunday_is_not_interactive() {
    let maps = maps_for(2026);
    let cell = classify_day(
        d("2026-11-01"),
        &AbsenceByDate::new(),
        &maps,
        d("2026-10-19"),
    );

    assert_eq!(cell.category, CellCategory::PublicHoliday);
    assert_eq!(cell.label, "Allerheiligen");
    assert!(!cell.interactive);
}

#[test]
fn test_public_holiday_beats_school_holiday() {
    let maps = maps_for(2026);
    // New Year lies inside the carried-over winter break.
    assert!(maps.school_holiday(d("2026-01-01")).is_some());

    let cell = classify_day(d("2026-01-01"), &AbsenceByDate::new(), &maps, d("2026-01-01"));
    assert_eq!(cell.category, CellCategory::PublicHoliday);
    assert_eq!(cell.label, "Neujahr");
    assert!(cell.interactive);
    assert!(cell.is_today);
}

#[test]
fn test_school_holiday_weekend_and_plain_days() {
    let maps = maps_for(2026);
    let none = AbsenceByDate::new();
    let today = d("2026-10-19");

    let school = classify_day(d("2026-10-05"), &none, &maps, today);
    assert_eq!(school.category, CellCategory::SchoolHoliday);
    assert_eq!(school.label, "Herbstferien");
    assert!(school.interactive);

    let saturday = classify_day(d("2026-10-10"), &none, &maps, today);
    assert_eq!(saturday.category, CellCategory::Weekend);
    assert!(!saturday.interactive);

    let plain = classify_day(d("2026-10-19"), &none, &maps, today);
    assert_eq!(plain.category, CellCategory::Plain);
    assert!(plain.label.is_empty());
    assert!(plain.interactive);
    assert!(plain.is_today);
}

#[test]
fn test_weekend_with_absence_stays_interactive() {
    let maps = maps_for(2026);
    let mut absences = AbsenceByDate::new();
    absences.insert(d("2026-10-24"), AbsenceType::Sick);

    let cell = classify_day(d("2026-10-24"), &absences, &maps, d("2026-10-19"));
    assert_eq!(cell.category, CellCategory::Sick);
    assert!(cell.interactive);
}

#[test]
fn test_each_absence_type_maps_to_its_category() {
    for kind in AbsenceType::ALL {
        let mut i = input("2026-10-20");
        i.absence = Some(kind);
        let cell = classify(&i);
        assert_eq!(cell.category, CellCategory::from(kind));
        assert!(cell.category.is_absence());
        assert_eq!(cell.label, kind.label());
    }
}

#[test]
fn test_custom_precedence_is_respected() {
    let mut i = input("2025-12-22");
    i.school_holiday = Some("Weihnachtsferien");
    i.absence = Some(AbsenceType::Overtime);

    let default = classify(&i);
    assert_eq!(default.category, CellCategory::Overtime);

    let holidays_first = [Rule::SchoolHoliday, Rule::Absence];
    let cell = classify_with(&holidays_first, &i);
    assert_eq!(cell.category, CellCategory::SchoolHoliday);
    assert_eq!(cell.label, "Weihnachtsferien");
}
