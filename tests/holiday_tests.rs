use chrono::Datelike;
use teamcal::core::calendar::is_weekend;
use teamcal::core::holidays::{HolidayMaps, HolidayTable};
use teamcal::errors::AppError;
use teamcal::models::holiday::{PublicHoliday, SchoolHolidayPeriod, YearHolidayData};

mod common;
use common::d;

#[test]
fn test_resolve_2025_contains_new_year() {
    let table = HolidayTable::builtin();
    let resolved = table.resolve_year(2025);

    assert!(
        resolved
            .public_holidays
            .contains(&PublicHoliday::new(d("2025-01-01"), "Neujahr"))
    );
    assert!(resolved.public_holidays.iter().all(|h| h.date.year() == 2025));
    assert_eq!(resolved.public_holidays.len(), 11);
}

#[test]
fn test_unconfigured_year_resolves_empty() {
    let table = HolidayTable::builtin();
    let resolved = table.resolve_year(1999);

    assert!(resolved.public_holidays.is_empty());
    assert!(resolved.school_holidays.is_empty());
    assert!(!table.has_year(1999));
    assert!(table.has_year(2025));
}

#[test]
fn test_public_holidays_are_filtered_to_their_own_year() {
    let mut table = HolidayTable::new();
    table.insert(
        2024,
        YearHolidayData {
            public_holidays: vec![PublicHoliday::new(d("2024-12-25"), "1. Weihnachtstag")],
            school_holidays: vec![],
        },
    );
    table.insert(
        2025,
        YearHolidayData {
            public_holidays: vec![
                PublicHoliday::new(d("2025-01-01"), "Neujahr"),
                // misfiled entry
                PublicHoliday::new(d("2024-12-26"), "2. Weihnachtstag"),
            ],
            school_holidays: vec![],
        },
    );

    let resolved = table.resolve_year(2025);
    assert_eq!(
        resolved.public_holidays,
        vec![PublicHoliday::new(d("2025-01-01"), "Neujahr")]
    );
}

#[test]
fn test_winter_break_carries_over_into_next_year() {
    let table = HolidayTable::builtin();
    let resolved = table.resolve_year(2026);

    let winter = SchoolHolidayPeriod::new("Weihnachtsferien", d("2025-12-22"), d("2026-01-07"));
    assert!(resolved.school_holidays.contains(&winter));

    let maps = HolidayMaps::expand(&resolved);
    for day in ["2026-01-01", "2026-01-02", "2026-01-05", "2026-01-06", "2026-01-07"] {
        assert_eq!(maps.school_holiday(d(day)), Some("Weihnachtsferien"), "{}", day);
    }
    // 3rd and 4th are a weekend, the 8th is after the break.
    assert_eq!(maps.school_holiday(d("2026-01-03")), None);
    assert_eq!(maps.school_holiday(d("2026-01-04")), None);
    assert_eq!(maps.school_holiday(d("2026-01-08")), None);
}

#[test]
fn test_public_holidays_do_not_carry_over() {
    let table = HolidayTable::builtin();
    let resolved = table.resolve_year(2026);
    assert!(resolved.public_holidays.iter().all(|h| h.date.year() == 2026));
}

#[test]
fn test_expansion_keeps_only_target_year_weekdays() {
    let table = HolidayTable::builtin();
    let maps = HolidayMaps::expand(&table.resolve_year(2025));

    // December part of the winter break stays in 2025, January part does not.
    assert_eq!(maps.school_holiday(d("2025-12-22")), Some("Weihnachtsferien"));
    assert_eq!(maps.school_holiday(d("2026-01-05")), None);

    assert!(maps.school.keys().all(|day| day.year() == 2025 && !is_weekend(*day)));

    let december = maps
        .school
        .iter()
        .filter(|(day, name)| day.month() == 12 && name.as_str() == "Weihnachtsferien")
        .count();
    assert_eq!(december, 8);
}

#[test]
fn test_public_holiday_on_weekend_is_kept() {
    let table = HolidayTable::builtin();
    let maps = HolidayMaps::expand(&table.resolve_year(2026));

    assert!(is_weekend(d("2026-11-01")));
    assert_eq!(maps.public_holiday(d("2026-11-01")), Some("Allerheiligen"));
    assert!(is_weekend(d("2026-10-03")));
    assert_eq!(
        maps.public_holiday(d("2026-10-03")),
        Some("Tag der Deutschen Einheit")
    );
}

#[test]
fn test_duplicate_public_holiday_last_entry_wins() {
    let mut table = HolidayTable::new();
    table.insert(
        2025,
        YearHolidayData {
            public_holidays: vec![
                PublicHoliday::new(d("2025-05-01"), "Maifeiertag"),
                PublicHoliday::new(d("2025-05-01"), "Tag der Arbeit"),
            ],
            school_holidays: vec![],
        },
    );

    let maps = HolidayMaps::expand(&table.resolve_year(2025));
    assert_eq!(maps.public_holiday(d("2025-05-01")), Some("Tag der Arbeit"));
}

#[test]
fn test_reversed_period_contributes_no_days() {
    let mut table = HolidayTable::new();
    table.insert(
        2025,
        YearHolidayData {
            public_holidays: vec![],
            school_holidays: vec![SchoolHolidayPeriod::new(
                "Kaputt",
                d("2025-03-10"),
                d("2025-03-01"),
            )],
        },
    );

    let maps = HolidayMaps::expand(&table.resolve_year(2025));
    assert!(maps.school.is_empty());
}

#[test]
fn test_json_table_loads_and_merges() {
    let json = r#"{
        "2027": {
            "publicHolidays": [{"date": "2027-01-01", "name": "Neujahr"}],
            "schoolHolidays": [{"name": "Osterferien", "startDate": "2027-03-22", "endDate": "2027-04-02"}]
        }
    }"#;

    let extra = HolidayTable::from_json_str(json).expect("valid table");
    let mut table = HolidayTable::builtin();
    table.merge(extra);

    assert!(table.has_year(2027));
    assert!(table.has_year(2025));
    let maps = HolidayMaps::expand(&table.resolve_year(2027));
    assert_eq!(maps.public_holiday(d("2027-01-01")), Some("Neujahr"));
    assert_eq!(maps.school_holiday(d("2027-03-22")), Some("Osterferien"));
}

#[test]
fn test_json_table_rejects_reversed_period() {
    let json = r#"{
        "2027": {
            "publicHolidays": [],
            "schoolHolidays": [{"name": "Herbstferien", "startDate": "2027-10-15", "endDate": "2027-10-04"}]
        }
    }"#;

    match HolidayTable::from_json_str(json) {
        Err(AppError::InvalidDateRange { name, .. }) => assert_eq!(name, "Herbstferien"),
        other => panic!("expected InvalidDateRange, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_json_table_rejects_bad_dates_and_keys() {
    let bad_date = r#"{"2027": {"publicHolidays": [{"date": "01.01.2027", "name": "Neujahr"}]}}"#;
    assert!(matches!(
        HolidayTable::from_json_str(bad_date),
        Err(AppError::HolidayData(_))
    ));

    let bad_key = r#"{"next": {"publicHolidays": []}}"#;
    assert!(matches!(
        HolidayTable::from_json_str(bad_key),
        Err(AppError::HolidayData(_))
    ));
}

#[test]
fn test_expand_uses_resolved_year_for_hand_built_input() {
    use teamcal::core::holidays::ResolvedYear;

    let resolved = ResolvedYear {
        year: 2026,
        public_holidays: vec![
            PublicHoliday::new(d("2025-12-26"), "2. Weihnachtstag"),
            PublicHoliday::new(d("2026-01-01"), "Neujahr"),
        ],
        school_holidays: vec![],
    };

    let maps = HolidayMaps::expand(&resolved);
    assert_eq!(maps.public.len(), 1);
    assert_eq!(maps.public_holiday(d("2026-01-01")), Some("Neujahr"));
    assert_eq!(maps.public_holiday(d("2025-12-26")), None);
}
