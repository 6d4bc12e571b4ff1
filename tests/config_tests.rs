use std::env;
use std::fs;
use teamcal::config::Config;
use teamcal::errors::AppError;

fn temp_file(name: &str) -> std::path::PathBuf {
    let path = env::temp_dir().join(format!("teamcal_{}", name));
    fs::remove_file(&path).ok();
    path
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let path = temp_file("missing.conf");
    let cfg = Config::load_from(&path).unwrap();

    assert_eq!(cfg.region, "Rheinland-Pfalz");
    assert!(cfg.show_today);
    assert!(cfg.holiday_file.is_none());
    assert!(cfg.database.ends_with("teamcal.sqlite"));
}

#[test]
fn test_config_save_and_load() {
    let path = temp_file("saved.conf");
    let cfg = Config {
        database: "/tmp/team.sqlite".into(),
        holiday_file: Some("/tmp/holidays.json".into()),
        region: "Rheinland-Pfalz".into(),
        show_today: false,
    };
    cfg.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.database, "/tmp/team.sqlite");
    assert_eq!(loaded.holiday_file.as_deref(), Some("/tmp/holidays.json"));
    assert!(!loaded.show_today);
}

#[test]
fn test_partial_config_fills_defaults() {
    let path = temp_file("partial.conf");
    fs::write(&path, "database: /tmp/other.sqlite\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/other.sqlite");
    assert!(cfg.show_today);
    assert_eq!(cfg.region, "Rheinland-Pfalz");
}

#[test]
fn test_holiday_file_extends_builtin_table() {
    let json = temp_file("holidays_ok.json");
    fs::write(
        &json,
        r#"{"2027": {"publicHolidays": [{"date": "2027-01-01", "name": "Neujahr"}]}}"#,
    )
    .unwrap();

    let cfg = Config {
        holiday_file: Some(json.to_string_lossy().to_string()),
        ..Config::default()
    };
    let table = cfg.holiday_table().unwrap();
    assert!(table.has_year(2025));
    assert!(table.has_year(2027));
}

#[test]
fn test_broken_holiday_file_is_reported() {
    let json = temp_file("holidays_bad.json");
    fs::write(
        &json,
        r#"{"2027": {"schoolHolidays": [{"name": "Osterferien", "startDate": "2027-04-02", "endDate": "2027-03-22"}]}}"#,
    )
    .unwrap();

    let cfg = Config {
        holiday_file: Some(json.to_string_lossy().to_string()),
        ..Config::default()
    };
    assert!(matches!(
        cfg.holiday_table(),
        Err(AppError::InvalidDateRange { .. })
    ));

    let missing = Config {
        holiday_file: Some(temp_file("nope.json").to_string_lossy().to_string()),
        ..Config::default()
    };
    assert!(matches!(missing.holiday_table(), Err(AppError::HolidayData(_))));
}
