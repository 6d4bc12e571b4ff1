use teamcal::core::holidays::HolidayTable;
use teamcal::core::logic::{Core, MonthContext};
use teamcal::core::report::Report;
use teamcal::models::absence::AbsenceRecord;
use teamcal::models::absence_type::AbsenceType;
use teamcal::models::cell::CellCategory;
use teamcal::models::department::Department;
use teamcal::models::employee::Employee;
use teamcal::ui::grid::{GridOptions, legend, render};

mod common;
use common::d;

fn staff() -> Vec<Employee> {
    vec![
        Employee::new("1", "Zara", Department::Shipping),
        Employee::new("2", "Anna", Department::Office),
        Employee::new("3", "Bert", Department::Shipping),
    ]
}

#[test]
fn test_month_grid_layout() {
    let table = HolidayTable::builtin();
    let absences = vec![
        AbsenceRecord::new("2", d("2026-10-20"), AbsenceType::Vacation),
        AbsenceRecord::new("3", d("2026-10-21"), AbsenceType::Sick),
        AbsenceRecord::new("3", d("2026-11-02"), AbsenceType::Sick),
    ];

    let grid = Core::build_month_grid(2026, 10, &staff(), &absences, &table, d("2026-10-19"));

    assert_eq!(grid.days.len(), 31);
    assert_eq!(grid.employee_count(), 3);
    assert!(grid.has_holiday_data);
    assert_eq!(grid.today_column(), Some(18));

    assert_eq!(grid.blocks[0].department, Department::Office);
    assert_eq!(grid.blocks[0].rows[0].employee.name, "Anna");
    assert_eq!(grid.blocks[1].rows[0].employee.name, "Bert");
    assert_eq!(grid.blocks[1].rows[1].employee.name, "Zara");

    for block in &grid.blocks {
        for row in &block.rows {
            assert_eq!(row.cells.len(), grid.days.len());
        }
    }

    let anna = &grid.blocks[0].rows[0];
    assert_eq!(anna.cells[19].category, CellCategory::Vacation);
    assert_eq!(anna.cells[2].category, CellCategory::PublicHoliday);
    assert_eq!(anna.cells[4].category, CellCategory::SchoolHoliday);
    assert!(anna.cells[18].is_today);

    let bert = &grid.blocks[1].rows[0];
    assert_eq!(bert.cells[20].category, CellCategory::Sick);
    // November record does not leak into October.
    assert!(bert.cells.iter().filter(|c| c.category.is_absence()).count() == 1);

    assert_eq!(
        grid.public_holidays,
        vec![(d("2026-10-03"), "Tag der Deutschen Einheit".to_string())]
    );
    assert_eq!(grid.school_holidays, vec!["Herbstferien".to_string()]);
}

#[test]
fn test_month_grid_without_holiday_data() {
    let table = HolidayTable::builtin();
    let grid = Core::build_month_grid(1999, 1, &staff(), &[], &table, d("2026-10-19"));

    assert!(!grid.has_holiday_data);
    assert_eq!(grid.today_column(), None);
    assert!(grid.public_holidays.is_empty());
}

#[test]
fn test_month_context_recomputes_maps_per_year() {
    let table = HolidayTable::builtin();
    let mut ctx = MonthContext::new(&table, 2025, 12);
    assert_eq!(ctx.maps_year(), 2025);
    assert_eq!(ctx.days().len(), 31);

    ctx.select(2025, 11);
    assert_eq!(ctx.maps_year(), 2025);
    assert_eq!((ctx.year(), ctx.month()), (2025, 11));
    assert_eq!(ctx.days().len(), 30);

    ctx.select(2026, 1);
    assert_eq!(ctx.maps_year(), 2026);
    assert_eq!(
        ctx.maps().school_holiday(d("2026-01-05")),
        Some("Weihnachtsferien")
    );
    assert_eq!(ctx.days().first().copied(), Some(d("2026-01-01")));
}

#[test]
fn test_render_plain_grid_and_legend() {
    let table = HolidayTable::builtin();
    let absences = vec![AbsenceRecord::new("2", d("2026-10-20"), AbsenceType::Vacation)];
    let grid = Core::build_month_grid(2026, 10, &staff(), &absences, &table, d("2026-10-19"));

    let opts = GridOptions {
        color: false,
        show_today: true,
        region: "Rheinland-Pfalz",
    };
    let out = render(&grid, &opts);
    assert!(out.contains("Oktober 2026"));
    assert!(out.contains("Rheinland-Pfalz"));
    assert!(out.contains("Büro"));
    assert!(out.contains("Versand"));
    assert!(out.contains("Anna"));
    assert!(out.contains(" U "));
    assert!(out.contains("[·]"));
    assert!(!out.contains('\u{1b}'));

    let legend = legend(&grid, &opts);
    assert!(legend.contains("Urlaub"));
    assert!(legend.contains("03.10. Tag der Deutschen Einheit"));
    assert!(legend.contains("Herbstferien"));
}

#[test]
fn test_report_counts_per_year() {
    let absences = vec![
        AbsenceRecord::new("2", d("2026-10-20"), AbsenceType::Vacation),
        AbsenceRecord::new("2", d("2026-10-21"), AbsenceType::Vacation),
        AbsenceRecord::new("3", d("2026-10-21"), AbsenceType::Sick),
        AbsenceRecord::new("3", d("2025-03-03"), AbsenceType::Overtime),
        AbsenceRecord::new("ghost", d("2026-10-21"), AbsenceType::Sick),
    ];

    let report = Report::build(&staff(), &absences, Some(2026));
    assert_eq!(report.total_employees, 3);
    assert_eq!(report.total_absences, 3);
    assert_eq!(report.count_for(AbsenceType::Vacation), 2);
    assert_eq!(report.count_for(AbsenceType::Sick), 1);
    assert_eq!(report.count_for(AbsenceType::Overtime), 0);
    assert_eq!(
        report.by_department,
        vec![(Department::Office, 1), (Department::Shipping, 2)]
    );

    let names: Vec<&str> = report
        .employees
        .iter()
        .map(|t| t.employee.name.as_str())
        .collect();
    assert_eq!(names, vec!["Anna", "Bert", "Zara"]);
    assert_eq!(report.employees[0].vacation, 2);
    assert_eq!(report.employees[1].total(), 1);

    let all_years = Report::build(&staff(), &absences, None);
    assert_eq!(all_years.total_absences, 4);
    assert_eq!(all_years.count_for(AbsenceType::Overtime), 1);
}
