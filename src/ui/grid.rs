//! Terminal rendering of a [`MonthGrid`].

use crate::core::calendar::{month_name, weekday_short};
use crate::models::absence_type::AbsenceType;
use crate::models::cell::{Cell, CellCategory};
use crate::models::month_grid::MonthGrid;
use crate::utils::colors::{BOLD, RESET, UNDERLINE, color_for_category, paint};
use crate::utils::formatting::{pad_right, truncate};
use chrono::Datelike;

const NAME_WIDTH: usize = 18;

pub struct GridOptions<'a> {
    pub color: bool,
    pub show_today: bool,
    pub region: &'a str,
}

fn glyph(cell: &Cell) -> &'static str {
    match cell.category {
        CellCategory::Vacation => AbsenceType::Vacation.short(),
        CellCategory::Overtime => AbsenceType::Overtime.short(),
        CellCategory::Sick => AbsenceType::Sick.short(),
        CellCategory::PublicHoliday => "F",
        CellCategory::SchoolHoliday => "S",
        CellCategory::Weekend => " ",
        CellCategory::Plain => "·",
    }
}

fn render_cell(cell: &Cell, opts: &GridOptions<'_>) -> String {
    let today = opts.show_today && cell.is_today;
    let text = if today {
        format!("[{}]", glyph(cell))
    } else {
        format!(" {} ", glyph(cell))
    };

    if !opts.color || cell.category == CellCategory::Plain {
        return text;
    }
    paint(color_for_category(cell.category), &text)
}

/// Heading plus the per-department rows. The caller decides whether the grid
/// is shown at all (missing holiday data, empty roster).
pub fn render(grid: &MonthGrid, opts: &GridOptions<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} · {}\n\n",
        month_name(grid.month),
        grid.year,
        opts.region
    ));

    // Day header: weekday abbreviations, then day numbers.
    let mut names = pad_right("Mitarbeiter", NAME_WIDTH);
    let mut numbers = " ".repeat(NAME_WIDTH);
    let today_col = grid.today_column();

    for (i, day) in grid.days.iter().enumerate() {
        let wd = format!(" {}", weekday_short(*day));
        let dn = format!(" {:02}", day.day());
        if opts.color && opts.show_today && today_col == Some(i) {
            names.push_str(&format!("{BOLD}{UNDERLINE}{wd}{RESET}"));
            numbers.push_str(&format!("{BOLD}{UNDERLINE}{dn}{RESET}"));
        } else {
            names.push_str(&wd);
            numbers.push_str(&dn);
        }
    }
    out.push_str(&names);
    out.push('\n');
    out.push_str(&numbers);
    out.push('\n');

    for block in &grid.blocks {
        if block.rows.is_empty() {
            continue;
        }
        let title = format!("── {} ", block.department.label());
        if opts.color {
            out.push_str(&format!("{BOLD}{title}{RESET}\n"));
        } else {
            out.push_str(&format!("{title}\n"));
        }

        for row in &block.rows {
            out.push_str(&pad_right(
                &truncate(&row.employee.name, NAME_WIDTH - 1),
                NAME_WIDTH,
            ));
            for cell in &row.cells {
                out.push_str(&render_cell(cell, opts));
            }
            out.push_str(&format!("  #{}\n", row.employee.id));
        }
    }

    out
}

/// Colour legend, followed by the holidays that fall into the month.
pub fn legend(grid: &MonthGrid, opts: &GridOptions<'_>) -> String {
    let sample = |category: CellCategory, g: &str| {
        let text = format!(" {} ", g);
        if opts.color {
            paint(color_for_category(category), &text)
        } else {
            format!("[{}]", g)
        }
    };

    let mut out = String::from("\nLegende: ");
    for kind in AbsenceType::ALL {
        out.push_str(&format!(
            "{} {}  ",
            sample(CellCategory::from(kind), kind.short()),
            kind.label()
        ));
    }
    out.push_str(&format!(
        "{} Gesetzl. Feiertag  {} Schulferien  {} Wochenende\n",
        sample(CellCategory::PublicHoliday, "F"),
        sample(CellCategory::SchoolHoliday, "S"),
        sample(CellCategory::Weekend, " "),
    ));

    for (date, name) in &grid.public_holidays {
        out.push_str(&format!("  {} {}\n", date.format("%d.%m."), name));
    }
    for name in &grid.school_holidays {
        out.push_str(&format!("  {}\n", name));
    }

    out
}
