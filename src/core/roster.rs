//! Grid row ordering: departments in fixed order, names ascending.

use crate::models::department::Department;
use crate::models::employee::Employee;
use std::cmp::Ordering;

/// Case-insensitive sort key that files umlauts next to their base letter.
fn collation_key(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'ä' | 'à' | 'á' | 'â' => out.push('a'),
            'ö' | 'ò' | 'ó' | 'ô' => out.push('o'),
            'ü' | 'ù' | 'ú' | 'û' => out.push('u'),
            'é' | 'è' | 'ê' => out.push('e'),
            'ß' => out.push_str("ss"),
            other => out.push(other),
        }
    }
    out
}

pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Group employees per department, every department present (possibly empty),
/// in [`Department::ALL`] order.
pub fn group(employees: &[Employee]) -> Vec<(Department, Vec<Employee>)> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| {
        a.department
            .rank()
            .cmp(&b.department.rank())
            .then_with(|| compare_names(&a.name, &b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    Department::ALL
        .iter()
        .map(|dep| {
            let members = sorted
                .iter()
                .filter(|e| e.department == *dep)
                .map(|e| (*e).clone())
                .collect();
            (*dep, members)
        })
        .collect()
}
