use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Office,   // Büro
    Shipping, // Versand
}

impl Department {
    /// Display order of the grid: Office rows first, then Shipping.
    pub const ALL: [Department; 2] = [Department::Office, Department::Shipping];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Office => "Büro",
            Department::Shipping => "Versand",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Department::Office => "OFFICE",
            Department::Shipping => "SHIPPING",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "OFFICE" => Some(Department::Office),
            "SHIPPING" => Some(Department::Shipping),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case, code or German label)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "o" | "office" | "büro" | "buero" => Some(Department::Office),
            "s" | "shipping" | "versand" => Some(Department::Shipping),
            _ => None,
        }
    }

    /// Position of the department in [`Department::ALL`].
    pub fn rank(&self) -> usize {
        Department::ALL
            .iter()
            .position(|d| d == self)
            .unwrap_or(Department::ALL.len())
    }
}
