use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AbsenceType {
    Vacation,
    Overtime,
    Sick,
}

impl AbsenceType {
    pub const ALL: [AbsenceType; 3] = [
        AbsenceType::Vacation,
        AbsenceType::Overtime,
        AbsenceType::Sick,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "Urlaub",
            AbsenceType::Overtime => "Überstundenfrei",
            AbsenceType::Sick => "Krank",
        }
    }

    /// One-character glyph used inside the month grid.
    pub fn short(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "U",
            AbsenceType::Overtime => "Ü",
            AbsenceType::Sick => "K",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AbsenceType::Vacation => "VACATION",
            AbsenceType::Overtime => "OVERTIME",
            AbsenceType::Sick => "SICK",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "VACATION" => Some(AbsenceType::Vacation),
            "OVERTIME" => Some(AbsenceType::Overtime),
            "SICK" => Some(AbsenceType::Sick),
            _ => None,
        }
    }

    /// Helper: accept DB codes, German labels and grid glyphs in any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "vacation" | "urlaub" | "u" | "v" => Some(AbsenceType::Vacation),
            "overtime" | "überstundenfrei" | "ueberstundenfrei" | "ü" | "o" => {
                Some(AbsenceType::Overtime)
            }
            "sick" | "krank" | "k" | "s" => Some(AbsenceType::Sick),
            _ => None,
        }
    }
}
