use crate::models::department::Department;
use serde::{Deserialize, Serialize};

/// A roster entry. Identity is the opaque `id`; name and department never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub department: Department,
}

impl Employee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, department: Department) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department,
        }
    }
}
