use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::UnknownVariant;

/// Job roles an employee may hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    Developer,
    Designer,
    Manager,
    #[serde(rename = "Product Owner")]
    ProductOwner,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Developer,
        Role::Designer,
        Role::Manager,
        Role::ProductOwner,
    ];

    /// TEXT representation stored in the `employees.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::Manager => "Manager",
            Role::ProductOwner => "Product Owner",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|r| r.as_str()).join(", ")
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// A persisted employee row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Raw request body for create / replace. Every field is optional so the
/// validator can report all missing fields at once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Validated employee fields, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub role: Role,
}
