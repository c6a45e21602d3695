use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::UnknownVariant;

/// Hardware categories tracked by the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DeviceType {
    Laptop,
    Display,
    Peripheral,
}

impl DeviceType {
    pub const ALL: [DeviceType; 3] = [
        DeviceType::Laptop,
        DeviceType::Display,
        DeviceType::Peripheral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Laptop => "Laptop",
            DeviceType::Display => "Display",
            DeviceType::Peripheral => "Peripheral",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.map(|t| t.as_str()).join(", ")
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                value: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// A persisted device row. `owner_id` is `None` for unassigned devices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Device {
    pub id: i64,
    pub device_name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceInput {
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default, rename = "type")]
    pub device_type: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
}

/// Validated device fields. The owner reference is still unchecked here;
/// see `service::owner::resolve_owner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub device_name: String,
    pub device_type: DeviceType,
    pub owner_id: Option<i64>,
}
