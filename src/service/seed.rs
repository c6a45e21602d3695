//! Baseline data inserted at startup.
//!
//! Devices name their owner by employee name; names are resolved to the ids
//! the employee inserts just returned. A device whose owner name matches no
//! seeded employee is skipped, not treated as an error.

use crate::db::Store;
use crate::error::RegistryError;
use crate::types::{DeviceType, NewDevice, NewEmployee, Role};
use std::collections::HashMap;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
pub struct SeedEmployee {
    pub name: &'static str,
    pub role: Role,
}

#[derive(Debug, Clone, Copy)]
pub struct SeedDevice {
    pub device_name: &'static str,
    pub device_type: DeviceType,
    pub owner_name: &'static str,
}

pub const BASELINE_EMPLOYEES: &[SeedEmployee] = &[
    SeedEmployee {
        name: "John Doe",
        role: Role::Developer,
    },
    SeedEmployee {
        name: "Jane Smith",
        role: Role::ProductOwner,
    },
];

pub const BASELINE_DEVICES: &[SeedDevice] = &[
    SeedDevice {
        device_name: "MacBook Pro M1",
        device_type: DeviceType::Laptop,
        owner_name: "John Doe",
    },
    SeedDevice {
        device_name: "Dell UltraSharp 27",
        device_type: DeviceType::Display,
        owner_name: "Jane Smith",
    },
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub employees: usize,
    pub devices: usize,
    pub skipped_devices: usize,
}

/// Seed the baseline set unless the store already holds employees, so a
/// restart against a file database does not duplicate it.
pub async fn seed_database(store: &Store) -> Result<SeedReport, RegistryError> {
    let existing = store.count_employees().await?;
    if existing > 0 {
        info!(existing, "employees already present; skipping seed");
        return Ok(SeedReport::default());
    }
    seed_with(store, BASELINE_EMPLOYEES, BASELINE_DEVICES).await
}

pub async fn seed_with(
    store: &Store,
    employees: &[SeedEmployee],
    devices: &[SeedDevice],
) -> Result<SeedReport, RegistryError> {
    info!("Starting database seeding");
    let mut report = SeedReport::default();
    let mut ids_by_name: HashMap<&str, i64> = HashMap::with_capacity(employees.len());

    for seed in employees {
        let id = store
            .insert_employee(&NewEmployee {
                name: seed.name.to_string(),
                role: seed.role,
            })
            .await?;
        info!(id, name = seed.name, "seeded employee");
        ids_by_name.insert(seed.name, id);
        report.employees += 1;
    }

    for seed in devices {
        let Some(&owner_id) = ids_by_name.get(seed.owner_name) else {
            warn!(
                device_name = seed.device_name,
                owner_name = seed.owner_name,
                "seed device owner not found; skipping"
            );
            report.skipped_devices += 1;
            continue;
        };
        let id = store
            .insert_device(&NewDevice {
                device_name: seed.device_name.to_string(),
                device_type: seed.device_type,
                owner_id: Some(owner_id),
            })
            .await?;
        info!(id, device_name = seed.device_name, owner_id, "seeded device");
        report.devices += 1;
    }

    info!(
        employees = report.employees,
        devices = report.devices,
        skipped = report.skipped_devices,
        "Database seeding completed"
    );
    Ok(report)
}
