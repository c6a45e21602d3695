mod common;

use common::empty_store;
use device_registry::service::seed::{
    BASELINE_DEVICES, BASELINE_EMPLOYEES, SeedDevice, SeedEmployee, seed_database, seed_with,
};
use device_registry::types::{DeviceType, NewEmployee, Role};

#[tokio::test]
async fn baseline_seed_links_devices_to_owners() {
    let store = empty_store().await;

    let report = seed_database(&store).await.unwrap();
    assert_eq!(report.employees, BASELINE_EMPLOYEES.len());
    assert_eq!(report.devices, BASELINE_DEVICES.len());
    assert_eq!(report.skipped_devices, 0);

    let employees = store.list_employees().await.unwrap();
    let devices = store.list_devices().await.unwrap();
    for seed in BASELINE_DEVICES {
        let device = devices
            .iter()
            .find(|d| d.device_name == seed.device_name)
            .expect("seed device missing");
        let owner = employees
            .iter()
            .find(|e| Some(e.id) == device.owner_id)
            .expect("seed device has no owner");
        assert_eq!(owner.name, seed.owner_name);
    }
}

#[tokio::test]
async fn device_with_unknown_owner_name_is_skipped() {
    let store = empty_store().await;
    let employees = [SeedEmployee {
        name: "Ann",
        role: Role::Designer,
    }];
    let devices = [
        SeedDevice {
            device_name: "Monitor",
            device_type: DeviceType::Display,
            owner_name: "Ann",
        },
        SeedDevice {
            device_name: "Orphan Laptop",
            device_type: DeviceType::Laptop,
            owner_name: "Nobody",
        },
    ];

    let report = seed_with(&store, &employees, &devices).await.unwrap();
    assert_eq!(report.employees, 1);
    assert_eq!(report.devices, 1);
    assert_eq!(report.skipped_devices, 1);

    let stored = store.list_devices().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].device_name, "Monitor");
}

#[tokio::test]
async fn baseline_seed_runs_once_per_database() {
    let store = empty_store().await;

    let first = seed_database(&store).await.unwrap();
    assert_eq!(first.employees, 2);

    let second = seed_database(&store).await.unwrap();
    assert_eq!(second.employees, 0);
    assert_eq!(second.devices, 0);

    assert_eq!(store.list_employees().await.unwrap().len(), 2);
    assert_eq!(store.list_devices().await.unwrap().len(), 2);
}

#[tokio::test]
async fn baseline_seed_skips_store_with_existing_employees() {
    let store = empty_store().await;
    store
        .insert_employee(&NewEmployee {
            name: "Ann".into(),
            role: Role::Designer,
        })
        .await
        .unwrap();

    let report = seed_database(&store).await.unwrap();
    assert_eq!(report.employees, 0);
    assert_eq!(store.list_employees().await.unwrap().len(), 1);
    assert!(store.list_devices().await.unwrap().is_empty());
}
