mod common;

use common::empty_store;
use device_registry::db::SqlValue;
use device_registry::types::{DeviceType, NewDevice, NewEmployee, Role};
use device_registry::{RegistryError, Store};
use sqlx::Row;

#[tokio::test]
async fn ensure_schema_is_idempotent() {
    let store = empty_store().await;
    store
        .insert_employee(&NewEmployee {
            name: "Ann".into(),
            role: Role::Manager,
        })
        .await
        .unwrap();

    store.ensure_schema().await.unwrap();
    assert_eq!(store.list_employees().await.unwrap().len(), 1);
}

#[tokio::test]
async fn execute_reports_insert_id_and_rows_affected() {
    let store = empty_store().await;

    let first = store
        .execute(
            "INSERT INTO employees (name, role) VALUES (?, ?)",
            &["Ann".into(), "Designer".into()],
        )
        .await
        .unwrap();
    assert_eq!(first.last_insert_id, 1);
    assert_eq!(first.rows_affected, 1);

    let second = store
        .execute(
            "INSERT INTO employees (name, role) VALUES (?, ?)",
            &["Bob".into(), "Developer".into()],
        )
        .await
        .unwrap();
    assert_eq!(second.last_insert_id, 2);

    let updated = store
        .execute("UPDATE employees SET role = ?", &["Manager".into()])
        .await
        .unwrap();
    assert_eq!(updated.rows_affected, 2);
}

#[tokio::test]
async fn values_are_bound_not_interpolated() {
    let store = empty_store().await;
    let hostile = "Robert'); DROP TABLE employees;--";

    store
        .execute(
            "INSERT INTO employees (name, role) VALUES (?, ?)",
            &[hostile.into(), "Developer".into()],
        )
        .await
        .unwrap();

    let row = store
        .fetch_one("SELECT name FROM employees WHERE name = ?", &[hostile.into()])
        .await
        .unwrap()
        .expect("row missing");
    let name: String = row.try_get("name").unwrap();
    assert_eq!(name, hostile);
}

#[tokio::test]
async fn fetch_one_absent_and_fetch_all_empty() {
    let store = empty_store().await;
    let row = store
        .fetch_one("SELECT id FROM devices WHERE id = ?", &[SqlValue::Integer(1)])
        .await
        .unwrap();
    assert!(row.is_none());

    let rows = store.fetch_all("SELECT id FROM devices", &[]).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn foreign_key_backstop_rejects_dangling_owner() {
    let store = empty_store().await;
    let err = store
        .insert_device(&NewDevice {
            device_name: "Ghost".into(),
            device_type: DeviceType::Laptop,
            owner_id: Some(12),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Storage(_)));
}

#[tokio::test]
async fn stores_are_isolated() {
    let a = empty_store().await;
    let b: Store = empty_store().await;
    a.insert_employee(&NewEmployee {
        name: "Ann".into(),
        role: Role::Designer,
    })
    .await
    .unwrap();
    assert!(b.list_employees().await.unwrap().is_empty());
}
