//! Domain types shared by the storage, service and HTTP layers.

pub mod device;
pub mod employee;

pub use device::{Device, DeviceInput, DeviceType, NewDevice};
pub use employee::{Employee, EmployeeInput, NewEmployee, Role};

/// Error returned when a stored or submitted string is outside a closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{value}` is not one of: {allowed}")]
pub struct UnknownVariant {
    pub value: String,
    pub allowed: String,
}
