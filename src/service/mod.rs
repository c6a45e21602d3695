pub mod devices;
pub mod employees;
pub mod owner;
pub mod seed;
pub mod validation;

pub use devices::DeviceService;
pub use employees::EmployeeService;
pub use owner::resolve_owner;
pub use validation::{validate_device, validate_employee};
