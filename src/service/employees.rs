use crate::db::Store;
use crate::error::{EntityKind, RegistryError};
use crate::service::validation::validate_employee;
use crate::types::{Employee, EmployeeInput};
use tracing::info;

/// Employee operations: validate, persist, return the stored row.
pub struct EmployeeService {
    store: Store,
}

impl EmployeeService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, RegistryError> {
        self.store.list_employees().await
    }

    pub async fn get(&self, id: i64) -> Result<Employee, RegistryError> {
        self.store
            .get_employee(id)
            .await?
            .ok_or(RegistryError::NotFound(EntityKind::Employee))
    }

    pub async fn create(&self, input: &EmployeeInput) -> Result<Employee, RegistryError> {
        let employee = validate_employee(input)?;
        let id = self.store.insert_employee(&employee).await?;
        info!(id, name = %employee.name, role = %employee.role, "employee created");
        self.reload(id).await
    }

    /// Full replace of `name` and `role`; `id` comes from the path.
    pub async fn update(&self, id: i64, input: &EmployeeInput) -> Result<Employee, RegistryError> {
        let employee = validate_employee(input)?;
        self.get(id).await?;
        self.store.replace_employee(id, &employee).await?;
        info!(id, "employee updated");
        self.reload(id).await
    }

    /// Devices owned by the employee become unassigned.
    pub async fn delete(&self, id: i64) -> Result<(), RegistryError> {
        self.get(id).await?;
        self.store.delete_employee(id).await?;
        info!(id, "employee deleted");
        Ok(())
    }

    async fn reload(&self, id: i64) -> Result<Employee, RegistryError> {
        self.store
            .get_employee(id)
            .await?
            .ok_or(RegistryError::Storage(sqlx::Error::RowNotFound))
    }
}
