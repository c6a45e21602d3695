use crate::db::models::row_to_employee;
use crate::db::sqlite::{SqlValue, Store};
use crate::error::RegistryError;
use crate::types::{Employee, NewEmployee};
use sqlx::Row;

const SELECT_EMPLOYEE: &str = "SELECT id, name, role, created_at FROM employees";

impl Store {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, RegistryError> {
        let sql = format!("{SELECT_EMPLOYEE} ORDER BY id");
        let rows = self.fetch_all(&sql, &[]).await?;
        rows.into_iter().map(row_to_employee).collect()
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, RegistryError> {
        let sql = format!("{SELECT_EMPLOYEE} WHERE id = ?");
        self.fetch_one(&sql, &[id.into()])
            .await?
            .map(row_to_employee)
            .transpose()
    }

    pub async fn count_employees(&self) -> Result<i64, RegistryError> {
        let row = self
            .fetch_one("SELECT COUNT(*) AS n FROM employees", &[])
            .await?
            .ok_or(RegistryError::Storage(sqlx::Error::RowNotFound))?;
        Ok(row.try_get("n")?)
    }

    /// Insert and return the store-assigned id.
    pub async fn insert_employee(&self, employee: &NewEmployee) -> Result<i64, RegistryError> {
        let res = self
            .execute(
                "INSERT INTO employees (name, role) VALUES (?, ?)",
                &[
                    employee.name.as_str().into(),
                    employee.role.as_str().into(),
                ],
            )
            .await?;
        Ok(res.last_insert_id)
    }

    /// Overwrite every mutable column. Returns rows affected.
    pub async fn replace_employee(
        &self,
        id: i64,
        employee: &NewEmployee,
    ) -> Result<u64, RegistryError> {
        let res = self
            .execute(
                "UPDATE employees SET name = ?, role = ? WHERE id = ?",
                &[
                    employee.name.as_str().into(),
                    employee.role.as_str().into(),
                    SqlValue::Integer(id),
                ],
            )
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_employee(&self, id: i64) -> Result<u64, RegistryError> {
        let res = self
            .execute("DELETE FROM employees WHERE id = ?", &[id.into()])
            .await?;
        Ok(res.rows_affected)
    }
}
