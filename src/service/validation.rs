//! Pure request validators. No store access happens here.

use crate::error::{FieldIssue, ValidationError};
use crate::types::{DeviceInput, DeviceType, EmployeeInput, NewDevice, NewEmployee, Role};
use std::str::FromStr;

pub fn validate_employee(input: &EmployeeInput) -> Result<NewEmployee, ValidationError> {
    let mut issues = Vec::new();
    let name = required_text("name", input.name.as_deref(), &mut issues);
    let role = required_enum::<Role>("role", input.role.as_deref(), &mut issues);

    match (name, role) {
        (Some(name), Some(role)) if issues.is_empty() => Ok(NewEmployee { name, role }),
        _ => Err(ValidationError { issues }),
    }
}

/// Checks shape only; the owner reference is resolved separately.
pub fn validate_device(input: &DeviceInput) -> Result<NewDevice, ValidationError> {
    let mut issues = Vec::new();
    let device_name = required_text("device_name", input.device_name.as_deref(), &mut issues);
    let device_type =
        required_enum::<DeviceType>("type", input.device_type.as_deref(), &mut issues);

    match (device_name, device_type) {
        (Some(device_name), Some(device_type)) if issues.is_empty() => Ok(NewDevice {
            device_name,
            device_type,
            owner_id: input.owner_id,
        }),
        _ => Err(ValidationError { issues }),
    }
}

fn required_text(
    field: &'static str,
    value: Option<&str>,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.to_string()),
        _ => {
            issues.push(FieldIssue::Missing(field));
            None
        }
    }
}

fn required_enum<T>(
    field: &'static str,
    value: Option<&str>,
    issues: &mut Vec<FieldIssue>,
) -> Option<T>
where
    T: FromStr<Err = crate::types::UnknownVariant>,
{
    let raw = required_text(field, value, issues)?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            issues.push(FieldIssue::Invalid {
                field,
                value: e.value,
                allowed: e.allowed,
            });
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(name: Option<&str>, role: Option<&str>) -> EmployeeInput {
        EmployeeInput {
            name: name.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    fn device(name: Option<&str>, kind: Option<&str>, owner_id: Option<i64>) -> DeviceInput {
        DeviceInput {
            device_name: name.map(str::to_string),
            device_type: kind.map(str::to_string),
            owner_id,
        }
    }

    #[test]
    fn accepts_every_role() {
        for role in Role::ALL {
            let ok = validate_employee(&employee(Some("Ann"), Some(role.as_str()))).unwrap();
            assert_eq!(ok.role, role);
            assert_eq!(ok.name, "Ann");
        }
    }

    #[test]
    fn reports_all_missing_employee_fields() {
        let err = validate_employee(&EmployeeInput::default()).unwrap_err();
        assert_eq!(err.fields(), vec!["name", "role"]);
        assert_eq!(err.to_string(), "name is required; role is required");
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let err = validate_employee(&employee(Some("   "), Some("Manager"))).unwrap_err();
        assert_eq!(err.issues, vec![FieldIssue::Missing("name")]);
    }

    #[test]
    fn rejects_role_outside_closed_set() {
        let err = validate_employee(&employee(Some("Ann"), Some("Software Engineer"))).unwrap_err();
        assert!(matches!(
            &err.issues[..],
            [FieldIssue::Invalid { field: "role", value, .. }] if value == "Software Engineer"
        ));
        assert!(err.to_string().contains("Product Owner"));
    }

    #[test]
    fn role_match_is_case_sensitive() {
        assert!(validate_employee(&employee(Some("Ann"), Some("designer"))).is_err());
    }

    #[test]
    fn device_keeps_owner_reference_unchecked() {
        let ok = validate_device(&device(Some("Monitor"), Some("Display"), Some(42))).unwrap();
        assert_eq!(ok.device_type, DeviceType::Display);
        assert_eq!(ok.owner_id, Some(42));
    }

    #[test]
    fn rejects_unknown_device_type_and_missing_name() {
        let err = validate_device(&device(None, Some("Tablet"), None)).unwrap_err();
        assert_eq!(err.fields(), vec!["device_name", "type"]);
    }
}
