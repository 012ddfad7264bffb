//! Employees and employee roles
//!
//! These are legacy endpoints answering XML.

use super::{ISO_DATE, xml_record, xml_records};
use crate::error::EntityKind;
use crate::util::segment;
use crate::{ClientError, ClientResult, IikoClient};
use chrono::NaiveDate;
use iiko_shared::Record;
use iiko_shared::xml::normalize_list_field;
use uuid::Uuid;

const DEPARTMENT_CODES: &str = "departmentCodes";

/// Employee endpoints
#[derive(Debug, Clone, Copy)]
pub struct EmployeesEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> EmployeesEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// All employees
    pub async fn list(&self) -> ClientResult<Vec<Record>> {
        let body = self.client.get_text("/resto/api/employees/", &[]).await?;
        xml_records(&body, "employees", "employee")
    }

    /// Employee by ID, `departmentCodes` always a list
    ///
    /// # Errors
    ///
    /// [`ClientError::NotFound`] when the server answers 404.
    pub async fn by_id(&self, employee_id: Uuid) -> ClientResult<Record> {
        let path = format!("/resto/api/employees/byId/{employee_id}");
        let body = match self.client.get_text(&path, &[]).await {
            Err(ClientError::Http { status: 404, body, .. }) => {
                return Err(ClientError::not_found(
                    EntityKind::Employee,
                    employee_id.to_string(),
                    &body,
                ));
            }
            other => other?,
        };

        let mut employee = xml_record(&body, "employee")?.ok_or_else(|| {
            ClientError::invalid_response(format!("no employee element for ID {employee_id}"), &body)
        })?;
        normalize_list_field(&mut employee, DEPARTMENT_CODES);
        Ok(employee)
    }

    /// Employees attached to a department
    pub async fn by_department(&self, department_code: &str) -> ClientResult<Vec<Record>> {
        if department_code.trim().is_empty() {
            return Err(ClientError::validation("department_code must not be empty"));
        }

        let path = format!("/resto/api/employees/byDepartment/{}", segment(department_code));
        let body = self.client.get_text(&path, &[]).await?;

        let mut employees = xml_records(&body, "employees", "employee")?;
        for employee in &mut employees {
            normalize_list_field(employee, DEPARTMENT_CODES);
        }
        Ok(employees)
    }

    /// Attendances of a department's employees, `date_to` inclusive
    pub async fn attendances(
        &self,
        department_code: &str,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> ClientResult<Vec<Record>> {
        if department_code.trim().is_empty() {
            return Err(ClientError::validation("department_code must not be empty"));
        }
        if date_from > date_to {
            return Err(ClientError::validation(
                "date_from must be earlier than or equal to date_to",
            ));
        }

        let path = format!(
            "/resto/api/employees/attendance/byDepartment/{}",
            segment(department_code)
        );
        let query = [
            ("from", date_from.format(ISO_DATE).to_string()),
            ("to", date_to.format(ISO_DATE).to_string()),
        ];
        let body = self.client.get_text(&path, &query).await?;
        xml_records(&body, "attendances", "attendance")
    }
}

/// Employee role endpoints
#[derive(Debug, Clone, Copy)]
pub struct RolesEndpoints<'a> {
    client: &'a IikoClient,
}

impl<'a> RolesEndpoints<'a> {
    pub fn new(client: &'a IikoClient) -> Self {
        Self { client }
    }

    /// All roles
    pub async fn list(&self) -> ClientResult<Vec<Record>> {
        let body = self.client.get_text("/resto/api/employees/roles/", &[]).await?;
        xml_records(&body, "employeeRoles", "role")
    }

    /// Role by ID
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] for an empty ID, [`ClientError::NotFound`]
    /// when the server answers 404.
    pub async fn by_id(&self, role_id: &str) -> ClientResult<Record> {
        if role_id.trim().is_empty() {
            return Err(ClientError::validation("role_id must not be empty"));
        }

        let path = format!("/resto/api/employees/roles/byId/{}", segment(role_id));
        let body = match self.client.get_text(&path, &[]).await {
            Err(ClientError::Http { status: 404, body, .. }) => {
                return Err(ClientError::not_found(EntityKind::Role, role_id, &body));
            }
            other => other?,
        };

        xml_record(&body, "role")?.ok_or_else(|| {
            ClientError::invalid_response(format!("no role element for ID {role_id}"), &body)
        })
    }
}
