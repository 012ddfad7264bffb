//! Employee and role endpoints against a mocked resto server.

use chrono::NaiveDate;
use iiko_client::error::EntityKind;
use iiko_client::{ClientConfig, ClientError, IikoApi, Value};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMPLOYEE_ID: &str = "5e3c7a1d-0f2b-4c8e-9a6d-1b2c3d4e5f60";

async fn setup() -> (MockServer, IikoApi) {
    let server = MockServer::start().await;
    let api = IikoApi::new(&ClientConfig::new(server.uri(), "api", "hash")).unwrap();
    (server, api)
}

async fn mount_xml(server: &MockServer, url_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/xml")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_list_employees() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        "/resto/api/employees/",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<employees>
  <employee><id>1</id><name>Anna</name><deleted>false</deleted></employee>
  <employee><id>2</id><name>Boris</name><deleted>true</deleted></employee>
</employees>"#,
    )
    .await;

    let employees = api.employees().list().await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["name"], "Anna");
    assert_eq!(employees[1]["deleted"], "true");
}

#[tokio::test]
async fn test_list_single_employee_is_still_a_list() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        "/resto/api/employees/",
        "<employees><employee><id>1</id><name>Anna</name></employee></employees>",
    )
    .await;

    let employees = api.employees().list().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["id"], "1");
}

#[tokio::test]
async fn test_list_without_employees() {
    let (server, api) = setup().await;
    mount_xml(&server, "/resto/api/employees/", "<employees/>").await;

    assert!(api.employees().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_employee_by_id_normalizes_department_codes() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        &format!("/resto/api/employees/byId/{EMPLOYEE_ID}"),
        &format!(
            "<employee><id>{EMPLOYEE_ID}</id><name>Anna</name><departmentCodes>D1</departmentCodes></employee>"
        ),
    )
    .await;

    let id = Uuid::parse_str(EMPLOYEE_ID).unwrap();
    let employee = api.employees().by_id(id).await.unwrap();
    assert_eq!(employee["name"], "Anna");
    assert_eq!(employee["departmentCodes"], json!(["D1"]));
}

#[tokio::test]
async fn test_employee_without_department_codes_gets_empty_list() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        &format!("/resto/api/employees/byId/{EMPLOYEE_ID}"),
        &format!("<employee><id>{EMPLOYEE_ID}</id></employee>"),
    )
    .await;

    let id = Uuid::parse_str(EMPLOYEE_ID).unwrap();
    let employee = api.employees().by_id(id).await.unwrap();
    assert_eq!(employee["departmentCodes"], json!([]));
}

#[tokio::test]
async fn test_employee_not_found() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path(format!("/resto/api/employees/byId/{EMPLOYEE_ID}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("Employee not found"))
        .mount(&server)
        .await;

    let id = Uuid::parse_str(EMPLOYEE_ID).unwrap();
    match api.employees().by_id(id).await {
        Err(ClientError::NotFound { entity, id, server_message }) => {
            assert_eq!(entity, EntityKind::Employee);
            assert_eq!(id, EMPLOYEE_ID);
            assert_eq!(server_message.as_deref(), Some("Employee not found"));
        }
        other => panic!("Expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_employee_answer_without_employee_element() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        &format!("/resto/api/employees/byId/{EMPLOYEE_ID}"),
        "<error>unexpected</error>",
    )
    .await;

    let id = Uuid::parse_str(EMPLOYEE_ID).unwrap();
    let err = api.employees().by_id(id).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_employees_by_department() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        "/resto/api/employees/byDepartment/D1",
        "<employees>\
           <employee><id>1</id><departmentCodes>D1</departmentCodes></employee>\
           <employee><id>2</id><departmentCodes>D1</departmentCodes><departmentCodes>D2</departmentCodes></employee>\
         </employees>",
    )
    .await;

    let employees = api.employees().by_department("D1").await.unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["departmentCodes"], json!(["D1"]));
    assert_eq!(employees[1]["departmentCodes"], json!(["D1", "D2"]));
}

#[tokio::test]
async fn test_by_department_requires_code() {
    let (_server, api) = setup().await;
    let err = api.employees().by_department("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_attendances() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/resto/api/employees/attendance/byDepartment/D1"))
        .and(query_param("from", "2024-03-01"))
        .and(query_param("to", "2024-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<attendances><attendance><employeeId>1</employeeId><dateFrom>2024-03-01T09:00:00</dateFrom></attendance></attendances>",
        ))
        .mount(&server)
        .await;

    let from = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let attendances = api.employees().attendances("D1", from, to).await.unwrap();
    assert_eq!(attendances.len(), 1);
    assert_eq!(attendances[0]["employeeId"], "1");
}

#[tokio::test]
async fn test_attendances_reject_reversed_period() {
    let (_server, api) = setup().await;
    let from = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
    let to = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let err = api.employees().attendances("D1", from, to).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_role_by_id() {
    let (server, api) = setup().await;
    mount_xml(
        &server,
        "/resto/api/employees/roles/byId/role-1",
        "<role><id>role-1</id><code>CHEF</code><name>Chef</name></role>",
    )
    .await;

    let role = api.roles().by_id("role-1").await.unwrap();
    assert_eq!(role["code"], Value::String("CHEF".into()));
}

#[tokio::test]
async fn test_role_not_found() {
    let (server, api) = setup().await;
    Mock::given(method("GET"))
        .and(path("/resto/api/employees/roles/byId/role-404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Role does not exist"))
        .mount(&server)
        .await;

    let err = api.roles().by_id("role-404").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Role with ID role-404 not found. Server message: Role does not exist"
    );
}

#[tokio::test]
async fn test_role_by_id_requires_id() {
    let (_server, api) = setup().await;
    let err = api.roles().by_id("").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}
