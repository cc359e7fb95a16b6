use contracts::domain::a001_employee::{CreateEmployee, Employee};
use contracts::shared::api::{normalize_error_body, ApiResult, PaginatedApiResult, PaginatedFilters};
use gloo_net::http::{Request, Response};

use crate::shared::api_utils::api_url;

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn error_from(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    normalize_error_body(status, &body)
}

/// Fetch a page of employees. `search` is matched against the name column.
pub async fn list_employees(
    filters: &PaginatedFilters,
    token: &str,
) -> Result<PaginatedApiResult<Employee>, String> {
    let url = format!("{}?{}", api_url("/employee"), filters.to_query_string());

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    response
        .json::<PaginatedApiResult<Employee>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_employee(payload: &CreateEmployee, token: &str) -> Result<Employee, String> {
    let response = Request::post(&api_url("/employee"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result = response
        .json::<ApiResult<Employee>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(result.data)
}

pub async fn update_employee(
    id: &str,
    payload: &CreateEmployee,
    token: &str,
) -> Result<Employee, String> {
    let response = Request::put(&api_url(&format!("/employee/{}", id)))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    let result = response
        .json::<ApiResult<Employee>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(result.data)
}

pub async fn delete_employee(id: &str, token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/employee/{}", id)))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_from(response).await);
    }

    Ok(())
}
