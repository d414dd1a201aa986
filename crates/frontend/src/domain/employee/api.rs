use contracts::domain::common::Identified;
use contracts::domain::employee::Employee;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::resource::EntityResource;

/// REST client for `/api/employees`.
#[derive(Clone, Copy, Default)]
pub struct EmployeeApi;

impl EntityResource for EmployeeApi {
    type Entity = Employee;

    async fn query(&self) -> Result<Vec<Employee>, String> {
        let response = Request::get(&api_url("/api/employees"))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch employees: {}", response.status()));
        }

        response
            .json::<Vec<Employee>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn find(&self, id: i64) -> Result<Employee, String> {
        let response = Request::get(&api_url(&format!("/api/employees/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch employee {}: {}", id, response.status()));
        }

        response
            .json::<Employee>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(&self, entity: &Employee) -> Result<Employee, String> {
        let response = Request::post(&api_url("/api/employees"))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to create employee: {}", response.status()));
        }

        response
            .json::<Employee>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, entity: &Employee) -> Result<Employee, String> {
        let id = entity
            .entity_id()
            .ok_or_else(|| "Cannot update an employee without id".to_string())?;

        let response = Request::put(&api_url(&format!("/api/employees/{}", id)))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to update employee {}: {}", id, response.status()));
        }

        response
            .json::<Employee>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        let response = Request::delete(&api_url(&format!("/api/employees/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to delete employee {}: {}", id, response.status()));
        }

        Ok(())
    }
}
