use contracts::domain::category::Category;
use contracts::domain::common::Identified;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::resource::EntityResource;

/// REST client for `/api/categories`.
#[derive(Clone, Copy, Default)]
pub struct CategoryApi;

impl EntityResource for CategoryApi {
    type Entity = Category;

    async fn query(&self) -> Result<Vec<Category>, String> {
        let response = Request::get(&api_url("/api/categories"))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch categories: {}", response.status()));
        }

        response
            .json::<Vec<Category>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn find(&self, id: i64) -> Result<Category, String> {
        let response = Request::get(&api_url(&format!("/api/categories/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch category {}: {}", id, response.status()));
        }

        response
            .json::<Category>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(&self, entity: &Category) -> Result<Category, String> {
        let response = Request::post(&api_url("/api/categories"))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to create category: {}", response.status()));
        }

        response
            .json::<Category>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, entity: &Category) -> Result<Category, String> {
        let id = entity
            .entity_id()
            .ok_or_else(|| "Cannot update a category without id".to_string())?;

        let response = Request::put(&api_url(&format!("/api/categories/{}", id)))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to update category {}: {}", id, response.status()));
        }

        response
            .json::<Category>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        let response = Request::delete(&api_url(&format!("/api/categories/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to delete category {}: {}", id, response.status()));
        }

        Ok(())
    }
}
