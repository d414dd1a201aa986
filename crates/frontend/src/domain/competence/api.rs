use contracts::domain::common::Identified;
use contracts::domain::competence::Competence;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::resource::EntityResource;

/// REST client for `/api/competences`.
#[derive(Clone, Copy, Default)]
pub struct CompetenceApi;

impl EntityResource for CompetenceApi {
    type Entity = Competence;

    async fn query(&self) -> Result<Vec<Competence>, String> {
        let response = Request::get(&api_url("/api/competences"))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch competences: {}", response.status()));
        }

        response
            .json::<Vec<Competence>>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn find(&self, id: i64) -> Result<Competence, String> {
        let response = Request::get(&api_url(&format!("/api/competences/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to fetch competence {}: {}", id, response.status()));
        }

        response
            .json::<Competence>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn create(&self, entity: &Competence) -> Result<Competence, String> {
        let response = Request::post(&api_url("/api/competences"))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to create competence: {}", response.status()));
        }

        response
            .json::<Competence>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn update(&self, entity: &Competence) -> Result<Competence, String> {
        let id = entity
            .entity_id()
            .ok_or_else(|| "Cannot update a competence without id".to_string())?;

        let response = Request::put(&api_url(&format!("/api/competences/{}", id)))
            .json(entity)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to update competence {}: {}", id, response.status()));
        }

        response
            .json::<Competence>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    async fn delete(&self, id: i64) -> Result<(), String> {
        let response = Request::delete(&api_url(&format!("/api/competences/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(format!("Failed to delete competence {}: {}", id, response.status()));
        }

        Ok(())
    }
}
