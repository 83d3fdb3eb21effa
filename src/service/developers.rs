//! Developer CRUD operations.
//!
//! Every write runs a full load-mutate-save cycle against the store while
//! holding the write half of a lock, so at most one cycle is in flight.

use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;

use super::validation::validate;
use crate::errors::AppError;
use crate::models::{Developer, DeveloperInput};
use crate::search::DeveloperQuery;
use crate::store::{JsonFileStore, StoreError};

/// Service owning all developer business rules.
#[derive(Debug)]
pub struct DeveloperService {
    store: JsonFileStore,
    lock: RwLock<()>,
}

/// Generate a fresh developer id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time as RFC 3339 with milliseconds and a `Z` suffix.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl DeveloperService {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store,
            lock: RwLock::new(()),
        }
    }

    /// Make sure the backing file exists.
    pub async fn init(&self) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        self.store.ensure_initialized().await
    }

    /// List all developers, newest first.
    pub async fn list(&self) -> Result<Vec<Developer>, AppError> {
        let _guard = self.lock.read().await;
        let mut developers = self.store.load().await?;
        developers.reverse();
        Ok(developers)
    }

    /// Get a developer by ID.
    pub async fn get(&self, id: &str) -> Result<Developer, AppError> {
        let _guard = self.lock.read().await;
        self.store
            .load()
            .await?
            .into_iter()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// List developers matching a query, newest first.
    pub async fn search(&self, query: &DeveloperQuery) -> Result<Vec<Developer>, AppError> {
        let developers = self.list().await?;
        if query.is_empty() {
            return Ok(developers);
        }
        Ok(query.apply(developers))
    }

    /// Create a new developer.
    pub async fn create(&self, input: &DeveloperInput) -> Result<Developer, AppError> {
        let fields = validate(input).map_err(AppError::Validation)?;

        let _guard = self.lock.write().await;
        let mut developers = self.store.load().await?;

        let mut id = new_id();
        while developers.iter().any(|d| d.id == id) {
            id = new_id();
        }

        let developer = Developer {
            id,
            name: fields.name,
            role: fields.role,
            tech_stack: fields.tech_stack,
            experience: fields.experience,
            created_at: now_timestamp(),
        };
        developers.push(developer.clone());
        self.store.save(&developers).await?;

        tracing::info!(id = %developer.id, role = %developer.role, "Created developer");
        Ok(developer)
    }

    /// Replace every field except `id` and `created_at`.
    pub async fn update(&self, id: &str, input: &DeveloperInput) -> Result<Developer, AppError> {
        let fields = validate(input).map_err(AppError::Validation)?;

        let _guard = self.lock.write().await;
        let mut developers = self.store.load().await?;

        let existing = developers
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        existing.apply(fields);
        let updated = existing.clone();

        self.store.save(&developers).await?;

        tracing::info!(id = %updated.id, "Updated developer");
        Ok(updated)
    }

    /// Delete a developer.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut developers = self.store.load().await?;

        let index = developers
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        developers.remove(index);

        self.store.save(&developers).await?;

        tracing::info!(id = %id, "Deleted developer");
        Ok(())
    }
}
