//! In-memory country store.

use super::error::{CountryStoreError, Result};
use super::model::{Country, NewCountry};
use super::traits::CountryStore;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

#[derive(Debug, Default)]
struct State {
    /// Rows in insertion order; their `current` flag is derived from `active`.
    rows: Vec<Country>,
    active: Option<Uuid>,
}

impl State {
    fn snapshot(&self, row: &Country) -> Country {
        Country {
            current: self.active == Some(row.id),
            ..row.clone()
        }
    }

    fn find(&self, id: Uuid) -> Option<Country> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| self.snapshot(row))
    }
}

/// Country store kept in process memory.
///
/// The active country is a single id behind the lock, so readers can never
/// observe two active rows. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryCountryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryStore for InMemoryCountryStore {
    async fn list_countries(&self) -> Result<Vec<Country>> {
        let state = self.state.read().await;

        // Newest first; the sort is stable so insertion order breaks
        // `created_at` ties.
        let mut rows: Vec<Country> = state.rows.iter().rev().map(|r| state.snapshot(r)).collect();
        rows.sort_by(|a, b| {
            b.current
                .cmp(&a.current)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(rows)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "InMemoryCountryStore::add_country", skip_all)
    )]
    async fn add_country(&self, input: NewCountry) -> Result<Country> {
        let country = input.validated()?.into_country();

        self.state.write().await.rows.push(country.clone());

        #[cfg(feature = "tracing")]
        debug!(id = %country.id, code = %country.country_code, "Country added");

        Ok(country)
    }

    async fn get_active_country(&self) -> Result<Option<Country>> {
        let state = self.state.read().await;
        Ok(state.active.and_then(|id| state.find(id)))
    }

    async fn find_country(&self, id: Uuid) -> Result<Option<Country>> {
        Ok(self.state.read().await.find(id))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "InMemoryCountryStore::activate", skip_all, fields(id = %id))
    )]
    async fn activate(&self, id: Uuid) -> Result<Country> {
        let mut state = self.state.write().await;

        if !state.rows.iter().any(|row| row.id == id) {
            return Err(CountryStoreError::NotFound { id });
        }

        state.active = Some(id);
        let country = state.find(id).ok_or(CountryStoreError::NotFound { id })?;

        #[cfg(feature = "tracing")]
        info!(code = %country.country_code, slug = %country.api_country_name, "Country activated");

        Ok(country)
    }
}
