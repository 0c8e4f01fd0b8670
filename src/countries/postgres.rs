//! PostgreSQL country store.

use super::error::{CountryStoreError, Result};
use super::model::{Country, NewCountry};
use super::traits::CountryStore;
use sqlx::PgPool;
use uuid::Uuid;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

/// Key of the transaction-scoped advisory lock serializing activations.
const ACTIVATION_LOCK_KEY: i64 = 0x636f_756e_7472_79;

const COUNTRY_COLUMNS: &str =
    "id, country_name, country_code, api_country_name, current, created_at";

/// Country store backed by the `country_phone` table.
///
/// The partial unique index on `current` rejects a second active row at the
/// schema level; [`activate`](CountryStore::activate) swaps the flag inside
/// one transaction so readers see either the old or the new active row.
#[derive(Debug, Clone)]
pub struct PgCountryStore {
    pool: PgPool,
}

impl PgCountryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and run the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        crate::MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| CountryStoreError::Database(e.into()))?;
        Ok(Self::new(pool))
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl CountryStore for PgCountryStore {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "PgCountryStore::list_countries", skip_all)
    )]
    async fn list_countries(&self) -> Result<Vec<Country>> {
        let rows = sqlx::query_as::<_, Country>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM country_phone ORDER BY current DESC, created_at DESC"
        ))
        .fetch_all(self.pool())
        .await?;

        Ok(rows)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "PgCountryStore::add_country", skip_all)
    )]
    async fn add_country(&self, input: NewCountry) -> Result<Country> {
        let country = input.validated()?.into_country();

        let row = sqlx::query_as::<_, Country>(&format!(
            r#"
            INSERT INTO country_phone (id, country_name, country_code, api_country_name, current, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING {COUNTRY_COLUMNS}
            "#
        ))
        .bind(country.id)
        .bind(&country.country_name)
        .bind(&country.country_code)
        .bind(&country.api_country_name)
        .bind(country.created_at)
        .fetch_one(self.pool())
        .await?;

        #[cfg(feature = "tracing")]
        debug!(id = %row.id, code = %row.country_code, "Country added");

        Ok(row)
    }

    async fn get_active_country(&self) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM country_phone WHERE current LIMIT 1"
        ))
        .fetch_optional(self.pool())
        .await?;

        Ok(row)
    }

    async fn find_country(&self, id: Uuid) -> Result<Option<Country>> {
        let row = sqlx::query_as::<_, Country>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM country_phone WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "PgCountryStore::activate", skip_all, fields(id = %id))
    )]
    async fn activate(&self, id: Uuid) -> Result<Country> {
        let mut tx = self.pool().begin().await?;

        // Concurrent activations queue here until the holder commits.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(ACTIVATION_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM country_phone WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if !exists {
            tx.rollback().await?;
            return Err(CountryStoreError::NotFound { id });
        }

        sqlx::query("UPDATE country_phone SET current = FALSE WHERE current AND id <> $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let country = sqlx::query_as::<_, Country>(&format!(
            "UPDATE country_phone SET current = TRUE WHERE id = $1 RETURNING {COUNTRY_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        #[cfg(feature = "tracing")]
        info!(code = %country.country_code, slug = %country.api_country_name, "Country activated");

        Ok(country)
    }
}
