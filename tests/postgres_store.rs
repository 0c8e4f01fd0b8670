//! PostgreSQL country store tests.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL`
//! and applies the embedded migrations. Ignored by default:
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/sms_leases cargo test --test postgres_store -- --ignored
//! ```

#![cfg(feature = "postgres")]

use sms_leases::{CountryField, CountryStore, CountryStoreError, NewCountry, PgCountryStore};
use sqlx::PgPool;
use uuid::Uuid;

async fn seed(store: &PgCountryStore) -> Vec<Uuid> {
    let mut ids = Vec::new();
    for (name, code, slug) in [
        ("United Kingdom", "GB", "england"),
        ("USA", "US", "usa"),
        ("Germany", "DE", "germany"),
    ] {
        ids.push(
            store
                .add_country(NewCountry::new(name, code, slug))
                .await
                .unwrap()
                .id,
        );
    }
    ids
}

#[sqlx::test(migrator = "sms_leases::MIGRATOR")]
#[ignore = "requires DATABASE_URL"]
async fn activation_swaps_active_row(pool: PgPool) {
    let store = PgCountryStore::new(pool);
    let ids = seed(&store).await;

    store.activate(ids[0]).await.unwrap();
    store.activate(ids[1]).await.unwrap();

    let rows = store.list_countries().await.unwrap();
    assert_eq!(rows[0].id, ids[1]);
    assert_eq!(rows.iter().filter(|c| c.current).count(), 1);
    assert_eq!(
        store.get_active_country().await.unwrap().unwrap().api_country_name,
        "usa"
    );
}

#[sqlx::test(migrator = "sms_leases::MIGRATOR")]
#[ignore = "requires DATABASE_URL"]
async fn unknown_id_leaves_state(pool: PgPool) {
    let store = PgCountryStore::new(pool);
    let ids = seed(&store).await;
    store.activate(ids[2]).await.unwrap();

    let err = store.activate(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CountryStoreError::NotFound { .. }));

    let active = store.get_active_country().await.unwrap().unwrap();
    assert_eq!(active.id, ids[2]);
}

#[sqlx::test(migrator = "sms_leases::MIGRATOR")]
#[ignore = "requires DATABASE_URL"]
async fn validation_happens_before_insert(pool: PgPool) {
    let store = PgCountryStore::new(pool);

    let err = store
        .add_country(NewCountry::new("Nowhere", "", " "))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CountryStoreError::Validation { ref missing }
            if missing == &vec![CountryField::CountryCode, CountryField::ApiCountryName]
    ));
    assert!(store.list_countries().await.unwrap().is_empty());
}

#[sqlx::test(migrator = "sms_leases::MIGRATOR")]
#[ignore = "requires DATABASE_URL"]
async fn schema_rejects_second_active_row(pool: PgPool) {
    let store = PgCountryStore::new(pool.clone());
    let ids = seed(&store).await;
    store.activate(ids[0]).await.unwrap();

    let result = sqlx::query("UPDATE country_phone SET current = TRUE WHERE id = $1")
        .bind(ids[1])
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

#[sqlx::test(migrator = "sms_leases::MIGRATOR")]
#[ignore = "requires DATABASE_URL"]
async fn concurrent_activation_keeps_single_active(pool: PgPool) {
    let store = PgCountryStore::new(pool);
    let ids = seed(&store).await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        for id in &ids {
            let store = store.clone();
            let id = *id;
            handles.push(tokio::spawn(async move { store.activate(id).await }));
        }
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let rows = store.list_countries().await.unwrap();
    assert_eq!(rows.iter().filter(|c| c.current).count(), 1);
}
