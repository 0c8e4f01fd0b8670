//! Country catalogue behaviour of the in-memory store.

use sms_leases::{CountryField, CountryStore, CountryStoreError, InMemoryCountryStore, NewCountry};
use uuid::Uuid;

async fn seeded(count: usize) -> (InMemoryCountryStore, Vec<Uuid>) {
    let store = InMemoryCountryStore::new();
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let country = store
            .add_country(NewCountry::new(
                format!("Country {i}"),
                format!("C{i}"),
                format!("slug{i}"),
            ))
            .await
            .unwrap();
        ids.push(country.id);
    }
    (store, ids)
}

#[tokio::test]
async fn list_orders_active_then_newest() {
    let (store, ids) = seeded(3).await;

    store.activate(ids[0]).await.unwrap();

    let listed: Vec<Uuid> = store
        .list_countries()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(listed, vec![ids[0], ids[2], ids[1]]);
}

#[tokio::test]
async fn add_country_reports_missing_fields() {
    let store = InMemoryCountryStore::new();

    let err = store
        .add_country(NewCountry::new("", " ", "\t"))
        .await
        .unwrap_err();

    match err {
        CountryStoreError::Validation { missing } => assert_eq!(
            missing,
            vec![
                CountryField::CountryName,
                CountryField::CountryCode,
                CountryField::ApiCountryName
            ]
        ),
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn add_country_stores_trimmed_values() {
    let store = InMemoryCountryStore::new();

    let country = store
        .add_country(NewCountry::new(" United Kingdom ", " GB ", " england "))
        .await
        .unwrap();

    let found = store.find_country(country.id).await.unwrap().unwrap();
    assert_eq!(found.country_name, "United Kingdom");
    assert_eq!(found.country_code, "GB");
    assert_eq!(found.api_country_name, "england");
    assert!(!found.current);
}

#[tokio::test]
async fn activate_unknown_id_is_not_found() {
    let (store, _) = seeded(2).await;

    let err = store.activate(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CountryStoreError::NotFound { .. }));
    assert!(store.get_active_country().await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_activation_keeps_single_active() {
    let (store, ids) = seeded(8).await;

    let mut writers = Vec::new();
    for round in 0..5 {
        for id in &ids {
            let store = store.clone();
            let id = *id;
            writers.push(tokio::spawn(async move {
                store.activate(id).await.map(|_| round)
            }));
        }
    }

    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let active = store
                    .list_countries()
                    .await
                    .unwrap()
                    .into_iter()
                    .filter(|c| c.current)
                    .count();
                assert!(active <= 1, "saw {active} active countries");
                tokio::task::yield_now().await;
            }
        })
    };

    for writer in writers {
        writer.await.unwrap().unwrap();
    }
    reader.await.unwrap();

    let countries = store.list_countries().await.unwrap();
    assert_eq!(countries.iter().filter(|c| c.current).count(), 1);

    let active = store.get_active_country().await.unwrap().unwrap();
    assert_eq!(countries[0].id, active.id);
}
