//! Integration tests for the full cart pipeline.
//!
//! Tests: CartStore → StockQuery/ProductCatalog → snapshot → CartStorage
//!
//! Verifies:
//! - The add/update/remove flow against the in-memory catalog and slot
//! - Admission stops exactly at the advertised availability
//! - A second store opened over the same slot sees the committed cart
//! - The file-backed slot behaves like the in-memory one, corruption included

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use forgecart_cart::{CartStore, NoticeKind};
    use forgecart_core::{CartError, ProductId};
    use forgecart_products::Product;

    use crate::catalog::InMemoryCatalog;
    use crate::notify::RecordingNotifier;
    use crate::storage::{InMemoryCartStorage, JsonFileCartStorage};

    fn init_tracing() {
        // Idempotent; lets RUST_LOG surface store logs when running tests.
        forgecart_observability::init();
    }

    fn test_product(id: u64) -> Product {
        Product {
            product_id: ProductId::new(id),
            title: format!("Product {id}"),
            price_cents: id * 990,
            image_url: format!("https://cdn.example.com/p/{id}.jpg"),
        }
    }

    fn seeded_catalog() -> Arc<InMemoryCatalog> {
        let catalog = InMemoryCatalog::new();
        catalog.insert(test_product(1), 5);
        catalog.insert(test_product(2), 3);
        Arc::new(catalog)
    }

    #[tokio::test]
    async fn adds_are_admitted_until_stock_runs_out() {
        init_tracing();
        let catalog = seeded_catalog();
        let notifier = Arc::new(RecordingNotifier::new());
        let mut store = CartStore::open(
            Arc::new(InMemoryCartStorage::new()),
            catalog.clone(),
            catalog.clone(),
            notifier.clone(),
        )
        .unwrap();

        // stock(1) = 5: five adds march the line from 1 to 5.
        for expected in 1..=5u32 {
            store.add_product(ProductId::new(1)).await.unwrap();
            assert_eq!(store.cart().amount_of(ProductId::new(1)), Some(expected));
        }

        // The sixth is rejected and nothing moves.
        let err = store.add_product(ProductId::new(1)).await.unwrap_err();
        assert_eq!(err, CartError::OutOfStock);
        assert_eq!(store.cart().amount_of(ProductId::new(1)), Some(5));
        assert_eq!(store.cart().len(), 1);
        assert_eq!(notifier.kinds(), vec![NoticeKind::OutOfStock]);
    }

    #[tokio::test]
    async fn a_second_store_over_the_same_slot_sees_the_committed_cart() {
        let slot = Arc::new(InMemoryCartStorage::new());
        let catalog = seeded_catalog();

        {
            let mut store = CartStore::open(
                slot.clone(),
                catalog.clone(),
                catalog.clone(),
                Arc::new(RecordingNotifier::new()),
            )
            .unwrap();
            store.add_product(ProductId::new(1)).await.unwrap();
            store.add_product(ProductId::new(2)).await.unwrap();
            store.update_product_amount(ProductId::new(2), 3).await.unwrap();
        }

        assert!(slot.contents().is_some());
        let reopened = CartStore::open(
            slot,
            catalog.clone(),
            catalog,
            Arc::new(RecordingNotifier::new()),
        )
        .unwrap();

        assert_eq!(reopened.cart().amount_of(ProductId::new(1)), Some(1));
        assert_eq!(reopened.cart().amount_of(ProductId::new(2)), Some(3));
    }

    #[tokio::test]
    async fn stock_drops_between_sessions_are_enforced_on_the_next_mutation() {
        let catalog = seeded_catalog();
        let notifier = Arc::new(RecordingNotifier::new());
        let mut store = CartStore::open(
            Arc::new(InMemoryCartStorage::new()),
            catalog.clone(),
            catalog.clone(),
            notifier.clone(),
        )
        .unwrap();

        store.add_product(ProductId::new(2)).await.unwrap();
        catalog.set_stock(ProductId::new(2), 1);

        let err = store.update_product_amount(ProductId::new(2), 2).await.unwrap_err();
        assert_eq!(err, CartError::OutOfStock);
        assert_eq!(store.cart().amount_of(ProductId::new(2)), Some(1));
    }

    #[tokio::test]
    async fn full_session_against_the_file_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        let catalog = seeded_catalog();

        {
            let slot = JsonFileCartStorage::open(&path).unwrap();
            let mut store = CartStore::open(
                slot,
                catalog.clone(),
                catalog.clone(),
                Arc::new(RecordingNotifier::new()),
            )
            .unwrap();

            store.add_product(ProductId::new(1)).await.unwrap();
            store.add_product(ProductId::new(2)).await.unwrap();
            store.add_product(ProductId::new(1)).await.unwrap();
            store.remove_product(ProductId::new(2)).unwrap();
        }

        // The persisted snapshot is the serialized line array.
        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["productId"], 1);
        assert_eq!(json[0]["amount"], 2);

        let slot = JsonFileCartStorage::open(&path).unwrap();
        let reopened = CartStore::open(
            slot,
            catalog.clone(),
            catalog,
            Arc::new(RecordingNotifier::new()),
        )
        .unwrap();
        assert_eq!(reopened.cart().amount_of(ProductId::new(1)), Some(2));
        assert!(!reopened.cart().contains(ProductId::new(2)));
    }

    #[tokio::test]
    async fn a_corrupt_file_slot_opens_as_an_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "v1|1:2|3:4").unwrap();

        let catalog = seeded_catalog();
        let store = CartStore::open(
            JsonFileCartStorage::open(&path).unwrap(),
            catalog.clone(),
            catalog,
            Arc::new(RecordingNotifier::new()),
        )
        .unwrap();

        assert!(store.cart().is_empty());
    }

    #[tokio::test]
    async fn rejections_notify_while_successes_stay_silent() {
        let catalog = seeded_catalog();
        let notifier = Arc::new(RecordingNotifier::new());
        let mut store = CartStore::open(
            Arc::new(InMemoryCartStorage::new()),
            catalog.clone(),
            catalog.clone(),
            notifier.clone(),
        )
        .unwrap();

        store.add_product(ProductId::new(1)).await.unwrap();
        let _ = store.remove_product(ProductId::new(42));
        let _ = store.add_product(ProductId::new(777)).await; // not in catalog
        store.update_product_amount(ProductId::new(1), 0).await.unwrap();

        assert_eq!(
            notifier.kinds(),
            vec![NoticeKind::RemoveFailed, NoticeKind::AddFailed]
        );
    }
}
