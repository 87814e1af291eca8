//! Macro-generated test suite for `ProductStore` contract validation.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_create_assigns_fresh_ids` — ids are assigned, unique and ignore input ids
//! - `test_create_and_get` — every field survives a store round trip
//! - `test_get_nonexistent` — unknown id returns None
//! - `test_list_empty` / `test_list_in_id_order`
//! - `test_update_existing` / `test_update_nonexistent`
//! - `test_delete_existing` / `test_delete_twice`
//! - `test_delete_all`
//!
//! ## Filters
//! - name (exact, case-sensitive), price (inclusive ceiling), description
//!   (literal, case-sensitive substring), id, and conjunctions
//!
//! ## Counters
//! - like/unlike without floor, `i64` bounds, shelf flags, unknown ids,
//!   concurrent likes

/// Generate a full `ProductStore` conformance test suite.
///
/// `$factory` must be an expression evaluating to a fresh, empty store. It is
/// re-evaluated for each test. For the concurrency test the store must also
/// implement `Clone + 'static`.
#[macro_export]
macro_rules! product_store_tests {
    ($factory:expr) => {
        mod product_store_contract_tests {
            use super::*;
            use catalog::core::{Price, ProductFilter, ProductStore, ValidationError};

            // ==================================================================
            // CRUD
            // ==================================================================

            #[tokio::test]
            async fn test_create_assigns_fresh_ids() {
                let store = $factory;

                let first = store
                    .create(sample_product("Hat", "", 1).with_id(1000))
                    .await
                    .unwrap();
                let second = store.create(sample_product("Cap", "", 2)).await.unwrap();

                let first_id = first.id.expect("create must assign an id");
                let second_id = second.id.expect("create must assign an id");
                assert_ne!(first_id, second_id);
                assert!(second_id > first_id, "ids must increase with insertion");
            }

            #[tokio::test]
            async fn test_create_and_get() {
                let store = $factory;
                let mut product = sample_product("Hat", "felt hat", 42.5);
                product.like_num = -3;
                product.is_on_shelf = false;

                let created = store.create(product.clone()).await.unwrap();
                let id = created.id.unwrap();
                assert_eq!(created, product.clone().with_id(id));

                let retrieved = store.get(id).await.unwrap();
                assert_eq!(retrieved, Some(product.with_id(id)));
            }

            #[tokio::test]
            async fn test_integer_price_reads_back_as_integer() {
                let store = $factory;
                let created = store.create(sample_product("Hat", "", 42)).await.unwrap();
                let retrieved = store.get(created.id.unwrap()).await.unwrap().unwrap();
                assert!(matches!(retrieved.price, Price::Int(42)));
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get(987_654).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_list_empty() {
                let store = $factory;
                assert!(store.list(&ProductFilter::new()).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_in_id_order() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                let all = store.list(&ProductFilter::new()).await.unwrap();
                assert_count(&all, 5);
                assert_eq!(names(&all), vec!["Hat", "Scarf", "Hat", "Socks", "Boots"]);
                let ids: Vec<i64> = all.iter().map(|p| p.id.unwrap()).collect();
                let mut sorted = ids.clone();
                sorted.sort();
                assert_eq!(ids, sorted);
            }

            #[tokio::test]
            async fn test_update_existing() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "old", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                let mut replacement = sample_product("Cap", "new", 7.25);
                replacement.like_num = 4;
                replacement.is_on_shelf = false;

                let updated = store.update(id, replacement.clone()).await.unwrap();
                assert_eq!(updated, Some(replacement.clone().with_id(id)));
                assert_eq!(store.get(id).await.unwrap(), Some(replacement.with_id(id)));
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let result = store
                    .update(4_567_486, sample_product("Ghost", "", 1))
                    .await
                    .unwrap();
                assert!(result.is_none());
                assert!(store.list(&ProductFilter::new()).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_delete_existing() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                assert!(store.delete(id).await.unwrap());
                assert!(store.get(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_twice() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                assert!(store.delete(id).await.unwrap());
                assert!(!store.delete(id).await.unwrap());
            }

            #[tokio::test]
            async fn test_delete_all() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }
                assert_eq!(store.delete_all().await.unwrap(), 5);
                assert!(store.list(&ProductFilter::new()).await.unwrap().is_empty());
            }

            // ==================================================================
            // Filters
            // ==================================================================

            #[tokio::test]
            async fn test_filter_by_name_is_exact() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                let hats = store
                    .list(&ProductFilter::new().with_name("Hat"))
                    .await
                    .unwrap();
                assert_count(&hats, 2);
                assert!(hats.iter().all(|p| p.name == "Hat"));

                let lower = store
                    .list(&ProductFilter::new().with_name("hat"))
                    .await
                    .unwrap();
                assert!(lower.is_empty());
            }

            #[tokio::test]
            async fn test_filter_by_price_is_inclusive_ceiling() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                for max in [0.0, 10.0, 12.5, 20.0, 29.99, 30.0, 100.0] {
                    let found = store
                        .list(&ProductFilter::new().with_max_price(max))
                        .await
                        .unwrap();
                    let expected = sample_catalog()
                        .into_iter()
                        .filter(|p| p.price.as_f64() <= max)
                        .count();
                    assert_count(&found, expected);
                    assert!(found.iter().all(|p| p.price.as_f64() <= max));
                }
            }

            #[tokio::test]
            async fn test_filter_by_description_is_case_sensitive_substring() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                let wool = store
                    .list(&ProductFilter::new().with_description("wool"))
                    .await
                    .unwrap();
                assert_eq!(names(&wool), vec!["Scarf"]);

                let capital = store
                    .list(&ProductFilter::new().with_description("Wool"))
                    .await
                    .unwrap();
                assert_eq!(names(&capital), vec!["Socks"]);

                let hat = store
                    .list(&ProductFilter::new().with_description("hat"))
                    .await
                    .unwrap();
                assert_count(&hat, 2);
            }

            #[tokio::test]
            async fn test_filter_description_wildcards_are_literal() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                let percent = store
                    .list(&ProductFilter::new().with_description("0%"))
                    .await
                    .unwrap();
                assert_eq!(names(&percent), vec!["Boots"]);

                let underscore = store
                    .list(&ProductFilter::new().with_description("h_t"))
                    .await
                    .unwrap();
                assert!(underscore.is_empty());
            }

            #[tokio::test]
            async fn test_filters_are_conjunctive() {
                let store = $factory;
                for product in sample_catalog() {
                    store.create(product).await.unwrap();
                }

                let cheap_hats = store
                    .list(&ProductFilter::new().with_name("Hat").with_max_price(15.0))
                    .await
                    .unwrap();
                assert_count(&cheap_hats, 1);
                assert_eq!(cheap_hats[0].description, "straw hat");

                let none = store
                    .list(
                        &ProductFilter::new()
                            .with_name("Scarf")
                            .with_description("felt"),
                    )
                    .await
                    .unwrap();
                assert!(none.is_empty());
            }

            #[tokio::test]
            async fn test_filter_by_id() {
                let store = $factory;
                let mut ids = Vec::new();
                for product in sample_catalog() {
                    ids.push(store.create(product).await.unwrap().id.unwrap());
                }

                let found = store
                    .list(&ProductFilter::new().with_id(ids[1]))
                    .await
                    .unwrap();
                assert_eq!(names(&found), vec!["Scarf"]);
            }

            // ==================================================================
            // Counters & flags
            // ==================================================================

            #[tokio::test]
            async fn test_like_unlike_without_floor() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                let liked = store.adjust_likes(id, 1).await.unwrap().unwrap();
                assert_eq!(liked.like_num, 1);
                let unliked = store.adjust_likes(id, -1).await.unwrap().unwrap();
                assert_eq!(unliked.like_num, 0);
                let negative = store.adjust_likes(id, -1).await.unwrap().unwrap();
                assert_eq!(negative.like_num, -1);

                assert_eq!(store.get(id).await.unwrap().unwrap().like_num, -1);
            }

            #[tokio::test]
            async fn test_shelf_flags() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                let off = store.set_on_shelf(id, false).await.unwrap().unwrap();
                assert!(!off.is_on_shelf);
                let off_again = store.set_on_shelf(id, false).await.unwrap().unwrap();
                assert!(!off_again.is_on_shelf);
                let on = store.set_on_shelf(id, true).await.unwrap().unwrap();
                assert!(on.is_on_shelf);
            }

            #[tokio::test]
            async fn test_counters_on_unknown_id() {
                let store = $factory;
                assert!(store.adjust_likes(31_337, 1).await.unwrap().is_none());
                assert!(store.set_on_shelf(31_337, true).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_like_counter_bounds() {
                let store = $factory;

                let mut top = sample_product("Top", "", 1);
                top.like_num = i64::MAX;
                let top_id = store.create(top).await.unwrap().id.unwrap();

                let mut bottom = sample_product("Bottom", "", 1);
                bottom.like_num = i64::MIN;
                let bottom_id = store.create(bottom).await.unwrap().id.unwrap();

                let err = store.adjust_likes(top_id, 1).await.unwrap_err();
                assert_eq!(
                    err.downcast_ref::<ValidationError>(),
                    Some(&ValidationError::LikeCountOutOfRange {
                        like_num: i64::MAX,
                        delta: 1,
                    })
                );
                let err = store.adjust_likes(bottom_id, -1).await.unwrap_err();
                assert!(matches!(
                    err.downcast_ref::<ValidationError>(),
                    Some(ValidationError::LikeCountOutOfRange { .. })
                ));

                // Rejected changes leave the rows as they were
                let top = store.get(top_id).await.unwrap().unwrap();
                assert_eq!(top.like_num, i64::MAX);
                let bottom = store.get(bottom_id).await.unwrap().unwrap();
                assert_eq!(bottom.like_num, i64::MIN);

                // and the store keeps serving reads and writes
                assert_count(&store.list(&ProductFilter::new()).await.unwrap(), 2);
                let unliked = store.adjust_likes(top_id, -1).await.unwrap().unwrap();
                assert_eq!(unliked.like_num, i64::MAX - 1);
                let liked = store.adjust_likes(bottom_id, 1).await.unwrap().unwrap();
                assert_eq!(liked.like_num, i64::MIN + 1);
                store.create(sample_product("Hat", "", 5)).await.unwrap();
            }

            #[tokio::test]
            async fn test_concurrent_likes() {
                let store = $factory;
                let id = store
                    .create(sample_product("Hat", "", 5))
                    .await
                    .unwrap()
                    .id
                    .unwrap();

                let mut handles = Vec::new();
                for _ in 0..20 {
                    let store = store.clone();
                    handles.push(tokio::spawn(async move {
                        store.adjust_likes(id, 1).await.unwrap();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                assert_eq!(store.get(id).await.unwrap().unwrap().like_num, 20);
            }
        }
    };
}
