//! Integration tests for the entity manager.
//!
//! Exercises persistence orchestration against a real database:
//! - Single create/update round trips through the factory
//! - Per-item commits in batch operations
//! - Relation link rows
//! - Exact field-combination lookups backing the pipeline seam

use catalog_core::entity::EntityType;
use catalog_core::spec::{EntityLookup, ProcessedSpec, ProcessedUpdateSpec};
use catalog_core::types::SpecMap;
use catalog_db::manager::EntityManager;
use catalog_db::repositories::ProductRepo;
use serde_json::{json, Value};
use sqlx::PgPool;

fn spec(value: Value) -> SpecMap {
    let Value::Object(map) = value else {
        unreachable!()
    };
    map
}

#[sqlx::test]
async fn create_from_spec_persists_the_materialized_entity(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());

    let id = manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "created_1", "price": 4.14, "eId": 9})),
        )
        .await
        .unwrap();

    let row = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.title, "created_1");
    assert_eq!(row.price, 4.14);
    assert_eq!(row.e_id, Some(9));
}

#[sqlx::test]
async fn create_from_spec_links_resolved_categories(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());

    let category_id = manager
        .create_from_spec(
            EntityType::Category,
            &spec(json!({"title": "common", "eId": 1})),
        )
        .await
        .unwrap();

    let product_id = manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "created_1", "price": 4.14, "categories": [category_id]})),
        )
        .await
        .unwrap();

    let categories = ProductRepo::categories_of(&pool, product_id).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, category_id);
}

#[sqlx::test]
async fn create_from_specs_commits_each_item(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());

    let specs = vec![
        ProcessedSpec::Create(spec(json!({"title": "created_1.1", "price": 4.14}))),
        ProcessedSpec::Create(spec(json!({"title": "created_1.2", "price": 7.0}))),
    ];
    manager
        .create_from_specs(EntityType::Product, &specs)
        .await
        .unwrap();

    let rows = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[sqlx::test]
async fn update_from_spec_mutates_only_supplied_fields(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());
    let id = manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "before", "price": 7.6, "eId": 1})),
        )
        .await
        .unwrap();

    let entity = manager
        .find_by_fields(EntityType::Product, &spec(json!({"id": id})))
        .await
        .unwrap()
        .unwrap();
    let update = ProcessedUpdateSpec {
        identifying_data: spec(json!({"id": id})),
        creation_data: spec(json!({"price": 9.5})),
    };
    manager.update_from_spec(&update, entity).await.unwrap();

    let row = ProductRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(row.title, "before");
    assert_eq!(row.price, 9.5);
    assert_eq!(row.e_id, Some(1));
}

#[sqlx::test]
async fn update_from_specs_locates_each_entity_by_identifying_data(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());
    manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "before_1", "price": 4.14, "eId": 1})),
        )
        .await
        .unwrap();
    manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "before_2", "price": 7.0, "eId": 2})),
        )
        .await
        .unwrap();

    let specs = vec![
        ProcessedSpec::Update(ProcessedUpdateSpec {
            identifying_data: spec(json!({"eId": 1})),
            creation_data: spec(json!({"title": "updated_1"})),
        }),
        // No entity matches; the item is skipped, not an error.
        ProcessedSpec::Update(ProcessedUpdateSpec {
            identifying_data: spec(json!({"eId": 42})),
            creation_data: spec(json!({"title": "updated_42"})),
        }),
        ProcessedSpec::Update(ProcessedUpdateSpec {
            identifying_data: spec(json!({"eId": 2})),
            creation_data: spec(json!({"title": "updated_2"})),
        }),
    ];
    manager
        .update_from_specs(&specs, EntityType::Product)
        .await
        .unwrap();

    let rows = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(rows[0].title, "updated_1");
    assert_eq!(rows[1].title, "updated_2");
}

#[sqlx::test]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());
    let id = manager
        .create_from_spec(
            EntityType::Product,
            &spec(json!({"title": "created_1", "price": 4.14})),
        )
        .await
        .unwrap();

    assert!(manager.delete(EntityType::Product, id).await.unwrap());
    assert!(!manager.delete(EntityType::Product, id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, id).await.unwrap().is_none());
}

#[sqlx::test]
async fn lookup_seam_finds_ids_by_exact_field_combination(pool: PgPool) {
    let manager = EntityManager::new(pool.clone());
    let id = manager
        .create_from_spec(
            EntityType::Category,
            &spec(json!({"title": "common", "eId": 5})),
        )
        .await
        .unwrap();

    let found = manager
        .find_id_by_fields(EntityType::Category, &spec(json!({"eId": 5})))
        .await
        .unwrap();
    assert_eq!(found, Some(id));

    let missing = manager
        .find_id_by_fields(EntityType::Category, &spec(json!({"eId": 6})))
        .await
        .unwrap();
    assert_eq!(missing, None);
}
