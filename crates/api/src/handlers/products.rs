//! Handlers for the product resource.
//!
//! Write endpoints funnel every payload through the spec pipeline: the
//! processor validates and normalizes, the entity manager materializes
//! and persists. A rejected payload surfaces as 400 with the accumulated
//! `errors` list and leaves no persistence side effect.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use catalog_core::entity::EntityType;
use catalog_core::spec::{SpecMode, SpecProcessor, ENTITY_DATA_KEY, IDENTIFY_BY_KEY};
use catalog_core::types::{DbId, SpecMap};
use catalog_db::models::ProductDetail;
use catalog_db::repositories::ProductRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{empty_object, envelope, not_found};
use crate::state::AppState;

/// GET /api/products -- every product with its linked categories.
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let rows = ProductRepo::list(&state.pool).await?;
    if rows.is_empty() {
        return Ok((StatusCode::NOT_FOUND, Json(json!([]))).into_response());
    }

    let mut products = Vec::with_capacity(rows.len());
    for row in rows {
        let categories = ProductRepo::categories_of(&state.pool, row.id).await?;
        products.push(ProductDetail {
            product: row,
            categories,
        });
    }

    Ok(Json(json!({ "products": products })).into_response())
}

/// GET /api/product/{id} -- one product with its linked categories.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let Some(row) = ProductRepo::find_by_id(&state.pool, id).await? else {
        return Ok(not_found());
    };
    let categories = ProductRepo::categories_of(&state.pool, id).await?;
    let detail = ProductDetail {
        product: row,
        categories,
    };

    Ok(Json(json!({ "product": detail })).into_response())
}

/// POST /api/product -- create one product from `{"entityData": {...}}`.
pub async fn create(State(state): State<AppState>, body: String) -> AppResult<Response> {
    let mut request = envelope::require_envelope(envelope::parse_json(&body)?)?;
    let entity_data = envelope::take_entity_data(&mut request)?;

    let processor = SpecProcessor::new(EntityType::Product, &state.manager);
    let spec = match processor.process_spec_to_create(entity_data).await? {
        Ok(spec) => spec,
        Err(errors) => return Err(AppError::from(errors)),
    };

    state
        .manager
        .create_from_spec(EntityType::Product, &spec)
        .await?;
    Ok(empty_object())
}

/// POST /api/products -- batch create from `{"entitiesSpecs": [...]}`.
///
/// Items are processed and persisted independently: rejected items are
/// reported per item in the 200 response while their siblings commit.
pub async fn create_many(State(state): State<AppState>, body: String) -> AppResult<Response> {
    let specs = envelope::take_entities_specs(envelope::parse_json(&body)?)?;

    let mut processor = SpecProcessor::new(EntityType::Product, &state.manager);
    let processed = processor.process_specs(specs, SpecMode::Create).await?;
    state
        .manager
        .create_from_specs(EntityType::Product, &processed)
        .await?;

    if processor.any_spec_error_found() {
        Ok(Json(json!({ "errors": processor.spec_errors() })).into_response())
    } else {
        Ok(empty_object())
    }
}

/// PUT /api/product -- update, identifying fields taken from the spec
/// itself (`identifyBy`, or the default).
pub async fn update(State(state): State<AppState>, body: String) -> AppResult<Response> {
    let request = envelope::require_envelope(envelope::parse_json(&body)?)?;
    run_update(&state, request).await
}

/// PUT /api/product/{id} -- update by URI id. The URI wins over the
/// payload: the id is written into `entityData` and any `identifyBy` is
/// dropped.
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: String,
) -> AppResult<Response> {
    let mut request = envelope::require_envelope(envelope::parse_json(&body)?)?;
    if let Some(Value::Object(entity_data)) = request.get_mut(ENTITY_DATA_KEY) {
        entity_data.insert("id".to_string(), json!(id));
    }
    request.remove(IDENTIFY_BY_KEY);
    run_update(&state, request).await
}

/// DELETE /api/product/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    if state.manager.delete(EntityType::Product, id).await? {
        Ok(empty_object())
    } else {
        Ok(not_found())
    }
}

/// Process an update envelope, locate the target, apply the creation
/// data. A target that vanished between processing and the lookup here
/// surfaces as 404.
async fn run_update(state: &AppState, request: SpecMap) -> AppResult<Response> {
    let processor = SpecProcessor::new(EntityType::Product, &state.manager);
    let spec = match processor.process_spec_to_update(request).await? {
        Ok(spec) => spec,
        Err(errors) => return Err(AppError::from(errors)),
    };

    let Some(product) = state
        .manager
        .find_by_fields(EntityType::Product, &spec.identifying_data)
        .await?
    else {
        return Ok(not_found());
    };

    state.manager.update_from_spec(&spec, product).await?;
    Ok(empty_object())
}
