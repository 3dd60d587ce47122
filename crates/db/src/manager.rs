//! Persistence orchestration for processed specs.

use async_trait::async_trait;
use catalog_core::entity::{CatalogEntity, EntityType};
use catalog_core::error::CoreError;
use catalog_core::factory;
use catalog_core::spec::{EntityLookup, ProcessedCreateSpec, ProcessedSpec, ProcessedUpdateSpec};
use catalog_core::types::{DbId, SpecMap};

use crate::repositories::{CategoryRepo, ProductRepo};
use crate::DbPool;

/// Materializes entities from processed specs and owns their persistence
/// lifetime. Each single-entity operation is one committed unit of work;
/// batch operations commit per item with no cross-item transaction.
#[derive(Clone)]
pub struct EntityManager {
    pool: DbPool,
}

impl EntityManager {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Materialize one creation spec and persist it. Returns the
    /// generated id.
    pub async fn create_from_spec(
        &self,
        entity_type: EntityType,
        spec: &ProcessedCreateSpec,
    ) -> Result<DbId, sqlx::Error> {
        let id = match factory::create_entity(entity_type, spec, None) {
            CatalogEntity::Product(product) => {
                ProductRepo::create(&self.pool, &product).await?.id
            }
            CatalogEntity::Category(category) => {
                CategoryRepo::create(&self.pool, &category).await?.id
            }
        };
        tracing::debug!(entity = entity_type.name(), id, "Created entity from spec");
        Ok(id)
    }

    /// Persist each processed creation independently. An earlier item's
    /// commit is final regardless of later items' outcomes.
    pub async fn create_from_specs(
        &self,
        entity_type: EntityType,
        specs: &[ProcessedSpec],
    ) -> Result<(), sqlx::Error> {
        for spec in specs {
            if let ProcessedSpec::Create(spec) = spec {
                self.create_from_spec(entity_type, spec).await?;
            }
        }
        Ok(())
    }

    /// Apply an update's creation data onto the already-loaded entity
    /// and persist it. The entity is mutated, never replaced.
    pub async fn update_from_spec(
        &self,
        spec: &ProcessedUpdateSpec,
        entity: CatalogEntity,
    ) -> Result<(), sqlx::Error> {
        let entity_type = entity.entity_type();
        match factory::create_entity(entity_type, &spec.creation_data, Some(entity)) {
            CatalogEntity::Product(product) => {
                let Some(id) = product.id else {
                    return Err(sqlx::Error::RowNotFound);
                };
                ProductRepo::update(&self.pool, id, &product).await?;
                tracing::debug!(entity = entity_type.name(), id, "Updated entity from spec");
            }
            CatalogEntity::Category(category) => {
                let Some(id) = category.id else {
                    return Err(sqlx::Error::RowNotFound);
                };
                CategoryRepo::update(&self.pool, id, &category).await?;
                tracing::debug!(entity = entity_type.name(), id, "Updated entity from spec");
            }
        }
        Ok(())
    }

    /// Apply each processed update independently: locate the entity by
    /// its identifying data, then update it. An item whose entity has
    /// vanished since processing is skipped; the spec already validated
    /// its existence, and last write wins at this layer.
    pub async fn update_from_specs(
        &self,
        specs: &[ProcessedSpec],
        entity_type: EntityType,
    ) -> Result<(), sqlx::Error> {
        for spec in specs {
            let ProcessedSpec::Update(spec) = spec else {
                continue;
            };
            if let Some(entity) = self.find_by_fields(entity_type, &spec.identifying_data).await? {
                self.update_from_spec(spec, entity).await?;
            }
        }
        Ok(())
    }

    /// Remove an entity. Returns `true` if a row was deleted.
    pub async fn delete(&self, entity_type: EntityType, id: DbId) -> Result<bool, sqlx::Error> {
        let deleted = match entity_type {
            EntityType::Product => ProductRepo::delete(&self.pool, id).await?,
            EntityType::Category => CategoryRepo::delete(&self.pool, id).await?,
        };
        if deleted {
            tracing::debug!(entity = entity_type.name(), id, "Deleted entity");
        }
        Ok(deleted)
    }

    /// Load the entity matching an exact field-value combination as a
    /// transient instance, relation members not loaded (links are
    /// appended idempotently at the storage level).
    pub async fn find_by_fields(
        &self,
        entity_type: EntityType,
        fields: &SpecMap,
    ) -> Result<Option<CatalogEntity>, sqlx::Error> {
        let entity = match entity_type {
            EntityType::Product => ProductRepo::find_by_fields(&self.pool, fields)
                .await?
                .map(|row| CatalogEntity::Product(row.into())),
            EntityType::Category => CategoryRepo::find_by_fields(&self.pool, fields)
                .await?
                .map(|row| CatalogEntity::Category(row.into())),
        };
        Ok(entity)
    }
}

#[async_trait]
impl EntityLookup for EntityManager {
    async fn find_id_by_fields(
        &self,
        entity_type: EntityType,
        fields: &SpecMap,
    ) -> Result<Option<DbId>, CoreError> {
        let id = match entity_type {
            EntityType::Product => ProductRepo::find_by_fields(&self.pool, fields)
                .await
                .map(|row| row.map(|row| row.id)),
            EntityType::Category => CategoryRepo::find_by_fields(&self.pool, fields)
                .await
                .map(|row| row.map(|row| row.id)),
        }
        .map_err(|err| CoreError::Internal(err.to_string()))?;
        Ok(id)
    }
}
