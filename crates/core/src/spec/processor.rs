//! Validation/normalization of entity specs.
//!
//! A processor is configured for one entity type and walks each spec
//! through its gates: field allow-listing, relation-reference
//! resolution, identifying-field handling, and validation. A spec that
//! fails a gate is rejected with the errors accumulated at that gate;
//! later gates are not evaluated. Batch processing isolates items: one
//! item's rejection never aborts its siblings.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::EntityTypeConfig;
use crate::entity::EntityType;
use crate::error::CoreError;
use crate::types::{DbId, SpecMap};
use crate::validation::{validate_field, validation_error_messages};

use super::error::{SpecError, SpecItemError, SpecViolation};

/// Envelope key naming the entity fields of a spec.
pub const ENTITY_DATA_KEY: &str = "entityData";
/// Envelope key overriding the identifying field set on update.
pub const IDENTIFY_BY_KEY: &str = "identifyBy";

/// Exact-match lookup capability the storage layer hands the pipeline.
/// Relation references and update identifying data both resolve through
/// it.
#[async_trait]
pub trait EntityLookup: Send + Sync {
    /// Find the id of the entity whose fields equal `fields` exactly.
    ///
    /// `Ok(None)` means no such entity; `Err` is a storage fault, not a
    /// spec rejection.
    async fn find_id_by_fields(
        &self,
        entity_type: EntityType,
        fields: &SpecMap,
    ) -> Result<Option<DbId>, CoreError>;
}

/// Whether a batch is processed as creations or updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecMode {
    Create,
    Update,
}

/// A fully validated, normalized creation payload. The relation
/// reference field, if present, has been replaced by resolved ids.
pub type ProcessedCreateSpec = SpecMap;

/// A validated update split into its identifying and creation parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedUpdateSpec {
    /// The whitelisted field combination locating the entity.
    pub identifying_data: SpecMap,
    /// The remaining fields to apply, relation-resolved.
    pub creation_data: SpecMap,
}

/// A processed batch item.
#[derive(Debug, Clone)]
pub enum ProcessedSpec {
    Create(ProcessedCreateSpec),
    Update(ProcessedUpdateSpec),
}

/// Spec validation/normalization state machine for one entity type.
pub struct SpecProcessor<'a> {
    config: &'static EntityTypeConfig,
    lookup: &'a dyn EntityLookup,
    spec_errors: Vec<SpecItemError>,
}

impl<'a> SpecProcessor<'a> {
    pub fn new(entity_type: EntityType, lookup: &'a dyn EntityLookup) -> Self {
        Self {
            config: EntityTypeConfig::of(entity_type),
            lookup,
            spec_errors: Vec::new(),
        }
    }

    /// Process a flat creation payload.
    ///
    /// Gates, in order: field allow-list, relation-reference resolution
    /// (fail-fast on the first unresolved reference), whole-object
    /// validation of the resolved spec. The outer `Err` is a storage
    /// fault; the inner `Err` a rejection.
    pub async fn process_spec_to_create(
        &self,
        mut entity_data: SpecMap,
    ) -> Result<Result<ProcessedCreateSpec, SpecError>, CoreError> {
        let mut errors = SpecError::new();

        if !self.check_creation_fields(&entity_data, &mut errors) {
            return Ok(Err(errors));
        }
        if !self
            .resolve_relation_references(&mut entity_data, &mut errors)
            .await?
        {
            return Ok(Err(errors));
        }

        for message in validation_error_messages(self.config.entity_type, &entity_data, None) {
            errors.push(SpecViolation::Validation(message));
        }
        if errors.is_empty() {
            Ok(Ok(entity_data))
        } else {
            Ok(Err(errors))
        }
    }

    /// Process an update envelope `{entityData, identifyBy?}`.
    ///
    /// Determines the identifying field set, verifies and splits the
    /// payload, resolves the existing entity, allow-lists and
    /// relation-resolves the creation part, then validates field by
    /// field. Unlike creation, validation is incremental: every supplied
    /// field registered for incremental validation is checked against
    /// its own group, and violations accumulate across fields instead of
    /// short-circuiting.
    pub async fn process_spec_to_update(
        &self,
        mut envelope: SpecMap,
    ) -> Result<Result<ProcessedUpdateSpec, SpecError>, CoreError> {
        let mut errors = SpecError::new();

        let identifying_fields = match envelope.remove(IDENTIFY_BY_KEY) {
            None => vec![self.config.default_identifying_field.to_string()],
            Some(identify_by) => match self.check_identifying_fields(&identify_by, &mut errors) {
                Some(fields) => fields,
                None => return Ok(Err(errors)),
            },
        };

        let Some(Value::Object(mut entity_data)) = envelope.remove(ENTITY_DATA_KEY) else {
            errors.push(SpecViolation::MissingEntityData);
            return Ok(Err(errors));
        };

        if identifying_fields
            .iter()
            .any(|field| !entity_data.contains_key(field))
        {
            errors.push(SpecViolation::IdentifyingFieldsAbsent);
            return Ok(Err(errors));
        }

        let mut identifying_data = SpecMap::new();
        for field in &identifying_fields {
            if let Some(value) = entity_data.remove(field) {
                identifying_data.insert(field.clone(), value);
            }
        }
        let mut creation_data = entity_data;

        if identifying_data.values().any(Value::is_null) {
            errors.push(SpecViolation::NullIdentifyingData);
            return Ok(Err(errors));
        }
        if self
            .lookup
            .find_id_by_fields(self.config.entity_type, &identifying_data)
            .await?
            .is_none()
        {
            errors.push(SpecViolation::EntityNotFound);
            return Ok(Err(errors));
        }

        if !self.check_creation_fields(&creation_data, &mut errors) {
            return Ok(Err(errors));
        }
        if !self
            .resolve_relation_references(&mut creation_data, &mut errors)
            .await?
        {
            return Ok(Err(errors));
        }

        for (field, value) in creation_data.iter().chain(identifying_data.iter()) {
            if !self
                .config
                .incremental_validation_fields
                .iter()
                .any(|registered| registered == field)
            {
                continue;
            }
            for message in validate_field(self.config.entity_type, field, Some(value)) {
                errors.push(SpecViolation::Validation(message));
            }
        }

        if errors.is_empty() {
            Ok(Ok(ProcessedUpdateSpec {
                identifying_data,
                creation_data,
            }))
        } else {
            Ok(Err(errors))
        }
    }

    /// Process a batch of spec envelopes independently.
    ///
    /// Items without an `entityData` key are recorded as item errors and
    /// excluded; every other item runs the single-spec algorithm for
    /// `mode`. Rejections land in [`spec_errors`](Self::spec_errors)
    /// paired with the item as the client sent it; accepted items are
    /// returned in input order.
    pub async fn process_specs(
        &mut self,
        specs: Vec<Value>,
        mode: SpecMode,
    ) -> Result<Vec<ProcessedSpec>, CoreError> {
        self.spec_errors.clear();
        let mut processed = Vec::with_capacity(specs.len());

        for spec in specs {
            let envelope = match spec {
                Value::Object(map) if map.contains_key(ENTITY_DATA_KEY) => map,
                other => {
                    self.spec_errors.push(SpecItemError {
                        entity_spec: other,
                        errors: vec![SpecViolation::MissingEntityData.to_string()],
                    });
                    continue;
                }
            };

            let outcome = match mode {
                SpecMode::Create => match envelope.get(ENTITY_DATA_KEY).cloned() {
                    Some(Value::Object(entity_data)) => self
                        .process_spec_to_create(entity_data)
                        .await?
                        .map(ProcessedSpec::Create),
                    _ => Err(SpecError::from(SpecViolation::MissingEntityData)),
                },
                SpecMode::Update => self
                    .process_spec_to_update(envelope.clone())
                    .await?
                    .map(ProcessedSpec::Update),
            };

            match outcome {
                Ok(spec) => processed.push(spec),
                Err(errors) => self.spec_errors.push(SpecItemError {
                    entity_spec: Value::Object(envelope),
                    errors: errors.messages(),
                }),
            }
        }

        Ok(processed)
    }

    /// Whether the last batch recorded any item rejection.
    pub fn any_spec_error_found(&self) -> bool {
        !self.spec_errors.is_empty()
    }

    /// Item rejections of the last batch, in input order.
    pub fn spec_errors(&self) -> &[SpecItemError] {
        &self.spec_errors
    }

    fn check_creation_fields(&self, data: &SpecMap, errors: &mut SpecError) -> bool {
        let unallowed: Vec<&str> = data
            .keys()
            .map(String::as_str)
            .filter(|key| {
                !self
                    .config
                    .allowed_creation_fields
                    .iter()
                    .any(|allowed| allowed == key)
            })
            .collect();
        if unallowed.is_empty() {
            return true;
        }
        errors.push(SpecViolation::UnallowedCreationFields {
            fields: unallowed.join(", "),
        });
        false
    }

    /// Validate an `identifyBy` value and return the named fields.
    ///
    /// The field combination must equal one whitelisted set; comparison
    /// is order-insensitive.
    fn check_identifying_fields(
        &self,
        identify_by: &Value,
        errors: &mut SpecError,
    ) -> Option<Vec<String>> {
        let Value::Array(raw_fields) = identify_by else {
            errors.push(SpecViolation::IdentifyByNotArray);
            return None;
        };

        let mut fields = Vec::with_capacity(raw_fields.len());
        for raw in raw_fields {
            match raw.as_str() {
                Some(name) => fields.push(name.to_string()),
                None => {
                    errors.push(SpecViolation::IdentifyByNotStrings);
                    return None;
                }
            }
        }

        if fields.is_empty() {
            errors.push(SpecViolation::NoIdentifyingValue);
            return None;
        }

        let allowed = self
            .config
            .allowed_identifying_field_sets
            .iter()
            .any(|set| {
                set.len() == fields.len()
                    && set.iter().all(|member| fields.iter().any(|f| f == member))
            });
        if !allowed {
            errors.push(SpecViolation::UnallowedIdentifyingFields);
            return None;
        }

        Some(fields)
    }

    /// Resolve the relation-reference field of `data`, if configured and
    /// present.
    ///
    /// Each reference is first validated as the target's reference field
    /// and then looked up; the first invalid or unresolved reference
    /// aborts without touching the remaining ones. On success the
    /// reference field is replaced by the resolved-ids field.
    async fn resolve_relation_references(
        &self,
        data: &mut SpecMap,
        errors: &mut SpecError,
    ) -> Result<bool, CoreError> {
        let Some(relation) = self.config.relation_field else {
            return Ok(true);
        };
        let references = match data.get(relation.spec_field) {
            None => return Ok(true),
            Some(Value::Array(references)) => references.clone(),
            Some(_) => {
                errors.push(SpecViolation::RelationFieldNotArray {
                    field: relation.spec_field,
                });
                return Ok(false);
            }
        };

        let mut resolved = Vec::with_capacity(references.len());
        for reference in &references {
            let messages = validate_field(relation.target, relation.reference_field, Some(reference));
            if !messages.is_empty() {
                for message in messages {
                    errors.push(SpecViolation::Validation(message));
                }
                return Ok(false);
            }

            let mut lookup_fields = SpecMap::new();
            lookup_fields.insert(relation.reference_field.to_string(), reference.clone());
            match self
                .lookup
                .find_id_by_fields(relation.target, &lookup_fields)
                .await?
            {
                Some(id) => resolved.push(Value::from(id)),
                None => {
                    errors.push(SpecViolation::UnresolvedRelation {
                        entity: relation.target.lowercase_name(),
                        reference: reference.to_string(),
                    });
                    return Ok(false);
                }
            }
        }

        data.remove(relation.spec_field);
        data.insert(relation.resolved_field.to_string(), Value::Array(resolved));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    /// In-memory stand-in for the storage lookup: entities are (type,
    /// fields, id) triples and a query matches when every queried field
    /// equals the stored value.
    #[derive(Default)]
    struct MemoryLookup {
        entities: Vec<(EntityType, SpecMap, DbId)>,
    }

    impl MemoryLookup {
        fn with(mut self, entity_type: EntityType, fields: Value, id: DbId) -> Self {
            let Value::Object(fields) = fields else {
                unreachable!()
            };
            self.entities.push((entity_type, fields, id));
            self
        }
    }

    #[async_trait]
    impl EntityLookup for MemoryLookup {
        async fn find_id_by_fields(
            &self,
            entity_type: EntityType,
            fields: &SpecMap,
        ) -> Result<Option<DbId>, CoreError> {
            Ok(self
                .entities
                .iter()
                .find(|(stored_type, stored_fields, _)| {
                    *stored_type == entity_type
                        && fields
                            .iter()
                            .all(|(key, value)| stored_fields.get(key) == Some(value))
                })
                .map(|(_, _, id)| *id))
        }
    }

    fn entity_data(value: Value) -> SpecMap {
        let Value::Object(map) = value else {
            unreachable!()
        };
        map
    }

    // -- creation --

    #[tokio::test]
    async fn valid_creation_spec_is_accepted_unchanged() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(json!({"title": "created_1", "price": 4.14}));
        let processed = processor
            .process_spec_to_create(spec.clone())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(processed, spec);
    }

    #[tokio::test]
    async fn unallowed_creation_fields_abort_immediately() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(json!({"notAllowed": 3, "title": "common", "price": 4.14}));
        let errors = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap_err();
        assert_matches!(
            errors.violations()[0],
            SpecViolation::UnallowedCreationFields { .. }
        );
        assert_eq!(
            errors.messages(),
            vec!["Unallowed creation fields of spec are requested: notAllowed."]
        );
    }

    #[tokio::test]
    async fn whole_object_validation_reports_all_default_group_violations() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(json!({"title": "1", "price": "string"}));
        let errors = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.messages(),
            vec![
                "Product title must have 3 characters or more.",
                "Product price must be of float type.",
            ]
        );
    }

    #[tokio::test]
    async fn relation_references_resolve_to_ids() {
        let lookup = MemoryLookup::default()
            .with(EntityType::Category, json!({"eId": 1}), 11)
            .with(EntityType::Category, json!({"eId": 2}), 12);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(
            json!({"title": "created_1", "price": 4.14, "categoriesEIds": [1, 2]}),
        );
        let processed = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap();
        assert!(processed.get("categoriesEIds").is_none());
        assert_eq!(processed.get("categories"), Some(&json!([11, 12])));
    }

    #[tokio::test]
    async fn unresolved_relation_reference_aborts_whole_spec() {
        let lookup = MemoryLookup::default().with(EntityType::Category, json!({"eId": 1}), 11);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(
            json!({"title": "created_1", "price": 4.14, "categoriesEIds": [1, 2]}),
        );
        let errors = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["No category with eId 2."]);
    }

    #[tokio::test]
    async fn relation_field_must_be_an_array() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(
            json!({"title": "created_1", "price": 4.14, "categoriesEIds": "incorrect"}),
        );
        let errors = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["\"categoriesEIds\" field must be an array."]
        );
    }

    #[tokio::test]
    async fn non_integer_relation_reference_is_rejected_before_lookup() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let spec = entity_data(
            json!({"title": "created_1", "price": 4.14, "categoriesEIds": ["incorrect"]}),
        );
        let errors = processor
            .process_spec_to_create(spec)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["Category eId must be of int type."]);
    }

    // -- update --

    #[tokio::test]
    async fn update_defaults_to_identifying_by_id() {
        let lookup = MemoryLookup::default().with(EntityType::Product, json!({"id": 5}), 5);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({"entityData": {"id": 5, "title": "updated_1"}}));
        let processed = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(processed.identifying_data, entity_data(json!({"id": 5})));
        assert_eq!(
            processed.creation_data,
            entity_data(json!({"title": "updated_1"}))
        );
    }

    #[tokio::test]
    async fn update_by_e_id_splits_identifying_from_creation_data() {
        let lookup = MemoryLookup::default().with(EntityType::Product, json!({"eId": 1}), 5);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"eId": 1, "title": "created_1", "price": 4.14},
            "identifyBy": ["eId"],
        }));
        let processed = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(processed.identifying_data, entity_data(json!({"eId": 1})));
        assert_eq!(
            processed.creation_data,
            entity_data(json!({"title": "created_1", "price": 4.14}))
        );
    }

    #[tokio::test]
    async fn identify_by_gates_reject_malformed_values() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let cases: &[(Value, &str)] = &[
            (json!("eId"), "\"identifyBy\" field must be array."),
            (json!([1]), "\"identifyBy\" field must contain only strings."),
            (json!([]), "At least one identifying value must be set."),
            (
                json!(["title"]),
                "Unallowed identifying fields of entity are requested.",
            ),
        ];
        for (identify_by, expected) in cases {
            let envelope = entity_data(json!({
                "entityData": {"eId": 1},
                "identifyBy": identify_by,
            }));
            let errors = processor
                .process_spec_to_update(envelope)
                .await
                .unwrap()
                .unwrap_err();
            assert_eq!(errors.messages(), vec![expected.to_string()]);
        }
    }

    #[tokio::test]
    async fn absent_identifying_field_is_rejected() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"title": "updated_1"},
            "identifyBy": ["eId"],
        }));
        let errors = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.messages(),
            vec!["Identifying fields of entity must be present."]
        );
    }

    #[tokio::test]
    async fn null_identifying_data_is_rejected() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"eId": null, "title": "created_1", "price": 4.14},
            "identifyBy": ["eId"],
        }));
        let errors = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["Identifying data must not be null."]);
    }

    #[tokio::test]
    async fn update_of_missing_entity_is_rejected() {
        let lookup = MemoryLookup::default();
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"eId": 42, "title": "created_1"},
            "identifyBy": ["eId"],
        }));
        let errors = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.messages(), vec!["Entity for this spec not found."]);
    }

    #[tokio::test]
    async fn incremental_validation_accumulates_across_fields() {
        let lookup = MemoryLookup::default().with(EntityType::Product, json!({"id": 5}), 5);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"id": 5, "title": "1", "price": "string"},
        }));
        let errors = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap_err();
        // both field violations are reported together
        assert_eq!(
            errors.messages(),
            vec![
                "Product price must be of float type.",
                "Product title must have 3 characters or more.",
            ]
        );
    }

    #[tokio::test]
    async fn update_with_only_identifying_fields_is_accepted() {
        let lookup = MemoryLookup::default().with(EntityType::Product, json!({"eId": 1}), 5);
        let processor = SpecProcessor::new(EntityType::Product, &lookup);

        let envelope = entity_data(json!({
            "entityData": {"eId": 1},
            "identifyBy": ["eId"],
        }));
        let processed = processor
            .process_spec_to_update(envelope)
            .await
            .unwrap()
            .unwrap();
        assert!(processed.creation_data.is_empty());
    }

    // -- batches --

    #[tokio::test]
    async fn batch_items_are_isolated() {
        let lookup = MemoryLookup::default();
        let mut processor = SpecProcessor::new(EntityType::Product, &lookup);

        let specs = vec![
            json!({"entityData": {"title": "created_1.1", "price": "incorrect"}}),
            json!({"entityData": {"title": "created_1.2", "price": 7.0}}),
        ];
        let processed = processor
            .process_specs(specs, SpecMode::Create)
            .await
            .unwrap();

        assert_eq!(processed.len(), 1);
        assert!(processor.any_spec_error_found());
        let item_errors = processor.spec_errors();
        assert_eq!(item_errors.len(), 1);
        assert_eq!(
            item_errors[0].entity_spec,
            json!({"entityData": {"title": "created_1.1", "price": "incorrect"}})
        );
        assert_eq!(
            item_errors[0].errors,
            vec!["Product price must be of float type."]
        );
    }

    #[tokio::test]
    async fn batch_updates_run_the_update_algorithm_per_item() {
        let lookup = MemoryLookup::default().with(EntityType::Product, json!({"eId": 1}), 5);
        let mut processor = SpecProcessor::new(EntityType::Product, &lookup);

        let specs = vec![
            json!({"entityData": {"eId": 1, "title": "updated_1"}, "identifyBy": ["eId"]}),
            json!({"entityData": {"eId": 2, "title": "updated_2"}, "identifyBy": ["eId"]}),
        ];
        let processed = processor
            .process_specs(specs, SpecMode::Update)
            .await
            .unwrap();

        assert_eq!(processed.len(), 1);
        let ProcessedSpec::Update(update) = &processed[0] else {
            unreachable!()
        };
        assert_eq!(update.identifying_data, entity_data(json!({"eId": 1})));
        assert_eq!(
            update.creation_data,
            entity_data(json!({"title": "updated_1"}))
        );
        assert_eq!(processor.spec_errors().len(), 1);
        assert_eq!(
            processor.spec_errors()[0].errors,
            vec!["Entity for this spec not found."]
        );
    }

    #[tokio::test]
    async fn batch_item_without_entity_data_is_recorded_and_excluded() {
        let lookup = MemoryLookup::default();
        let mut processor = SpecProcessor::new(EntityType::Product, &lookup);

        let specs = vec![
            json!({"title": "created_1"}),
            json!({"entityData": {"title": "created_2", "price": 7.0}}),
        ];
        let processed = processor
            .process_specs(specs, SpecMode::Create)
            .await
            .unwrap();

        assert_eq!(processed.len(), 1);
        assert_eq!(processor.spec_errors().len(), 1);
        assert_eq!(
            processor.spec_errors()[0].errors,
            vec!["\"entityData\" field must be set."]
        );
    }

    #[tokio::test]
    async fn batch_errors_reset_between_runs() {
        let lookup = MemoryLookup::default();
        let mut processor = SpecProcessor::new(EntityType::Product, &lookup);

        let bad = vec![json!({"entityData": {"title": "created_1"}})];
        processor
            .process_specs(bad, SpecMode::Create)
            .await
            .unwrap();
        assert!(processor.any_spec_error_found());

        let good = vec![json!({"entityData": {"title": "created_2", "price": 7.0}})];
        processor
            .process_specs(good, SpecMode::Create)
            .await
            .unwrap();
        assert!(!processor.any_spec_error_found());
    }
}
