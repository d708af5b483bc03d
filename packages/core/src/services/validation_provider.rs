//! Uncached validation provider.
//!
//! The provider drives validator registration and the staged evaluation
//! passes. It holds no state of its own and caches nothing: services
//! register their validators at most once per service instance, and message
//! deduplication on the model keeps repeated passes idempotent.
//!
//! Callers pass the provider explicitly (`Option<&ValidationProvider>`);
//! a missing provider degrades every dependent operation to a no-op.

use crate::models::ResourceModel;
use crate::validation::{MessageLevel, ModelValidationService, ModelValidator};

/// Registration and staged-evaluation engine for model validation.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use contentmodel_core::models::{BaseResource, ResourceModel};
/// use contentmodel_core::repository::{MemoryRepository, Resource};
/// use contentmodel_core::services::ValidationProvider;
/// use contentmodel_core::utils::model_utils;
/// use serde_json::json;
///
/// let repository = Rc::new(MemoryRepository::new());
/// repository.put("/content/widget", json!({}));
///
/// let resource = Resource::open(repository.handle(), "/content/widget").unwrap();
/// let mut model = model_utils::adapt_to_base_resource(&resource);
///
/// let provider = ValidationProvider::new();
/// model.validate(Some(&provider));
/// assert!(model.error_messages().is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidationProvider;

impl ValidationProvider {
    /// Create a provider.
    pub fn new() -> Self {
        Self
    }

    /// Basic validators of `service`, registering them first when the list
    /// is still empty.
    pub fn basic_validators<'s, M: ResourceModel>(
        &self,
        model: &M,
        service: &'s mut M::ValidationService,
    ) -> &'s [Box<dyn ModelValidator<M>>] {
        if service.validator_set().basic_validators().is_empty() {
            service.register_basic_validators(model);
        }
        service.validator_set().basic_validators()
    }

    /// Detailed validators of `service`, registering them first when the
    /// list is still empty.
    pub fn detailed_validators<'s, M: ResourceModel>(
        &self,
        model: &M,
        service: &'s mut M::ValidationService,
    ) -> &'s [Box<dyn ModelValidator<M>>] {
        if service.validator_set().detailed_validators().is_empty() {
            service.register_detailed_validators(model);
        }
        service.validator_set().detailed_validators()
    }

    /// All validators of `service`, basic before detailed.
    pub fn validators<'s, M: ResourceModel>(
        &self,
        model: &M,
        service: &'s mut M::ValidationService,
    ) -> Vec<&'s dyn ModelValidator<M>> {
        self.basic_validators(model, service);
        self.detailed_validators(model, service);
        let set = service.validator_set();
        set.basic_validators()
            .iter()
            .chain(set.detailed_validators())
            .map(Box::as_ref)
            .collect()
    }

    /// Run the basic validators, recording failures on the model.
    pub fn do_basic_validation<M: ResourceModel>(
        &self,
        model: &mut M,
        service: &mut M::ValidationService,
    ) {
        let outcomes = {
            let validators = self.basic_validators(&*model, service);
            evaluate(&*model, validators)
        };
        record(model, outcomes);
    }

    /// Run the basic validators, then the detailed validators.
    ///
    /// Messages already recorded by a basic pass are deduplicated by the
    /// model's message lists, so the result is a superset of a basic run.
    pub fn do_detailed_validation<M: ResourceModel>(
        &self,
        model: &mut M,
        service: &mut M::ValidationService,
    ) {
        self.do_basic_validation(model, service);
        let outcomes = {
            let validators = self.detailed_validators(&*model, service);
            evaluate(&*model, validators)
        };
        record(model, outcomes);
    }
}

/// Evaluates validators against a model, producing the messages to record.
///
/// A failing bundle contributes only its bundle message; a leaf validator
/// with no level is skipped entirely.
fn evaluate<M>(
    model: &M,
    validators: &[Box<dyn ModelValidator<M>>],
) -> Vec<(MessageLevel, String)> {
    let mut outcomes = Vec::new();
    for validator in validators {
        if let Some(bundle) = validator.as_bundle() {
            if !bundle.is_valid(model) {
                let level = bundle.level().unwrap_or(MessageLevel::Info);
                outcomes.push((level, bundle.bundle_message().to_string()));
            }
        } else if !validator.is_valid(model) {
            if let Some(level) = validator.level() {
                outcomes.push((level, validator.message()));
            }
        }
    }
    outcomes
}

fn record<M: ResourceModel>(model: &mut M, outcomes: Vec<(MessageLevel, String)>) {
    for (level, message) in outcomes {
        model.messages_mut().record(level, message);
    }
}

#[cfg(test)]
#[path = "validation_provider_test.rs"]
mod validation_provider_test;
