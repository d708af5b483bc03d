//! Baseline resource model.
//!
//! [`BaseResource`] is the plain model shape: it reads its own properties
//! and accepts any resource via the default sentinel type. All other model
//! types can be reached from it through the adaptation helpers.

use crate::models::{ResourceModel, TypeDescriptor};
use crate::repository::{Resource, RESOURCE_TYPE_DEFAULT};
use crate::validation::{DefaultValidationService, ValidationMessages};

/// Plain model over a single resource.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use contentmodel_core::models::{BaseResource, ResourceModel};
/// use contentmodel_core::repository::{MemoryRepository, Resource};
/// use contentmodel_core::utils::model_utils;
/// use serde_json::json;
///
/// let repository = Rc::new(MemoryRepository::new());
/// repository.put("/content/widget", json!({"jcr:title": "Widget"}));
///
/// let resource = Resource::open(repository.handle(), "/content/widget").unwrap();
/// let model = model_utils::adapt_to_base_resource(&resource);
/// assert_eq!(model.title(), "Widget");
/// ```
#[derive(Debug)]
pub struct BaseResource {
    resource: Resource,
    messages: ValidationMessages,
}

impl BaseResource {
    /// Wrap a resource without a type check.
    ///
    /// Every resource is a valid `BaseResource`; prefer
    /// [`model_utils::adapt_to_base_resource`] at call sites for symmetry
    /// with the other adaptation helpers.
    ///
    /// [`model_utils::adapt_to_base_resource`]: crate::utils::model_utils::adapt_to_base_resource
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            resource,
            messages: ValidationMessages::default(),
        }
    }

    /// Unwrap back to the resource handle (consumes the model).
    pub fn into_resource(self) -> Resource {
        self.resource
    }
}

impl ResourceModel for BaseResource {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("BaseResource", &[RESOURCE_TYPE_DEFAULT]);

    type ValidationService = DefaultValidationService<Self>;

    fn bind(resource: Resource) -> Option<Self> {
        Some(Self::from_resource(resource))
    }

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    fn messages_mut(&mut self) -> &mut ValidationMessages {
        &mut self.messages
    }
}

#[cfg(test)]
#[path = "base_resource_test.rs"]
mod base_resource_test;
