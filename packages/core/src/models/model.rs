//! Resource Model Trait
//!
//! [`ResourceModel`] is the contract every typed model fulfills: it wraps
//! exactly one [`Resource`], declares its accepted resource types through a
//! [`TypeDescriptor`], carries validation message lists, and names the
//! validation service that registers its validators.
//!
//! Accessors are provided on the trait; page-shaped models override
//! [`properties`](ResourceModel::properties) and
//! [`resource_type`](ResourceModel::resource_type) to delegate to their
//! `jcr:content` child.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::error;

use crate::models::{BaseResource, ModelAdaptionError, TypeDescriptor};
use crate::repository::{
    Resource, JCR_CREATED, JCR_DESCRIPTION, JCR_LAST_MODIFIED, JCR_TITLE, PROPERTY_RESOURCE_TYPE,
};
use crate::services::ValidationProvider;
use crate::utils::model_utils;
use crate::validation::{ModelValidationService, ModelValidator, ValidationMessages};

/// A typed model over one content tree node.
///
/// Implementations supply the descriptor, the validation service type, the
/// structural binding, and access to the wrapped resource and message lists.
/// Everything else (property accessors, validation entry points) is provided.
///
/// Models are request scoped: one adaptation produces one model instance,
/// and instances are not shared across adaptations.
pub trait ResourceModel: Sized {
    /// Static type metadata: accepted resource types and diagnostics name.
    const DESCRIPTOR: TypeDescriptor;

    /// Validation service registering this model type's validators.
    ///
    /// The `Default` bound is the service factory; a fresh instance is
    /// created per validation call, so validators re-register per call.
    type ValidationService: ModelValidationService<Self> + Default;

    /// Structural binding from a type-matched resource.
    ///
    /// Returning `None` signals the resource cannot back a usable instance,
    /// which sends adaptation to its `jcr:content` fallback.
    fn bind(resource: Resource) -> Option<Self>;

    /// The resource this model was adapted from.
    fn resource(&self) -> &Resource;

    /// Messages accumulated by validation.
    fn messages(&self) -> &ValidationMessages;

    /// Mutable access to the validation messages.
    fn messages_mut(&mut self) -> &mut ValidationMessages;

    /// Name of the wrapped resource.
    fn name(&self) -> &str {
        self.resource().name()
    }

    /// Path of the wrapped resource.
    fn path(&self) -> &str {
        self.resource().path()
    }

    /// Properties backing the model's accessors.
    ///
    /// Page-shaped models override this to read from their `jcr:content`
    /// child when one exists.
    fn properties(&self) -> &Map<String, Value> {
        self.resource().properties()
    }

    /// String property value, if present and string-valued.
    fn string_property(&self, key: &str) -> Option<&str> {
        self.properties().get(key).and_then(Value::as_str)
    }

    /// Display title: the explicit `jcr:title` when configured, else the
    /// resource name, else the path. Never empty.
    fn title(&self) -> String {
        match self.string_property(JCR_TITLE) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ if !self.name().is_empty() => self.name().to_string(),
            _ => self.path().to_string(),
        }
    }

    /// Description, or empty string when not configured.
    fn description(&self) -> String {
        self.string_property(JCR_DESCRIPTION)
            .unwrap_or_default()
            .to_string()
    }

    /// Resolved resource type tag.
    ///
    /// Precedence: explicit `repo:resourceType` (read through
    /// [`properties`](ResourceModel::properties), so page shapes see their
    /// content child's value), structural type, super type pointer.
    fn resource_type(&self) -> String {
        match self.string_property(PROPERTY_RESOURCE_TYPE) {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => {
                let structural = self.resource().primary_type();
                if !structural.is_empty() {
                    structural
                } else {
                    self.resource().resource_super_type()
                }
            }
        }
    }

    /// Super type pointer of the wrapped resource, or empty string.
    fn resource_super_type(&self) -> String {
        self.resource().resource_super_type()
    }

    /// Creation timestamp, when the `jcr:created` property parses.
    fn created(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.string_property(JCR_CREATED))
    }

    /// Last modification timestamp, when `jcr:lastModified` parses.
    fn last_modified(&self) -> Option<DateTime<Utc>> {
        parse_datetime(self.string_property(JCR_LAST_MODIFIED))
    }

    /// Parent resource as a [`BaseResource`] model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelAdaptionError::NoParentResource`] at the tree root.
    fn parent(&self) -> Result<BaseResource, ModelAdaptionError> {
        model_utils::parent_as_base_resource(self.resource())
    }

    /// Append to the model's error messages. Duplicates are dropped.
    fn add_error_message(&mut self, message: impl Into<String>) {
        self.messages_mut().add_error_message(message);
    }

    /// Append to the model's warning messages. Duplicates are dropped.
    fn add_warning_message(&mut self, message: impl Into<String>) {
        self.messages_mut().add_warning_message(message);
    }

    /// Append to the model's info messages. Duplicates are dropped.
    fn add_info_message(&mut self, message: impl Into<String>) {
        self.messages_mut().add_info_message(message);
    }

    /// Accumulated error messages, in first-seen order.
    fn error_messages(&self) -> &[String] {
        self.messages().error_messages()
    }

    /// Accumulated warning messages, in first-seen order.
    fn warning_messages(&self) -> &[String] {
        self.messages().warning_messages()
    }

    /// Accumulated info messages, in first-seen order.
    fn info_messages(&self) -> &[String] {
        self.messages().info_messages()
    }

    /// Run basic validation, appending failures to the message lists.
    ///
    /// A missing provider degrades to a no-op.
    fn validate(&mut self, provider: Option<&ValidationProvider>) {
        if let Some(provider) = provider {
            let mut service = Self::ValidationService::default();
            provider.do_basic_validation(self, &mut service);
        }
    }

    /// Run basic then detailed validation.
    ///
    /// Messages recorded by an earlier basic pass stay deduplicated. A
    /// missing provider degrades to a no-op.
    fn do_detailed_validation(&mut self, provider: Option<&ValidationProvider>) {
        if let Some(provider) = provider {
            let mut service = Self::ValidationService::default();
            provider.do_detailed_validation(self, &mut service);
        }
    }

    /// All validators for this model, basic then detailed.
    ///
    /// Empty when no provider is available.
    fn validators(&self, provider: Option<&ValidationProvider>) -> Vec<Box<dyn ModelValidator<Self>>> {
        let Some(provider) = provider else {
            error!(
                model = Self::DESCRIPTOR.name,
                "Unable to retrieve validation provider while getting validators"
            );
            return Vec::new();
        };
        let mut service = Self::ValidationService::default();
        provider.basic_validators(self, &mut service);
        provider.detailed_validators(self, &mut service);
        let (basic, detailed) = service.into_validator_set().into_parts();
        basic.into_iter().chain(detailed).collect()
    }

    /// Basic validators for this model. Empty when no provider is available.
    fn basic_validators(
        &self,
        provider: Option<&ValidationProvider>,
    ) -> Vec<Box<dyn ModelValidator<Self>>> {
        let Some(provider) = provider else {
            error!(
                model = Self::DESCRIPTOR.name,
                "Unable to retrieve validation provider while getting basic validators"
            );
            return Vec::new();
        };
        let mut service = Self::ValidationService::default();
        provider.basic_validators(self, &mut service);
        service.into_validator_set().into_parts().0
    }

    /// Detailed validators for this model. Empty when no provider is
    /// available.
    fn detailed_validators(
        &self,
        provider: Option<&ValidationProvider>,
    ) -> Vec<Box<dyn ModelValidator<Self>>> {
        let Some(provider) = provider else {
            error!(
                model = Self::DESCRIPTOR.name,
                "Unable to retrieve validation provider while getting detailed validators"
            );
            return Vec::new();
        };
        let mut service = Self::ValidationService::default();
        provider.detailed_validators(self, &mut service);
        service.into_validator_set().into_parts().1
    }
}

/// Parses an RFC 3339 timestamp property value.
fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}
