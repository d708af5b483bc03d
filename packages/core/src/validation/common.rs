//! Commonly used validator factories.
//!
//! Each factory returns a validator (or bundle) closed over its parameters;
//! the model under validation is supplied at evaluation time. Attach the
//! results to a validation service inside its registration hooks.

use std::cell::RefCell;

use crate::models::ResourceModel;
use crate::services::ValidationProvider;
use crate::utils::model_utils;
use crate::validation::{MessageLevel, SimpleValidator, ValidatorBundle};

/// Valid when an explicit title is configured, detected as the title
/// differing from the resource name.
pub fn has_title<M: ResourceModel + 'static>() -> SimpleValidator<M> {
    SimpleValidator::new("Title is configured.", MessageLevel::Error, |model: &M| {
        model.title() != model.name()
    })
}

/// Valid when the model has a non-empty description.
pub fn has_description<M: ResourceModel + 'static>(level: MessageLevel) -> SimpleValidator<M> {
    SimpleValidator::new("Description is configured.", level, |model: &M| {
        !model.description().is_empty()
    })
}

/// Valid when the resource name ends with `extension`.
pub fn has_file_extension<M: ResourceModel + 'static>(
    extension: &str,
    level: MessageLevel,
) -> SimpleValidator<M> {
    let suffix = extension.to_string();
    SimpleValidator::new(
        format!("Resource name ends with {extension} extension."),
        level,
        move |model: &M| model.name().ends_with(&suffix),
    )
}

/// Valid when a child named `child_name` exists (including through the
/// `jcr:content` fall-through).
pub fn has_child_resource<M: ResourceModel + 'static>(child_name: &str) -> SimpleValidator<M> {
    let name = child_name.to_string();
    SimpleValidator::new(
        format!("Has child resource '{child_name}'."),
        MessageLevel::Error,
        move |model: &M| model_utils::child_as_base_resource(&name, model.resource()).is_ok(),
    )
}

/// Valid when the child named `child_name` adapts to the model type `C`.
pub fn is_child_resource_valid_type<M, C>(child_name: &str) -> SimpleValidator<M>
where
    M: ResourceModel + 'static,
    C: ResourceModel + 'static,
{
    let name = child_name.to_string();
    SimpleValidator::new(
        format!("Has valid child resource '{child_name}'."),
        MessageLevel::Error,
        move |model: &M| model_utils::child_as_type::<C>(&name, model.resource()).is_ok(),
    )
}

/// Bundle requiring that the child named `child_name` exists and adapts to
/// the model type `C`.
pub fn has_valid_child<M, C>(child_name: &str) -> ValidatorBundle<M>
where
    M: ResourceModel + 'static,
    C: ResourceModel + 'static,
{
    let mut bundle = ValidatorBundle::new(
        format!("Has valid child {} '{}'", C::DESCRIPTOR.name, child_name),
        MessageLevel::Error,
        true,
    );
    bundle.add_validator(has_child_resource(child_name));
    bundle.add_validator(is_child_resource_valid_type::<M, C>(child_name));
    bundle
}

/// Always-invalid validators mirroring `model`'s accumulated error
/// messages.
///
/// Used to surface a child model's failures on a parent's own validator
/// list.
pub fn failed_error_validators<M, T>(model: &T) -> Vec<SimpleValidator<M>>
where
    M: 'static,
    T: ResourceModel,
{
    model
        .error_messages()
        .iter()
        .map(|message| {
            SimpleValidator::new(
                format!("Error validator failed for {}: {}", model.path(), message),
                MessageLevel::Error,
                |_: &M| false,
            )
        })
        .collect()
}

/// Always-invalid validators mirroring `model`'s accumulated warning
/// messages.
pub fn failed_warning_validators<M, T>(model: &T) -> Vec<SimpleValidator<M>>
where
    M: 'static,
    T: ResourceModel,
{
    model
        .warning_messages()
        .iter()
        .map(|message| {
            SimpleValidator::new(
                format!("Warning validator failed for {}: {}", model.path(), message),
                MessageLevel::Warning,
                |_: &M| false,
            )
        })
        .collect()
}

/// Valid when basic validation leaves every model in `models` without error
/// messages. Members are validated at evaluation time.
pub fn model_list_has_no_errors<M, T>(
    models: Vec<T>,
    message: &str,
    provider: Option<&ValidationProvider>,
) -> SimpleValidator<M>
where
    M: 'static,
    T: ResourceModel + 'static,
{
    model_list_has_no_failures_at(models, message, MessageLevel::Error, provider)
}

/// Valid when basic validation leaves every model in `models` without
/// warning messages. Members are validated at evaluation time.
pub fn model_list_has_no_warnings<M, T>(
    models: Vec<T>,
    message: &str,
    provider: Option<&ValidationProvider>,
) -> SimpleValidator<M>
where
    M: 'static,
    T: ResourceModel + 'static,
{
    model_list_has_no_failures_at(models, message, MessageLevel::Warning, provider)
}

fn model_list_has_no_failures_at<M, T>(
    models: Vec<T>,
    message: &str,
    level: MessageLevel,
    provider: Option<&ValidationProvider>,
) -> SimpleValidator<M>
where
    M: 'static,
    T: ResourceModel + 'static,
{
    let provider = provider.copied();
    let models = RefCell::new(models);
    SimpleValidator::new(message, level, move |_: &M| {
        let mut models = models.borrow_mut();
        models.iter_mut().all(|model| {
            model.validate(provider.as_ref());
            match level {
                MessageLevel::Error => model.error_messages().is_empty(),
                MessageLevel::Warning => model.warning_messages().is_empty(),
                MessageLevel::Info => model.info_messages().is_empty(),
            }
        })
    })
}

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;
