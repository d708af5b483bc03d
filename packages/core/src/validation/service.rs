//! Per-model-type validator registries.

use crate::validation::ModelValidator;

/// The two validator tiers of one validation service instance.
///
/// Basic validators always run; detailed validators run only when detailed
/// validation is requested explicitly.
pub struct ValidatorSet<M> {
    basic: Vec<Box<dyn ModelValidator<M>>>,
    detailed: Vec<Box<dyn ModelValidator<M>>>,
}

impl<M> ValidatorSet<M> {
    /// Register an always-run validator.
    pub fn add_basic_validator(&mut self, validator: impl ModelValidator<M> + 'static) {
        self.basic.push(Box::new(validator));
    }

    /// Register a validator that runs only during detailed validation.
    pub fn add_detailed_validator(&mut self, validator: impl ModelValidator<M> + 'static) {
        self.detailed.push(Box::new(validator));
    }

    /// Always-run validators in registration order.
    pub fn basic_validators(&self) -> &[Box<dyn ModelValidator<M>>] {
        &self.basic
    }

    /// On-demand validators in registration order.
    pub fn detailed_validators(&self) -> &[Box<dyn ModelValidator<M>>] {
        &self.detailed
    }

    /// Split into the owned basic and detailed lists.
    pub fn into_parts(self) -> (Vec<Box<dyn ModelValidator<M>>>, Vec<Box<dyn ModelValidator<M>>>) {
        (self.basic, self.detailed)
    }
}

impl<M> Default for ValidatorSet<M> {
    fn default() -> Self {
        Self {
            basic: Vec::new(),
            detailed: Vec::new(),
        }
    }
}

/// Validation service bound to one model type.
///
/// Implementations own a [`ValidatorSet`] and fill it through the two
/// registration hooks. The hooks are invoked by the validation provider at
/// most once per service instance, gated on the target list being empty, so
/// they must register a non-empty list (or none at all) and must not rely
/// on being called again.
///
/// # Examples
///
/// ```rust
/// use contentmodel_core::models::BaseResource;
/// use contentmodel_core::validation::{common, ModelValidationService, ValidatorSet};
///
/// #[derive(Default)]
/// struct WidgetValidationService {
///     validators: ValidatorSet<BaseResource>,
/// }
///
/// impl ModelValidationService<BaseResource> for WidgetValidationService {
///     fn validator_set(&self) -> &ValidatorSet<BaseResource> {
///         &self.validators
///     }
///
///     fn validator_set_mut(&mut self) -> &mut ValidatorSet<BaseResource> {
///         &mut self.validators
///     }
///
///     fn register_basic_validators(&mut self, _model: &BaseResource) {
///         self.validators.add_basic_validator(common::has_title());
///     }
///
///     fn register_detailed_validators(&mut self, _model: &BaseResource) {}
///
///     fn into_validator_set(self) -> ValidatorSet<BaseResource> {
///         self.validators
///     }
/// }
/// ```
pub trait ModelValidationService<M> {
    /// The registered validators.
    fn validator_set(&self) -> &ValidatorSet<M>;

    /// Mutable access for the registration hooks.
    fn validator_set_mut(&mut self) -> &mut ValidatorSet<M>;

    /// Hook registering the always-run validators for `model`.
    fn register_basic_validators(&mut self, model: &M);

    /// Hook registering the on-demand validators for `model`.
    fn register_detailed_validators(&mut self, model: &M);

    /// Consume the service, yielding its validator set.
    fn into_validator_set(self) -> ValidatorSet<M>
    where
        Self: Sized;
}

/// Validation service registering no validators.
///
/// The default for model types that declare no validation rules.
pub struct DefaultValidationService<M> {
    validators: ValidatorSet<M>,
}

impl<M> Default for DefaultValidationService<M> {
    fn default() -> Self {
        Self {
            validators: ValidatorSet::default(),
        }
    }
}

impl<M> ModelValidationService<M> for DefaultValidationService<M> {
    fn validator_set(&self) -> &ValidatorSet<M> {
        &self.validators
    }

    fn validator_set_mut(&mut self) -> &mut ValidatorSet<M> {
        &mut self.validators
    }

    fn register_basic_validators(&mut self, _model: &M) {}

    fn register_detailed_validators(&mut self, _model: &M) {}

    fn into_validator_set(self) -> ValidatorSet<M> {
        self.validators
    }
}
