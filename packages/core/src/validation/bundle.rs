//! Composite validator.

use crate::validation::{MessageLevel, ModelValidator};

/// Validator holding an ordered set of child validators.
///
/// Validity is computed over the children with short-circuit evaluation:
/// under AND semantics the first failing child decides, under OR semantics
/// the first passing child decides. An empty AND bundle is vacuously valid;
/// an empty OR bundle is invalid.
///
/// When a bundle fails, only its own bundle message is recorded; the child
/// validators' messages are never surfaced individually.
///
/// # Examples
///
/// ```rust
/// use contentmodel_core::validation::{
///     MessageLevel, ModelValidator, SimpleValidator, ValidatorBundle,
/// };
///
/// let mut bundle: ValidatorBundle<()> =
///     ValidatorBundle::new("Has required parts.", MessageLevel::Error, true);
/// bundle.add_validator(SimpleValidator::new("Part one.", MessageLevel::Error, |_| true));
/// bundle.add_validator(SimpleValidator::new("Part two.", MessageLevel::Error, |_| false));
///
/// assert!(!bundle.is_valid(&()));
/// assert_eq!(bundle.bundle_message(), "Has required parts.");
/// ```
pub struct ValidatorBundle<M> {
    bundle_message: String,
    level: Option<MessageLevel>,
    all_must_be_true: bool,
    validators: Vec<Box<dyn ModelValidator<M>>>,
}

impl<M> ValidatorBundle<M> {
    /// Create an empty bundle.
    ///
    /// `all_must_be_true` selects AND semantics; `false` selects OR.
    pub fn new(
        bundle_message: impl Into<String>,
        level: impl Into<Option<MessageLevel>>,
        all_must_be_true: bool,
    ) -> Self {
        Self {
            bundle_message: bundle_message.into(),
            level: level.into(),
            all_must_be_true,
            validators: Vec::new(),
        }
    }

    /// Add a validator to the bundle.
    pub fn add_validator(&mut self, validator: impl ModelValidator<M> + 'static) {
        self.validators.push(Box::new(validator));
    }

    /// Add a list of already boxed validators to the bundle.
    pub fn add_all_validators(&mut self, validators: Vec<Box<dyn ModelValidator<M>>>) {
        self.validators.extend(validators);
    }

    /// Message describing the whole bundle's intent.
    pub fn bundle_message(&self) -> &str {
        &self.bundle_message
    }

    /// Whether every child must pass, or just one.
    pub fn is_all_must_be_true(&self) -> bool {
        self.all_must_be_true
    }

    /// Child validators in registration order.
    pub fn validators(&self) -> &[Box<dyn ModelValidator<M>>] {
        &self.validators
    }
}

impl<M> ModelValidator<M> for ValidatorBundle<M> {
    fn is_valid(&self, model: &M) -> bool {
        for validator in &self.validators {
            if self.all_must_be_true && !validator.is_valid(model) {
                return false;
            }
            if !self.all_must_be_true && validator.is_valid(model) {
                return true;
            }
        }
        self.all_must_be_true
    }

    fn message(&self) -> String {
        if self.all_must_be_true {
            "All of the following are true:".to_string()
        } else {
            "One of the following is true:".to_string()
        }
    }

    fn level(&self) -> Option<MessageLevel> {
        self.level
    }

    fn as_bundle(&self) -> Option<&ValidatorBundle<M>> {
        Some(self)
    }
}

#[cfg(test)]
#[path = "bundle_test.rs"]
mod bundle_test;
