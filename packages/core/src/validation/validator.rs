//! Validator contract and the closure-backed leaf validator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::ValidatorBundle;

/// Severity a failed validator reports at.
///
/// Selects which of the model's message lists receives the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    /// Issues that should not persist.
    Error,
    /// Issues that should be fixed but are allowed to persist.
    Warning,
    /// Information communicated back to the user.
    Info,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single pass/fail rule evaluated against a model.
///
/// Validators do not hold the model; evaluation receives it by reference,
/// so recording the resulting messages on the same model afterwards needs
/// no aliasing tricks.
pub trait ModelValidator<M> {
    /// Whether the model passes this rule.
    fn is_valid(&self, model: &M) -> bool;

    /// Message describing what is being validated.
    fn message(&self) -> String;

    /// Severity of a failure. Leaf validators with no level are skipped
    /// entirely during evaluation.
    fn level(&self) -> Option<MessageLevel>;

    /// The composite view of this validator, when it is a bundle.
    fn as_bundle(&self) -> Option<&ValidatorBundle<M>> {
        None
    }
}

/// Leaf validator backed by a predicate closure.
///
/// # Examples
///
/// ```rust
/// use contentmodel_core::validation::{MessageLevel, ModelValidator, SimpleValidator};
///
/// let validator: SimpleValidator<&str> = SimpleValidator::new(
///     "Value is configured.",
///     MessageLevel::Error,
///     |value: &&str| !value.is_empty(),
/// );
/// assert!(validator.is_valid(&"configured"));
/// assert!(!validator.is_valid(&""));
/// ```
pub struct SimpleValidator<M> {
    message: String,
    level: Option<MessageLevel>,
    predicate: Box<dyn Fn(&M) -> bool>,
}

impl<M> SimpleValidator<M> {
    /// Create a validator from a message, severity, and predicate.
    ///
    /// Passing `None` as the level produces a validator whose failures are
    /// never recorded.
    pub fn new(
        message: impl Into<String>,
        level: impl Into<Option<MessageLevel>>,
        predicate: impl Fn(&M) -> bool + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl<M> ModelValidator<M> for SimpleValidator<M> {
    fn is_valid(&self, model: &M) -> bool {
        (self.predicate)(model)
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn level(&self) -> Option<MessageLevel> {
        self.level
    }
}

impl<M> fmt::Debug for SimpleValidator<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleValidator")
            .field("message", &self.message)
            .field("level", &self.level)
            .finish()
    }
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;
