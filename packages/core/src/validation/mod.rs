//! Validation Framework
//!
//! Declarative validation attached to model types:
//!
//! - [`ModelValidator`] - A single pass/fail rule with a severity
//! - [`SimpleValidator`] - Closure-backed leaf validator
//! - [`ValidatorBundle`] - Composite validator with AND/OR semantics
//! - [`ModelValidationService`] - Per-model-type validator registry
//! - [`ValidationMessages`] - Deduplicating ordered message lists
//! - [`common`] - Reusable validator factories
//!
//! Validation failures are never errors: they accumulate as messages on the
//! model and are inspected through its message list accessors.

pub mod common;

mod bundle;
mod messages;
mod service;
mod validator;

pub use bundle::ValidatorBundle;
pub use messages::{MessageList, ValidationMessages};
pub use service::{DefaultValidationService, ModelValidationService, ValidatorSet};
pub use validator::{MessageLevel, ModelValidator, SimpleValidator};
