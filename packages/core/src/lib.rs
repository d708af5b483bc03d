//! ContentModel Core Adaptation and Validation Layer
//!
//! This crate lets application code treat generic content tree nodes as
//! strongly typed models, with a declarative validation framework attached
//! to those models.
//!
//! # Architecture
//!
//! - **Repository boundary**: node storage lives behind the
//!   [`repository::ContentRepository`] trait; handles snapshot properties
//!   at lookup time
//! - **Typed models**: [`models::ResourceModel`] implementations declare
//!   their accepted resource types statically and bind structurally
//! - **Adaptation**: [`utils::model_utils`] resolves type compatibility
//!   (super type chains, `jcr:content` fallback, overlay mounts) and
//!   constructs models
//! - **Validation**: registered per model type, evaluated in basic and
//!   detailed stages, accumulated as deduplicated messages on the model
//!
//! Execution is single threaded and request scoped: one adaptation plus
//! validation pass runs to completion on the calling thread, and instances
//! are not shared across adaptations.
//!
//! # Modules
//!
//! - [`repository`] - Content repository boundary and resource handles
//! - [`models`] - Typed model trait, built-in model shapes, adaptation errors
//! - [`validation`] - Validators, bundles, services, message lists
//! - [`services`] - Validation provider engine
//! - [`utils`] - Adaptation and file helpers

pub mod models;
pub mod repository;
pub mod services;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use models::*;
pub use repository::*;
pub use services::*;
pub use validation::*;
