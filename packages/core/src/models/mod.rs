//! Typed Resource Models
//!
//! This module contains the model layer built over resource handles:
//!
//! - [`ResourceModel`] - Trait every typed model implements
//! - [`TypeDescriptor`] - Static accepted-type metadata per model type
//! - [`BaseResource`] - Plain model shape reading its own properties
//! - [`BasePage`] - Page shape delegating reads to its `jcr:content` child
//! - [`FileModel`] / [`FileType`] - File shape with typed content access
//! - [`ModelAdaptionError`] - Typed adaptation and lookup failures

mod base_resource;
mod descriptor;
mod error;
mod file;
mod model;
mod page;

pub use base_resource::BaseResource;
pub use descriptor::TypeDescriptor;
pub use error::ModelAdaptionError;
pub use file::{FileModel, FileType};
pub use model::ResourceModel;
pub use page::BasePage;
