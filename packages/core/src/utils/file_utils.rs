//! File model helpers.
//!
//! Adapting to a file model is stricter than plain adaptation: file type
//! correctness cannot be expressed through resource type tags alone, so a
//! second pass checks the file name extension, the MIME type against the
//! file type's accepted set, and that basic validation reports no errors.

use std::rc::Rc;

use tracing::trace;

use crate::models::{FileModel, ModelAdaptionError, ResourceModel};
use crate::repository::{ContentRepository, Resource};
use crate::services::ValidationProvider;
use crate::utils::model_utils;

const BYTES_PER_UNIT: u64 = 1024;

/// Format a byte count as a readable size (bytes, KB, MB, GB, TB).
///
/// Unit steps divide by 1024 and truncate.
///
/// # Examples
///
/// ```rust
/// use contentmodel_core::utils::file_utils::readable_file_size;
///
/// assert_eq!(readable_file_size(38), "38 bytes");
/// assert_eq!(readable_file_size(2048), "2 KB");
/// ```
pub fn readable_file_size(size: u64) -> String {
    let mut size = size;
    for unit in ["bytes", "KB", "MB", "GB"] {
        if size < BYTES_PER_UNIT {
            return format!("{size} {unit}");
        }
        size /= BYTES_PER_UNIT;
    }
    format!("{size} TB")
}

/// Adapt `resource` to the file model type `T`.
///
/// Beyond [`model_utils::adapt_to`], the file name must end with the file
/// type's extension, the MIME type must be in the file type's readable set,
/// and a basic validation run must leave the error list empty (skipped when
/// no provider is supplied).
///
/// # Errors
///
/// Returns [`ModelAdaptionError::InvalidResourceType`] describing the first
/// failing check.
pub fn adapt_to_file_type<T: FileModel>(
    resource: &Resource,
    provider: Option<&ValidationProvider>,
) -> Result<T, ModelAdaptionError> {
    let mut file: T = model_utils::adapt_to(resource)?;

    let extension = file.file_type().extension().to_string();
    if !file.name().ends_with(&extension) {
        return Err(ModelAdaptionError::invalid_resource_type_with_reason(
            file.path(),
            T::DESCRIPTOR.name,
            format!("File did not have extension `{extension}`."),
        ));
    }

    let mime_type = file.mime_type();
    if !file.file_type().readable_content_types().contains(&mime_type) {
        return Err(ModelAdaptionError::invalid_resource_type_with_reason(
            file.path(),
            T::DESCRIPTOR.name,
            format!("File mimeType '{mime_type}' did not match any expected types."),
        ));
    }

    file.validate(provider);
    if !file.error_messages().is_empty() {
        return Err(ModelAdaptionError::invalid_resource_type_with_reason(
            file.path(),
            T::DESCRIPTOR.name,
            "File failed validation.",
        ));
    }

    Ok(file)
}

/// Resource at `path`, adapted to the file model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ResourceNotFound`] when the path does not
/// resolve, or [`ModelAdaptionError::InvalidResourceType`] when any file
/// check fails.
pub fn resource_as_file_type<T: FileModel>(
    path: &str,
    repository: &Rc<dyn ContentRepository>,
    provider: Option<&ValidationProvider>,
) -> Result<T, ModelAdaptionError> {
    let base = model_utils::resource_as_base_resource(path, repository)?;
    adapt_to_file_type(base.resource(), provider)
}

/// Named child of `resource`, adapted to the file model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ChildResourceNotFound`] when the child is
/// missing, or [`ModelAdaptionError::InvalidResourceType`] when any file
/// check fails.
pub fn child_as_file_type<T: FileModel>(
    child_name: &str,
    resource: &Resource,
    provider: Option<&ValidationProvider>,
) -> Result<T, ModelAdaptionError> {
    let child = resource.child(child_name)?;
    adapt_to_file_type(&child, provider)
}

/// All children of `resource` that pass the file checks for `T`. Children
/// that fail are omitted.
pub fn children_of_file_type<T: FileModel>(
    resource: &Resource,
    provider: Option<&ValidationProvider>,
) -> Vec<T> {
    let mut children = Vec::new();
    for child in resource.children() {
        match adapt_to_file_type::<T>(&child, provider) {
            Ok(file) => children.push(file),
            Err(_) => trace!(
                path = child.path(),
                model = T::DESCRIPTOR.name,
                "Child resource did not pass file checks"
            ),
        }
    }
    children
}

#[cfg(test)]
#[path = "file_utils_test.rs"]
mod file_utils_test;
