//! Model Adaptation Error Types
//!
//! All failures here are recoverable, typed lookup/adaptation failures
//! returned to the caller. Validation rule failures are never errors; they
//! accumulate as messages on the model instead.

use thiserror::Error;

/// Adaptation and lookup errors.
///
/// Each variant carries enough context (path, model name, reason) to
/// diagnose the failing adaptation without the surrounding call stack.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelAdaptionError {
    /// No node exists at the requested path, after overlay-prefix retries.
    #[error("Unable to adapt '{path}': {reason}")]
    ResourceNotFound { path: String, reason: String },

    /// Named child absent on the node and its `jcr:content` fallback.
    #[error("Unable to adapt '{child_name}' under '{parent_path}': {reason}")]
    ChildResourceNotFound {
        child_name: String,
        parent_path: String,
        reason: String,
    },

    /// Type tag mismatch or failed structural binding, after all fallbacks.
    #[error("Unable to adapt '{path}' to {model_name}: {reason}")]
    InvalidResourceType {
        path: String,
        model_name: String,
        reason: String,
    },

    /// Attempted to navigate above the tree root.
    #[error("Unable to retrieve parent of '{path}': Parent not found.")]
    NoParentResource { path: String },

    /// Ancestor walk exhausted the tree without a matching type.
    #[error("Unable to retrieve ancestor matching type {model_name} for {path}: No valid ancestor found.")]
    NoValidAncestor { path: String, model_name: String },

    /// File content property missing or unreadable.
    #[error("Unable to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },
}

impl ModelAdaptionError {
    /// Create a resource not found error with the default reason.
    pub fn resource_not_found(path: impl Into<String>) -> Self {
        Self::resource_not_found_with_reason(path, "Resource not found.")
    }

    /// Create a resource not found error with an explicit reason.
    pub fn resource_not_found_with_reason(
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ResourceNotFound {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a child not found error with the default reason.
    pub fn child_resource_not_found(
        child_name: impl Into<String>,
        parent_path: impl Into<String>,
    ) -> Self {
        Self::child_resource_not_found_with_reason(child_name, parent_path, "Child not found.")
    }

    /// Create a child not found error with an explicit reason.
    pub fn child_resource_not_found_with_reason(
        child_name: impl Into<String>,
        parent_path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ChildResourceNotFound {
            child_name: child_name.into(),
            parent_path: parent_path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid resource type error with the default reason.
    pub fn invalid_resource_type(path: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self::invalid_resource_type_with_reason(path, model_name, "Invalid resource type.")
    }

    /// Create an invalid resource type error with an explicit reason.
    pub fn invalid_resource_type_with_reason(
        path: impl Into<String>,
        model_name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidResourceType {
            path: path.into(),
            model_name: model_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a no parent error.
    pub fn no_parent_resource(path: impl Into<String>) -> Self {
        Self::NoParentResource { path: path.into() }
    }

    /// Create a no valid ancestor error.
    pub fn no_valid_ancestor(path: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self::NoValidAncestor {
            path: path.into(),
            model_name: model_name.into(),
        }
    }

    /// Create a file read error.
    pub fn file_read(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileReadError {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
