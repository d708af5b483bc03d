//! Model adaptation helpers.
//!
//! Free functions for viewing resources as typed models. Adaptation checks
//! the target type's accepted resource types (including super type chains
//! and the overlay mount fallback), falls back to the `jcr:content` child,
//! and reports failures as [`ModelAdaptionError`] values.
//!
//! Batch helpers (`children_of_type`, `resources_as_type`, descendants)
//! swallow individual failures and omit the failing items instead of
//! aborting.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::models::{BaseResource, ModelAdaptionError, ResourceModel};
use crate::repository::{
    ContentRepository, Resource, JCR_CONTENT, NT_FOLDER, PREFIX_APPS, PREFIX_LIBS,
    RESOURCE_TYPE_DEFAULT, RESOURCE_TYPE_SYNTHETIC,
};

/// Adapt `resource` to the model type `T`.
///
/// The resource type must match one of `T`'s accepted types (directly,
/// through its structural type, or through its super type chain), then `T`
/// binds structurally. When either step fails, binding is retried once on
/// the `jcr:content` child, skipping the type re-check.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::InvalidResourceType`] when the type check
/// or binding fails after all fallbacks, carrying the resource path and the
/// target model name.
pub fn adapt_to<T: ResourceModel>(resource: &Resource) -> Result<T, ModelAdaptionError> {
    if is_valid_resource_type::<T>(resource) {
        if let Some(model) = T::bind(resource.clone()) {
            return Ok(model);
        }
        debug!(
            path = resource.path(),
            model = T::DESCRIPTOR.name,
            "Structural binding yielded nothing usable, checking jcr:content resource"
        );
    } else {
        trace!(
            path = resource.path(),
            model = T::DESCRIPTOR.name,
            "Resource type mismatch, attempting to adapt jcr:content resource"
        );
    }

    match resource.child(JCR_CONTENT) {
        Ok(content) => {
            if let Some(model) = T::bind(content) {
                return Ok(model);
            }
            trace!(
                path = resource.path(),
                model = T::DESCRIPTOR.name,
                "Unable to bind jcr:content resource"
            );
        }
        Err(_) => {
            trace!(
                path = resource.path(),
                model = T::DESCRIPTOR.name,
                "No jcr:content resource to fall back to"
            );
        }
    }

    Err(ModelAdaptionError::invalid_resource_type(
        resource.path(),
        T::DESCRIPTOR.name,
    ))
}

/// Adapt `resource` to a [`BaseResource`] model. Never fails.
pub fn adapt_to_base_resource(resource: &Resource) -> BaseResource {
    BaseResource::from_resource(resource.clone())
}

/// Named child of `resource` as a [`BaseResource`].
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ChildResourceNotFound`] when the child is
/// absent on the node and its `jcr:content` fallback.
pub fn child_as_base_resource(
    child_name: &str,
    resource: &Resource,
) -> Result<BaseResource, ModelAdaptionError> {
    resource.child(child_name).map(BaseResource::from_resource)
}

/// Named child of `resource`, adapted to the model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ChildResourceNotFound`] when the child is
/// missing, or [`ModelAdaptionError::InvalidResourceType`] when it cannot be
/// adapted.
pub fn child_as_type<T: ResourceModel>(
    child_name: &str,
    resource: &Resource,
) -> Result<T, ModelAdaptionError> {
    let child = resource.child(child_name)?;
    adapt_to(&child)
}

/// All children of `resource` as [`BaseResource`] models.
pub fn children_as_base_resources(resource: &Resource) -> Vec<BaseResource> {
    resource
        .children()
        .iter()
        .map(adapt_to_base_resource)
        .collect()
}

/// All children of `resource` that adapt to `T`. Children that fail
/// adaptation are omitted.
pub fn children_of_type<T: ResourceModel>(resource: &Resource) -> Vec<T> {
    let mut children = Vec::new();
    for child in resource.children() {
        match adapt_to::<T>(&child) {
            Ok(model) => children.push(model),
            Err(_) => debug!(
                path = child.path(),
                model = T::DESCRIPTOR.name,
                parent = resource.path(),
                "Unable to adapt child resource while getting children"
            ),
        }
    }
    children
}

/// Children of `resource` that adapt to `T` and whose name is in
/// `allowed_child_names`.
pub fn filtered_children_of_type<T: ResourceModel>(
    resource: &Resource,
    allowed_child_names: &[&str],
) -> Vec<T> {
    children_of_type(resource)
        .into_iter()
        .filter(|child: &T| allowed_child_names.contains(&child.name()))
        .collect()
}

/// Resource at `path` as a [`BaseResource`].
///
/// Synthetic placeholder nodes count as not found; the lookup is then
/// retried under the `/apps` and `/libs` overlay mounts. Mount-relative
/// paths (no leading slash) resolve through the same overlay retries.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ResourceNotFound`] when no real node backs
/// the path after the retries, or when `path` is empty.
pub fn resource_as_base_resource(
    path: &str,
    repository: &Rc<dyn ContentRepository>,
) -> Result<BaseResource, ModelAdaptionError> {
    if path.is_empty() {
        return Err(ModelAdaptionError::resource_not_found_with_reason(
            path,
            "Resource path not specified.",
        ));
    }

    if path.starts_with('/') {
        match Resource::open(repository.clone(), path) {
            Some(resource) if resource.resource_type() != RESOURCE_TYPE_SYNTHETIC => {
                return Ok(BaseResource::from_resource(resource));
            }
            Some(_) => trace!(path, "Synthetic placeholder resource, retrying under overlay mounts"),
            None => return Err(ModelAdaptionError::resource_not_found(path)),
        }
    }

    for prefix in [PREFIX_APPS, PREFIX_LIBS] {
        let candidate = format!("{prefix}{}", path.trim_start_matches('/'));
        if let Some(resource) = Resource::open(repository.clone(), &candidate) {
            if resource.resource_type() != RESOURCE_TYPE_SYNTHETIC {
                return Ok(BaseResource::from_resource(resource));
            }
        }
    }

    Err(ModelAdaptionError::resource_not_found(path))
}

/// Resource at `path`, adapted to the model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::ResourceNotFound`] when the path does not
/// resolve, or [`ModelAdaptionError::InvalidResourceType`] when the node
/// cannot be adapted.
pub fn resource_as_type<T: ResourceModel>(
    path: &str,
    repository: &Rc<dyn ContentRepository>,
) -> Result<T, ModelAdaptionError> {
    let base = resource_as_base_resource(path, repository)?;
    adapt_to(base.resource())
}

/// Resources at `paths`, adapted to `T`. Paths that fail to resolve or
/// adapt are omitted.
pub fn resources_as_type<T: ResourceModel>(
    paths: &[&str],
    repository: &Rc<dyn ContentRepository>,
) -> Vec<T> {
    let mut models = Vec::new();
    for &path in paths {
        match resource_as_type::<T>(path, repository) {
            Ok(model) => models.push(model),
            Err(err) => warn!(
                path,
                model = T::DESCRIPTOR.name,
                %err,
                "Unable to adapt resource while adapting list of paths"
            ),
        }
    }
    models
}

/// Parent of `resource` as a [`BaseResource`].
///
/// # Errors
///
/// Returns [`ModelAdaptionError::NoParentResource`] at the tree root.
pub fn parent_as_base_resource(resource: &Resource) -> Result<BaseResource, ModelAdaptionError> {
    resource.parent().map(BaseResource::from_resource)
}

/// Parent of `resource`, adapted to the model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::NoParentResource`] at the tree root, or
/// [`ModelAdaptionError::InvalidResourceType`] when the parent cannot be
/// adapted.
pub fn parent_as_type<T: ResourceModel>(resource: &Resource) -> Result<T, ModelAdaptionError> {
    let parent = resource.parent()?;
    adapt_to(&parent)
}

/// First ancestor of `resource` that adapts to the model type `T`.
///
/// # Errors
///
/// Returns [`ModelAdaptionError::NoValidAncestor`] when the ancestry ends
/// without a match.
pub fn first_ancestor_of_type<T: ResourceModel>(
    resource: &Resource,
) -> Result<T, ModelAdaptionError> {
    let mut current = resource.clone();
    loop {
        match parent_as_type::<T>(&current) {
            Ok(model) => return Ok(model),
            Err(ModelAdaptionError::NoParentResource { .. }) => {
                return Err(ModelAdaptionError::no_valid_ancestor(
                    resource.path(),
                    T::DESCRIPTOR.name,
                ));
            }
            Err(_) => match current.parent() {
                Ok(parent) => current = parent,
                Err(_) => {
                    return Err(ModelAdaptionError::no_valid_ancestor(
                        resource.path(),
                        T::DESCRIPTOR.name,
                    ));
                }
            },
        }
    }
}

/// All descendants of `resource` that adapt to `T`, depth first.
/// Descendants that fail adaptation are omitted.
pub fn all_descendants_of_type<T: ResourceModel>(resource: &Resource) -> Vec<T> {
    let mut descendants = children_of_type(resource);
    for child in resource.children() {
        descendants.extend(all_descendants_of_type(&child));
    }
    descendants
}

/// Whether `resource` matches the accepted resource types of `T`.
///
/// Matches the sentinel default type, the resolved type tag, the structural
/// type, or any link of the super type chain. A generic container under
/// `/apps/` defers to its `/libs/` twin for the check when one exists.
pub fn is_valid_resource_type<T: ResourceModel>(resource: &Resource) -> bool {
    let descriptor = T::DESCRIPTOR;
    let effective = overlay_base_twin(resource).unwrap_or_else(|| resource.clone());

    if descriptor.accepts(RESOURCE_TYPE_DEFAULT) {
        return true;
    }
    if descriptor.accepts(&effective.resource_type()) {
        return true;
    }
    if descriptor.accepts(&effective.primary_type()) {
        return true;
    }
    matches_super_type_chain(&effective, descriptor.resource_types)
}

/// The `/libs/` twin of a generic container under `/apps/`, when present.
fn overlay_base_twin(resource: &Resource) -> Option<Resource> {
    if !resource.path().starts_with(PREFIX_APPS) || resource.resource_type() != NT_FOLDER {
        return None;
    }
    let libs_path = resource.path().replacen(PREFIX_APPS, PREFIX_LIBS, 1);
    match resource_as_base_resource(&libs_path, resource.repository()) {
        Ok(base) => Some(base.into_resource()),
        Err(_) => {
            trace!(
                path = resource.path(),
                "No base overlay twin found for generic container"
            );
            None
        }
    }
}

/// Walks the super type chain of `resource`'s type, looking for an accepted
/// tag. Broken links end the walk as "no match"; a visited set guards
/// against cyclic chains.
fn matches_super_type_chain(resource: &Resource, accepted: &[&str]) -> bool {
    let type_tag = resource.resource_type();
    if type_tag.is_empty() {
        return false;
    }
    let Ok(type_resource) = resource_as_base_resource(&type_tag, resource.repository()) else {
        return false;
    };

    let mut current = type_resource.into_resource();
    let mut visited: HashSet<String> = HashSet::new();
    loop {
        let super_type = current.resource_super_type();
        let accepted_here = accepted
            .iter()
            .any(|tag| *tag == resource_type_path(current.path()))
            || (!super_type.is_empty() && accepted.iter().any(|tag| *tag == super_type));
        if accepted_here {
            return true;
        }

        if !visited.insert(current.path().to_string()) {
            warn!(
                path = current.path(),
                "Cyclic super type chain, treating as no match"
            );
            return false;
        }
        if super_type.is_empty() {
            return false;
        }
        match resource_as_base_resource(&super_type, resource.repository()) {
            Ok(next) => current = next.into_resource(),
            Err(_) => {
                debug!(
                    path = resource.path(),
                    %super_type,
                    "Super type resource not found, ending chain walk"
                );
                return false;
            }
        }
    }
}

/// A type resource's path with its overlay mount prefix stripped.
fn resource_type_path(path: &str) -> &str {
    path.strip_prefix(PREFIX_APPS)
        .or_else(|| path.strip_prefix(PREFIX_LIBS))
        .unwrap_or(path)
}

#[cfg(test)]
#[path = "model_utils_test.rs"]
mod model_utils_test;
