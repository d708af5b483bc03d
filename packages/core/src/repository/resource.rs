//! Resource handle.
//!
//! A [`Resource`] identifies one node in the content tree and snapshots its
//! properties at lookup time. Navigation (parent, children, named child with
//! the `jcr:content` fall-through) goes back to the shared
//! [`ContentRepository`].

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::models::ModelAdaptionError;
use crate::repository::{
    ContentRepository, JCR_CONTENT, JCR_PRIMARY_TYPE, PROPERTY_RESOURCE_SUPER_TYPE,
    PROPERTY_RESOURCE_TYPE,
};

/// Handle to a single node in the content tree.
///
/// Identity is the absolute path. Properties are a snapshot taken when the
/// handle was opened. Cloning a handle clones the snapshot and shares the
/// repository.
#[derive(Clone)]
pub struct Resource {
    repository: Rc<dyn ContentRepository>,
    path: String,
    properties: Map<String, Value>,
}

impl Resource {
    /// Open a handle to the node at `path`, or `None` when no node exists.
    pub fn open(repository: Rc<dyn ContentRepository>, path: &str) -> Option<Self> {
        let properties = repository.properties_at(path)?;
        Some(Self {
            repository,
            path: path.to_string(),
            properties,
        })
    }

    /// Absolute path of this node.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Node name: the last path segment, empty at the root.
    pub fn name(&self) -> &str {
        if self.path == "/" {
            return "";
        }
        self.path.rsplit('/').next().unwrap_or("")
    }

    /// Property snapshot of this node.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Property value for `key`, if present.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// String property value for `key`, if present and string-valued.
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Repository this handle reads from.
    pub fn repository(&self) -> &Rc<dyn ContentRepository> {
        &self.repository
    }

    /// Parent node handle.
    ///
    /// # Errors
    ///
    /// Returns [`ModelAdaptionError::NoParentResource`] at the root.
    pub fn parent(&self) -> Result<Resource, ModelAdaptionError> {
        if self.path == "/" {
            return Err(ModelAdaptionError::no_parent_resource(&self.path));
        }
        let parent_path = match self.path.rfind('/') {
            Some(0) => "/",
            Some(index) => &self.path[..index],
            None => return Err(ModelAdaptionError::no_parent_resource(&self.path)),
        };
        Resource::open(self.repository.clone(), parent_path)
            .ok_or_else(|| ModelAdaptionError::no_parent_resource(&self.path))
    }

    /// Named child handle.
    ///
    /// When no direct child matches, the lookup is retried under the
    /// `jcr:content` child before failing, so page content children are
    /// reachable from the page node.
    ///
    /// # Errors
    ///
    /// Returns [`ModelAdaptionError::ChildResourceNotFound`] when the child
    /// is absent on both the node and its `jcr:content` fallback, or when
    /// `name` is empty.
    pub fn child(&self, name: &str) -> Result<Resource, ModelAdaptionError> {
        if name.is_empty() {
            return Err(ModelAdaptionError::child_resource_not_found_with_reason(
                name,
                &self.path,
                "Child name not specified.",
            ));
        }
        if let Some(child) = self.direct_child(name) {
            return Ok(child);
        }
        if let Some(content) = self.direct_child(JCR_CONTENT) {
            if let Ok(child) = content.child(name) {
                return Ok(child);
            }
        }
        Err(ModelAdaptionError::child_resource_not_found(
            name, &self.path,
        ))
    }

    /// All children in repository-native order, snapshot at call time.
    pub fn children(&self) -> Vec<Resource> {
        self.repository
            .child_names(&self.path)
            .iter()
            .filter_map(|name| self.direct_child(name))
            .collect()
    }

    /// Resolved resource type tag.
    ///
    /// Precedence: explicit `repo:resourceType` property, structural
    /// `jcr:primaryType`, `repo:resourceSuperType` pointer, empty string.
    pub fn resource_type(&self) -> String {
        for key in [
            PROPERTY_RESOURCE_TYPE,
            JCR_PRIMARY_TYPE,
            PROPERTY_RESOURCE_SUPER_TYPE,
        ] {
            if let Some(value) = self.string_property(key) {
                if !value.is_empty() {
                    return value.to_string();
                }
            }
        }
        String::new()
    }

    /// Structural `jcr:primaryType` value, or empty string.
    pub fn primary_type(&self) -> String {
        self.string_property(JCR_PRIMARY_TYPE)
            .unwrap_or_default()
            .to_string()
    }

    /// `repo:resourceSuperType` pointer, or empty string.
    pub fn resource_super_type(&self) -> String {
        self.string_property(PROPERTY_RESOURCE_SUPER_TYPE)
            .unwrap_or_default()
            .to_string()
    }

    fn direct_child(&self, name: &str) -> Option<Resource> {
        let child_path = if self.path == "/" {
            format!("/{name}")
        } else {
            format!("{}/{}", self.path, name)
        };
        Resource::open(self.repository.clone(), &child_path)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.path)
            .field("properties", &self.properties)
            .finish()
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.properties == other.properties
    }
}

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;
