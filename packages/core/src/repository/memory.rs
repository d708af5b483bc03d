//! In-memory content repository.
//!
//! Reference [`ContentRepository`] implementation backed by a path-keyed node
//! map. Used by the test suites and by embedders that have no external
//! repository to connect to. Child order is insertion order, matching the
//! repository-native ordering contract.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::repository::ContentRepository;

/// A single stored node: its properties plus ordered child names.
#[derive(Debug, Default, Clone)]
struct NodeRecord {
    properties: Map<String, Value>,
    children: Vec<String>,
}

/// In-memory content tree.
///
/// Nodes are created with [`put`](MemoryRepository::put); missing ancestors
/// are created as empty nodes on the way down. Interior mutability lets a
/// shared `Rc<MemoryRepository>` keep accepting writes while handles read
/// from it, which fits the single-threaded, request-scoped execution model.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use contentmodel_core::repository::{MemoryRepository, Resource};
/// use serde_json::json;
///
/// let repository = Rc::new(MemoryRepository::new());
/// repository.put("/content/page", json!({"jcr:title": "Page"}));
///
/// let resource = Resource::open(repository.handle(), "/content/page").unwrap();
/// assert_eq!(resource.name(), "page");
/// ```
#[derive(Debug)]
pub struct MemoryRepository {
    nodes: RefCell<HashMap<String, NodeRecord>>,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRepository {
    /// Create an empty repository containing only the root node.
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert("/".to_string(), NodeRecord::default());
        Self {
            nodes: RefCell::new(nodes),
        }
    }

    /// Create or replace the node at `path` with the given properties.
    ///
    /// `properties` must be a JSON object; any other value stores an empty
    /// property map. Missing ancestors are created as empty nodes. Replacing
    /// an existing node keeps its children.
    ///
    /// # Panics
    ///
    /// Panics when `path` is not absolute.
    pub fn put(&self, path: &str, properties: Value) {
        assert!(
            path.starts_with('/') && path != "/",
            "node path must be absolute and below the root: {path}"
        );

        let properties = match properties {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut nodes = self.nodes.borrow_mut();
        let mut current = String::new();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            let parent = if current.is_empty() { "/" } else { &current };
            let parent_record = nodes.entry(parent.to_string()).or_default();
            if !parent_record.children.iter().any(|c| c == segment) {
                parent_record.children.push(segment.to_string());
            }

            current.push('/');
            current.push_str(segment);
            nodes.entry(current.clone()).or_default();
        }

        if let Some(record) = nodes.get_mut(path) {
            record.properties = properties;
        }
    }

    /// Remove the node at `path` and its entire subtree.
    pub fn remove(&self, path: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let descendant_prefix = format!("{}/", path.trim_end_matches('/'));
        nodes.retain(|p, _| p != path && !p.starts_with(&descendant_prefix));

        if let Some((parent, name)) = split_parent(path) {
            if let Some(record) = nodes.get_mut(parent) {
                record.children.retain(|c| c != name);
            }
        }
    }

    /// This repository as a shared trait handle for [`Resource`] lookups.
    ///
    /// [`Resource`]: crate::repository::Resource
    pub fn handle(self: &Rc<Self>) -> Rc<dyn ContentRepository> {
        self.clone()
    }
}

impl ContentRepository for MemoryRepository {
    fn properties_at(&self, path: &str) -> Option<Map<String, Value>> {
        self.nodes
            .borrow()
            .get(path)
            .map(|record| record.properties.clone())
    }

    fn child_names(&self, path: &str) -> Vec<String> {
        self.nodes
            .borrow()
            .get(path)
            .map(|record| record.children.clone())
            .unwrap_or_default()
    }
}

/// Splits an absolute path into parent path and node name.
fn split_parent(path: &str) -> Option<(&str, &str)> {
    if path == "/" {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some(("/", &path[1..])),
        Some(index) => Some((&path[..index], &path[index + 1..])),
        None => None,
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;
