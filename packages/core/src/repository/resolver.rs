//! Content repository lookup trait.
//!
//! Implementations back [`Resource`](super::Resource) handles with actual
//! node data. The trait is object safe so handles can share one repository
//! through `Rc<dyn ContentRepository>`.

use serde_json::{Map, Value};

/// Path-addressed access to the content tree.
///
/// Paths are absolute, slash-delimited, with `/` naming the root. Lookups
/// return property snapshots; a handle created from a snapshot does not
/// observe later repository writes.
pub trait ContentRepository {
    /// Properties of the node at `path`, or `None` when no node exists there.
    fn properties_at(&self, path: &str) -> Option<Map<String, Value>>;

    /// Names of the node's children in repository-native order.
    ///
    /// Empty when the node has no children or does not exist.
    fn child_names(&self, path: &str) -> Vec<String>;
}
