//! Static model type metadata.

/// Metadata attached to a model type, read at adaptation time.
///
/// Built as a `const` on each model type, so the accepted tag set lives in
/// static storage and never needs runtime reflection.
///
/// # Examples
///
/// ```rust
/// use contentmodel_core::models::TypeDescriptor;
///
/// const DESCRIPTOR: TypeDescriptor =
///     TypeDescriptor::new("Widget", &["components/widget"])
///         .with_doc_paths(&["/content/guides/widget"]);
///
/// assert_eq!(DESCRIPTOR.name, "Widget");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Short model name used in diagnostics.
    pub name: &'static str,

    /// Resource type tags this model accepts.
    ///
    /// [`RESOURCE_TYPE_DEFAULT`](crate::repository::RESOURCE_TYPE_DEFAULT)
    /// matches any resource.
    pub resource_types: &'static [&'static str],

    /// Documentation references. Irrelevant to adaptation behavior.
    pub doc_paths: &'static [&'static str],
}

impl TypeDescriptor {
    /// Create a descriptor with no documentation references.
    pub const fn new(name: &'static str, resource_types: &'static [&'static str]) -> Self {
        Self {
            name,
            resource_types,
            doc_paths: &[],
        }
    }

    /// Attach documentation references.
    pub const fn with_doc_paths(self, doc_paths: &'static [&'static str]) -> Self {
        Self {
            name: self.name,
            resource_types: self.resource_types,
            doc_paths,
        }
    }

    /// Whether `tag` is in the accepted resource type set.
    pub fn accepts(&self, tag: &str) -> bool {
        !tag.is_empty() && self.resource_types.iter().any(|accepted| *accepted == tag)
    }
}
