//! Content Repository Boundary
//!
//! This module defines the boundary to the hierarchical content repository:
//!
//! - [`ContentRepository`] - Trait for path-addressed node lookup
//! - [`MemoryRepository`] - In-memory reference implementation
//! - [`Resource`] - Handle to a single node in the content tree
//!
//! The repository itself (storage, persistence, permissions) lives behind the
//! [`ContentRepository`] trait. Everything above it works with [`Resource`]
//! handles that snapshot a node's properties at lookup time.

mod memory;
mod resolver;
mod resource;

pub use memory::MemoryRepository;
pub use resolver::ContentRepository;
pub use resource::Resource;

/// Child node carrying page-level content for its parent.
pub const JCR_CONTENT: &str = "jcr:content";

/// Display title property.
pub const JCR_TITLE: &str = "jcr:title";

/// Description property.
pub const JCR_DESCRIPTION: &str = "jcr:description";

/// Structural node type property.
pub const JCR_PRIMARY_TYPE: &str = "jcr:primaryType";

/// Creation timestamp property (RFC 3339 string).
pub const JCR_CREATED: &str = "jcr:created";

/// Last modification timestamp property (RFC 3339 string).
pub const JCR_LAST_MODIFIED: &str = "jcr:lastModified";

/// Binary content property of a file node's content child.
pub const JCR_DATA: &str = "jcr:data";

/// MIME type property of a file node's content child.
pub const JCR_MIMETYPE: &str = "jcr:mimeType";

/// Explicit resource type override property.
pub const PROPERTY_RESOURCE_TYPE: &str = "repo:resourceType";

/// Super type pointer property, names the resource type this one extends.
pub const PROPERTY_RESOURCE_SUPER_TYPE: &str = "repo:resourceSuperType";

/// Structural type of generic unstructured nodes.
pub const NT_UNSTRUCTURED: &str = "nt:unstructured";

/// Structural type of generic container nodes.
pub const NT_FOLDER: &str = "nt:folder";

/// Structural type of file nodes.
pub const NT_FILE: &str = "nt:file";

/// Sentinel resource type that matches any resource.
pub const RESOURCE_TYPE_DEFAULT: &str = "repo/default";

/// Marker type of synthetic placeholder nodes, treated as not found.
pub const RESOURCE_TYPE_SYNTHETIC: &str = "repo:synthetic";

/// Customization overlay mount prefix.
pub const PREFIX_APPS: &str = "/apps/";

/// Base overlay mount prefix.
pub const PREFIX_LIBS: &str = "/libs/";
