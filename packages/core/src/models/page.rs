//! Page-shaped resource model.
//!
//! Pages store their metadata on a `jcr:content` child rather than the page
//! node itself. [`BasePage`] hides that convention: it can be adapted from
//! either the page node or its content child, and its property reads
//! transparently use the content child when one exists.

use crate::models::{ResourceModel, TypeDescriptor};
use crate::repository::{Resource, JCR_CONTENT, RESOURCE_TYPE_DEFAULT};
use crate::validation::{DefaultValidationService, ValidationMessages};
use serde_json::{Map, Value};

/// Model over a page node and its optional `jcr:content` child.
///
/// `name()` and `path()` always describe the page root, even when the model
/// was bound from the content child. Property reads prefer the content
/// child and fall back to the root's own properties.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use contentmodel_core::models::{BasePage, ResourceModel};
/// use contentmodel_core::repository::{MemoryRepository, Resource};
/// use contentmodel_core::utils::model_utils;
/// use serde_json::json;
///
/// let repository = Rc::new(MemoryRepository::new());
/// repository.put("/content/page", json!({}));
/// repository.put("/content/page/jcr:content", json!({"jcr:title": "Page Title"}));
///
/// let resource = Resource::open(repository.handle(), "/content/page").unwrap();
/// let page: BasePage = model_utils::adapt_to(&resource).unwrap();
/// assert_eq!(page.title(), "Page Title");
/// assert_eq!(page.path(), "/content/page");
/// ```
#[derive(Debug)]
pub struct BasePage {
    resource: Resource,
    content: Option<Resource>,
    messages: ValidationMessages,
}

impl BasePage {
    /// The `jcr:content` child backing property reads, when present.
    pub fn content_resource(&self) -> Option<&Resource> {
        self.content.as_ref()
    }
}

impl ResourceModel for BasePage {
    const DESCRIPTOR: TypeDescriptor = TypeDescriptor::new("BasePage", &[RESOURCE_TYPE_DEFAULT]);

    type ValidationService = DefaultValidationService<Self>;

    fn bind(resource: Resource) -> Option<Self> {
        // Bound from the content child: hop to the parent as the page root.
        let root = if resource.name() == JCR_CONTENT {
            resource.parent().unwrap_or(resource)
        } else {
            resource
        };
        let content = root.child(JCR_CONTENT).ok();
        Some(Self {
            resource: root,
            content,
            messages: ValidationMessages::default(),
        })
    }

    fn resource(&self) -> &Resource {
        &self.resource
    }

    fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    fn messages_mut(&mut self) -> &mut ValidationMessages {
        &mut self.messages
    }

    fn properties(&self) -> &Map<String, Value> {
        match &self.content {
            Some(content) => content.properties(),
            None => self.resource.properties(),
        }
    }

    fn resource_type(&self) -> String {
        let explicit = self
            .string_property(crate::repository::PROPERTY_RESOURCE_TYPE)
            .unwrap_or_default();
        if !explicit.is_empty() {
            return explicit.to_string();
        }
        let structural = self.resource.primary_type();
        if !structural.is_empty() {
            return structural;
        }
        self.content
            .as_ref()
            .map(Resource::primary_type)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;
