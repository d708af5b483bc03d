//! Tests for the page model

#[cfg(test)]
mod tests {
    use crate::models::{BasePage, ResourceModel};
    use crate::repository::{MemoryRepository, Resource};
    use crate::utils::model_utils::adapt_to;
    use serde_json::json;
    use std::rc::Rc;

    fn page(repository: &Rc<MemoryRepository>, path: &str) -> BasePage {
        let resource = Resource::open(repository.handle(), path).unwrap();
        adapt_to(&resource).unwrap()
    }

    #[test]
    fn test_title_from_content_child() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));
        repository.put(
            "/content/page/jcr:content",
            json!({"jcr:title": "Content Title"}),
        );

        assert_eq!(page(&repository, "/content/page").title(), "Content Title");
    }

    #[test]
    fn test_title_defaults_to_name_without_content_child() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));

        assert_eq!(page(&repository, "/content/page").title(), "page");
    }

    #[test]
    fn test_properties_fall_back_to_own_when_no_content_child() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({"jcr:title": "Own Title"}));

        assert_eq!(page(&repository, "/content/page").title(), "Own Title");
    }

    #[test]
    fn test_bound_from_content_child_reports_page_root() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));
        repository.put(
            "/content/page/jcr:content",
            json!({"jcr:title": "Content Title"}),
        );

        let model = page(&repository, "/content/page/jcr:content");
        assert_eq!(model.path(), "/content/page");
        assert_eq!(model.name(), "page");
        assert_eq!(model.title(), "Content Title");
    }

    #[test]
    fn test_adapting_root_and_content_yield_same_page() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));
        repository.put("/content/page/jcr:content", json!({"jcr:title": "T"}));

        let from_root = page(&repository, "/content/page");
        let from_content = page(&repository, "/content/page/jcr:content");
        assert_eq!(from_root.path(), from_content.path());
        assert_eq!(from_root.title(), from_content.title());
    }

    #[test]
    fn test_description_from_content_child() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({"jcr:description": "own"}));
        repository.put(
            "/content/page/jcr:content",
            json!({"jcr:description": "from content"}),
        );

        assert_eq!(
            page(&repository, "/content/page").description(),
            "from content"
        );
    }

    #[test]
    fn test_content_resource_accessor() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page/jcr:content", json!({}));
        repository.put("/content/bare", json!({}));

        assert!(page(&repository, "/content/page").content_resource().is_some());
        assert!(page(&repository, "/content/bare").content_resource().is_none());
    }

    #[test]
    fn test_resource_type_from_content_explicit_property() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));
        repository.put(
            "/content/page/jcr:content",
            json!({"repo:resourceType": "pages/article"}),
        );

        assert_eq!(page(&repository, "/content/page").resource_type(), "pages/article");
    }

    #[test]
    fn test_resource_type_from_own_structural_type() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({"jcr:primaryType": "nt:folder"}));
        repository.put("/content/page/jcr:content", json!({}));

        assert_eq!(page(&repository, "/content/page").resource_type(), "nt:folder");
    }

    #[test]
    fn test_resource_type_last_resort_content_structural_type() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page", json!({}));
        repository.put(
            "/content/page/jcr:content",
            json!({"jcr:primaryType": "nt:unstructured"}),
        );

        assert_eq!(
            page(&repository, "/content/page").resource_type(),
            "nt:unstructured"
        );
    }

    #[test]
    fn test_content_properties_snapshot_at_bind_time() {
        let repository = Rc::new(MemoryRepository::new());
        repository.put("/content/page/jcr:content", json!({"jcr:title": "Before"}));

        let model = page(&repository, "/content/page");
        repository.put("/content/page/jcr:content", json!({"jcr:title": "After"}));

        assert_eq!(model.title(), "Before");
    }
}
