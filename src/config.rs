/// Startup configuration for a sidebar instance
use crate::checklist::ChecklistRegistry;
use std::rc::Rc;

pub const LISTS_CONTAINER_ID: &str = "lists";
pub const URL_DISPLAY_CONTAINER_ID: &str = "url-display";

/// What the sidebar shows for the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Checklists selected by hostname
    Checklists,
    /// The active tab's URL in a read-only field
    UrlEcho,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarConfig {
    pub variant: Variant,
    pub container_id: String,
    pub registry: Rc<ChecklistRegistry>,
}

impl SidebarConfig {
    pub fn checklists() -> Self {
        SidebarConfig {
            variant: Variant::Checklists,
            container_id: LISTS_CONTAINER_ID.to_string(),
            registry: Rc::new(ChecklistRegistry::builtin()),
        }
    }

    pub fn url_echo() -> Self {
        SidebarConfig {
            variant: Variant::UrlEcho,
            container_id: URL_DISPLAY_CONTAINER_ID.to_string(),
            registry: Rc::new(ChecklistRegistry::new()),
        }
    }

    pub fn with_registry(mut self, registry: ChecklistRegistry) -> Self {
        self.registry = Rc::new(registry);
        self
    }

    pub fn with_container(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklists_defaults() {
        let config = SidebarConfig::checklists();

        assert_eq!(config.variant, Variant::Checklists);
        assert_eq!(config.container_id, "lists");
        assert_eq!(config.registry.rules.len(), 5);
    }

    #[test]
    fn test_url_echo_defaults() {
        let config = SidebarConfig::url_echo();

        assert_eq!(config.variant, Variant::UrlEcho);
        assert_eq!(config.container_id, "url-display");
        assert!(config.registry.checklists.is_empty());
    }

    #[test]
    fn test_overrides() {
        let registry = ChecklistRegistry::new().with_checklist("a", &["x"]);

        let config = SidebarConfig::checklists()
            .with_registry(registry.clone())
            .with_container("pane");

        assert_eq!(config.container_id, "pane");
        assert_eq!(*config.registry, registry);
    }
}
