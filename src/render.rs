/// Rendering model for the sidebar pane
///
/// The container is always replaced wholesale, so the view is a plain value
/// built from the resolved checklists. The Yew components in `ui::components`
/// only draw it.
use crate::checklist::Checklist;

pub const PLACEHOLDER: &str = "No checklist items for this site";

/// One labeled checkbox
#[derive(Debug, Clone, PartialEq)]
pub struct CheckItem {
    pub checkbox_id: String,
    pub label: String,
}

/// A checklist heading and its items
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub items: Vec<CheckItem>,
}

/// Everything the container shows after a refresh
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderedView {
    /// Nothing rendered yet
    #[default]
    Empty,
    Checklists(Vec<Section>),
    Placeholder,
    /// URL echo variant
    Url(String),
}

impl RenderedView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, RenderedView::Placeholder)
    }

    /// Checkbox ids in document order
    pub fn checkbox_ids(&self) -> Vec<&str> {
        match self {
            RenderedView::Checklists(sections) => sections
                .iter()
                .flat_map(|section| section.items.iter())
                .map(|item| item.checkbox_id.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Derive the id that ties a checkbox to its label.
///
/// Only the first '.' of the key is replaced, so distinct keys can collide
/// (`a.b-c` and `a-b.c` both give `checkbox-a-b-c-0`).
pub fn checkbox_id(key: &str, index: usize) -> String {
    format!("checkbox-{}-{}", key.replacen('.', "-", 1), index)
}

/// Build the view for a resolved sequence of checklists
pub fn build_view(checklists: &[&Checklist]) -> RenderedView {
    if checklists.is_empty() {
        return RenderedView::Placeholder;
    }

    let sections = checklists
        .iter()
        .map(|checklist| Section {
            heading: checklist.key.clone(),
            items: checklist
                .items
                .iter()
                .enumerate()
                .map(|(index, label)| CheckItem {
                    checkbox_id: checkbox_id(&checklist.key, index),
                    label: label.clone(),
                })
                .collect(),
        })
        .collect();

    RenderedView::Checklists(sections)
}
