/// Data structures for tabs reported by the host
use serde::{Deserialize, Serialize};

/// The active browser tab, as returned by `tabs.query`
///
/// Restricted and internal pages come back without a `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ActiveTab {
    pub fn with_url(url: &str) -> ActiveTab {
        ActiveTab {
            url: Some(url.to_string()),
            ..ActiveTab::default()
        }
    }

    /// The tab URL, if the host exposed a non-empty one
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}
