/// Error types for the sidebar
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SidebarError {
    /// The tab query promise was rejected by the host.
    #[error("host tab query failed: {0}")]
    HostQuery(String),

    /// The host returned something that is not a tab.
    #[error("failed to decode tab: {0}")]
    TabDecode(String),

    #[error("invalid tab URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("no element with id {0:?}")]
    MissingContainer(String),

    #[error("no window or document available")]
    NoDocument,
}

impl From<SidebarError> for JsValue {
    fn from(err: SidebarError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
