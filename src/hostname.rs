/// Hostname extraction for tab URLs
use crate::error::SidebarError;
use url::Url;

/// Extract the hostname from a tab URL
///
/// Only the host component is kept: scheme, port, path, query and fragment
/// are dropped. No further normalization happens beyond what WHATWG URL
/// parsing already does (special-scheme hosts come back lowercased, which is
/// what the browser reports as `URL.hostname` too).
///
/// Examples:
/// - https://meet.google.com/abc-defg-hij → meet.google.com
/// - http://localhost:3000/x → localhost
/// - about:blank → "" (parses, has no host)
pub fn hostname_of(url: &str) -> Result<String, SidebarError> {
    let parsed = Url::parse(url).map_err(|e| SidebarError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(parsed.host_str().unwrap_or_default().to_string())
}
