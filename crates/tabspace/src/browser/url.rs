//! Address normalization and title derivation.

pub const DEFAULT_TAB_URL: &str = "https://google.com";
pub const DEFAULT_TAB_TITLE: &str = "New Tab";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Prefix `https://` onto schemeless input.
///
/// Returns `None` for blank input so callers can treat it as a no-op.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if SCHEMES.iter().any(|scheme| trimmed.starts_with(scheme)) {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Derive a display title from a URL: drop the scheme and a leading `www.`,
/// then keep everything before the first `/`.
pub fn derive_title(url: &str) -> String {
    let host = match SCHEMES.iter().find_map(|scheme| url.strip_prefix(scheme)) {
        Some(rest) => rest.strip_prefix("www.").unwrap_or(rest),
        None => url,
    };
    host.split('/').next().unwrap_or(host).to_string()
}

pub fn is_secure(url: &str) -> bool {
    url.starts_with("https")
}
