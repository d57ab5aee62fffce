//! Validation and normalization of externally-opened URLs.
//!
//! Every request to hand a URL to the system browser funnels through
//! [`normalize`], regardless of where it originated (an explicit UI request,
//! a new-window intercept, or an in-page navigation intercept). Nothing
//! reaches the OS launcher without passing it.

use url::Url;

/// Schemes a window's UI layer is allowed to open externally. Anything
/// else (`javascript:`, `file:`, custom app schemes, ...) is rejected.
pub const ALLOWED_PROTOCOLS: [&str; 4] = ["http", "https", "mailto", "ftp"];

/// Validates a candidate URL and returns its canonical absolute form, or
/// `None` if it must not be opened.
///
/// Bare domains are accepted as a convenience: input without a scheme gets
/// `https://` prepended before parsing, so `example.com` becomes
/// `https://example.com/`.
pub fn normalize(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&candidate).ok()?;
    if !ALLOWED_PROTOCOLS.contains(&parsed.scheme()) {
        return None;
    }
    Some(parsed.into())
}

/// Whether `input` already starts with a `scheme:` prefix (RFC 3986:
/// an ALPHA followed by ALPHA / DIGIT / `+` / `-` / `.`, then a colon).
fn has_scheme(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for c in chars {
        match c {
            ':' => return true,
            c if c.is_ascii_alphanumeric() => {}
            '+' | '-' | '.' => {}
            _ => return false,
        }
    }
    false
}
