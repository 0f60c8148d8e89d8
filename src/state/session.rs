//! Session Service
//!
//! Explicit access to the session cookie shared with the backend. The
//! transport layer attaches the cookie to every request on its own; this
//! service only covers what the UI itself needs to know: whether a token
//! is present, and how to drop it on logout.

use leptos::*;
use wasm_bindgen::JsCast;

/// Name of the cookie holding the opaque session token.
pub const TOKEN_COOKIE: &str = "token";

/// Handle to the browser-held session cookie.
///
/// The cookie itself lives in the document; the handle carries no state so
/// every read observes the current browser value.
#[derive(Clone, Copy, Default)]
pub struct Session;

impl Session {
    /// Current session token, if the cookie is set.
    pub fn token(&self) -> Option<String> {
        let raw = html_document()?.cookie().ok()?;
        cookie_value(&raw, TOKEN_COOKIE)
    }

    /// Whether a session token is present client-side.
    pub fn is_active(&self) -> bool {
        self.token().is_some()
    }

    /// Drop the session cookie. Called only after the backend confirmed
    /// the logout; a failed logout leaves the cookie untouched.
    pub fn clear(&self) {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(&format!("{}=; Max-Age=0; path=/", TOKEN_COOKIE));
        }
    }
}

/// Provide the session service to the component tree.
pub fn provide_session() {
    provide_context(Session);
}

/// Fetch the session service from context.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_default()
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Extract one cookie value from a raw `document.cookie` string.
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(
            cookie_value("token=abc123", "token"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_cookie_value_among_others() {
        let raw = "theme=dark; token=abc123; lang=es";
        assert_eq!(cookie_value(raw, "token"), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("theme=dark; lang=es", "token"), None);
    }

    #[test]
    fn test_cookie_value_name_is_not_a_prefix_match() {
        // "token2" must not satisfy a lookup for "token"
        assert_eq!(cookie_value("token2=zzz", "token"), None);
    }

    #[test]
    fn test_cookie_value_empty() {
        assert_eq!(cookie_value("", "token"), None);
    }
}
