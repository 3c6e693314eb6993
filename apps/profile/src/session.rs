//! Browser-session capabilities the form needs: reading the CSRF cookie and
//! navigating after a successful submit. Injected so the core never touches
//! ambient globals.

use std::sync::{Mutex, PoisonError};

use percent_encoding::percent_decode_str;
use tracing::info;

pub const CSRF_COOKIE: &str = "csrftoken";

pub trait SessionContext: Send + Sync {
    fn token(&self, name: &str) -> Option<String>;
    fn redirect(&self, path: &str);
}

/// Finds `name` in a `document.cookie`-style string (`a=1; b=2`).
/// The name match is case-sensitive; the value is percent-decoded.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(prefix.as_str()))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Session backed by a raw cookie string. Redirects are recorded, not followed.
#[derive(Debug, Default)]
pub struct CookieSession {
    cookies: String,
    redirects: Mutex<Vec<String>>,
}

impl CookieSession {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
            redirects: Mutex::new(Vec::new()),
        }
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SessionContext for CookieSession {
    fn token(&self, name: &str) -> Option<String> {
        read_cookie(&self.cookies, name)
    }

    fn redirect(&self, path: &str) {
        info!("Navigating to {path}");
        self.redirects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
