//! The `auth` cookie used as a cross-reload session hint.
//!
//! The cookie only records "this browser believes it is signed in". It
//! decides whether a restore is attempted on load and nothing else; the
//! session store stays authoritative.
//!
//! TRADE-OFFS
//! ==========
//! Cookie access is browser-only; SSR builds read "not set" and writes no-op.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub const HINT_COOKIE: &str = "auth";

const SET_COOKIE: &str = "auth=true; path=/";
const CLEAR_COOKIE: &str = "auth=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/";

/// Persisted boolean that survives page reloads.
pub trait SessionHint {
    fn is_set(&self) -> bool;
    fn set(&self);
    fn clear(&self);
}

/// Whether a `document.cookie` string carries `auth=true`.
pub fn hint_in_cookie_header(header: &str) -> bool {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name.trim() == HINT_COOKIE && value.trim() == "true")
}

/// Assignment string written to `document.cookie` for the given hint value.
pub fn cookie_assignment(authenticated: bool) -> &'static str {
    if authenticated { SET_COOKIE } else { CLEAR_COOKIE }
}

/// Hint backed by `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieHint;

impl CookieHint {
    #[cfg(feature = "hydrate")]
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast as _;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }

    fn write(authenticated: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = Self::document() {
                let _ = doc.set_cookie(cookie_assignment(authenticated));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = authenticated;
        }
    }
}

impl SessionHint for CookieHint {
    fn is_set(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            Self::document()
                .and_then(|doc| doc.cookie().ok())
                .is_some_and(|header| hint_in_cookie_header(&header))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn set(&self) {
        Self::write(true);
    }

    fn clear(&self) {
        Self::write(false);
    }
}

/// Process-local hint, for environments without cookies.
#[derive(Clone, Debug, Default)]
pub struct MemoryHint {
    flag: Arc<AtomicBool>,
}

impl MemoryHint {
    #[must_use]
    pub fn new(initial: bool) -> Self {
        Self { flag: Arc::new(AtomicBool::new(initial)) }
    }
}

impl SessionHint for MemoryHint {
    fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    fn set(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    fn clear(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
