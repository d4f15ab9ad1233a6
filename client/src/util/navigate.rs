//! Navigation side effects requested by session operations.
//!
//! The session service is built before the `<Router>` exists, so
//! `BrowserNavigator` starts detached and the router's own navigate function
//! is handed to it from inside the router with [`BrowserNavigator::attach`].

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

use std::sync::{Arc, PoisonError, RwLock};

use leptos_router::NavigateOptions;

/// Something that can move the browser to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

type RouteFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Client-side navigation through the attached router.
///
/// Cloning shares the attachment.
#[derive(Clone, Default)]
pub struct BrowserNavigator {
    route: Arc<RwLock<Option<RouteFn>>>,
}

impl BrowserNavigator {
    /// Route later navigations through `navigate` (usually `use_navigate()`).
    pub fn attach<F>(&self, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + Send + Sync + 'static,
    {
        let route: RouteFn = Arc::new(move |path| navigate(path, NavigateOptions::default()));
        *self.route.write().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.route.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl std::fmt::Debug for BrowserNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserNavigator").field("attached", &self.is_attached()).finish()
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let route = self.route.read().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(route) = route {
            route(path);
            return;
        }
        log::warn!("no router attached; loading {path}");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}
