//! Background work that only makes sense in the browser.

use std::future::Future;

/// Run `task` on the WASM event loop. SSR builds drop it unpolled.
pub fn spawn_browser<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
