//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{login::LoginPage, register::RegisterPage, timeline::TimelinePage};
use crate::state::auth::{AuthState, bind_to_store};
use crate::state::session::{AppSession, SessionStore};
use crate::util::navigate::BrowserNavigator;
use crate::util::task::spawn_browser;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session store and service, mirrors the store into a reactive
/// `AuthState`, provides both as context, and starts the one-time restore.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let navigator = BrowserNavigator::default();
    let session = AppSession::from_build_env(store.clone(), navigator.clone());
    let auth = RwSignal::new(AuthState::default());
    bind_to_store(&store, auth);

    provide_context(auth);
    provide_context(session.clone());

    restore_session(session, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/timeline.css"/>
        <Title text="Timeline"/>

        <Router>
            <RouterNavigation navigator/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TimelinePage/>
                <Route path=StaticSegment("timeline") view=TimelinePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Hands the router's navigate function to the session's navigator.
#[component]
fn RouterNavigation(navigator: BrowserNavigator) -> impl IntoView {
    navigator.attach(use_navigate());
}

/// Kick off restore-on-load. Only the browser build ever polls it.
fn restore_session(session: AppSession, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    auth.update(|state| state.loading = true);
    spawn_browser(async move {
        let _ = session.restore_on_load().await;
        auth.update(|state| state.loading = false);
    });
}
