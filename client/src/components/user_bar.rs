//! Header bar with the signed-in user and account actions.
//!
//! DESIGN
//! ======
//! Reads the reactive `AuthState` for rendering and calls the session
//! service for logout and account deletion. Both are best-effort; only a
//! failed deletion is surfaced, since logout always ends the local session.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::session::AppSession;
use crate::util::task::spawn_browser;

const DELETE_FAILED: &str = "Could not delete the account. Try again later.";

#[component]
pub fn UserBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    let on_logout = {
        let session = session.clone();
        move |_: leptos::ev::MouseEvent| {
            let session = session.clone();
            spawn_browser(async move {
                let _ = session.logout().await;
            });
        }
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(String::new());
        let session = session.clone();
        spawn_browser(async move {
            if session.delete_account().await.is_err() {
                info.set(DELETE_FAILED.to_owned());
            }
            busy.set(false);
        });
    };

    view! {
        <nav class="user-bar">
            <a class="user-bar__brand" href="/timeline">"Timeline"</a>
            <Show
                when=move || auth.get().is_signed_in()
                fallback=|| {
                    view! {
                        <span class="user-bar__actions">
                            <a class="user-bar__link" href="/login">"Sign in"</a>
                            <a class="user-bar__link" href="/register">"Create account"</a>
                        </span>
                    }
                }
            >
                <span class="user-bar__actions">
                    <span class="user-bar__name">{move || auth.get().display_name().unwrap_or_default()}</span>
                    <button class="user-bar__button" type="button" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                    <button
                        class="user-bar__button user-bar__button--danger"
                        type="button"
                        disabled=move || busy.get()
                        on:click=on_delete.clone()
                    >
                        "Delete account"
                    </button>
                </span>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="user-bar__message">{move || info.get()}</p>
            </Show>
        </nav>
    }
}
