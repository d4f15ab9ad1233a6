//! Timeline page: the sample posts under the session header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders for anonymous and signed-in visitors alike. The route guard only
//! logs a missing session.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::user_bar::UserBar;
use crate::data::posts::sample_posts;
use crate::state::auth::AuthState;
use crate::util::auth::protect_route;

#[component]
pub fn TimelinePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    protect_route(auth, "timeline");

    let posts = sample_posts();

    view! {
        <div class="timeline-page">
            <UserBar/>
            <main class="timeline">
                {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
            </main>
        </div>
    }
}
