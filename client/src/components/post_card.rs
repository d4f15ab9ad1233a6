//! Card rendering a single timeline post.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::data::posts::Post;
use crate::data::timestamp::format_timestamp;

/// `"1 like"`, `"3 likes"`.
pub(crate) fn count_label(count: u32, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let Post { author, content, likes, reposts, comments, timestamp, image_url, .. } = post;
    let age = format_timestamp(&timestamp);
    let avatar_url = author.avatar_url;
    let avatar_alt = author.name.clone();
    let handle = format!("@{}", author.username);

    view! {
        <article class="post-card">
            <img class="post-card__avatar" src=avatar_url alt=avatar_alt/>
            <div class="post-card__body">
                <header class="post-card__header">
                    <span class="post-card__name">{author.name}</span>
                    <span class="post-card__handle">{handle}</span>
                    <span class="post-card__time">{age}</span>
                </header>
                <p class="post-card__content">{content}</p>
                {image_url.map(|src| view! { <img class="post-card__image" src=src alt=""/> })}
                <footer class="post-card__stats">
                    <span>{count_label(comments, "comment")}</span>
                    <span>{count_label(reposts, "repost")}</span>
                    <span>{count_label(likes, "like")}</span>
                </footer>
            </div>
        </article>
    }
}
