//! Sample timeline content.
//!
//! The timeline has no write path; these fixtures are everything it shows.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone as _};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub username: String,
    pub avatar_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub author: Author,
    pub content: String,
    pub likes: u32,
    pub reposts: u32,
    pub comments: u32,
    /// Wall-clock time in the viewer's zone.
    pub timestamp: DateTime<Local>,
    pub image_url: Option<String>,
}

/// Interpret `YYYY-MM-DDTHH:MM:SS` as local time.
///
/// Unparseable or nonexistent times (DST gaps) fall back to now.
fn local_timestamp(raw: &str) -> DateTime<Local> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .unwrap_or_else(Local::now)
}

fn author(id: &str, name: &str, username: &str, avatar_url: &str) -> Author {
    Author { id: id.to_owned(), name: name.to_owned(), username: username.to_owned(), avatar_url: avatar_url.to_owned() }
}

/// The timeline fixtures, oldest first.
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            author: author("user1", "Alex Johnson", "alexj", "https://randomuser.me/api/portraits/women/68.jpg"),
            content: "Just deployed my new Svelte project! The reactivity system is amazing. #svelte #webdev"
                .to_owned(),
            likes: 24,
            reposts: 5,
            comments: 3,
            timestamp: local_timestamp("2025-02-27T14:32:00"),
            image_url: None,
        },
        Post {
            id: 2,
            author: author("user2", "Morgan Smith", "msmith", "https://randomuser.me/api/portraits/men/42.jpg"),
            content: "Working with $state and $derived in Svelte 5 has completely changed how I think about state management. \
                      Everything feels so intuitive now!"
                .to_owned(),
            likes: 17,
            reposts: 2,
            comments: 7,
            timestamp: local_timestamp("2025-02-28T09:15:00"),
            image_url: None,
        },
        Post {
            id: 3,
            author: author("user3", "Taylor Wilson", "twil", "https://randomuser.me/api/portraits/women/22.jpg"),
            content: "Beautiful day for hiking! 🏔️ The views from Mount Rainier are absolutely breathtaking. \
                      Nature is the best reset button."
                .to_owned(),
            likes: 42,
            reposts: 12,
            comments: 8,
            timestamp: local_timestamp("2025-02-28T11:05:00"),
            image_url: Some(
                "https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?auto=format&fit=crop&w=500".to_owned(),
            ),
        },
    ]
}
