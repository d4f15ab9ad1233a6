use super::*;
use chrono::{Datelike as _, Timelike as _};

#[test]
fn fixtures_are_ordered_by_id() {
    let ids: Vec<u32> = sample_posts().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn only_the_hiking_post_has_an_image() {
    let posts = sample_posts();
    let with_images: Vec<u32> = posts.iter().filter(|p| p.image_url.is_some()).map(|p| p.id).collect();
    assert_eq!(with_images, vec![3]);
    assert_eq!(posts[2].author.username, "twil");
}

#[test]
fn fixture_timestamps_are_local_wall_clock() {
    let first = &sample_posts()[0];
    assert_eq!((first.timestamp.year(), first.timestamp.month(), first.timestamp.day()), (2025, 2, 27));
    assert_eq!((first.timestamp.hour(), first.timestamp.minute()), (14, 32));
}

#[test]
fn unparseable_timestamp_falls_back_to_now() {
    let before = Local::now();
    let parsed = local_timestamp("yesterday-ish");
    assert!(parsed >= before);
}

#[test]
fn fixture_content_is_kept_word_for_word() {
    let posts = sample_posts();
    assert_eq!(posts[0].content, "Just deployed my new Svelte project! The reactivity system is amazing. #svelte #webdev");
    assert_eq!(
        posts[1].content,
        "Working with $state and $derived in Svelte 5 has completely changed how I think about state management. \
         Everything feels so intuitive now!"
    );
    assert!(posts[2].content.starts_with("Beautiful day for hiking! 🏔️ The views from Mount Rainier"));
}
