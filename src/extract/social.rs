use super::{insert, ExtractedIds, Target};

/// Medium article IDs are hex hashes; shorter suffixes are slug words
const MEDIUM_MIN_ARTICLE_ID_LEN: usize = 11;

pub(super) fn twitter(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("status") {
        insert(ids, "twitter_tweet_id", id);
    }
}

/// Instagram posts (`/p/<id>`) and reels (`/reel/<id>`)
pub(super) fn instagram(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("p") {
        insert(ids, "instagram_post_id", id);
    }
    if let Some(id) = target.segment_after("reel") {
        insert(ids, "instagram_reel_id", id);
    }
}

pub(super) fn reddit(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("comments") {
        insert(ids, "reddit_post_id", id);
    }
}

/// Returns the part of a slug after its last `-`, or the whole slug
fn slug_suffix(slug: &str) -> &str {
    slug.rsplit_once('-').map_or(slug, |(_, suffix)| suffix)
}

/// LinkedIn post IDs: the activity number after the last `-` of the slug
pub(super) fn linkedin(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(slug) = target.segment_after("posts") {
        insert(ids, "linkedin_post_id", slug_suffix(slug));
    }
}

/// Facebook post IDs (`/posts/<id>`) and video IDs (`?v=<id>`)
pub(super) fn facebook(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("posts") {
        insert(ids, "facebook_post_id", id);
    }
    if let Some(id) = target.query_param("v") {
        insert(ids, "facebook_video_id", id);
    }
}

/// Medium usernames (`/@user`) and article IDs (hash suffix of the slug)
pub(super) fn medium(target: &Target<'_>, ids: &mut ExtractedIds) {
    if !target.path.contains('@') {
        return;
    }

    if let Some(user) = target.segments.iter().find_map(|s| s.strip_prefix('@')) {
        insert(ids, "medium_username", user);
    }

    let article = target.segments.last().filter(|s| !s.starts_with('@'));
    if let Some(slug) = article {
        let suffix = slug_suffix(slug);
        if suffix.len() >= MEDIUM_MIN_ARTICLE_ID_LEN {
            insert(ids, "medium_article_id", suffix);
        }
    }
}

/// Bluesky handles (`/profile/<handle>`) and posts (`/post/<id>`)
pub(super) fn bluesky(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(handle) = target.segment_after("profile") {
        insert(ids, "bluesky_handle", handle);
    }
    if let Some(id) = target.segment_after("post") {
        insert(ids, "bluesky_post_id", id);
    }
}

pub(super) fn threads(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("post") {
        insert(ids, "threads_post_id", id);
    }
}

pub(super) fn pinterest(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(id) = target.segment_after("pin") {
        insert(ids, "pinterest_pin_id", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        extractor: fn(&Target<'_>, &mut ExtractedIds),
        host: &str,
        path: &str,
        query: Option<&str>,
    ) -> ExtractedIds {
        let target = Target::new(host, path, query);
        let mut ids = ExtractedIds::new();
        extractor(&target, &mut ids);
        ids
    }

    #[test]
    fn test_twitter_status() {
        let ids = run(twitter, "x.com", "/rustlang/status/1745000000000000000", None);
        assert_eq!(ids["twitter_tweet_id"], "1745000000000000000");
    }

    #[test]
    fn test_twitter_profile_has_no_id() {
        assert!(run(twitter, "twitter.com", "/rustlang", None).is_empty());
    }

    #[test]
    fn test_instagram_post_and_reel() {
        let ids = run(instagram, "instagram.com", "/p/CxYz123/", None);
        assert_eq!(ids["instagram_post_id"], "CxYz123");
        assert!(!ids.contains_key("instagram_reel_id"));

        let ids = run(instagram, "instagram.com", "/reel/CrEeL99/", None);
        assert_eq!(ids["instagram_reel_id"], "CrEeL99");
        assert!(!ids.contains_key("instagram_post_id"));
    }

    #[test]
    fn test_reddit() {
        let ids = run(reddit, "reddit.com", "/r/rust/comments/1abcde/some_title/", None);
        assert_eq!(ids["reddit_post_id"], "1abcde");
    }

    #[test]
    fn test_linkedin_activity_suffix() {
        let ids = run(
            linkedin,
            "linkedin.com",
            "/posts/jane-doe_rust-activity-7123456789012345678-AbCd",
            None,
        );
        assert_eq!(ids["linkedin_post_id"], "AbCd");

        let ids = run(linkedin, "linkedin.com", "/posts/7123456789", None);
        assert_eq!(ids["linkedin_post_id"], "7123456789");
    }

    #[test]
    fn test_facebook_post_and_video() {
        let ids = run(facebook, "facebook.com", "/somepage/posts/10158", Some("v=998877"));
        assert_eq!(ids["facebook_post_id"], "10158");
        assert_eq!(ids["facebook_video_id"], "998877");

        let ids = run(facebook, "facebook.com", "/watch/", Some("v=998877"));
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_medium_username_and_article() {
        let ids = run(
            medium,
            "medium.com",
            "/@someone/understanding-ownership-in-rust-3f2a9c8b7d6e",
            None,
        );
        assert_eq!(ids["medium_username"], "someone");
        assert_eq!(ids["medium_article_id"], "3f2a9c8b7d6e");
    }

    #[test]
    fn test_medium_short_suffix_rejected() {
        let ids = run(medium, "medium.com", "/@someone/hello-world", None);
        assert_eq!(ids["medium_username"], "someone");
        assert!(!ids.contains_key("medium_article_id"));
    }

    #[test]
    fn test_medium_bare_article_id() {
        let ids = run(medium, "medium.com", "/@someone/abcdef0123456789", None);
        assert_eq!(ids["medium_article_id"], "abcdef0123456789");
    }

    #[test]
    fn test_medium_profile_is_not_an_article() {
        let ids = run(medium, "medium.com", "/@someone-with-long-name", None);
        assert_eq!(ids["medium_username"], "someone-with-long-name");
        assert!(!ids.contains_key("medium_article_id"));
    }

    #[test]
    fn test_medium_requires_at_sign() {
        let ids = run(medium, "medium.com", "/publication/a-post-3f2a9c8b7d6e", None);
        assert!(ids.is_empty());
    }

    #[test]
    fn test_bluesky() {
        let ids = run(bluesky, "bsky.app", "/profile/alice.bsky.social/post/3kxyz", None);
        assert_eq!(ids["bluesky_handle"], "alice.bsky.social");
        assert_eq!(ids["bluesky_post_id"], "3kxyz");
    }

    #[test]
    fn test_threads() {
        let ids = run(threads, "threads.net", "/@zuck/post/C1a2b3", None);
        assert_eq!(ids["threads_post_id"], "C1a2b3");
    }

    #[test]
    fn test_pinterest() {
        let ids = run(pinterest, "pinterest.com", "/pin/123456789/", None);
        assert_eq!(ids["pinterest_pin_id"], "123456789");
    }
}
