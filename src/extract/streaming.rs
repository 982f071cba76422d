use super::{insert, ExtractedIds, Target};

const SPOTIFY_TYPES: &[&str] = &["track", "album", "playlist", "episode", "show", "artist"];

/// YouTube, YouTube Shorts and YouTube Music video IDs
///
/// Tried in order: `youtu.be/<id>`, the `v` query parameter, `/shorts/<id>`,
/// then `/embed/<id>` and `/live/<id>`.
pub(super) fn youtube(target: &Target<'_>, ids: &mut ExtractedIds) {
    let id = if target.host == "youtu.be" {
        target.path_without_slash().map(str::to_string)
    } else {
        target
            .query_param("v")
            .or_else(|| target.segment_after("shorts").map(str::to_string))
            .or_else(|| target.segment_after("embed").map(str::to_string))
            .or_else(|| target.segment_after("live").map(str::to_string))
    };

    if let Some(id) = id {
        insert(ids, "youtube_video_id", id);
    }
}

/// TikTok video IDs, taken after the first `/video/` (any case)
pub(super) fn tiktok(target: &Target<'_>, ids: &mut ExtractedIds) {
    const MARKER: &str = "/video/";

    let lowered = target.path.to_ascii_lowercase();
    let Some(start) = lowered.find(MARKER) else {
        return;
    };

    let rest = &target.path[start + MARKER.len()..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    insert(ids, "tiktok_video_id", &rest[..end]);
}

/// Spotify IDs from the last two segments, keyed by content type
pub(super) fn spotify(target: &Target<'_>, ids: &mut ExtractedIds) {
    let [.., kind, id] = target.segments.as_slice() else {
        return;
    };

    if SPOTIFY_TYPES.contains(kind) {
        insert(ids, &format!("spotify_{}_id", kind), *id);
    }
}

/// Vimeo video IDs: `.../video/<id>` or a bare numeric last segment
pub(super) fn vimeo(target: &Target<'_>, ids: &mut ExtractedIds) {
    let candidate = match target.segments.as_slice() {
        [.., "video", id] => Some(*id),
        [.., id] => Some(*id),
        [] => None,
    };

    if let Some(id) = candidate.filter(|id| is_numeric(id)) {
        insert(ids, "vimeo_video_id", id);
    }
}

/// Twitch clip IDs from `clips.twitch.tv/<id>` or `.../clip/<id>`
pub(super) fn twitch(target: &Target<'_>, ids: &mut ExtractedIds) {
    let id = if target.host == "clips.twitch.tv" {
        target.path_without_slash()
    } else {
        target.segment_after("clip")
    };

    if let Some(id) = id {
        insert(ids, "twitch_clip_id", id);
    }
}

/// SoundCloud artist and track from the first two segments
pub(super) fn soundcloud(target: &Target<'_>, ids: &mut ExtractedIds) {
    if let Some(artist) = target.segments.first() {
        insert(ids, "soundcloud_artist", *artist);
    }
    if let Some(track) = target.segments.get(1) {
        insert(ids, "soundcloud_track", *track);
    }
}

/// Dailymotion video IDs from `dai.ly/<id>` or `/video/<id>_<slug>`
pub(super) fn dailymotion(target: &Target<'_>, ids: &mut ExtractedIds) {
    let id = if target.host == "dai.ly" {
        target.path_without_slash()
    } else {
        target
            .segment_after("video")
            .and_then(|segment| segment.split('_').next())
    };

    if let Some(id) = id {
        insert(ids, "dailymotion_video_id", id);
    }
}

pub(super) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
