//! Video URL normalization: YouTube watch and short URLs become embed
//! URLs; anything else passes through untouched.

/// Rewrites a URL into its embeddable form when it is a recognized
/// YouTube watch or short URL. Already-embeddable and non-YouTube URLs
/// return unchanged.
pub fn normalize_embed_url(url: &str) -> String {
    if url.contains("youtube.com/embed/") {
        return url.to_string();
    }

    if url.contains("youtube.com/watch?v=") {
        let id = url
            .split("v=")
            .nth(1)
            .and_then(|rest| rest.split('&').next())
            .filter(|id| !id.is_empty());
        if let Some(id) = id {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    }

    if url.contains("youtu.be/") {
        let id = url
            .split("youtu.be/")
            .nth(1)
            .and_then(|rest| rest.split('?').next())
            .filter(|id| !id.is_empty());
        if let Some(id) = id {
            return format!("https://www.youtube.com/embed/{}", id);
        }
    }

    url.to_string()
}

/// Extracts the bare video id from a watch, short, or embed URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let rest = url
        .split_once("youtube.com/watch?v=")
        .or_else(|| url.split_once("youtu.be/"))
        .or_else(|| url.split_once("youtube.com/embed/"))
        .map(|(_, rest)| rest)?;

    let id = rest.split(['&', '?', '#', '\n']).next().unwrap_or("");
    (!id.is_empty()).then_some(id)
}

pub fn is_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}
