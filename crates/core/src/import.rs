//! Mock YouTube video/channel import.
//!
//! There is no real YouTube API integration. A URL that parses as a video
//! link yields mock video stats (with the thumbnail derived from the video
//! id); anything else yields mock channel stats. The earnings engine treats
//! imported view/RPM figures identically to manually entered ones - it has
//! no knowledge of their provenance.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

/// URL shapes a video id can be extracted from.
static VIDEO_ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([^&\n?#]+)",
        r"(?:https?://)?(?:www\.)?youtube\.com/embed/([^&\n?#]+)",
        r"(?:https?://)?(?:www\.)?youtube\.com/v/([^&\n?#]+)",
        r"(?:https?://)?youtu\.be/([^&\n?#]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hardcoded pattern"))
    .collect()
});

/// Extracts a video id from a YouTube URL, if the URL matches a known shape.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|captures| captures[1].to_string())
}

/// Result of an import, tagged by what the URL resolved to.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImportPreview {
    /// A single video.
    Video(VideoPreview),
    /// A whole channel.
    Channel(ChannelPreview),
}

/// Mock statistics for an imported video.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoPreview {
    /// Extracted video id.
    pub video_id: String,
    /// Video title.
    pub title: &'static str,
    /// Thumbnail URL derived from the video id.
    pub thumbnail: String,
    /// Channel name.
    pub channel_name: &'static str,
    /// Channel subscriber count.
    pub subscriber_count: i64,
    /// Total view count.
    pub view_count: i64,
    /// Like count.
    pub like_count: i64,
    /// Publication timestamp.
    pub published_at: &'static str,
    /// Duration string.
    pub duration: &'static str,
    /// Description excerpt.
    pub description: &'static str,
    /// Derived daily views estimate, fed into the earnings engine.
    pub avg_daily_views: i64,
    /// Derived RPM estimate, fed into the earnings engine.
    pub estimated_rpm: Decimal,
    /// Detected content niche.
    pub niche: &'static str,
    /// Always true for mock data.
    pub success: bool,
}

/// Mock statistics for an imported channel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelPreview {
    /// Channel name.
    pub channel_name: &'static str,
    /// Channel subscriber count.
    pub subscriber_count: i64,
    /// Derived daily views estimate.
    pub avg_daily_views: i64,
    /// Derived RPM estimate.
    pub estimated_rpm: Decimal,
    /// Detected content niche.
    pub niche: &'static str,
    /// Always true for mock data.
    pub success: bool,
}

/// Builds an import preview for the given URL.
#[must_use]
pub fn import_from_url(url: &str) -> ImportPreview {
    extract_video_id(url).map_or_else(
        || {
            ImportPreview::Channel(ChannelPreview {
                channel_name: "Sample Creator",
                subscriber_count: 125_000,
                avg_daily_views: 5_500,
                estimated_rpm: Decimal::new(245, 2),
                niche: "Tech Reviews",
                success: true,
            })
        },
        |video_id| {
            let view_count = 875_000;
            ImportPreview::Video(VideoPreview {
                thumbnail: format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg"),
                video_id,
                title: "Amazing Tech Review - iPhone 15 Pro Max",
                channel_name: "TechReviewer Pro",
                subscriber_count: 1_250_000,
                view_count,
                like_count: 45_000,
                published_at: "2024-01-15T10:30:00Z",
                duration: "12:45",
                description: "Complete review of the latest iPhone with detailed analysis...",
                avg_daily_views: view_count / 30,
                estimated_rpm: Decimal::new(285, 2),
                niche: "Tech Reviews",
                success: true,
            })
        },
    )
}
