//! YouTube Videos API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    #[serde(default)]
    pub kind: String,
    /// A list of videos that match the request criteria.
    ///
    /// IDs that do not exist (or are private) are silently left out.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `video` resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

/// Basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
}

/// Statistics about the video.
///
/// Only the rating counts are read. The API sends them as decimal strings and leaves them out
/// when the uploader has hidden them.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// Absent when the uploader has disabled ratings.
    #[serde(rename = "likeCount", skip_serializing_if = "Option::is_none")]
    pub like_count: Option<String>,
    #[serde(rename = "dislikeCount", skip_serializing_if = "Option::is_none")]
    pub dislike_count: Option<String>,
}
