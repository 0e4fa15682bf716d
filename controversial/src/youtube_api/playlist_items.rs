//! YouTube PlaylistItems API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `playlistItems.list` API call.
///
/// Long playlists are split over several pages; [`Self::next_page_token`] is set for every
/// page but the last.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlaylistItemListResponse {
    /// The value will be `youtube#playlistItemListResponse`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<PlaylistItem>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `playlistItem` resource, with only the `contentDetails` part.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(rename = "contentDetails")]
    pub content_details: PlaylistItemContentDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemContentDetails {
    /// The ID that YouTube uses to uniquely identify the video in the playlist.
    #[serde(rename = "videoId")]
    pub video_id: String,
}
