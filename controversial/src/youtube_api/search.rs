//! YouTube Search API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// The value will be `youtube#searchListResponse`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A single search hit.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: ResourceId,
}

/// Identifies the resource a search hit refers to.
///
/// Only channel hits carry `channelId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceId {
    /// `youtube#channel`, `youtube#video` or `youtube#playlist`.
    #[serde(default)]
    pub kind: String,
    #[serde(rename = "channelId", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}
