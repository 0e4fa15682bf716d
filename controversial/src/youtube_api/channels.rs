//! YouTube Channels API types.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How `channels.list` should select the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelFilter<'a> {
    /// The channel's legacy username (the `forUsername` parameter).
    Username(&'a str),
    /// The channel's ID, as returned for instance by a search.
    Id(&'a str),
}

impl<'a> ChannelFilter<'a> {
    /// The query parameter that expresses this filter.
    pub fn query_param(&self) -> (&'static str, &'a str) {
        match *self {
            ChannelFilter::Username(username) => ("forUsername", username),
            ChannelFilter::Id(id) => ("id", id),
        }
    }
}

/// Response structure for the `channels.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// The value will be `youtube#channelListResponse`.
    #[serde(default)]
    pub kind: String,
    /// Empty (or absent) when no channel matches the filter.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `channel` resource, with only the `contentDetails` part.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    #[serde(rename = "contentDetails")]
    pub content_details: ChannelContentDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: RelatedPlaylists,
}

/// Playlists YouTube maintains for every channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist that holds every video the channel has published.
    pub uploads: String,
}
