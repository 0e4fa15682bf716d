//! The slice of the YouTube Data API v3 this crate reads from.
//!
//! Four list endpoints are involved, each wrapped by one method of [`YouTubeApi`]:
//!
//! | method                                  | endpoint             | used for                          |
//! |-----------------------------------------|----------------------|-----------------------------------|
//! | [`YouTubeApi::list_channels`]           | `channels.list`      | uploads playlist of a channel     |
//! | [`YouTubeApi::search_channels`]         | `search.list`        | channel ID for a free-text name   |
//! | [`YouTubeApi::list_playlist_items`]     | `playlistItems.list` | one page of a playlist's videos   |
//! | [`YouTubeApi::list_videos`]             | `videos.list`        | titles and like/dislike counts    |
//!
//! [`YouTubeClient`] implements the trait over HTTP. The pipeline in the crate root only ever
//! sees the trait, so it can just as well run against an in-memory implementation.

pub mod channels;
pub mod client;
pub mod playlist_items;
pub mod search;
pub mod types;
pub mod videos;

#[cfg(test)]
pub(crate) mod fake;

use std::future::Future;

// Re-export main types for convenience
pub use client::YouTubeClient;
pub use types::{Page, PageInfo, PagedStream};

pub use channels::{Channel, ChannelFilter, ChannelListResponse};
pub use playlist_items::{PlaylistItem, PlaylistItemListResponse};
pub use search::{SearchListResponse, SearchResult};
pub use videos::{Video, VideoListResponse, VideoSnippet, VideoStatistics};

/// Read access to the YouTube Data API.
///
/// Each method is exactly one API request. None of them retry.
pub trait YouTubeApi {
    /// `channels.list`, selecting by username or by channel ID.
    fn list_channels(
        &self,
        filter: ChannelFilter<'_>,
    ) -> impl Future<Output = eyre::Result<ChannelListResponse>> + Send;

    /// `search.list` for channels matching the free-text `query`.
    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> impl Future<Output = eyre::Result<SearchListResponse>> + Send;

    /// One page (at most `max_results` items) of `playlistItems.list`.
    ///
    /// `page_token` is `None` for the first page, and the previous page's `nextPageToken`
    /// otherwise.
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> impl Future<Output = eyre::Result<PlaylistItemListResponse>> + Send;

    /// `videos.list` for the given IDs (at most 50).
    fn list_videos(
        &self,
        video_ids: &[String],
    ) -> impl Future<Output = eyre::Result<VideoListResponse>> + Send;
}
