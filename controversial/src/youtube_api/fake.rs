//! In-memory [`YouTubeApi`] for unit tests.

use super::YouTubeApi;
use super::channels::{
    Channel, ChannelContentDetails, ChannelFilter, ChannelListResponse, RelatedPlaylists,
};
use super::playlist_items::{PlaylistItem, PlaylistItemContentDetails, PlaylistItemListResponse};
use super::search::{ResourceId, SearchListResponse, SearchResult};
use super::videos::{Video, VideoListResponse, VideoSnippet, VideoStatistics};
use crate::error::Error;
use std::collections::HashMap;
use std::sync::Mutex;

/// One request as the fake received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    ChannelsByUsername(String),
    ChannelsById(String),
    Search { query: String, max_results: u32 },
    PlaylistItems {
        playlist_id: String,
        max_results: u32,
        page_token: Option<String>,
    },
    Videos(Vec<String>),
}

#[derive(Debug, Default)]
pub(crate) struct FakeYouTube {
    /// username -> channel ID
    usernames: HashMap<String, String>,
    /// channel ID -> uploads playlist
    uploads: HashMap<String, String>,
    /// search query -> channel ID of the best hit
    search_hits: HashMap<String, String>,
    /// playlist ID -> pages of video IDs
    playlists: HashMap<String, Vec<Vec<String>>>,
    videos: HashMap<String, Video>,
    calls: Mutex<Vec<Call>>,
}

impl FakeYouTube {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_channel(mut self, username: &str, channel_id: &str, uploads: &str) -> Self {
        self.usernames
            .insert(username.to_string(), channel_id.to_string());
        self.uploads
            .insert(channel_id.to_string(), uploads.to_string());
        self
    }

    pub(crate) fn with_search_hit(mut self, query: &str, channel_id: &str) -> Self {
        self.search_hits
            .insert(query.to_string(), channel_id.to_string());
        self
    }

    pub(crate) fn with_playlist(mut self, playlist_id: &str, pages: Vec<Vec<String>>) -> Self {
        self.playlists.insert(playlist_id.to_string(), pages);
        self
    }

    pub(crate) fn with_video(mut self, video: Video) -> Self {
        self.videos.insert(video.id.clone(), video);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn channel_list(&self, channel_id: Option<&String>) -> ChannelListResponse {
        let items = channel_id
            .and_then(|id| {
                self.uploads.get(id).map(|uploads| Channel {
                    id: id.clone(),
                    content_details: ChannelContentDetails {
                        related_playlists: RelatedPlaylists {
                            uploads: uploads.clone(),
                        },
                    },
                })
            })
            .into_iter()
            .collect();
        ChannelListResponse {
            items,
            ..Default::default()
        }
    }
}

/// A video with the given title and optional rating counts.
pub(crate) fn video(id: &str, title: &str, likes: Option<u64>, dislikes: Option<u64>) -> Video {
    Video {
        id: id.to_string(),
        snippet: VideoSnippet {
            title: title.to_string(),
        },
        statistics: VideoStatistics {
            like_count: likes.map(|n| n.to_string()),
            dislike_count: dislikes.map(|n| n.to_string()),
        },
    }
}

/// `n` distinct video IDs, split into pages of `page_size`.
pub(crate) fn paged_ids(n: usize, page_size: usize) -> Vec<Vec<String>> {
    let ids: Vec<String> = (0..n).map(|i| format!("vid{i:05}")).collect();
    ids.chunks(page_size).map(<[String]>::to_vec).collect()
}

impl YouTubeApi for FakeYouTube {
    async fn list_channels(&self, filter: ChannelFilter<'_>) -> eyre::Result<ChannelListResponse> {
        Ok(match filter {
            ChannelFilter::Username(username) => {
                self.record(Call::ChannelsByUsername(username.to_string()));
                self.channel_list(self.usernames.get(username))
            }
            ChannelFilter::Id(id) => {
                self.record(Call::ChannelsById(id.to_string()));
                self.channel_list(Some(&id.to_string()))
            }
        })
    }

    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        self.record(Call::Search {
            query: query.to_string(),
            max_results,
        });
        let items = self
            .search_hits
            .get(query)
            .map(|channel_id| SearchResult {
                id: ResourceId {
                    kind: "youtube#channel".to_string(),
                    channel_id: Some(channel_id.clone()),
                },
            })
            .into_iter()
            .collect();
        Ok(SearchListResponse {
            items,
            ..Default::default()
        })
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        self.record(Call::PlaylistItems {
            playlist_id: playlist_id.to_string(),
            max_results,
            page_token: page_token.clone(),
        });

        let Some(pages) = self.playlists.get(playlist_id) else {
            return Err(Error::Upstream {
                endpoint: "playlistItems".to_string(),
                reason: format!("status 404 Not Found: playlist {playlist_id}"),
            }
            .into());
        };

        let index = match page_token.as_deref() {
            None => 0,
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| eyre::eyre!("bad page token {token}"))?,
        };

        let items = pages
            .get(index)
            .into_iter()
            .flatten()
            .map(|video_id| PlaylistItem {
                content_details: PlaylistItemContentDetails {
                    video_id: video_id.clone(),
                },
            })
            .collect();
        let next_page_token = (index + 1 < pages.len()).then(|| format!("page-{}", index + 1));

        Ok(PlaylistItemListResponse {
            items,
            next_page_token,
            ..Default::default()
        })
    }

    async fn list_videos(&self, video_ids: &[String]) -> eyre::Result<VideoListResponse> {
        self.record(Call::Videos(video_ids.to_vec()));
        let items = video_ids
            .iter()
            .filter_map(|id| self.videos.get(id).cloned())
            .collect();
        Ok(VideoListResponse {
            items,
            ..Default::default()
        })
    }
}
