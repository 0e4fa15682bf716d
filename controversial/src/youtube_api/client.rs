//! HTTP client for the read-only parts of the YouTube Data API v3.

use crate::config::Config;
use crate::error::Error;
use crate::youtube_api::{
    YouTubeApi,
    channels::{ChannelFilter, ChannelListResponse},
    playlist_items::PlaylistItemListResponse,
    search::SearchListResponse,
    videos::VideoListResponse,
};
use eyre::Context;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Client for the public YouTube Data API v3 endpoints.
///
/// Only public data is read, so requests are authorised with a plain API key (the `key` query
/// parameter) rather than OAuth. One underlying [`reqwest::Client`] is reused for every request,
/// and each request is bounded by [`Config::timeout`].
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    config: Config,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    pub fn new(config: Config) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("build HTTP client")?;
        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sends a `GET` for `endpoint` (relative to the base URL) and decodes the JSON body.
    ///
    /// Transport failures and non-success statuses become [`Error::Upstream`], bodies that do not
    /// decode as `R` become [`Error::MalformedResponse`].
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    async fn get<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<R> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        let upstream = |reason: String| Error::Upstream {
            endpoint: endpoint.to_string(),
            reason,
        };

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(query_params)
            .send()
            .await
            // the URL carries the API key, so it must not end up in the message
            .map_err(|e| upstream(e.without_url().to_string()))?;

        let status_code = response.status();
        if !status_code.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(upstream(format!("status {status_code}: {error_text}")).into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| upstream(e.without_url().to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            Error::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl YouTubeApi for YouTubeClient {
    /// Calls `channels.list` with `part=contentDetails`.
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    async fn list_channels(&self, filter: ChannelFilter<'_>) -> eyre::Result<ChannelListResponse> {
        let query_params = [("part", "contentDetails"), filter.query_param()];

        let channels: ChannelListResponse = self.get("channels", &query_params).await?;

        tracing::debug!(
            total_results = channels.page_info.total_results,
            returned_items = channels.items.len(),
            "fetched channels"
        );

        Ok(channels)
    }

    /// Calls `search.list` restricted to channels.
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        let max_results_string = max_results.to_string();
        let query_params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "channel"),
            ("maxResults", max_results_string.as_str()),
        ];

        let results: SearchListResponse = self.get("search", &query_params).await?;

        tracing::debug!(
            returned_items = results.items.len(),
            "searched for channel"
        );

        Ok(results)
    }

    /// Calls `playlistItems.list` for one page of `playlist_id`.
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<String>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "contentDetails"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        // Add pageToken if provided
        if let Some(ref token) = page_token {
            query_params.push(("pageToken", token.as_str()));
        }

        let items: PlaylistItemListResponse = self.get("playlistItems", &query_params).await?;

        tracing::debug!(
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            has_next_page = items.next_page_token.is_some(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// Calls `videos.list` with `part=snippet,statistics` for all of `video_ids` at once.
    ///
    /// The API accepts at most 50 IDs per call; batching is up to the caller.
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(requested = video_ids.len()))]
    async fn list_videos(&self, video_ids: &[String]) -> eyre::Result<VideoListResponse> {
        let ids = video_ids.join(",");
        let max_results_string = video_ids.len().to_string();
        let query_params = [
            ("part", "snippet,statistics"),
            ("id", ids.as_str()),
            ("maxResults", max_results_string.as_str()),
        ];

        let videos: VideoListResponse = self.get("videos", &query_params).await?;

        tracing::debug!(
            returned_items = videos.items.len(),
            "fetched video statistics"
        );

        Ok(videos)
    }
}
