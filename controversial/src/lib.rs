#![forbid(unsafe_code)]

//! Finds the most controversial videos of a YouTube channel.
//!
//! A video's controversiality is the share of dislikes among its ratings (see
//! [`dislike_ratio`]). Getting there takes three steps against the YouTube Data API, run one after
//! the other:
//!
//! 1. [`resolve_uploads_playlist`] maps a username or channel name to the channel's uploads
//!    playlist,
//! 2. [`collect_video_ids`] pages through that playlist,
//! 3. [`fetch_video_records`] pulls like/dislike counts in batches of 50, and
//!    [`rank_by_ratio`] orders the result.
//!
//! [`most_controversial`] runs all of them. The API is reached through the [`YouTubeApi`] trait,
//! implemented over HTTP by [`YouTubeClient`].
//!
//! ```rust,no_run
//! use controversial::{Config, YouTubeClient, most_controversial, write_report};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new(Config::from_env()?)?;
//! let ranked = most_controversial(&client, "TestChannel").await?;
//! write_report(&mut std::io::stdout(), &ranked, 5)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod ranking;
pub mod report;
pub mod resolver;
pub mod youtube_api;

pub use collector::{collect_video_ids, playlist_video_ids};
pub use config::Config;
pub use error::{Error, error_kind};
pub use ranking::{VideoRecord, dislike_ratio, fetch_video_records, rank_by_ratio};
pub use report::{Report, watch_url, write_report};
pub use resolver::resolve_uploads_playlist;
pub use youtube_api::{YouTubeApi, YouTubeClient};

use eyre::WrapErr;
use tracing::instrument;

/// Every rated video uploaded by `channel`, most controversial first.
#[instrument(skip(api))]
pub async fn most_controversial<A>(api: &A, channel: &str) -> eyre::Result<Vec<VideoRecord>>
where
    A: YouTubeApi + Sync,
{
    let playlist_id = resolve_uploads_playlist(api, channel).await?;

    let video_ids = collect_video_ids(api, &playlist_id)
        .await
        .wrap_err_with(|| format!("list uploads of {channel:?}"))?;

    let records = fetch_video_records(api, &video_ids)
        .await
        .wrap_err_with(|| format!("fetch statistics for uploads of {channel:?}"))?;

    tracing::info!(
        uploads = video_ids.len(),
        rated = records.len(),
        "ranking videos"
    );
    Ok(rank_by_ratio(records))
}
