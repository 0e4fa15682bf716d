//! Rating statistics, the controversiality score, and ordering by it.

use crate::youtube_api::{Video, YouTubeApi};
use eyre::WrapErr;
use tracing::instrument;

/// Most IDs `videos.list` accepts in one request.
pub const BATCH_SIZE: usize = 50;

/// A video whose like and dislike counts are both public.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub like_count: u64,
    pub dislike_count: u64,
    /// Always `dislike_ratio(like_count, dislike_count)`.
    pub ratio: f64,
}

impl VideoRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, likes: u64, dislikes: u64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            like_count: likes,
            dislike_count: dislikes,
            ratio: dislike_ratio(likes, dislikes),
        }
    }

    /// `None` if the video does not expose both counts.
    fn from_video(video: Video) -> Option<Self> {
        let stats = &video.statistics;
        let (Some(likes), Some(dislikes)) =
            (stats.like_count.as_deref(), stats.dislike_count.as_deref())
        else {
            tracing::debug!(video_id = video.id, "ratings hidden, skipping");
            return None;
        };

        let (Ok(like_count), Ok(dislike_count)) = (likes.parse::<u64>(), dislikes.parse::<u64>())
        else {
            tracing::warn!(video_id = video.id, likes, dislikes, "unreadable rating counts, skipping");
            return None;
        };

        Some(Self::new(video.id, video.snippet.title, like_count, dislike_count))
    }
}

/// Share of dislikes among all ratings, as a percentage in `[0, 100]`.
///
/// A video nobody has rated sits at the neutral `50.0`; a video with likes but no dislikes is not
/// controversial at all and scores `0.0`.
pub fn dislike_ratio(likes: u64, dislikes: u64) -> f64 {
    if likes == 0 && dislikes == 0 {
        50.0
    } else if dislikes == 0 {
        0.0
    } else {
        // summed as floats, u64 addition can overflow
        dislikes as f64 / (likes as f64 + dislikes as f64) * 100.0
    }
}

/// Fetches statistics for `video_ids` and keeps the videos whose ratings are public.
///
/// IDs are sent in consecutive batches of [`BATCH_SIZE`], so `N` IDs cost `ceil(N / 50)` requests
/// and an empty list costs none. Records come back in the order the API returns them.
#[instrument(skip(api, video_ids), fields(videos = video_ids.len()))]
pub async fn fetch_video_records<A: YouTubeApi>(
    api: &A,
    video_ids: &[String],
) -> eyre::Result<Vec<VideoRecord>> {
    let mut records = Vec::with_capacity(video_ids.len());

    for (batch_no, batch) in video_ids.chunks(BATCH_SIZE).enumerate() {
        let response = api.list_videos(batch).await.wrap_err_with(|| {
            format!(
                "fetch statistics for videos {}..{}",
                batch_no * BATCH_SIZE,
                batch_no * BATCH_SIZE + batch.len()
            )
        })?;

        let returned = response.items.len();
        let before = records.len();
        records.extend(response.items.into_iter().filter_map(VideoRecord::from_video));
        tracing::trace!(
            batch_no,
            returned,
            rated = records.len() - before,
            "processed statistics batch"
        );
    }

    tracing::debug!(rated = records.len(), "fetched video statistics");
    Ok(records)
}

/// Orders records from most to least controversial.
///
/// The sort is stable: records with equal ratios keep their relative order.
pub fn rank_by_ratio(mut records: Vec<VideoRecord>) -> Vec<VideoRecord> {
    records.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
    records
}
