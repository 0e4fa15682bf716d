//! Plain-text presentation of the ranking.

use crate::ranking::VideoRecord;
use std::io::{self, Write};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

pub const NOT_ENOUGH_VIDEOS: &str = "Channel doesn't have that many videos";

/// What [`write_report`] ended up writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// The top `n` videos were listed.
    Listed(usize),
    /// Fewer rated videos than requested; only [`NOT_ENOUGH_VIDEOS`] was written.
    NotEnoughVideos { available: usize, requested: usize },
}

pub fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{video_id}")
}

/// Writes the `count` most controversial videos of `ranked`, ranks starting at 1.
///
/// Nothing is listed when there are fewer than `count` videos.
pub fn write_report(
    out: &mut impl Write,
    ranked: &[VideoRecord],
    count: usize,
) -> io::Result<Report> {
    if ranked.len() < count {
        writeln!(out, "{NOT_ENOUGH_VIDEOS}")?;
        return Ok(Report::NotEnoughVideos {
            available: ranked.len(),
            requested: count,
        });
    }

    for (rank, video) in (1..).zip(ranked.iter().take(count)) {
        writeln!(out, "{rank}. {}", video.title)?;
        writeln!(out, "Link: {}", watch_url(&video.id))?;
        writeln!(
            out,
            "Likes: {} Dislikes: {}",
            video.like_count, video.dislike_count
        )?;
        writeln!(out, "Ratio: {}", format_ratio(video.ratio))?;
    }
    Ok(Report::Listed(count))
}

/// Two decimals at most and at least one, so `50.0`, `12.5`, `33.33`.
///
/// Exact ties round to even: `3.125` prints as `3.12`.
fn format_ratio(ratio: f64) -> String {
    let fixed = format!("{ratio:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
