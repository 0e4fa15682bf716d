//! Failure kinds that callers need to tell apart.
//!
//! Everything in this crate returns [`eyre::Result`], so these are carried inside an
//! [`eyre::Report`] alongside whatever context was added on the way up. Use [`error_kind`] to get
//! the kind back out of a report.

use thiserror::Error;

/// A failure the command-line front-end reacts to specifically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `YOUTUBE_API_KEY` is not set, or is empty.
    #[error("YOUTUBE_API_KEY must be set to a YouTube Data API key")]
    MissingApiKey,

    /// The requested number of videos is not a positive integer.
    #[error("Invalid result count: {0}")]
    InvalidCount(i64),

    /// Neither the username lookup nor the keyword search found the channel.
    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    /// The API could not be reached, or answered with a non-success status.
    #[error("YouTube API {endpoint} unavailable: {reason}")]
    Upstream { endpoint: String, reason: String },

    /// The API answered, but not with the JSON shape we expect.
    #[error("YouTube API {endpoint} returned a malformed response: {reason}")]
    MalformedResponse { endpoint: String, reason: String },
}

/// Finds the [`Error`] kind carried anywhere in `report`'s chain, if there is one.
pub fn error_kind(report: &eyre::Report) -> Option<&Error> {
    report.chain().find_map(|cause| cause.downcast_ref::<Error>())
}
