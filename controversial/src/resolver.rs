//! Turns whatever the user typed for a channel into that channel's uploads playlist.

use crate::error::Error;
use crate::youtube_api::{ChannelFilter, YouTubeApi};
use eyre::WrapErr;
use tracing::instrument;

/// Only the best search hit is ever used.
const SEARCH_RESULTS: u32 = 1;

/// Finds the ID of the playlist holding every video `identifier`'s channel has uploaded.
///
/// `identifier` is normally a channel username. Usernames cannot contain spaces, so an
/// identifier with a space is treated as a channel name instead: it is looked up through a
/// keyword search, and the channel of the first hit is used.
///
/// Fails with [`Error::ChannelNotFound`] when the search has no hit or the channel lookup
/// returns nothing.
#[instrument(skip(api))]
pub async fn resolve_uploads_playlist<A: YouTubeApi>(
    api: &A,
    identifier: &str,
) -> eyre::Result<String> {
    let channels = if identifier.contains(' ') {
        let results = api
            .search_channels(identifier, SEARCH_RESULTS)
            .await
            .wrap_err_with(|| format!("search for channel named {identifier:?}"))?;

        let Some(channel_id) = results
            .items
            .into_iter()
            .find_map(|hit| hit.id.channel_id)
        else {
            tracing::debug!("search found no channel");
            return Err(Error::ChannelNotFound(identifier.to_string()).into());
        };
        tracing::debug!(channel_id, "search matched channel");

        api.list_channels(ChannelFilter::Id(&channel_id))
            .await
            .wrap_err_with(|| format!("look up channel {channel_id}"))?
    } else {
        api.list_channels(ChannelFilter::Username(identifier))
            .await
            .wrap_err_with(|| format!("look up channel with username {identifier:?}"))?
    };

    let Some(channel) = channels.items.into_iter().next() else {
        return Err(Error::ChannelNotFound(identifier.to_string()).into());
    };

    let uploads = channel.content_details.related_playlists.uploads;
    tracing::debug!(channel_id = channel.id, uploads, "resolved uploads playlist");
    Ok(uploads)
}
