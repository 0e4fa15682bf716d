//! Enumerates the videos of a playlist.

use crate::youtube_api::{Page, PagedStream, YouTubeApi};
use eyre::WrapErr;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

/// Largest page `playlistItems.list` will return.
pub const PAGE_SIZE: u32 = 50;

/// Streams the video IDs of `playlist_id` in playlist order.
///
/// Pages are requested lazily and one at a time, for as long as the API hands out a
/// continuation token. Nothing is deduplicated.
pub fn playlist_video_ids<'a, A>(
    api: &'a A,
    playlist_id: &'a str,
) -> impl Stream<Item = eyre::Result<String>> + 'a
where
    A: YouTubeApi + Sync,
{
    PagedStream::new(move |page_token| async move {
        let response = api
            .list_playlist_items(playlist_id, PAGE_SIZE, page_token)
            .await
            .wrap_err_with(|| format!("fetch items of playlist {playlist_id}"))?;

        Ok::<_, eyre::Report>(Page {
            items: response
                .items
                .into_iter()
                .map(|item| item.content_details.video_id)
                .collect(),
            next_page_token: response.next_page_token,
        })
    })
}

/// Collects every video ID of `playlist_id`, however many pages that takes.
#[instrument(skip(api))]
pub async fn collect_video_ids<A>(api: &A, playlist_id: &str) -> eyre::Result<Vec<String>>
where
    A: YouTubeApi + Sync,
{
    let mut video_ids = Vec::new();
    let mut stream = std::pin::pin!(playlist_video_ids(api, playlist_id));
    while let Some(video_id) = stream.next().await {
        video_ids.push(video_id?);
    }

    tracing::debug!(videos = video_ids.len(), "collected playlist");
    Ok(video_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, error_kind};
    use crate::youtube_api::fake::{Call, FakeYouTube, paged_ids};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        for pages in [0, 1, 2, 5] {
            let playlist = paged_ids(pages * 50, 50);
            let expected: Vec<String> = playlist.concat();
            let api = FakeYouTube::new().with_playlist("PL", playlist);

            let ids = collect_video_ids(&api, "PL").await.unwrap();

            assert_eq!(ids, expected, "with {pages} pages");
            assert_eq!(api.calls().len(), pages.max(1), "with {pages} pages");
        }
    }

    #[tokio::test]
    async fn short_last_page() {
        let playlist = paged_ids(123, 50);
        let api = FakeYouTube::new().with_playlist("PL", playlist.clone());

        let ids = collect_video_ids(&api, "PL").await.unwrap();

        assert_eq!(ids.len(), 123);
        assert_eq!(ids, playlist.concat());
        assert_eq!(
            api.calls(),
            vec![
                Call::PlaylistItems {
                    playlist_id: "PL".into(),
                    max_results: 50,
                    page_token: None,
                },
                Call::PlaylistItems {
                    playlist_id: "PL".into(),
                    max_results: 50,
                    page_token: Some("page-1".into()),
                },
                Call::PlaylistItems {
                    playlist_id: "PL".into(),
                    max_results: 50,
                    page_token: Some("page-2".into()),
                },
            ]
        );
    }

    #[tokio::test]
    async fn duplicates_are_kept() {
        let pages = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["a".to_string()],
        ];
        let api = FakeYouTube::new().with_playlist("PL", pages);

        let ids = collect_video_ids(&api, "PL").await.unwrap();

        assert_eq!(ids, ["a", "b", "a"]);
    }

    #[tokio::test]
    async fn page_failure_is_reported() {
        let api = FakeYouTube::new();

        let err = collect_video_ids(&api, "missing").await.unwrap_err();

        assert!(matches!(error_kind(&err), Some(Error::Upstream { .. })));
        assert!(format!("{err:#}").contains("fetch items of playlist missing"));
    }
}
