//! Shared list-response pieces and the pagination stream.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll, ready};
use tokio_stream::Stream;

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Clone, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
}

/// One page of a list endpoint, reduced to what [`PagedStream`] needs.
#[derive(Debug)]
pub struct Page<T> {
    pub items: VecDeque<T>,
    /// Present as long as the endpoint has more results after this page.
    pub next_page_token: Option<String>,
}

type PendingPage<'a, F, T> = Pin<Box<dyn Future<Output = eyre::Result<(F, Page<T>)>> + Send + 'a>>;

/// Yields the items of a paginated list endpoint one at a time.
///
/// `fetch` is called with `None` for the first page and with the previous page's
/// `nextPageToken` for every page after that. The stream ends after the first page that carries
/// no token. There is no limit on the number of pages. The first request is only sent once the
/// stream is polled.
///
/// An error from `fetch` is yielded once and ends the stream.
pub struct PagedStream<'a, T, F> {
    buffered: VecDeque<T>,
    next_page: Option<PendingPage<'a, F, T>>,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    pub fn new<Fut>(fetch: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        Self {
            buffered: VecDeque::new(),
            next_page: Some(Self::request(fetch, None)),
        }
    }

    fn request<Fut>(fetch: F, page_token: Option<String>) -> PendingPage<'a, F, T>
    where
        F: Fn(Option<String>) -> Fut + Send + 'a,
        Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
    {
        Box::pin(async move {
            let page = fetch(page_token).await?;
            // hand `fetch` back so the following page can be requested with it
            Ok((fetch, page))
        })
    }
}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = eyre::Result<Page<T>>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            let Some(pending) = self.next_page.as_mut() else {
                return Poll::Ready(None);
            };

            match ready!(pending.as_mut().poll(cx)) {
                Ok((fetch, page)) => {
                    tracing::trace!(
                        items = page.items.len(),
                        more = page.next_page_token.is_some(),
                        "received page"
                    );
                    self.buffered.extend(page.items);
                    self.next_page = page
                        .next_page_token
                        .map(|token| Self::request(fetch, Some(token)));
                }
                Err(e) => {
                    self.next_page = None;
                    return Poll::Ready(Some(Err(e)));
                }
            }
        }
    }
}
