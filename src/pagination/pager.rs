//! The lazy page walker

use std::marker::PhantomData;

use futures::stream::{self, Stream};
use tracing::debug;
use url::Url;

use super::page::{Listable, Page};
use crate::client::{RequestOpts, ServiceClient};
use crate::error::Result;

/// Where the page stream picks up on its next poll.
#[derive(Debug)]
enum Cursor {
    Start,
    Next(Url),
    Done,
}

/// Walks a paginated listing one page at a time.
///
/// A pager is created per list call and captures the starting URL
/// (collection endpoint plus query string) and the headers the listing
/// carries. It issues one GET per page, strictly sequentially, and
/// follows the body's `next` link until the collection is exhausted.
///
/// Termination rules:
/// - no `next` link: done;
/// - an empty page: done, even when a `next` link is present (servers
///   have been seen emitting spurious trailing links);
/// - the visit callback returns `Ok(false)` or an error: done, with no
///   further fetches.
///
/// Any transport, status, or decode error aborts the walk and surfaces
/// from the iteration entry point; pages already delivered stand.
#[derive(Debug)]
pub struct Pager<'a, T> {
    client: &'a ServiceClient,
    start: Url,
    headers: Vec<(String, String)>,
    _resource: PhantomData<T>,
}

impl<'a, T: Listable> Pager<'a, T> {
    /// Create a pager over the given collection URL
    pub(crate) fn new(client: &'a ServiceClient, start: Url) -> Self {
        Self {
            client,
            start,
            headers: Vec::new(),
            _resource: PhantomData,
        }
    }

    /// Capture a header to send with every page fetch
    #[must_use]
    pub(crate) fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// The URL the walk starts from
    pub fn start_url(&self) -> &Url {
        &self.start
    }

    /// Fetch pages and hand each one to `visit` until the collection is
    /// exhausted, `visit` returns `Ok(false)`, or an error occurs.
    ///
    /// The callback runs synchronously between fetches; returning
    /// `Ok(false)` stops the walk before the next HTTP call. A terminal
    /// empty page is not delivered.
    pub async fn each_page<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&Page<T>) -> Result<bool>,
    {
        let mut next = Some(self.start.clone());
        while let Some(url) = next.take() {
            let page = self.fetch(url).await?;
            if page.is_empty() {
                return Ok(());
            }
            if !visit(&page)? {
                return Ok(());
            }
            next = self.follow(&page)?;
        }
        Ok(())
    }

    /// Walk the whole listing and collect every resource.
    pub async fn all(&self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(self.start.clone());
        while let Some(url) = next.take() {
            let page = self.fetch(url).await?;
            if page.is_empty() {
                break;
            }
            next = self.follow(&page)?;
            items.extend(page.into_items());
        }
        Ok(items)
    }

    /// Consume the pager into a lazy stream of pages.
    ///
    /// Pages are fetched on demand as the stream is polled, with the same
    /// termination rules as [`each_page`](Self::each_page).
    pub fn pages(self) -> impl Stream<Item = Result<Page<T>>> + 'a
    where
        T: 'a,
    {
        stream::try_unfold((self, Cursor::Start), |(pager, cursor)| async move {
            let url = match cursor {
                Cursor::Start => pager.start.clone(),
                Cursor::Next(url) => url,
                Cursor::Done => return Ok(None),
            };

            let page = pager.fetch(url).await?;
            if page.is_empty() {
                return Ok(None);
            }
            let cursor = match pager.follow(&page)? {
                Some(url) => Cursor::Next(url),
                None => Cursor::Done,
            };
            Ok(Some((page, (pager, cursor))))
        })
    }

    /// Issue the GET for one page.
    async fn fetch(&self, url: Url) -> Result<Page<T>> {
        debug!("fetching page {}", url);
        let mut opts = RequestOpts::new(&[200, 204]);
        for (key, value) in &self.headers {
            opts = opts.header(key.clone(), value.clone());
        }
        let response = self.client.get(url.clone(), &opts).await?;
        Page::from_response(url, &response)
    }

    /// Resolve the page's `next` link, if any, against the endpoint.
    fn follow(&self, page: &Page<T>) -> Result<Option<Url>> {
        match page.next_href() {
            Some(href) => Ok(Some(self.client.resolve(href)?)),
            None => Ok(None),
        }
    }
}
