//! Lazy pagination over collection endpoints.
//!
//! List endpoints return one page of results plus an RFC 5988 `Link`
//! response header whose `rel="next"` relation points at the following
//! page. [`PageIter`] walks the chain one element at a time, fetching pages
//! on demand.

use std::collections::VecDeque;
use std::sync::Arc;

use super::ClientInner;
use crate::{Error, Result};

/// Decodes one page body into its typed elements.
type PageDecoder<T> = Box<dyn Fn(&[u8]) -> Result<Vec<T>> + Send + Sync>;

/// A pull-based iterator over a paginated collection endpoint.
///
/// Each call to [`next`](Self::next) performs at most one network round
/// trip. Iteration order is strict page order, then within-page order.
/// Once a fetch or decode fails the iterator is stuck: the error is
/// returned once and every later call reports the end of the sequence
/// without touching the network again.
///
/// A single iterator must not be driven from multiple call sites at once;
/// its buffered state is not synchronized.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: onfido::OnfidoClient) -> onfido::Result<()> {
/// let mut applicants = client.applicants().list();
/// while let Some(applicant) = applicants.next().await? {
///     println!("{:?}", applicant.first_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PageIter<T> {
    inner: Arc<ClientInner>,
    /// URL of the next unfetched page; `None` once the last page is in.
    next_url: Option<String>,
    /// Decoded elements not yet yielded, front first.
    buffer: VecDeque<T>,
    decode_page: PageDecoder<T>,
    /// Error to surface on the first advance (failed preconditions).
    pending_error: Option<Error>,
    /// Sticky: set once any advance fails.
    failed: bool,
}

impl<T> PageIter<T> {
    pub(crate) fn new<F>(inner: Arc<ClientInner>, first_url: impl Into<String>, decode: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<T>> + Send + Sync + 'static,
    {
        Self {
            inner,
            next_url: Some(first_url.into()),
            buffer: VecDeque::new(),
            decode_page: Box::new(decode),
            pending_error: None,
            failed: false,
        }
    }

    /// An iterator that fails on its first advance without ever issuing a
    /// request. Used when a required parameter is invalid.
    pub(crate) fn failing(inner: Arc<ClientInner>, err: Error) -> Self {
        Self {
            inner,
            next_url: None,
            buffer: VecDeque::new(),
            decode_page: Box::new(|_| Ok(Vec::new())),
            pending_error: Some(err),
            failed: false,
        }
    }

    /// Advance to the next element, fetching the next page if needed.
    ///
    /// Returns `Ok(None)` when the collection is exhausted. Note one quirk
    /// of the page protocol: a page that decodes to zero elements but
    /// still carries a next link yields `Ok(None)` for that advance even
    /// though later advances may produce elements. [`collect`](Self::collect)
    /// steps over such gaps; callers driving `next` by hand and needing to
    /// distinguish "gap" from "end" can check [`has_more`](Self::has_more).
    pub async fn next(&mut self) -> Result<Option<T>> {
        if let Some(err) = self.pending_error.take() {
            self.failed = true;
            return Err(err);
        }
        if self.failed {
            return Ok(None);
        }

        if let Some(item) = self.buffer.pop_front() {
            return Ok(Some(item));
        }

        let Some(url) = self.next_url.take() else {
            // Exhausted: no buffered elements, no further pages.
            return Ok(None);
        };

        let (body, next) = match self.inner.get_page(&url).await {
            Ok(page) => page,
            Err(e) => {
                self.failed = true;
                return Err(e);
            }
        };
        let items = match (self.decode_page)(&body) {
            Ok(items) => items,
            Err(e) => {
                self.failed = true;
                return Err(e);
            }
        };

        self.buffer = items.into();
        self.next_url = next;
        Ok(self.buffer.pop_front())
    }

    /// Returns `true` while an unfetched page remains.
    pub fn has_more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Drain the remaining elements into a `Vec`, fetching every page.
    pub async fn collect(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        loop {
            match self.next().await? {
                Some(item) => items.push(item),
                None if self.has_more() => continue,
                None => return Ok(items),
            }
        }
    }
}

impl<T> std::fmt::Debug for PageIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageIter")
            .field("next_url", &self.next_url)
            .field("buffered", &self.buffer.len())
            .field("failed", &self.failed)
            .finish()
    }
}

/// Extract the `rel="next"` target from an RFC 5988 `Link` header value.
///
/// The header carries comma-separated `<url>; param=value` entries, e.g.
/// `<https://api.onfido.com/v3/applicants?page=2>; rel="next"`.
pub(crate) fn next_link(header: &str) -> Option<String> {
    for entry in header.split(',') {
        let mut parts = entry.trim().split(';');
        let Some(target) = parts.next() else {
            continue;
        };
        let target = target.trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }
        for param in parts {
            if let Some(rel) = param.trim().strip_prefix("rel=") {
                if rel.trim_matches('"') == "next" {
                    return Some(target[1..target.len() - 1].to_string());
                }
            }
        }
    }
    None
}
