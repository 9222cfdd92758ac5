//! Offset-based pagination over list endpoints.
//!
//! List endpoints accept `limit`/`offset` query parameters and return one
//! page of items plus pagination metadata. [`OffsetPager`] stitches the
//! pages into a single lazy sequence of items.

use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    client::{Client, Decoded},
    config::Config,
    error::AgentAuthError,
    options::RequestOptions,
};

/// One page of results from an offset-paginated list endpoint
///
/// Metadata fields are optional: servers that omit them still paginate, the
/// continuation check just falls back to "a non-empty full page may have
/// more behind it".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OffsetPage<T> {
    /// Items on this page, in server order
    #[serde(default)]
    pub items: Vec<T>,
    /// Total number of records matching the query
    #[serde(default)]
    pub total: Option<u64>,
    /// Page size the server applied
    #[serde(default)]
    pub limit: Option<u64>,
    /// Offset of the first item of this page
    #[serde(default)]
    pub offset: Option<u64>,
}

impl<T> OffsetPage<T> {
    /// Offset of the page that would follow this one
    #[must_use]
    pub fn next_offset(&self) -> u64 {
        self.offset.unwrap_or(0) + self.items.len() as u64
    }

    /// Whether another page remains after this one
    ///
    /// False when the page is empty, shorter than its stated `limit`, or
    /// when the next offset reaches the reported `total`.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if let Some(limit) = self.limit
            && (self.items.len() as u64) < limit
        {
            return false;
        }
        match self.total {
            Some(total) => self.next_offset() < total,
            None => true,
        }
    }
}

/// Query-parameter types that carry `limit`/`offset`
///
/// Implemented by every list-params type so [`OffsetPager`] can re-issue
/// the original filters with only the offset advanced.
pub trait OffsetParams: Serialize + Send + Sync {
    /// Requested page size, if set
    fn limit(&self) -> Option<u64>;
    /// Current offset, if set
    fn offset(&self) -> Option<u64>;
    /// Replaces the offset for the next page fetch
    fn set_offset(&mut self, offset: u64);
}

/// Lazy, forward-only pager over every item of an offset-paginated endpoint
///
/// Nothing is requested until the first call to [`next`](Self::next); each
/// drained page triggers one fetch for the following page, reusing the
/// original filters with the offset advanced by the page size. The sequence
/// is not restartable, and a failed page fetch is terminal — items already
/// yielded are not retracted.
///
/// There is no consistency guarantee across page fetches: concurrent
/// server-side mutation of the collection may cause skipped or duplicated
/// items.
pub struct OffsetPager<'c, C: Config, P, T> {
    client: &'c Client<C>,
    path: &'static str,
    params: P,
    options: RequestOptions,
    buffer: std::vec::IntoIter<T>,
    next_offset: u64,
    has_next: bool,
    started: bool,
    finished: bool,
    last_raw: Option<Bytes>,
}

impl<'c, C, P, T> OffsetPager<'c, C, P, T>
where
    C: Config,
    P: OffsetParams,
    T: DeserializeOwned,
{
    pub(crate) fn new(
        client: &'c Client<C>,
        path: &'static str,
        params: P,
        options: RequestOptions,
    ) -> Self {
        Self {
            client,
            path,
            params,
            options,
            buffer: Vec::new().into_iter(),
            next_offset: 0,
            has_next: false,
            started: false,
            finished: false,
            last_raw: None,
        }
    }

    /// Yields the next item, fetching the next page once the current one is
    /// drained. Returns `None` when the sequence is exhausted. A failed
    /// page fetch yields the error once, then the sequence ends.
    pub async fn next(&mut self) -> Option<Result<T, AgentAuthError>> {
        loop {
            if self.finished {
                return None;
            }
            if let Some(item) = self.buffer.next() {
                return Some(Ok(item));
            }
            if self.started {
                if !self.has_next {
                    self.finished = true;
                    return None;
                }
                self.params.set_offset(self.next_offset);
            }
            if let Err(e) = self.fetch_page().await {
                self.finished = true;
                return Some(Err(e));
            }
        }
    }

    /// The raw body of the most recently fetched page, for diagnostics
    #[must_use]
    pub fn last_raw(&self) -> Option<&Bytes> {
        self.last_raw.as_ref()
    }

    /// Adapts the pager into a [`futures::Stream`] of items
    pub fn into_stream(self) -> impl Stream<Item = Result<T, AgentAuthError>> + 'c
    where
        P: 'c,
        T: 'c,
    {
        futures::stream::unfold(self, |mut pager| async move {
            let item = pager.next().await?;
            Some((item, pager))
        })
    }

    async fn fetch_page(&mut self) -> Result<(), AgentAuthError> {
        let decoded: Decoded<OffsetPage<T>> = self
            .client
            .get_with_query_decoded(self.path, &self.params, &self.options)
            .await?;
        let (page, raw) = decoded.into_parts();

        self.started = true;
        self.next_offset = page.next_offset();
        self.has_next = page.has_next_page();
        self.last_raw = Some(raw);
        self.buffer = page.items.into_iter();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: usize, total: Option<u64>, limit: Option<u64>, offset: Option<u64>) -> OffsetPage<u32> {
        OffsetPage {
            items: (0..items as u32).collect(),
            total,
            limit,
            offset,
        }
    }

    #[test]
    fn full_page_below_total_has_next() {
        let p = page(3, Some(7), Some(3), Some(0));
        assert!(p.has_next_page());
        assert_eq!(p.next_offset(), 3);
    }

    #[test]
    fn last_partial_page_is_terminal() {
        let p = page(1, Some(7), Some(3), Some(6));
        assert!(!p.has_next_page());
    }

    #[test]
    fn short_page_is_terminal_even_without_total() {
        let p = page(2, None, Some(3), Some(0));
        assert!(!p.has_next_page());
    }

    #[test]
    fn full_page_without_total_continues() {
        let p = page(3, None, Some(3), Some(0));
        assert!(p.has_next_page());
    }

    #[test]
    fn empty_page_is_terminal() {
        let p = page(0, Some(10), Some(0), Some(0));
        assert!(!p.has_next_page());
        assert_eq!(p.next_offset(), 0);
    }

    #[test]
    fn next_offset_reaching_total_is_terminal() {
        let p = page(3, Some(6), Some(3), Some(3));
        assert!(!p.has_next_page());
        assert_eq!(p.next_offset(), 6);
    }

    #[test]
    fn envelope_tolerates_missing_metadata() {
        let p: OffsetPage<u32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(p.items, vec![1, 2]);
        assert!(p.total.is_none());
        assert_eq!(p.next_offset(), 2);
    }

    #[test]
    fn envelope_tolerates_unknown_fields() {
        let p: OffsetPage<u32> =
            serde_json::from_str(r#"{"items": [1], "total": 5, "page_color": "blue"}"#).unwrap();
        assert_eq!(p.total, Some(5));
    }
}
