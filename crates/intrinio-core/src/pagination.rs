//! Cursor pagination.
//!
//! Paged responses carry an opaque `next_page` token. Sending it back on the
//! same operation returns the following page; a response without a token is
//! the last one. Tokens are passed through untouched.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ApiError;
use crate::invoker::{ApiClient, Operation};

/// Opaque continuation token returned by a paged endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    /// `None` for blank tokens, which the API uses interchangeably with `null`.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PageCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PageCursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Self::new(token).ok_or_else(|| serde::de::Error::custom("page cursor must not be blank"))
    }
}

/// Deserializer for `next_page` fields: `null`, missing and `""` all mean "no more pages".
pub fn deserialize_cursor<'de, D>(deserializer: D) -> Result<Option<PageCursor>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.and_then(PageCursor::new))
}

/// Response envelope that may continue on another page.
pub trait Paginated {
    type Item;

    fn next_page(&self) -> Option<&PageCursor>;

    fn into_items(self) -> Vec<Self::Item>;

    fn is_last_page(&self) -> bool {
        self.next_page().is_none()
    }
}

/// Operation whose request accepts a `next_page` cursor.
pub trait PagedOperation: Operation + Clone {
    fn set_next_page(&mut self, cursor: Option<PageCursor>);
}

/// Items gathered by [`ApiClient::collect_pages`].
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedPages<T> {
    pub items: Vec<T>,
    pub pages: usize,
    /// Cursor to resume from when the page limit stopped collection early.
    /// With no page fetched this is the starting cursor of the operation.
    pub next_page: Option<PageCursor>,
}

impl<T> CollectedPages<T> {
    /// True once a fetched page came back without a cursor.
    pub fn is_complete(&self) -> bool {
        self.pages > 0 && self.next_page.is_none()
    }
}

impl ApiClient {
    /// Follow `next_page` cursors, issuing at most `max_pages` requests.
    ///
    /// The starting cursor of `operation` is honoured, so a previous
    /// [`CollectedPages::next_page`] can be used to resume.
    pub async fn collect_pages<O>(
        &self,
        operation: &O,
        max_pages: usize,
    ) -> Result<CollectedPages<<O::Response as Paginated>::Item>, ApiError>
    where
        O: PagedOperation,
        O::Response: Paginated,
    {
        let mut current = operation.clone();
        // Until a page without a cursor arrives, the set is not complete.
        let mut collected = CollectedPages {
            items: Vec::new(),
            pages: 0,
            next_page: operation.descriptor().cursor().cloned(),
        };

        while collected.pages < max_pages {
            let page = self.fetch(&current).await?;
            collected.pages += 1;

            let cursor = page.next_page().cloned();
            collected.items.extend(page.into_items());

            match cursor {
                Some(cursor) => {
                    tracing::debug!(
                        operation = O::NAME,
                        page = collected.pages,
                        "following next_page cursor"
                    );
                    collected.next_page = Some(cursor.clone());
                    current.set_next_page(Some(cursor));
                }
                None => {
                    collected.next_page = None;
                    break;
                }
            }
        }

        Ok(collected)
    }
}
