//! Keyset (cursor) pagination over ordered results.

use serde::Serialize;

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CursorPage<T, K> {
    /// Items on this page, in key order.
    pub items: Vec<T>,
    /// Key to pass back to fetch the following page, if one exists.
    pub next_cursor: Option<K>,
}

/// Returns up to `limit` items whose key sorts strictly after `after`.
///
/// `items` must already be sorted ascending by `key`. A zero `limit`
/// yields an empty page without a cursor.
pub fn paginate_after<T, K, F>(
    items: Vec<T>,
    key: F,
    after: Option<&K>,
    limit: usize,
) -> CursorPage<T, K>
where
    K: Ord + Clone,
    F: Fn(&T) -> K,
{
    let mut remaining = items
        .into_iter()
        .filter(|item| after.is_none_or(|cursor| key(item) > *cursor));

    let page: Vec<T> = remaining.by_ref().take(limit).collect();
    let has_more = remaining.next().is_some();
    let next_cursor = if has_more {
        page.last().map(&key)
    } else {
        None
    };

    CursorPage {
        items: page,
        next_cursor,
    }
}
