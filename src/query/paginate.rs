//! Page slicing.

use serde::Serialize;

/// One page of an already filtered and sorted sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Slice `[(page - 1) * page_size, page * page_size)` out of `rows`.
///
/// Pages are 1-based. Out-of-range pages come back empty; a zero page size
/// yields an empty page with no pages in total.
pub fn paginate<T: Clone>(rows: &[T], page: u32, page_size: u32) -> Page<T> {
    let total_items = rows.len();
    let size = page_size as usize;

    if size == 0 {
        return Page {
            items: Vec::new(),
            page,
            page_size,
            total_items,
            total_pages: 0,
            has_next: false,
            has_previous: page > 1,
        };
    }

    let start = (page.max(1) as usize - 1).saturating_mul(size);
    let end = start.saturating_add(size);
    let items = rows
        .get(start.min(total_items)..end.min(total_items))
        .map(<[T]>::to_vec)
        .unwrap_or_default();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages: total_items.div_ceil(size),
        has_next: end < total_items,
        has_previous: page > 1,
    }
}
