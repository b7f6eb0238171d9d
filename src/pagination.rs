use serde::Serialize;

/// Pagination metadata returned next to every page of results.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// A page of items and the metadata describing where it sits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl PageMeta {
    /// Computes metadata for `page` of a collection with `total_items`
    /// entries. `page` and `page_size` are raised to at least 1; an empty
    /// collection has zero pages.
    pub fn new(page: usize, page_size: usize, total_items: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_items.div_ceil(page_size);

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Slices `items` into the requested page.
///
/// A page past the end yields no items but keeps the metadata of the
/// requested page instead of snapping back to the last one.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let meta = PageMeta::new(page, page_size, items.len());

    let data = items
        .into_iter()
        .skip(meta.offset())
        .take(meta.page_size)
        .collect();

    Page { data, meta }
}
