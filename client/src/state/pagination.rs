//! Fixed-size paging over the filtered comment list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Comments per page.
pub const PAGE_SIZE: usize = 4;

/// Numbered page links rendered before the ellipsis.
pub const MAX_PAGE_LINKS: usize = 5;

/// `ceil(len / PAGE_SIZE)`; zero for an empty list.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE)
}

/// Items on 1-indexed `page`: `items[(page-1)*size .. page*size]`, truncated at the end.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Clamp a requested page into `[1, total_pages]` (page 1 when empty).
pub fn clamp_page(page: usize, len: usize) -> usize {
    page.clamp(1, total_pages(len).max(1))
}

/// One numbered page link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// What the pagination bar renders for the current list/page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageControls {
    /// False when everything fits on one page; the bar is not rendered.
    pub visible: bool,
    /// "Anterior" is hidden, not disabled, on the first page.
    pub show_previous: bool,
    /// "Siguiente" is hidden, not disabled, on the last page.
    pub show_next: bool,
    pub links: Vec<PageLink>,
    /// Pages exist beyond the numbered links.
    pub ellipsis: bool,
}

/// Build the bar for `len` filtered items with `current` active.
pub fn controls(len: usize, current: usize) -> PageControls {
    let total = total_pages(len);
    let links = (1..=total.min(MAX_PAGE_LINKS))
        .map(|number| PageLink {
            number,
            active: number == current,
        })
        .collect();

    PageControls {
        visible: len > PAGE_SIZE,
        show_previous: current > 1,
        show_next: current < total,
        links,
        ellipsis: total > MAX_PAGE_LINKS,
    }
}
