/// 1-based pagination state over the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Pager {
            current_page: 1,
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProjection<R> {
    pub items: Vec<R>,
    pub total_pages: usize,
    pub page: usize,
}

/// Slices one page out of the view. An empty view still reports one page.
/// A page beyond the new total (view shrank under it) resets to page 1 —
/// deliberately not to the last valid page.
pub fn project<R: Clone>(view: &[R], page: usize, page_size: usize) -> PageProjection<R> {
    let total_pages = total_pages(view.len(), page_size);
    let page = if page > total_pages { 1 } else { page.max(1) };
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(view.len());
    let items = if start < view.len() {
        view[start..end].to_vec()
    } else {
        Vec::new()
    };
    PageProjection {
        items,
        total_pages,
        page,
    }
}

pub fn total_pages(view_len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    view_len.div_ceil(page_size).max(1)
}

impl Pager {
    /// 前往/first/prev/next/last. A target outside `[1, total_pages]` is
    /// silently ignored.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        if (1..=total_pages).contains(&page) {
            self.current_page = page;
        }
    }

    /// A page-size change always restarts at page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.current_page = 1;
    }

    /// Pulls the stored page back to 1 when the view shrank under it.
    pub fn clamp(&mut self, view_len: usize) {
        if self.current_page > total_pages(view_len, self.page_size) {
            self.current_page = 1;
        }
    }
}

/// Window of up to five page-number buttons centred on the current page.
pub fn page_numbers(current: usize, total: usize) -> Vec<usize> {
    const SHOW_MAX: usize = 5;
    let mut start = current.saturating_sub(SHOW_MAX / 2).max(1);
    let end = (start + SHOW_MAX - 1).min(total);
    if end + 1 - start < SHOW_MAX {
        start = (end + 1).saturating_sub(SHOW_MAX).max(1);
    }
    (start..=end).collect()
}
