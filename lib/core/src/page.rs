use serde::Serialize;

/// Items shown per page when the caller does not say
pub const DEFAULT_PER_PAGE: usize = 10;

/// One page of an ordered result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based, after clamping
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Slice `items` into the requested page
    ///
    /// The page number is clamped into `[1, max(total_pages, 1)]`, so an empty
    /// input yields page 1 of 0 with no items. A `per_page` of 0 falls back to
    /// [`DEFAULT_PER_PAGE`].
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let per_page = if per_page == 0 { DEFAULT_PER_PAGE } else { per_page };
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);
        let page = page.clamp(1, total_pages.max(1));

        let start = (page - 1) * per_page;
        let end = (start + per_page).min(total_items);
        let items: Vec<T> = items.into_iter().skip(start).take(end.saturating_sub(start)).collect();

        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}
