use serde::Serialize;

use super::config::PaginationConfig;

/// Which part of a result list to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 1-based page of `size` items
    Page { number: usize, size: usize },
    /// Raw `offset`/`limit` window, for renderers that virtualise a long list
    Window { offset: usize, limit: usize },
}

impl Selection {
    /// Window parameters win over page parameters when either is given
    pub fn resolve(
        config: &PaginationConfig,
        page: Option<usize>,
        page_size: Option<usize>,
        offset: Option<usize>,
        limit: Option<usize>,
    ) -> Self {
        if offset.is_some() || limit.is_some() {
            Selection::Window {
                offset: offset.unwrap_or(0),
                limit: config.clamp_size(limit),
            }
        } else {
            Selection::Page {
                number: page.unwrap_or(1).max(1),
                size: config.clamp_size(page_size),
            }
        }
    }

    fn bounds(&self) -> (usize, usize) {
        match *self {
            Selection::Page { number, size } => (number.saturating_sub(1).saturating_mul(size), size),
            Selection::Window { offset, limit } => (offset, limit),
        }
    }

    fn page_size(&self) -> usize {
        match *self {
            Selection::Page { size, .. } => size,
            Selection::Window { limit, .. } => limit,
        }
    }

    fn page_number(&self) -> usize {
        match *self {
            Selection::Page { number, .. } => number,
            Selection::Window { offset, limit } => offset / limit.max(1) + 1,
        }
    }
}

/// One page of results plus totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub offset: usize,
}

impl<T> PageSlice<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageSlice<U> {
        PageSlice {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            offset: self.offset,
        }
    }
}

/// Cut `selection` out of `items`. Out-of-range selections give an empty page.
pub fn paginate<T: Clone>(items: &[T], selection: Selection) -> PageSlice<T> {
    let total = items.len();
    let (offset, limit) = selection.bounds();
    let page_size = selection.page_size();

    let start = offset.min(total);
    let end = offset.saturating_add(limit).min(total);

    PageSlice {
        items: items[start..end].to_vec(),
        total,
        page: selection.page_number(),
        page_size,
        total_pages: total.div_ceil(page_size.max(1)),
        offset,
    }
}
