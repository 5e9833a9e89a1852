//! Client-side pagination over an already filtered list.
//!
//! Pages are 1-indexed, matching what the user sees in the controls.

use std::ops::Range;

pub const DEFAULT_PER_PAGE: usize = 10;

/// Above this many pages the link strip collapses with ellipses.
const FULL_STRIP_LIMIT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total: 0,
        }
    }
}

impl PageWindow {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            total,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    /// Pull the current page back into range after the data shrank.
    pub fn clamped(self) -> Self {
        let last = self.total_pages().max(1);
        Self {
            page: self.page.clamp(1, last),
            ..self
        }
    }

    /// The controls are only rendered when there is something to page through.
    pub fn is_visible(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 1-based index of the first record on the page.
    pub fn from(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// 1-based index of the last record on the page.
    pub fn to(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// Slice bounds of the current page, always valid for a list of `total` rows.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {}–{} of {} records",
            self.from(),
            self.to(),
            self.total
        )
    }

    pub fn links(&self) -> Vec<PageLink> {
        let total_pages = self.total_pages();
        if total_pages <= FULL_STRIP_LIMIT {
            return (1..=total_pages).map(PageLink::Page).collect();
        }

        let page = self.page;
        let mut links = vec![PageLink::Page(1)];
        if page > 3 {
            links.push(PageLink::Ellipsis);
        }
        let start = page.saturating_sub(1).max(2);
        let end = (page + 1).min(total_pages - 1);
        links.extend((start..=end).map(PageLink::Page));
        if page + 2 < total_pages {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total_pages));
        links
    }
}

pub fn paginate<T: Clone>(rows: &[T], window: &PageWindow) -> Vec<T> {
    rows.get(window.range()).unwrap_or(&[]).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    #[test]
    fn test_bounds() {
        let w = PageWindow::new(2, 10, 25);
        assert_eq!(w.total_pages(), 3);
        assert_eq!(w.from(), 11);
        assert_eq!(w.to(), 20);
        assert_eq!(w.range(), 10..20);

        let last = PageWindow::new(3, 10, 25);
        assert_eq!(last.from(), 21);
        assert_eq!(last.to(), 25);
        assert_eq!(last.summary(), "Showing 21–25 of 25 records");
    }

    #[test]
    fn test_visibility() {
        assert!(!PageWindow::new(1, 10, 0).is_visible());
        assert!(!PageWindow::new(1, 10, 10).is_visible());
        assert!(PageWindow::new(1, 10, 11).is_visible());
    }

    #[test]
    fn test_prev_next() {
        let first = PageWindow::new(1, 10, 30);
        assert!(!first.has_prev());
        assert!(first.has_next());

        let last = PageWindow::new(3, 10, 30);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn test_clamped_after_shrink() {
        let w = PageWindow::new(5, 10, 12).clamped();
        assert_eq!(w.page, 2);

        let empty = PageWindow::new(3, 10, 0).clamped();
        assert_eq!(empty.page, 1);
        assert_eq!(empty.range(), 0..0);
    }

    #[test]
    fn test_links_short_strip() {
        let w = PageWindow::new(4, 10, 70);
        assert_eq!(w.links(), (1..=7).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn test_links_collapsed() {
        assert_eq!(
            PageWindow::new(1, 10, 100).links(),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
        assert_eq!(
            PageWindow::new(5, 10, 100).links(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert_eq!(
            PageWindow::new(10, 10, 100).links(),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
        assert_eq!(
            PageWindow::new(3, 10, 100).links(),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
        assert_eq!(
            PageWindow::new(8, 10, 100).links(),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_paginate_slices() {
        let rows: Vec<u32> = (1..=23).collect();
        let page = paginate(&rows, &PageWindow::new(3, 10, rows.len()));
        assert_eq!(page, vec![21, 22, 23]);

        let past_end = paginate(&rows, &PageWindow::new(9, 10, rows.len()));
        assert!(past_end.is_empty());
    }
}
