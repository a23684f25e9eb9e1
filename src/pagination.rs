//! Listing pagination and the windowed page strip.

/// Properties per listing page
pub const DEFAULT_PER_PAGE: usize = 6;

/// Page strips up to this length show every page number
const FULL_STRIP_MAX: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// One page of a list; page numbers are 1-based
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Page `number` of `items`, clamped into `1..=total_pages`
    pub fn of(items: &'a [T], number: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = items.len().div_ceil(per_page);
        let number = number.clamp(1, total_pages.max(1));
        let start = ((number - 1) * per_page).min(items.len());
        let end = (start + per_page).min(items.len());

        Self {
            items: &items[start..end],
            number,
            total_pages,
            total_items: items.len(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// Page strip: every page for short lists, otherwise the ends plus the
    /// current page's neighbours, with an ellipsis over each gap
    pub fn page_links(&self) -> Vec<PageLink> {
        let visible = (1..=self.total_pages).filter(|&page| {
            self.total_pages <= FULL_STRIP_MAX
                || page == 1
                || page == self.total_pages
                || page.abs_diff(self.number) <= 1
        });

        let mut links = Vec::new();
        let mut previous = None;
        for page in visible {
            if let Some(prev) = previous {
                if page != prev + 1 {
                    links.push(PageLink::Ellipsis);
                }
            }
            links.push(PageLink::Page(page));
            previous = Some(page);
        }
        links
    }
}
