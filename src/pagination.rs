/// Number of results shown per page.
pub const PAGE_SIZE: usize = 10;

/// One control in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous(usize),
    Page { number: usize, current: bool },
    Ellipsis,
    Next(usize),
}

/// Client-side pagination over an already fetched result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_items: usize,
}

impl Pagination {
    /// Requested page is clamped into `1..=total_pages` (page 1 when there are no items).
    pub fn new(total_items: usize, requested_page: usize) -> Self {
        let mut pagination = Self {
            current_page: 1,
            total_items,
        };
        pagination.go_to(requested_page);
        pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(PAGE_SIZE)
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// Index range of the items on the current page.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = ((self.current_page - 1) * PAGE_SIZE).min(self.total_items);
        let end = (start + PAGE_SIZE).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    /// First and last page, the current page and its neighbours, with an
    /// ellipsis two pages away from the current one.
    pub fn links(&self) -> Vec<PageLink> {
        let total = self.total_pages();
        let current = self.current_page;
        let mut links = Vec::new();

        if current > 1 {
            links.push(PageLink::Previous(current - 1));
        }

        for number in 1..=total {
            if number == 1 || number == total || number.abs_diff(current) <= 1 {
                links.push(PageLink::Page {
                    number,
                    current: number == current,
                });
            } else if number.abs_diff(current) == 2 {
                links.push(PageLink::Ellipsis);
            }
        }

        if current < total {
            links.push(PageLink::Next(current + 1));
        }
        links
    }
}

#[test]
fn test_items_per_page() {
    for total in [0usize, 1, 9, 10, 11, 25, 100, 101] {
        let pages = total.div_ceil(PAGE_SIZE);
        for page in 1..=pages {
            let pagination = Pagination::new(total, page);
            assert_eq!(
                pagination.range().len(),
                PAGE_SIZE.min(total - PAGE_SIZE * (page - 1)),
                "total={total} page={page}"
            );
        }
    }
}

#[test]
fn test_clamps_requested_page() {
    assert_eq!(Pagination::new(0, 5).current_page(), 1);
    assert_eq!(Pagination::new(25, 0).current_page(), 1);
    assert_eq!(Pagination::new(25, 99).current_page(), 3);
}

#[test]
fn test_links_for_three_pages() {
    let links = Pagination::new(25, 1).links();
    assert_eq!(
        links,
        vec![
            PageLink::Page { number: 1, current: true },
            PageLink::Page { number: 2, current: false },
            PageLink::Page { number: 3, current: false },
            PageLink::Next(2),
        ]
    );
}

#[test]
fn test_links_in_the_middle_of_many_pages() {
    let links = Pagination::new(200, 10).links();
    assert_eq!(
        links,
        vec![
            PageLink::Previous(9),
            PageLink::Page { number: 1, current: false },
            PageLink::Ellipsis,
            PageLink::Page { number: 9, current: false },
            PageLink::Page { number: 10, current: true },
            PageLink::Page { number: 11, current: false },
            PageLink::Ellipsis,
            PageLink::Page { number: 20, current: false },
            PageLink::Next(11),
        ]
    );
}

#[test]
fn test_no_links_without_items() {
    assert!(Pagination::new(0, 1).links().is_empty());
    assert_eq!(
        Pagination::new(3, 1).links(),
        vec![PageLink::Page { number: 1, current: true }]
    );
}
