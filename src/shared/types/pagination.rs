/// Pager summary exposed alongside list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl Pager {
    /// Build a pager, clamping the current page into `1..=total_pages`.
    pub fn new(total_items: u64, page_number: u64, page_size: u64) -> Self {
        let total_pages = total_pages(total_items, page_size);
        let current_page = page_number.max(1).min(total_pages.max(1));
        Self {
            current_page,
            page_size,
            total_items,
            total_pages,
        }
    }
}

fn total_pages(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}
