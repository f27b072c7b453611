use serde::{Deserialize, Serialize};

/// 1-based page request, sent as `?page=&limit=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.limit as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Page<T> {
    pub fn empty(request: PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Cuts one page out of a fully loaded list (local demo data)
    pub fn slice(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let items = all
            .into_iter()
            .skip(request.offset())
            .take(request.limit as usize)
            .collect();
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as u64) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_clamped_to_first_page() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req, PageRequest { page: 1, limit: 1 });
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_slice_last_partial_page() {
        let page = Page::slice((1..=23).collect::<Vec<_>>(), PageRequest::new(3, 10));
        assert_eq!(page.items, vec![21, 22, 23]);
        assert_eq!(page.total, 23);
        assert_eq!(page.total_pages(), 3);
        assert!(!page.has_next());
        assert!(page.has_prev());
    }

    #[test]
    fn test_slice_past_the_end_is_empty() {
        let page = Page::slice(vec![1, 2], PageRequest::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 2);
    }
}
