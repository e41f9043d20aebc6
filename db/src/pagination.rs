/// One-based page window translated to `LIMIT`/`OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    /// Page numbers below one are treated as the first page.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let pagination = Pagination::new(1, 6);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 6);
    }

    #[test]
    fn test_later_page() {
        assert_eq!(Pagination::new(3, 5).offset(), 10);
    }

    #[test]
    fn test_zero_page_clamped() {
        let pagination = Pagination::new(0, 0);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 1);
    }
}
