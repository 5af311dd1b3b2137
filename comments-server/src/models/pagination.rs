//! Pagination types

use super::ValidationError;

/// Default page number
pub const DEFAULT_PAGE: i64 = 1;

/// Default items per page
pub const DEFAULT_SIZE: i64 = 10;

/// Query value that requests every row
const SIZE_ALL: i64 = -1;

/// Page size: a bounded page or the whole table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    /// At most this many items (always >= 1)
    Limited(u32),
    /// Every row, offset ignored
    Unlimited,
}

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    page: u32,
    size: PageSize,
}

impl Pagination {
    /// Create pagination from already-typed values.
    ///
    /// - Page is clamped to minimum of 1
    /// - `Limited(0)` is clamped to `Limited(1)`
    pub fn new(page: u32, size: PageSize) -> Self {
        let size = match size {
            PageSize::Limited(n) => PageSize::Limited(n.max(1)),
            PageSize::Unlimited => PageSize::Unlimited,
        };
        Self {
            page: page.max(1),
            size,
        }
    }

    /// Build pagination from raw query integers.
    ///
    /// `page` must be >= 1; `size` must be >= 1, or exactly -1 for all rows.
    pub fn from_query(page: i64, size: i64) -> Result<Self, ValidationError> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(ValidationError::InvalidParam {
                field: "page",
                reason: "must be an integer greater than 0",
            })?;

        let size = if size == SIZE_ALL {
            PageSize::Unlimited
        } else {
            let n = u32::try_from(size)
                .ok()
                .filter(|n| *n >= 1)
                .ok_or(ValidationError::InvalidParam {
                    field: "size",
                    reason: "must be an integer greater than 0 or -1",
                })?;
            PageSize::Limited(n)
        };

        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> PageSize {
        self.size
    }

    /// Calculate SQL OFFSET value. Always 0 for `Unlimited`.
    pub fn offset(&self) -> u64 {
        match self.size {
            PageSize::Limited(n) => u64::from(self.page - 1) * u64::from(n),
            PageSize::Unlimited => 0,
        }
    }

    /// Get LIMIT value, `None` when every row is requested.
    pub fn limit(&self) -> Option<u32> {
        match self.size {
            PageSize::Limited(n) => Some(n),
            PageSize::Unlimited => None,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as u32,
            size: PageSize::Limited(DEFAULT_SIZE as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, PageSize::Limited(10));
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, PageSize::Limited(10));
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, PageSize::Limited(25));
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn offset_does_not_overflow() {
        let p = Pagination::new(u32::MAX, PageSize::Limited(u32::MAX));
        assert_eq!(p.offset(), u64::from(u32::MAX - 1) * u64::from(u32::MAX));
    }

    #[test]
    fn unlimited_ignores_page() {
        let p = Pagination::new(5, PageSize::Unlimited);
        assert_eq!(p.offset(), 0);
        assert_eq!(p.limit(), None);
    }

    #[test]
    fn clamps_page_and_size() {
        let p = Pagination::new(0, PageSize::Limited(0));
        assert_eq!(p.page(), 1);
        assert_eq!(p.size(), PageSize::Limited(1));
    }

    #[test]
    fn from_query_accepts_valid() {
        let p = Pagination::from_query(2, 10).unwrap();
        assert_eq!(p.page(), 2);
        assert_eq!(p.limit(), Some(10));

        let p = Pagination::from_query(1, -1).unwrap();
        assert_eq!(p.size(), PageSize::Unlimited);
    }

    #[test]
    fn from_query_rejects_bad_page() {
        for page in [0, -1, i64::from(u32::MAX) + 1] {
            let err = Pagination::from_query(page, 10).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::InvalidParam { field: "page", .. }
            ));
        }
    }

    #[test]
    fn from_query_rejects_bad_size() {
        for size in [0, -2, -100] {
            let err = Pagination::from_query(1, size).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::InvalidParam { field: "size", .. }
            ));
        }
    }

    #[test]
    fn default_is_first_ten() {
        let p = Pagination::default();
        assert_eq!(p.page(), 1);
        assert_eq!(p.limit(), Some(10));
    }
}
