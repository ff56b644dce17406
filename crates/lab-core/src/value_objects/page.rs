//! Offset pagination request

/// Default page size
pub const DEFAULT_PER_PAGE: u32 = 10;
/// Maximum page size
pub const MAX_PER_PAGE: u32 = 100;

/// 1-based page number and page size, clamped to sane bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// SQL `LIMIT`
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    /// SQL `OFFSET`
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}
