//! Fixed-size page arithmetic for the question listing.
//!
//! Pages are 1-based. Page `p` covers the half-open range
//! `[(p - 1) * QUESTIONS_PER_PAGE, p * QUESTIONS_PER_PAGE)` of the
//! id-ordered sequence. Nothing is clamped: a page past the end is empty.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Offset/limit pair describing one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Window for a 1-based page number. Pages below 1 select nothing.
    pub fn for_page(page: i64) -> Self {
        if page < 1 {
            return Self {
                offset: 0,
                limit: 0,
            };
        }
        Self {
            offset: (page - 1).saturating_mul(QUESTIONS_PER_PAGE),
            limit: QUESTIONS_PER_PAGE,
        }
    }
}
