//! Random-access paging over an indexed address sequence.

use crate::error::CidrError;
use crate::models::Ipv4;

/// A finite sequence of addresses addressable by index.
///
/// Implementors only supply [`count`](Paged::count) and [`get`](Paged::get);
/// pages are computed from the index range, never by walking the sequence.
pub trait Paged {
    /// Total number of entries (may be up to 2^32).
    fn count(&self) -> u64;

    /// Entry at `index`, or `None` past the end.
    fn get(&self, index: u64) -> Option<Ipv4>;

    /// Entries with index in `[page * page_size, page * page_size + page_size)`,
    /// clipped to the sequence.
    fn page(&self, page: u64, page_size: u64) -> Result<Vec<Ipv4>, CidrError> {
        if page_size == 0 {
            return Err(CidrError::InvalidPageSize);
        }
        let count = self.count();
        let start = match page.checked_mul(page_size) {
            Some(start) if start < count => start,
            _ => return Ok(Vec::new()),
        };
        let end = start.saturating_add(page_size).min(count);
        log::trace!("page {page} x {page_size}: index {start}..{end} of {count}");
        Ok((start..end).filter_map(|index| self.get(index)).collect())
    }

    /// Number of pages of `page_size` needed to cover the sequence.
    fn total_pages(&self, page_size: u64) -> Result<u64, CidrError> {
        if page_size == 0 {
            return Err(CidrError::InvalidPageSize);
        }
        Ok(self.count().div_ceil(page_size))
    }
}
