//! Sequential paging over raw trip records.

use crate::models::TripRecord;

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page<'a> {
    Rows(&'a [TripRecord]),
    /// Every record has already been returned.
    Exhausted,
}

/// Cursor over a borrowed slice of records. The borrow keeps the record set
/// from being refiltered while paging.
#[derive(Debug, Clone)]
pub struct RawRecordPager<'a> {
    records: &'a [TripRecord],
    cursor: usize,
}

impl<'a> RawRecordPager<'a> {
    pub fn new(records: &'a [TripRecord]) -> Self {
        Self { records, cursor: 0 }
    }

    /// Next page of up to [`PAGE_SIZE`] records, advancing the cursor by the
    /// number returned.
    pub fn next_page(&mut self) -> Page<'a> {
        if self.is_exhausted() {
            return Page::Exhausted;
        }
        let end = (self.cursor + PAGE_SIZE).min(self.records.len());
        let page = &self.records[self.cursor..end];
        self.cursor = end;
        Page::Rows(page)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.records.len()
    }

    /// Index of the next record to be returned.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for RawRecordPager<'a> {
    type Item = &'a [TripRecord];

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_page() {
            Page::Rows(rows) => Some(rows),
            Page::Exhausted => None,
        }
    }
}
