//! Bounded walk over the AD structures of an advertising payload
//!
//! Each AD structure is laid out as `length(1) | type(1) | value(length - 1)`.
//! The walk ends at a zero length byte, at the end of the payload, or at
//! [`MAX_ADV_DATA_LEN`] bytes, whichever comes first.

use crate::error::DecodeError;
use crate::gap::constants::MAX_ADV_DATA_LEN;
use log::{debug, trace};

/// One AD structure, borrowed from its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdField<'a> {
    /// Offset of the length byte within the payload
    pub offset: usize,
    pub ad_type: u8,
    /// Field value, excluding the length and type bytes
    pub value: &'a [u8],
}

/// Advertising data received in a single report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvertisingPayload<'a> {
    data: &'a [u8],
}

impl<'a> AdvertisingPayload<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Starts a new walk from the first AD structure
    pub fn fields(&self) -> AdFieldScanner<'a> {
        AdFieldScanner::new(self.data)
    }

    /// Returns the first AD structure of the given type
    pub fn find_first(&self, ad_type: u8) -> Option<AdField<'a>> {
        find_first(self.data, ad_type)
    }

    /// Iterates over every well-formed AD structure of the given type
    pub fn find_all(&self, ad_type: u8) -> impl Iterator<Item = AdField<'a>> {
        self.fields()
            .map_while(Result::ok)
            .filter(move |field| field.ad_type == ad_type)
    }
}

/// Lazy iterator over the AD structures of a payload.
///
/// Yields `Err(DecodeError::Truncated)` at most once, when a length byte
/// points past the payload or past the scan cap, and then stops.
#[derive(Debug, Clone)]
pub struct AdFieldScanner<'a> {
    data: &'a [u8],
    limit: usize,
    cursor: usize,
    done: bool,
}

impl<'a> AdFieldScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limit: data.len().min(MAX_ADV_DATA_LEN),
            cursor: 0,
            done: false,
        }
    }

    fn truncated(&mut self, declared: usize) -> Option<Result<AdField<'a>, DecodeError>> {
        self.done = true;
        let available = self.limit.saturating_sub(self.cursor + 1);
        debug!(
            "AD walk truncated at offset {} (declared {}, available {})",
            self.cursor, declared, available
        );
        Some(Err(DecodeError::Truncated {
            offset: self.cursor,
            declared,
            available,
        }))
    }
}

impl<'a> Iterator for AdFieldScanner<'a> {
    type Item = Result<AdField<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.cursor >= self.data.len() {
            self.done = true;
            return None;
        }

        // Payload continues beyond the cap; the bytes there are never read
        if self.cursor >= self.limit {
            return self.truncated(self.data.len() - self.cursor);
        }

        let length = self.data[self.cursor] as usize;
        if length == 0 {
            self.done = true;
            return None;
        }

        let end = self.cursor + 1 + length;
        if end > self.limit {
            return self.truncated(length);
        }

        let field = AdField {
            offset: self.cursor,
            ad_type: self.data[self.cursor + 1],
            value: &self.data[self.cursor + 2..end],
        };
        trace!(
            "AD field type {:#04x} at offset {} ({} bytes)",
            field.ad_type,
            field.offset,
            field.value.len()
        );

        self.cursor = end;
        Some(Ok(field))
    }
}

impl std::iter::FusedIterator for AdFieldScanner<'_> {}

/// Returns the first AD structure of the given type in `data`.
///
/// A truncated walk that ends before a match reports "not found".
pub fn find_first(data: &[u8], ad_type: u8) -> Option<AdField<'_>> {
    AdFieldScanner::new(data)
        .map_while(Result::ok)
        .find(|field| field.ad_type == ad_type)
}
