//! The retrieval contract every backend implements, and the two-predicate
//! filter surface.
//!
//! A source holds nothing but the location of its backing store; every call
//! opens a fresh handle, runs to completion and closes it again, so no state
//! is shared between calls and independent calls never interfere. The chain
//! a call returns belongs exclusively to the caller.

use tracing::debug;

use crate::error::{QuoterackError, Result};
use crate::record::{Quote, QuoteChain};

// ------------- QuoteFilter -------------
/// The fixed query surface: author equality or a hierarchical date match.
///
/// The date predicate narrows as it goes: era and year always apply, month
/// applies when non-zero, day applies when both it and month are non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFilter<'a> {
    ByAuthor(&'a str),
    ByDate {
        common_era: bool,
        year: u16,
        month: u8,
        day: u8,
    },
}

impl QuoteFilter<'_> {
    /// Check the date-hierarchy rules. Backends call this before touching
    /// their store; an invalid filter never causes any I/O.
    pub fn validate(&self) -> Result<()> {
        match *self {
            QuoteFilter::ByAuthor(_) => Ok(()),
            QuoteFilter::ByDate {
                common_era,
                year,
                month,
                day,
            } => {
                if year == 0 && !common_era {
                    return Err(QuoterackError::Filter(
                        "year 0 BC is not a date".to_string(),
                    ));
                }
                if day != 0 && month == 0 {
                    return Err(QuoterackError::Filter(
                        "a day without a month is not a date".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether a populated quote satisfies this filter.
    pub fn matches(&self, quote: &Quote) -> bool {
        match *self {
            QuoteFilter::ByAuthor(name) => quote.author() == Some(name),
            QuoteFilter::ByDate {
                common_era,
                year,
                month,
                day,
            } => {
                quote.common_era() == common_era
                    && quote.year() == year
                    && (month == 0 || quote.month() == month)
                    && (day == 0 || quote.day() == day)
            }
        }
    }
}

// ------------- QuoteSource -------------
/// Uniform retrieval over one backing store.
///
/// Failures never escape as errors here: a missing file, a malformed
/// container or a rejected parameter all surface as `0` or `None`, with the
/// cause logged as a diagnostic. Callers must not rely on diagnostics for
/// control flow.
pub trait QuoteSource {
    /// Number of records in the store's container, 0 on any failure.
    fn count(&self) -> usize;

    /// The record at `index` in source order.
    fn get(&self, index: usize) -> Option<Quote>;

    /// All records, chained in source order. `None` when the container
    /// cannot be read or yields no first record. A record construction
    /// failure after the first silently truncates the chain instead;
    /// compare [`QuoteChain::node_count`] against [`QuoteSource::count`]
    /// to detect it.
    fn get_all(&self) -> Option<QuoteChain>;

    /// All records matching `filter`, chained in source order. Invalid
    /// filters are rejected before the store is touched. `None` when
    /// nothing matches.
    fn get_filtered(&self, filter: &QuoteFilter<'_>) -> Option<QuoteChain>;

    /// All records by exactly this author. The author is required; `None`
    /// is rejected before the store is touched.
    fn get_all_by_author(&self, author: Option<&str>) -> Option<QuoteChain> {
        match author {
            Some(name) => self.get_filtered(&QuoteFilter::ByAuthor(name)),
            None => {
                debug!("author filter requires an author");
                None
            }
        }
    }

    /// All records matching the date hierarchy (see [`QuoteFilter`]).
    fn get_all_by_date(
        &self,
        common_era: bool,
        year: u16,
        month: u8,
        day: u8,
    ) -> Option<QuoteChain> {
        self.get_filtered(&QuoteFilter::ByDate {
            common_era,
            year,
            month,
            day,
        })
    }
}
