//! The relational backend: quotes read from a SQLite database file.
//!
//! The store is a single fixed table, scanned through a forward-only row
//! cursor in the database's native row order. Filtered retrieval binds its
//! parameters into one of three query shapes, built hierarchically from the
//! date parts that are actually set.

use std::path::{Path, PathBuf};

use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OpenFlags, Row, params_from_iter};
use tracing::{debug, warn};

use crate::error::Result;
use crate::fields;
use crate::record::{Quote, QuoteChain};
use crate::source::{QuoteFilter, QuoteSource};

/// The fixed table, with its seven columns in record order.
/// The era column stores text; see [`fields::column_era`] for the decode.
const SCAN: &str = "select author, quote, comment, day, month, year, annodomini from quotes";

/// A SQLite database file acting as a quote store. Holds only the path;
/// every retrieval call opens its own read-only connection and closes it
/// again before returning, on failure paths included.
pub struct SqliteSource {
    path: PathBuf,
}

impl SqliteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Connection> {
        Ok(Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY,
        )?)
    }

    /// Step the cursor of `sql` to the end, converting every row.
    fn scan(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Quote>> {
        let db = self.open()?;
        let mut statement = db.prepare(sql)?;
        let mut rows = statement.query(params_from_iter(params.iter()))?;
        let mut quotes = Vec::new();
        while let Some(row) = rows.next()? {
            quotes.push(populate(row));
        }
        Ok(quotes)
    }

    /// Tally rows without materializing quotes.
    fn tally(&self) -> Result<usize> {
        let db = self.open()?;
        let mut statement = db.prepare(SCAN)?;
        let mut rows = statement.query([])?;
        let mut total = 0;
        while rows.next()?.is_some() {
            total += 1;
        }
        Ok(total)
    }

    /// Step `index + 1` rows and convert the last one.
    fn nth(&self, index: usize) -> Result<Option<Quote>> {
        let db = self.open()?;
        let mut statement = db.prepare(SCAN)?;
        let mut rows = statement.query([])?;
        let mut stepped = 0;
        while let Some(row) = rows.next()? {
            if stepped == index {
                return Ok(Some(populate(row)));
            }
            stepped += 1;
        }
        debug!(index, stepped, "row index beyond result set");
        Ok(None)
    }
}

/// Convert one row into a quote by ordinal column.
fn populate(row: &Row) -> Quote {
    let mut quote = Quote::new();
    quote.author = fields::column_string(row, 0);
    quote.text = fields::column_string(row, 1);
    quote.comment = fields::column_string(row, 2);
    quote.day = fields::column_day(row, 3);
    quote.month = fields::column_day(row, 4);
    quote.year = fields::column_year(row, 5);
    quote.common_era = fields::column_era(row, 6);
    quote
}

/// Build the filtered query and its bound parameters.
///
/// The era predicate matches the way the era column decodes: CE matches the
/// exact token, BC matches everything else, NULL included. Assumes the
/// filter has already passed validation, so a day filter implies a month
/// filter and the placeholder numbering stays dense.
fn filtered_query(filter: &QuoteFilter<'_>) -> (String, Vec<SqlValue>) {
    match *filter {
        QuoteFilter::ByAuthor(name) => (
            format!("{SCAN} where author = ?1"),
            vec![SqlValue::Text(name.to_owned())],
        ),
        QuoteFilter::ByDate {
            common_era,
            year,
            month,
            day,
        } => {
            let era = if common_era {
                "annodomini = ?1"
            } else {
                "annodomini is not ?1"
            };
            let mut sql = format!("{SCAN} where {era} and year = ?2");
            let mut params = vec![
                SqlValue::Text(fields::ERA_CE_TOKEN.to_owned()),
                SqlValue::Integer(year as i64),
            ];
            if month != 0 {
                sql.push_str(" and month = ?3");
                params.push(SqlValue::Integer(month as i64));
            }
            if day != 0 {
                sql.push_str(" and day = ?4");
                params.push(SqlValue::Integer(day as i64));
            }
            (sql, params)
        }
    }
}

impl QuoteSource for SqliteSource {
    fn count(&self) -> usize {
        match self.tally() {
            Ok(total) => total,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "count failed");
                0
            }
        }
    }

    fn get(&self, index: usize) -> Option<Quote> {
        match self.nth(index) {
            Ok(quote) => quote,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "single row retrieval failed");
                None
            }
        }
    }

    fn get_all(&self) -> Option<QuoteChain> {
        match self.scan(SCAN, &[]) {
            Ok(quotes) => QuoteChain::assemble(quotes),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "scan failed");
                None
            }
        }
    }

    fn get_filtered(&self, filter: &QuoteFilter<'_>) -> Option<QuoteChain> {
        if let Err(e) = filter.validate() {
            warn!(error = %e, "rejected filter");
            return None;
        }
        let (sql, params) = filtered_query(filter);
        match self.scan(&sql, &params) {
            Ok(quotes) => QuoteChain::assemble(quotes),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "filtered scan failed");
                None
            }
        }
    }
}
