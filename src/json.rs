//! The document backend: quotes read from a JSON file.
//!
//! The document is a top-level object whose [`QUOTE_ARRAY_KEY`] field holds
//! an array of quote objects. Array order is the source order. The array is
//! random-access, so single-record retrieval is a plain index lookup.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{QuoterackError, Result};
use crate::fields;
use crate::record::{Quote, QuoteChain};
use crate::source::{QuoteFilter, QuoteSource};

/// Top-level field holding the quote array.
pub const QUOTE_ARRAY_KEY: &str = "quotes";

/// Per-object field keys.
pub const AUTHOR_KEY: &str = "author";
pub const TEXT_KEY: &str = "quote";
pub const COMMENT_KEY: &str = "comment";
pub const DAY_KEY: &str = "day";
pub const MONTH_KEY: &str = "month";
pub const YEAR_KEY: &str = "year";
pub const ERA_KEY: &str = "annodomini";

/// A JSON document acting as a quote store. Holds only the path; every
/// retrieval call parses the document afresh.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the document and take the quote array out of it.
    fn quote_array(&self) -> Result<Vec<Value>> {
        let file = File::open(&self.path)?;
        let mut doc: Value = serde_json::from_reader(BufReader::new(file))?;
        match doc.get_mut(QUOTE_ARRAY_KEY).map(Value::take) {
            Some(Value::Array(quotes)) => Ok(quotes),
            Some(_) => Err(QuoterackError::Document(format!(
                "key {QUOTE_ARRAY_KEY:?} does not hold an array"
            ))),
            None => Err(QuoterackError::Document(format!(
                "key {QUOTE_ARRAY_KEY:?} not found"
            ))),
        }
    }

    fn quote_array_logged(&self) -> Option<Vec<Value>> {
        match self.quote_array() {
            Ok(quotes) => Some(quotes),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read quote array");
                None
            }
        }
    }
}

/// Extract one quote from one array element. An element that is not an
/// object fails construction, which ends list assembly early.
fn populate(element: &Value) -> Option<Quote> {
    let Some(obj) = element.as_object() else {
        debug!("array element is not an object");
        return None;
    };
    let mut quote = Quote::new();
    quote.author = fields::json_string(obj, AUTHOR_KEY);
    quote.text = fields::json_string(obj, TEXT_KEY);
    quote.comment = fields::json_string(obj, COMMENT_KEY);
    quote.day = fields::clamp_day(fields::json_int(obj, DAY_KEY));
    quote.month = fields::clamp_day(fields::json_int(obj, MONTH_KEY));
    quote.year = fields::clamp_year(fields::json_int(obj, YEAR_KEY));
    quote.common_era = fields::json_era(obj, ERA_KEY, quote.common_era);
    Some(quote)
}

impl QuoteSource for JsonSource {
    fn count(&self) -> usize {
        self.quote_array_logged().map_or(0, |quotes| quotes.len())
    }

    fn get(&self, index: usize) -> Option<Quote> {
        let quotes = self.quote_array_logged()?;
        match quotes.get(index) {
            Some(element) => populate(element),
            None => {
                debug!(index, len = quotes.len(), "index out of bounds");
                None
            }
        }
    }

    fn get_all(&self) -> Option<QuoteChain> {
        let quotes = self.quote_array_logged()?;
        QuoteChain::assemble(quotes.iter().map_while(populate))
    }

    fn get_filtered(&self, filter: &QuoteFilter<'_>) -> Option<QuoteChain> {
        if let Err(e) = filter.validate() {
            warn!(error = %e, "rejected filter");
            return None;
        }
        let quotes = self.quote_array_logged()?;
        QuoteChain::assemble(
            quotes
                .iter()
                .map_while(populate)
                .filter(|quote| filter.matches(quote)),
        )
    }
}
