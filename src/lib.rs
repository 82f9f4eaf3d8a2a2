//! Quoterack – a small embeddable library that reads quote records out of a
//! backing store and hands them back as an ordered, caller-owned chain.
//!
//! Two stores are supported, producing an identical data model:
//! * A JSON document ([`json::JsonSource`]) holding an array of quote
//!   objects under a fixed key, accessed by array index.
//! * A SQLite database file ([`sqlite::SqliteSource`]) holding a fixed
//!   seven-column table, accessed through a forward-only row cursor.
//!
//! Both implement the [`source::QuoteSource`] contract: count the records,
//! fetch one by position, fetch all, or fetch all matching one of the two
//! supported predicates (author equality, hierarchical date match). A
//! retrieval call opens the store, runs to completion and closes it again;
//! nothing is cached or shared between calls.
//!
//! ## Modules
//! * [`record`] – The [`record::Quote`] record and the [`record::QuoteChain`]
//!   arena it is chained in, with the release and length operations.
//! * [`fields`] – Field extraction from raw backend values, with the shared
//!   clamping and defaulting rules.
//! * [`json`] / [`sqlite`] – The two backend adapters.
//! * [`source`] – The [`source::QuoteSource`] trait and [`source::QuoteFilter`].
//! * [`error`] – The crate error type; retrieval surfaces `None`/`0` to
//!   callers and keeps errors for its diagnostics.
//!
//! ## Failure behavior
//! Retrieval never panics on bad input: a missing file, a malformed
//! document, an out-of-range index or a rejected filter parameter all come
//! back as `None` (or 0 for counts). During full-list assembly a record
//! that fails to convert ends the chain early without failing the call;
//! compare [`record::QuoteChain::node_count`] with the source's `count` to
//! detect truncation.
//!
//! ## Quick Start
//! ```
//! use quoterack::json::JsonSource;
//! use quoterack::source::QuoteSource;
//!
//! let path = std::env::temp_dir().join("quoterack_quickstart.json");
//! std::fs::write(&path, r#"{"quotes": [
//!     {"author": "Seneca", "quote": "We suffer more often in imagination than in reality.",
//!      "year": 62, "annodomini": true}
//! ]}"#).unwrap();
//!
//! let source = JsonSource::new(&path);
//! assert_eq!(source.count(), 1);
//! let chain = source.get_all().unwrap();
//! let first = chain.get(chain.head()).unwrap();
//! assert_eq!(first.author(), Some("Seneca"));
//! assert_eq!(first.year(), 62);
//! std::fs::remove_file(&path).unwrap();
//! ```

pub mod error;
pub mod fields;
pub mod json;
pub mod record;
pub mod source;
pub mod sqlite;

// Version components injected from the package manifest at build time.
const VERSION_MAJOR: u8 = parse_version_component(env!("CARGO_PKG_VERSION_MAJOR"));
const VERSION_MINOR: u8 = parse_version_component(env!("CARGO_PKG_VERSION_MINOR"));
const VERSION_PATCH: u8 = parse_version_component(env!("CARGO_PKG_VERSION_PATCH"));

/// The library version as a (major, minor, patch) triple.
pub const fn version() -> (u8, u8, u8) {
    (VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH)
}

const fn parse_version_component(component: &str) -> u8 {
    let bytes = component.as_bytes();
    let mut value: u8 = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0');
        i += 1;
    }
    value
}
