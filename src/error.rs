use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoterackError {
    #[error("Document error: {0}")]
    Document(String),
    #[error("Store error: {0}")]
    Store(String),
    #[error("Invalid filter: {0}")]
    Filter(String),
}

pub type Result<T> = std::result::Result<T, QuoterackError>;

// Helper conversions
impl From<rusqlite::Error> for QuoterackError {
    fn from(e: rusqlite::Error) -> Self { Self::Store(e.to_string()) }
}
impl From<serde_json::Error> for QuoterackError {
    fn from(e: serde_json::Error) -> Self { Self::Document(e.to_string()) }
}
impl From<std::io::Error> for QuoterackError {
    fn from(e: std::io::Error) -> Self { Self::Document(e.to_string()) }
}
