use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while querying the wage endpoint or writing its rows.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
    #[error("invalid row count {0:?}")]
    RowCount(String),
    #[error("unknown campus {0:?}")]
    UnknownCampus(String),
    #[error("invalid sort order {0:?}")]
    SortOrder(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
