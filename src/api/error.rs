//! API error type

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("rejected by server (code {code}): {msg}")]
    Rejected { code: i32, msg: String },

    #[error("response carried no data")]
    MissingData,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
