use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Stream faults are not represented here: a broken or undecodable live
/// stream is logged and the feed simply stops updating.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, …).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16 },
}
