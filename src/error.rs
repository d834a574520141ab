use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that abort a request outright. Per-record problems during a
/// run are reported as [`crate::ddns::Outcome`]s instead.
///
/// Provider URLs carry the API key in their query string, so no variant
/// ever holds a URL with its query.
#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Network(e.without_url())
    }
}

impl Error {
    pub(crate) fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let mut url = response.url().clone();
            url.set_query(None);
            Err(Error::Status {
                url: url.to_string(),
                status,
            })
        }
    }
}
