use thiserror::Error;

/// A call to the template store or the election service that didn't work.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Could not reach the {service}: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The service answered with an error; its message is passed on as-is.
    #[error("The {service} responded {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },
    #[error("{0} not found")]
    NotFound(String),
    #[error("The {service} sent an unexpected response: {message}")]
    Malformed {
        service: &'static str,
        message: String,
    },
    /// An in-memory service told to fail.
    #[error("The {0} is unavailable")]
    Unavailable(&'static str),
}
