use std::error::Error;
use std::io;

/// An error related to sending a request over a [RequestTransport](crate::transport::RequestTransport).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TransportError {
    /// The environment does not permit synchronous network calls.
    #[error("Synchronous requests are not supported in this environment.")]
    NotSupported,
    /// Error from the OS I/O layer.
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Other(#[source] Box<dyn Error + Send + Sync + 'static>),
}

impl From<TransportError> for io::Error {
    #[inline]
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Io(error) => error,
            TransportError::NotSupported => Self::new(io::ErrorKind::Unsupported, error),
            TransportError::Other(error) => Self::other(error),
        }
    }
}
