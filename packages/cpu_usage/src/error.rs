use thiserror::Error;

/// Errors that can occur when querying process CPU usage.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operating system could not report CPU usage for the current process.
    ///
    /// A query either yields a fully populated snapshot or fails with this error.
    /// There is no partial-success mode and failed queries are never substituted
    /// with zeroed or cached values.
    #[error("the operating system could not report CPU usage for the current process")]
    ResourceUnavailable {
        /// The underlying operating system error.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for CPU usage operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
