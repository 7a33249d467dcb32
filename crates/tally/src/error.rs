//! Result and Error types for mcslab-tally

/// Type alias for Result<T, tally::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `mcslab-tally` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),
}
