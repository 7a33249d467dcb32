//! Result and Error types for mcslab-transport

/// Type alias for Result<T, transport::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `mcslab-transport` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("physics error")]
    PhysicsError(#[from] mcslab_physics::Error),

    #[error("tally error")]
    TallyError(#[from] mcslab_tally::Error),

    #[error("failed to parse configuration")]
    ConfigParseError(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
