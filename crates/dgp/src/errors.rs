use thiserror::Error;

/// A result type for data generating process sampling
pub type Result<T> = std::result::Result<T, DgpError>;

/// An error when configuring or sampling a [`UnivariateDgp`](crate::UnivariateDgp)
#[derive(Error, Debug)]
pub enum DgpError {
    /// When a configuration value is invalid
    #[error("InvalidValue error: {0}")]
    InvalidValueError(String),
    /// When a sampling collaborator returns unusable draws
    #[error("Sample error: {0}")]
    SampleError(String),
    /// When a linfa error occurs
    #[error(transparent)]
    LinfaError(#[from] linfa::error::Error),
    /// When writing plot data fails
    #[error("Plot error: {0}")]
    PlotError(#[from] ndarray_npy::WriteNpyError),
    /// When error during saving
    #[cfg(feature = "persistent")]
    #[error("Save error: {0}")]
    SaveError(#[from] serde_json::Error),
    /// When error during IO
    #[error("IO error")]
    IoError(#[from] std::io::Error),
}
