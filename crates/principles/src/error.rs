//! Error types for the principle demos.

use thiserror::Error;

/// Errors raised by office devices.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device was asked for a capability it does not have
    #[error("{device} cannot {operation}")]
    Unsupported {
        device: &'static str,
        operation: &'static str,
    },
}
