//! Error types for the T9 LED hardware library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the LED controller.
#[derive(Error, Debug)]
pub enum Error {
    /// Brightness or speed level outside 1-5.
    #[error("Invalid LED level (must be 1-5): {0}")]
    InvalidLevel(u8),

    /// Brightness or speed text that is not a number.
    #[error("Invalid LED level (must be 1-5): {0}")]
    InvalidLevelText(String),

    /// Serial device node does not exist.
    #[error("LED device not found at {0}")]
    PortNotFound(String),

    /// Serial port exists but could not be opened or configured.
    #[error("Failed to open serial port {port}: {source}")]
    PortOpen {
        port: String,
        #[source]
        source: tokio_serial::Error,
    },

    /// A write to the open port failed part way through a frame.
    #[error("Serial write failed after {sent} of 5 bytes: {source}")]
    Transmission {
        sent: usize,
        #[source]
        source: std::io::Error,
    },
}
