//! Serial channel opening.
//!
//! The controller is a CH340 serial bridge fixed at 10000 baud, 8N1. The
//! frame transmitter only needs something it can write to, so opening is
//! behind [`PortOpener`] and the serial backend is just one implementation.

use crate::{Error, Result, LED_BAUD_RATE};
use std::time::Duration;
use tokio::io::AsyncWrite;
use tokio_serial::{DataBits, FlowControl, Parity, SerialPortBuilderExt, SerialStream, StopBits};
use tracing::debug;

/// Write timeout applied to the opened port.
const WRITE_TIMEOUT: Duration = Duration::from_millis(50);

/// Returns the platform default LED serial port.
pub fn default_port() -> &'static str {
    if cfg!(windows) {
        "COM3"
    } else {
        "/dev/ttyUSB0"
    }
}

/// Opens a writable byte channel to the LED controller.
pub trait PortOpener {
    type Channel: AsyncWrite + Unpin + Send;

    /// Opens and configures `port`, or reports why it could not be opened.
    fn open(&self, port: &str) -> Result<Self::Channel>;
}

/// Opens the native serial port (termios on Unix, COM on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialOpener;

impl PortOpener for SerialOpener {
    type Channel = SerialStream;

    fn open(&self, port: &str) -> Result<SerialStream> {
        debug!("Opening {} at {} baud (8N1)", port, LED_BAUD_RATE);

        tokio_serial::new(port, LED_BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(WRITE_TIMEOUT)
            .open_native_async()
            .map_err(|e| open_error(port, e))
    }
}

fn open_error(port: &str, source: tokio_serial::Error) -> Error {
    // COM names are not filesystem paths, so only device nodes can be checked.
    if cfg!(unix) && !std::path::Path::new(port).exists() {
        return Error::PortNotFound(port.to_string());
    }
    Error::PortOpen {
        port: port.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        #[cfg(windows)]
        assert_eq!(default_port(), "COM3");
        #[cfg(not(windows))]
        assert_eq!(default_port(), "/dev/ttyUSB0");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_open_missing_port() {
        let err = SerialOpener
            .open("/dev/t9led-missing-port")
            .unwrap_err();
        assert!(matches!(err, Error::PortNotFound(ref p) if p == "/dev/t9led-missing-port"));
    }

    #[cfg(unix)]
    #[test]
    fn test_open_error_for_existing_path() {
        let source = tokio_serial::Error::new(tokio_serial::ErrorKind::Unknown, "not a tty");
        let err = open_error("/dev/null", source);
        assert!(matches!(err, Error::PortOpen { ref port, .. } if port == "/dev/null"));
    }
}
