//! LED strip device controller.

use super::frame::{Frame, Level, Mode};
use super::port::{PortOpener, SerialOpener};
use super::transmit::transmit;
use crate::Result;
use tracing::info;

/// LED strip device controller.
///
/// Every call opens the port, sends one frame and closes the port again.
/// Nothing is kept open between commands.
pub struct LedDevice<O = SerialOpener> {
    port_path: String,
    opener: O,
}

impl LedDevice {
    /// Creates a controller for the serial port at `port_path`.
    pub fn new(port_path: &str) -> Self {
        Self::with_opener(port_path, SerialOpener)
    }
}

impl<O: PortOpener> LedDevice<O> {
    /// Creates a controller that opens its channel through `opener`.
    pub fn with_opener(port_path: &str, opener: O) -> Self {
        Self {
            port_path: port_path.to_string(),
            opener,
        }
    }

    /// Sets the LED mode with brightness and speed.
    ///
    /// Returns the frame that was sent. If the port cannot be opened no
    /// bytes are written.
    pub async fn apply(&self, mode: Mode, brightness: Level, speed: Level) -> Result<Frame> {
        let frame = Frame::new(mode, brightness, speed);

        let mut channel = self.opener.open(&self.port_path)?;
        transmit(&mut channel, &frame).await?;
        drop(channel);

        info!(
            "LED set to {} (brightness: {}, speed: {}) on {}",
            mode, brightness, speed, self.port_path
        );
        Ok(frame)
    }

    /// Returns the port path.
    pub fn port_path(&self) -> &str {
        &self.port_path
    }
}
