//! T9 LED Hardware Library
//!
//! Encodes and transmits the 5-byte serial command frame that sets the LED
//! strip mode, brightness and speed on T9 Plus mini PCs.

pub mod error;
pub mod led;

pub use error::{Error, Result};
pub use led::{
    default_port, transmit, Frame, LedDevice, Level, Mode, PortOpener, SerialOpener,
};

/// Serial baud rate of the LED controller.
pub const LED_BAUD_RATE: u32 = 10000;
