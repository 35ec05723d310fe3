//! LED strip module.
//!
//! Provides control over the LED strip via serial (CH340).

mod device;
mod frame;
mod port;
mod transmit;

pub use device::LedDevice;
pub use frame::{checksum, Frame, Level, Mode, BEGIN_BYTE, FRAME_LEN};
pub use port::{default_port, PortOpener, SerialOpener};
pub use transmit::{transmit, BYTE_DELAY};
