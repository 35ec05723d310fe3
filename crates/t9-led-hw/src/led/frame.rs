//! LED command frame encoding.
//!
//! Frame layout (5 bytes):
//! - 0: begin byte 0xFA
//! - 1: mode byte
//! - 2: brightness byte (6 - level)
//! - 3: speed byte (6 - level)
//! - 4: checksum, 8-bit wrapping sum of bytes 0-3

use crate::{Error, Result};
use std::str::FromStr;

/// Begin byte that starts every frame.
pub const BEGIN_BYTE: u8 = 0xFA;

/// Number of bytes in a frame.
pub const FRAME_LEN: usize = 5;

/// Device bytes for levels 1 through 5. The controller counts downwards.
const LEVEL_BYTES: [u8; 5] = [0x05, 0x04, 0x03, 0x02, 0x01];

/// LED lighting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// LEDs off.
    Off,
    /// Automatic mode.
    Auto,
    /// Rainbow cycling effect.
    Rainbow,
    /// Breathing/pulsing effect.
    Breathing,
    /// Solid colors cycling.
    Cycle,
}

impl Mode {
    /// All modes, in the order they are listed to users.
    pub const ALL: [Mode; 5] = [
        Mode::Off,
        Mode::Auto,
        Mode::Rainbow,
        Mode::Breathing,
        Mode::Cycle,
    ];

    /// Returns the device byte for this mode.
    pub fn byte(self) -> u8 {
        match self {
            Mode::Off => 0x04,
            Mode::Auto => 0x05,
            Mode::Rainbow => 0x01,
            Mode::Breathing => 0x02,
            Mode::Cycle => 0x03,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Off => write!(f, "off"),
            Mode::Auto => write!(f, "auto"),
            Mode::Rainbow => write!(f, "rainbow"),
            Mode::Breathing => write!(f, "breathing"),
            Mode::Cycle => write!(f, "cycle"),
        }
    }
}

/// Brightness or speed level, always within 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    /// Lowest level (dimmest / slowest).
    pub const MIN: Level = Level(1);
    /// Highest level (brightest / fastest).
    pub const MAX: Level = Level(5);

    /// Returns the user-facing level (1-5).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the device byte for this level.
    pub fn byte(self) -> u8 {
        LEVEL_BYTES[usize::from(self.0 - 1)]
    }
}

impl Default for Level {
    fn default() -> Self {
        Level(3)
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(Error::InvalidLevel(value));
        }
        Ok(Level(value))
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidLevelText(s.to_string()))?;
        Level::try_from(value)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calculates the frame checksum: (0xFA + mode + brightness + speed) mod 256.
pub fn checksum(mode: u8, brightness: u8, speed: u8) -> u8 {
    [BEGIN_BYTE, mode, brightness, speed]
        .iter()
        .fold(0u8, |acc, &x| acc.wrapping_add(x))
}

/// A complete, immutable LED command frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// Builds the frame for the given mode, brightness and speed.
    pub fn new(mode: Mode, brightness: Level, speed: Level) -> Self {
        let mode = mode.byte();
        let brightness = brightness.byte();
        let speed = speed.byte();
        Frame([
            BEGIN_BYTE,
            mode,
            brightness,
            speed,
            checksum(mode, brightness, speed),
        ])
    }

    /// Returns the raw frame bytes in wire order.
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Returns the mode byte (offset 1).
    pub fn mode_byte(&self) -> u8 {
        self.0[1]
    }

    /// Returns the brightness byte (offset 2).
    pub fn brightness_byte(&self) -> u8 {
        self.0[2]
    }

    /// Returns the speed byte (offset 3).
    pub fn speed_byte(&self) -> u8 {
        self.0[3]
    }

    /// Returns the checksum byte (offset 4).
    pub fn checksum_byte(&self) -> u8 {
        self.0[4]
    }
}
