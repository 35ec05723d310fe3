//! T9 LED Control Tool
//!
//! CLI for setting the LED strip mode, brightness and speed on T9 Plus mini
//! PCs over the serial port.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use t9_led_hw::{LedDevice, Level, Mode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum CliMode {
    /// Turn the LEDs off
    Off,
    /// Automatic mode
    Auto,
    /// Rainbow cycling effect
    Rainbow,
    /// Breathing/pulsing effect
    Breathing,
    /// Solid colors cycling
    Cycle,
}

impl From<CliMode> for Mode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Off => Mode::Off,
            CliMode::Auto => Mode::Auto,
            CliMode::Rainbow => Mode::Rainbow,
            CliMode::Breathing => Mode::Breathing,
            CliMode::Cycle => Mode::Cycle,
        }
    }
}

#[derive(Parser)]
#[command(name = "t9led")]
#[command(about = "Control the LED lights on a T9 Plus mini PC")]
#[command(version)]
struct Cli {
    /// LED mode
    #[arg(value_enum, ignore_case = true)]
    mode: CliMode,

    /// Brightness, 1 (dimmest) to 5 (brightest) [default: 3]
    #[arg(long)]
    brightness: Option<Level>,

    /// Animation speed, 1 (slowest) to 5 (fastest) [default: 3]
    #[arg(long)]
    speed: Option<Level>,

    /// Serial port [default: /dev/ttyUSB0, COM3 on Windows]
    #[arg(long)]
    serial_port: Option<String>,

    /// Configuration file with defaults for the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (shows each byte sent)
    #[arg(short, long)]
    verbose: bool,
}

/// A fully validated LED command.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Request {
    mode: Mode,
    brightness: Level,
    speed: Level,
    port: String,
}

impl Cli {
    /// Merges flags over configuration values.
    fn resolve(&self, config: &Config) -> Result<Request> {
        let brightness = match self.brightness {
            Some(level) => level,
            None => config.led.brightness()?,
        };
        let speed = match self.speed {
            Some(level) => level,
            None => config.led.speed()?,
        };
        let port = self
            .serial_port
            .clone()
            .unwrap_or_else(|| config.led.port.clone());

        Ok(Request {
            mode: self.mode.into(),
            brightness,
            speed,
            port,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            debug!("Loaded configuration from: {}", path.display());
            config
        }
        None => Config::default(),
    };

    let request = cli.resolve(&config)?;
    debug!("Resolved request: {:?}", request);

    let led = LedDevice::new(&request.port);
    led.apply(request.mode, request.brightness, request.speed)
        .await
        .with_context(|| format!("Failed to set LED on {}", request.port))?;

    println!(
        "LED set to {} (brightness: {}, speed: {}) on {}",
        request.mode, request.brightness, request.speed, request.port
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("t9led").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["off"]).unwrap();
        let request = cli.resolve(&Config::default()).unwrap();
        assert_eq!(request.mode, Mode::Off);
        assert_eq!(request.brightness, Level::default());
        assert_eq!(request.speed, Level::default());
        assert_eq!(request.port, t9_led_hw::default_port());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "rainbow",
            "--brightness",
            "5",
            "--speed",
            "1",
            "--serial-port",
            "/dev/ttyUSB2",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);

        let request = cli.resolve(&Config::default()).unwrap();
        assert_eq!(request.mode, Mode::Rainbow);
        assert_eq!(request.brightness, Level::MAX);
        assert_eq!(request.speed, Level::MIN);
        assert_eq!(request.port, "/dev/ttyUSB2");
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        for bad in ["0", "6", "x"] {
            let err = parse(&["auto", "--brightness", bad]).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
            let err = parse(&["auto", "--speed", bad]).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::ValueValidation);
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = parse(&["disco"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_mode_ignores_case() {
        assert_eq!(parse(&["Rainbow"]).unwrap().mode, CliMode::Rainbow);
        assert_eq!(parse(&["BREATHING"]).unwrap().mode, CliMode::Breathing);
        assert_eq!(parse(&["cYcLe"]).unwrap().mode, CliMode::Cycle);
    }

    #[test]
    fn test_missing_values_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["cycle", "--brightness"]).is_err());
        assert!(parse(&["cycle", "--serial-port"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config: Config =
            toml::from_str("[led]\nport = \"COM7\"\nbrightness = 1\nspeed = 2\n").unwrap();

        let request = parse(&["breathing", "--speed", "4"])
            .unwrap()
            .resolve(&config)
            .unwrap();
        assert_eq!(request.port, "COM7");
        assert_eq!(request.brightness.get(), 1);
        assert_eq!(request.speed.get(), 4);
    }

    #[test]
    fn test_invalid_config_value_rejected() {
        let config: Config = toml::from_str("[led]\nbrightness = 9\n").unwrap();
        assert!(parse(&["off"]).unwrap().resolve(&config).is_err());
        // A flag replaces the bad value.
        assert!(parse(&["off", "--brightness", "2"])
            .unwrap()
            .resolve(&config)
            .is_ok());
    }
}
