use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown argument \"{0}\"")]
    UnknownArgument(String),

    #[error("Missing value for \"{0}\"")]
    MissingValue(&'static str),

    #[error("Invalid value \"{got}\" for \"{arg}\": {source}")]
    InvalidValue {
        arg: &'static str,
        got: String,
        source: ParseIntError,
    },

    #[error("\"{0}\" must be positive")]
    NonPositive(&'static str),
}

/// Runtime options.
///
/// ```notrust
/// lifeterm [--width N] [--height N] [--cell-size N] [--fps N]
/// ```
///
/// All four must be positive; a universe of zero size is a fatal error
/// further down, so it is rejected here where it can still be reported.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Grid width in cells.
    pub width: u32,

    /// Grid height in cells.
    pub height: u32,

    /// Cell side length in canvas pixels.
    pub cell_size: u32,

    /// Frame-scheduling rate cap.
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            cell_size: 1,
            fps: 30,
        }
    }
}

impl Config {
    /// Parse command line arguments, program name already skipped.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let name: &'static str = match arg.as_str() {
                "--width" => "--width",
                "--height" => "--height",
                "--cell-size" => "--cell-size",
                "--fps" => "--fps",
                _ => return Err(ConfigError::UnknownArgument(arg)),
            };

            let value = args.next().ok_or(ConfigError::MissingValue(name))?;
            let parsed: u32 = value.parse().map_err(|source| ConfigError::InvalidValue {
                arg: name,
                got: value,
                source,
            })?;

            if parsed == 0 {
                return Err(ConfigError::NonPositive(name));
            }

            match name {
                "--width" => config.width = parsed,
                "--height" => config.height = parsed,
                "--cell-size" => config.cell_size = parsed,
                _ => config.fps = parsed,
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_when_no_args() {
        let config = parse(&[]).unwrap();

        assert_eq!(config.width, 64);
        assert_eq!(config.height, 48);
        assert_eq!(config.cell_size, 1);
        assert_eq!(config.fps, 30);
    }

    #[test]
    fn overrides_apply() {
        let config = parse(&["--width", "128", "--cell-size", "5"]).unwrap();

        assert_eq!(config.width, 128);
        assert_eq!(config.cell_size, 5);
        assert_eq!(config.height, 48);
    }

    #[test]
    fn rejects_unknown_and_invalid() {
        assert!(matches!(
            parse(&["--zoom", "3"]),
            Err(ConfigError::UnknownArgument(_))
        ));
        assert!(matches!(
            parse(&["--width"]),
            Err(ConfigError::MissingValue("--width"))
        ));
        assert!(matches!(
            parse(&["--fps", "fast"]),
            Err(ConfigError::InvalidValue { arg: "--fps", .. })
        ));
        assert!(matches!(
            parse(&["--height", "0"]),
            Err(ConfigError::NonPositive("--height"))
        ));
    }
}
