//! Command-line configuration for the demo binary.

use std::fmt;

/// Largest accepted wall percentage; denser grids are rarely connected.
pub const MAX_WALL_PERCENT: u32 = 90;

/// Demo settings, parsed from `[size] [wall-percent] [seed]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Side length of the square grid.
    pub size: i32,
    /// Share of cells turned into walls, in percent.
    pub wall_percent: u32,
    /// RNG seed. A random one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            size: 100,
            wall_percent: 0,
            seed: None,
        }
    }
}

impl DemoConfig {
    /// Parse positional arguments (program name excluded).
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cfg = Self::default();
        let mut args = args.into_iter();

        if let Some(a) = args.next() {
            let a = a.as_ref();
            cfg.size = a
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("size", a.to_string()))?;
            if cfg.size <= 0 {
                return Err(ConfigError::OutOfRange("size", a.to_string()));
            }
        }
        if let Some(a) = args.next() {
            let a = a.as_ref();
            cfg.wall_percent = a
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("wall-percent", a.to_string()))?;
            if cfg.wall_percent > MAX_WALL_PERCENT {
                return Err(ConfigError::OutOfRange("wall-percent", a.to_string()));
            }
        }
        if let Some(a) = args.next() {
            let a = a.as_ref();
            cfg.seed = Some(
                a.parse()
                    .map_err(|_| ConfigError::InvalidNumber("seed", a.to_string()))?,
            );
        }
        if let Some(a) = args.next() {
            return Err(ConfigError::UnexpectedArgument(a.as_ref().to_string()));
        }
        Ok(cfg)
    }
}

/// Bad command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidNumber(&'static str, String),
    OutOfRange(&'static str, String),
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(name, v) => write!(f, "{name}: not a number: {v}"),
            Self::OutOfRange(name, v) => write!(f, "{name}: out of range: {v}"),
            Self::UnexpectedArgument(v) => write!(f, "unexpected argument: {v}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_args() {
        let cfg = DemoConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(cfg, DemoConfig::default());
        assert_eq!(cfg.size, 100);
    }

    #[test]
    fn all_positional() {
        let cfg = DemoConfig::from_args(["20", "30", "7"]).unwrap();
        assert_eq!(
            cfg,
            DemoConfig {
                size: 20,
                wall_percent: 30,
                seed: Some(7),
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            DemoConfig::from_args(["ten"]),
            Err(ConfigError::InvalidNumber("size", "ten".into()))
        );
        assert_eq!(
            DemoConfig::from_args(["0"]),
            Err(ConfigError::OutOfRange("size", "0".into()))
        );
        assert_eq!(
            DemoConfig::from_args(["10", "95"]),
            Err(ConfigError::OutOfRange("wall-percent", "95".into()))
        );
        assert_eq!(
            DemoConfig::from_args(["10", "5", "1", "extra"]),
            Err(ConfigError::UnexpectedArgument("extra".into()))
        );
    }
}
