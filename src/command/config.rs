//! Runtime configuration of the line terminator and token delimiters.

use heapless::String;
use serde::{Deserialize, Serialize};

use super::Error;

/// ASCII line feed, the default line terminator.
pub const ASCII_LF: u8 = b'\n';

/// Maximum number of distinct delimiter bytes.
pub const MAX_DELIMITERS: usize = 8;

/// Delimiter set used when none is configured.
pub const DEFAULT_DELIMITERS: &str = " ";

/// Terminator and delimiter settings of a [`SerialCommand`](super::SerialCommand).
///
/// Buffer sizes are compile-time parameters of the dispatcher; only the
/// byte values that shape the textual protocol live here, so a device can
/// keep them in a JSON blob next to its other settings.
///
/// ```rust
/// use serialcmd::Config;
///
/// let config = Config::from_json(r#"{"terminator":13,"delimiters":" ,"}"#).unwrap();
/// assert_eq!(config.terminator, b'\r');
/// assert_eq!(config.delimiters.as_str(), " ,");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Byte marking the end of a command line.
    pub terminator: u8,
    /// Bytes separating tokens within a line. Only ASCII bytes take effect.
    pub delimiters: String<MAX_DELIMITERS>,
}

impl Default for Config {
    fn default() -> Self {
        let mut delimiters = String::new();
        // A single space always fits.
        let _ = delimiters.push_str(DEFAULT_DELIMITERS);
        Self {
            terminator: ASCII_LF,
            delimiters,
        }
    }
}

impl Config {
    /// Build a configuration from a terminator and a delimiter set.
    pub fn new(terminator: u8, delimiters: &str) -> Result<Self, Error> {
        Ok(Self {
            terminator,
            delimiters: String::try_from(delimiters).map_err(|_| Error::DelimitersTooLong)?,
        })
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json_core::from_str::<Config>(json)
            .map(|(config, _)| config)
            .map_err(|_| Error::InvalidConfig)
    }

    /// Serialize the configuration as JSON into `buf`, returning the length written.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, Error> {
        serde_json_core::to_slice(self, buf).map_err(|_| Error::Serialize)
    }
}
