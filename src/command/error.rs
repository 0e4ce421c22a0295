//! Error types for command registration and configuration

use core::fmt;

/// Errors reported while setting up a [`SerialCommand`](super::SerialCommand).
///
/// Line processing itself never fails: overflowing lines are truncated,
/// unknown commands fall through to the default handler or are discarded.
/// Only the setup path (registering commands, applying a configuration)
/// can report a problem.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The command table has no free slot left.
    TableFull,
    /// The delimiter set does not fit in [`MAX_DELIMITERS`](super::MAX_DELIMITERS) bytes.
    DelimitersTooLong,
    /// A JSON configuration blob could not be parsed.
    InvalidConfig,
    /// A configuration could not be serialized into the supplied buffer.
    Serialize,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Error::TableFull => "command table is full",
            Error::DelimitersTooLong => "delimiter set is too long",
            Error::InvalidConfig => "invalid configuration",
            Error::Serialize => "configuration does not fit in buffer",
        };
        f.write_str(text)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::TableFull => defmt::write!(f, "TableFull"),
            Error::DelimitersTooLong => defmt::write!(f, "DelimitersTooLong"),
            Error::InvalidConfig => defmt::write!(f, "InvalidConfig"),
            Error::Serialize => defmt::write!(f, "Serialize"),
        }
    }
}
