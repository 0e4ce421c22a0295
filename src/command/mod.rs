//! Line-oriented command dispatcher for serial byte streams.
//!
//! [`SerialCommand`] turns a stream of bytes into command invocations:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   ByteSource    │───▶│   LineBuffer    │───▶│   Tokens +      │
//! │   (UART, radio) │    │   (printable,   │    │   CommandTable  │
//! │                 │    │    bounded)     │    │   (first match) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Bytes are consumed one at a time. Printable ASCII is appended to a
//! bounded line buffer, other bytes are dropped, and the terminator (line
//! feed by default) completes the line. The first delimiter-separated token
//! of the line is looked up in the command table in registration order; the
//! matching handler runs with a [`Tokens`] session from which it pulls its
//! arguments. Lines naming no registered command go to the optional default
//! handler together with the unmatched token.
//!
//! Nothing in the runtime path fails: over-long lines are truncated to the
//! buffer capacity, empty lines are skipped and unknown commands without a
//! default handler are discarded.
//!
//! # Example
//!
//! ```rust
//! use serialcmd::{SerialCommand, Tokens};
//! use serialcmd::stream::SliceSource;
//!
//! fn set(args: &mut Tokens<'_>) {
//!     let channel = args.next();
//!     let value = args.next();
//!     assert_eq!((channel, value), (Some("10"), Some("20")));
//! }
//!
//! fn unrecognized(command: &str, _args: &mut Tokens<'_>) {
//!     assert_eq!(command, "led");
//! }
//!
//! let mut commands = SerialCommand::new();
//! commands.add_command("SET", set).unwrap();
//! commands.set_default_handler(Some(unrecognized));
//!
//! let mut uart = SliceSource::new(b"SET 10 20\r\nled\n");
//! let lines = commands.poll(&mut uart).unwrap();
//! assert_eq!(lines, 2);
//! ```

use core::fmt::Write as _;

use crate::log;
use crate::stream::ByteSource;

mod buffer;
mod config;
mod error;
mod table;
mod tokens;

pub use buffer::{LineBuffer, Push, is_printable};
pub use config::{ASCII_LF, Config, DEFAULT_DELIMITERS, MAX_DELIMITERS};
pub use error::Error;
pub use table::{CommandEntry, CommandFn, CommandTable};
pub use tokens::Tokens;

/// Default line buffer capacity in bytes.
pub const DEFAULT_LINE_LENGTH: usize = 32;

/// Default number of significant bytes in a command name.
pub const DEFAULT_COMMAND_LENGTH: usize = 8;

/// Default number of commands the table can hold.
pub const DEFAULT_MAX_COMMANDS: usize = 16;

/// Handler invoked for lines whose first token matches no command.
///
/// Receives the unmatched token and the line's token session, positioned
/// after that token.
///
/// # Arguments
///
/// * `command` - The first token of the line, as received
/// * `args` - Remaining tokens of the line
///
/// # Examples
///
/// ```rust
/// use serialcmd::{DefaultFn, SerialCommand};
///
/// let unknown: DefaultFn = |command, _args| {
///     println!("Unknown command: {}", command);
/// };
///
/// let mut commands = SerialCommand::new();
/// commands.set_default_handler(Some(unknown));
/// commands.input(b"HELP\n");
/// ```
pub type DefaultFn = fn(command: &str, args: &mut Tokens<'_>);

/// Function signature for trace output.
///
/// The dispatcher reports registrations, received lines and lookup results
/// through it, which is handy when bringing up a new link over a second
/// console port.
pub type OutputFn = fn(&str);

/// Forwards formatted pieces straight to an [`OutputFn`], so trace lines
/// are never cut short by a scratch buffer.
struct TraceWriter(OutputFn);

impl core::fmt::Write for TraceWriter {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        (self.0)(s);
        Ok(())
    }
}

/// What happened to a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The line held no token; nothing was invoked.
    Empty,
    /// The command at this table position was invoked.
    Matched(usize),
    /// No command matched and the default handler was invoked.
    Default,
    /// No command matched and no default handler is set; the line was discarded.
    Unmatched,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Dispatch {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Dispatch::Empty => defmt::write!(f, "Empty"),
            Dispatch::Matched(index) => defmt::write!(f, "Matched({})", index),
            Dispatch::Default => defmt::write!(f, "Default"),
            Dispatch::Unmatched => defmt::write!(f, "Unmatched"),
        }
    }
}

/// Command tokenizer and dispatcher.
///
/// * `LINE` - line buffer capacity in bytes
/// * `NAME` - significant bytes of a command name
/// * `CMDS` - maximum number of registered commands
///
/// The defaults (32, 8, 16) suit small microcontrollers.
///
/// Registration is expected to happen once during start-up, before the
/// first [`poll`](Self::poll). The dispatcher keeps no locks; drive it from
/// a single context and move bytes out of interrupt handlers through a
/// queue such as [`heapless::spsc`].
#[derive(Debug)]
pub struct SerialCommand<
    const LINE: usize = DEFAULT_LINE_LENGTH,
    const NAME: usize = DEFAULT_COMMAND_LENGTH,
    const CMDS: usize = DEFAULT_MAX_COMMANDS,
> {
    buffer: LineBuffer<LINE>,
    commands: CommandTable<NAME, CMDS>,
    default_handler: Option<DefaultFn>,
    config: Config,
    output_fn: Option<OutputFn>,
}

impl SerialCommand {
    /// Create a dispatcher with the default sizes and configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }
}

impl<const LINE: usize, const NAME: usize, const CMDS: usize> Default
    for SerialCommand<LINE, NAME, CMDS>
{
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<const LINE: usize, const NAME: usize, const CMDS: usize> SerialCommand<LINE, NAME, CMDS> {
    /// Create a dispatcher using `config` for the terminator and delimiters.
    pub fn with_config(config: Config) -> Self {
        Self {
            buffer: LineBuffer::new(),
            commands: CommandTable::new(),
            default_handler: None,
            config,
            output_fn: None,
        }
    }

    /// Register a command.
    ///
    /// Names longer than `NAME` bytes are truncated and the truncated name
    /// is what lines must spell. Registering a name twice is allowed, but
    /// only the first registration is ever reached.
    ///
    /// # Errors
    ///
    /// [`Error::TableFull`] when `CMDS` commands are already registered.
    /// The table has a fixed capacity so the dispatcher never allocates;
    /// a heap-backed table that grows on every registration would have no
    /// such failure. Raise `CMDS` if the command set outgrows the default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialcmd::{Error, SerialCommand, Tokens};
    ///
    /// fn reset(_args: &mut Tokens<'_>) {}
    ///
    /// let mut commands: SerialCommand<32, 8, 1> = SerialCommand::default();
    /// assert_eq!(commands.add_command("RESET", reset), Ok(()));
    /// assert_eq!(commands.add_command("REBOOT", reset), Err(Error::TableFull));
    /// ```
    pub fn add_command(&mut self, name: &str, handler: CommandFn) -> Result<(), Error> {
        let index = self.commands.len();
        let entry = match self.commands.push(name, handler) {
            Ok(entry) => entry,
            Err(err) => {
                log::warning!("command table full, dropping {=str}", name);
                return Err(err);
            }
        };
        log::debug!("added command {=usize}: {=str}", index, entry.name());

        if let Some(output_fn) = self.output_fn {
            let _ = write!(
                TraceWriter(output_fn),
                "Adding command ({}): {}\r\n",
                index,
                entry.name()
            );
        }
        Ok(())
    }

    /// Set or clear the handler for unmatched commands.
    pub fn set_default_handler(&mut self, handler: Option<DefaultFn>) {
        self.default_handler = handler;
    }

    /// Set the output function receiving trace messages.
    ///
    /// Once set, every received byte is echoed to it before being
    /// processed, followed by registration, reception and lookup traces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialcmd::SerialCommand;
    ///
    /// let mut commands = SerialCommand::new();
    /// commands.set_output_function(|text| print!("{}", text));
    /// commands.input(b"PING\n"); // echoes "PING\n", then "Received: PING\r\n"
    /// ```
    pub fn set_output_function(&mut self, output_fn: OutputFn) {
        self.output_fn = Some(output_fn);
    }

    /// Stop emitting trace messages.
    pub fn clear_output_function(&mut self) {
        self.output_fn = None;
    }

    /// Change the line terminator.
    pub fn set_terminator(&mut self, terminator: u8) {
        self.config.terminator = terminator;
    }

    /// Change the token delimiter set.
    ///
    /// # Errors
    ///
    /// [`Error::DelimitersTooLong`] if `delimiters` exceeds [`MAX_DELIMITERS`]
    /// bytes; the current set is kept.
    pub fn set_delimiters(&mut self, delimiters: &str) -> Result<(), Error> {
        self.config.delimiters =
            heapless::String::try_from(delimiters).map_err(|_| Error::DelimitersTooLong)?;
        Ok(())
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The registered commands in registration order.
    pub fn commands(&self) -> &CommandTable<NAME, CMDS> {
        &self.commands
    }

    /// The partial line assembled so far.
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// Discard the partial line.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Drain every byte `source` has available, dispatching each completed line.
    ///
    /// Returns the number of lines completed during this call, including
    /// empty and unmatched ones. Returns as soon as the source reports no
    /// pending bytes, so it is meant to be called from the main loop.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`. Bytes read before
    /// the error have already been processed.
    pub fn poll<S: ByteSource>(&mut self, mut source: S) -> Result<usize, S::Error> {
        let mut lines = 0;
        while source.available() > 0 {
            let Some(byte) = source.read_byte()? else {
                break;
            };
            if self.input_byte(byte).is_some() {
                lines += 1;
            }
        }
        Ok(lines)
    }

    /// Process bytes already in hand, exactly as [`poll`](Self::poll) would.
    ///
    /// Returns the number of lines completed.
    pub fn input(&mut self, data: &[u8]) -> usize {
        let mut lines = 0;
        for &byte in data {
            if self.input_byte(byte).is_some() {
                lines += 1;
            }
        }
        lines
    }

    /// Process a single byte, returning the dispatch outcome if it completed a line.
    pub fn input_byte(&mut self, byte: u8) -> Option<Dispatch> {
        self.echo(byte);

        if byte == self.config.terminator {
            log::debug!("received {=str}", self.buffer.as_str());
            self.trace("Received: ", self.buffer.as_str());
            let outcome = self.dispatch_line(self.buffer.as_str());
            self.buffer.clear();
            return Some(outcome);
        }

        if self.buffer.push(byte) == Push::Dropped {
            log::trace!("line buffer full, dropped {=u8:#x}", byte);
            self.trace("Line buffer is full", "");
        }
        None
    }

    /// Tokenize `line` and invoke the handler its first token selects.
    ///
    /// The line is split on the configured delimiters. An empty line, or
    /// one holding only delimiters, invokes nothing. Otherwise the command
    /// table is scanned in registration order and the first entry whose
    /// name matches is invoked; remaining entries are not examined. When no
    /// entry matches, the default handler (if any) receives the token.
    pub fn dispatch_line(&self, line: &str) -> Dispatch {
        let mut tokens = Tokens::new(line, self.config.delimiters.as_bytes());
        let Some(command) = tokens.next() else {
            return Dispatch::Empty;
        };

        if self.output_fn.is_some() {
            for entry in self.commands.iter() {
                self.trace_compare(command, entry.name());
                if entry.matches(command) {
                    break;
                }
            }
        }

        match self.commands.find(command) {
            Some((index, entry)) => {
                log::debug!("matched command {=str} at {=usize}", command, index);
                self.trace("Matched Command: ", command);
                (entry.handler())(&mut tokens);
                Dispatch::Matched(index)
            }
            None => match self.default_handler {
                Some(handler) => {
                    log::debug!("unrecognized command {=str}", command);
                    handler(command, &mut tokens);
                    Dispatch::Default
                }
                None => {
                    log::debug!("discarded unrecognized command {=str}", command);
                    Dispatch::Unmatched
                }
            },
        }
    }

    fn trace(&self, label: &str, text: &str) {
        if let Some(output_fn) = self.output_fn {
            output_fn(label);
            output_fn(text);
            output_fn("\r\n");
        }
    }

    fn echo(&self, byte: u8) {
        if let Some(output_fn) = self.output_fn {
            let mut utf8 = [0u8; 4];
            output_fn(char::from(byte).encode_utf8(&mut utf8));
        }
    }

    fn trace_compare(&self, command: &str, name: &str) {
        if let Some(output_fn) = self.output_fn {
            let _ = write!(TraceWriter(output_fn), "Comparing [{}] to [{}]\r\n", command, name);
        }
    }
}
