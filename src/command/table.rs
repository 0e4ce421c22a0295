//! Ordered command table.

use heapless::{String, Vec};

use super::Error;
use super::tokens::Tokens;

/// Handler invoked when a line's first token names a registered command.
///
/// The handler reads its arguments from the line's [`Tokens`] session,
/// which is positioned just after the command token. Arguments are free
/// form text; validating them is up to the handler.
///
/// # Arguments
///
/// * `args` - Remaining tokens of the line that selected this command
///
/// # Examples
///
/// ```rust
/// use serialcmd::{CommandFn, Tokens};
///
/// let pwm: CommandFn = |args| {
///     let duty = args.next().and_then(|t| t.parse::<u8>().ok());
///     if let Some(duty) = duty {
///         // Apply the duty cycle to the timer.
///         let _ = duty;
///     }
/// };
///
/// pwm(&mut Tokens::new("40", b" "));
/// ```
pub type CommandFn = fn(args: &mut Tokens<'_>);

/// One registered command: a (possibly truncated) name and its handler.
#[derive(Debug, Clone)]
pub struct CommandEntry<const NAME: usize> {
    name: String<NAME>,
    handler: CommandFn,
}

impl<const NAME: usize> CommandEntry<NAME> {
    /// Create an entry, truncating `name` to at most `NAME` bytes.
    pub fn new(name: &str, handler: CommandFn) -> Self {
        let mut stored = String::new();
        for ch in name.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        Self {
            name: stored,
            handler,
        }
    }

    /// The stored command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The command's handler.
    pub fn handler(&self) -> CommandFn {
        self.handler
    }

    /// `true` if `token` selects this entry.
    ///
    /// Only the first `NAME` bytes of `token` take part in the comparison,
    /// so a token longer than the name limit still selects the entry whose
    /// name equals its prefix.
    pub fn matches(&self, token: &str) -> bool {
        let token = token.as_bytes();
        let significant = &token[..token.len().min(NAME)];
        significant == self.name.as_bytes()
    }
}

/// Insertion-ordered table of commands with room for `CAP` entries.
///
/// Duplicate names are accepted; lookups scan in registration order and the
/// first match wins, so a later duplicate is never reachable.
#[derive(Debug, Clone, Default)]
pub struct CommandTable<const NAME: usize, const CAP: usize> {
    entries: Vec<CommandEntry<NAME>, CAP>,
}

impl<const NAME: usize, const CAP: usize> CommandTable<NAME, CAP> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a command to the end of the table.
    ///
    /// # Arguments
    ///
    /// * `name` - Command name, truncated to `NAME` bytes
    /// * `handler` - Function to run when the name is matched
    ///
    /// # Returns
    ///
    /// * `Ok(entry)` - The stored entry, with its effective name
    /// * `Err(Error::TableFull)` - All `CAP` slots are in use
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialcmd::command::CommandTable;
    ///
    /// let mut table: CommandTable<4, 2> = CommandTable::new();
    /// let entry = table.push("STATUS", |_| {}).unwrap();
    /// assert_eq!(entry.name(), "STAT");
    /// ```
    pub fn push(&mut self, name: &str, handler: CommandFn) -> Result<&CommandEntry<NAME>, Error> {
        self.entries
            .push(CommandEntry::new(name, handler))
            .map_err(|_| Error::TableFull)?;
        self.entries.last().ok_or(Error::TableFull)
    }

    /// Find the first entry matching `token`, with its position.
    ///
    /// Entries are scanned in registration order and the scan stops at the
    /// first match, so duplicates registered later are never returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialcmd::command::CommandTable;
    ///
    /// let mut table: CommandTable<8, 4> = CommandTable::new();
    /// table.push("LED", |_| {}).unwrap();
    /// table.push("GO", |_| {}).unwrap();
    /// table.push("GO", |_| {}).unwrap();
    ///
    /// assert_eq!(table.find("GO").map(|(index, _)| index), Some(1));
    /// assert!(table.find("go").is_none());
    /// ```
    pub fn find(&self, token: &str) -> Option<(usize, &CommandEntry<NAME>)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.matches(token))
    }

    /// Entries in registration order.
    pub fn iter(&self) -> core::slice::Iter<'_, CommandEntry<NAME>> {
        self.entries.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if no command is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of commands.
    pub const fn capacity(&self) -> usize {
        CAP
    }
}
