//! Per-line tokenization session.

/// Forward-only iterator over the delimiter-separated tokens of one line.
///
/// A `Tokens` session is created for every completed line and handed to the
/// invoked handler, which pulls its arguments with [`next`](Iterator::next).
/// Leading and repeated delimiters are skipped, so a token is never empty.
/// The session borrows the line, so it cannot outlive the dispatch it was
/// created for.
///
/// ```rust
/// use serialcmd::Tokens;
///
/// let mut tokens = Tokens::new("  SET 10   20", b" ");
/// assert_eq!(tokens.next(), Some("SET"));
/// assert_eq!(tokens.next(), Some("10"));
/// assert_eq!(tokens.next(), Some("20"));
/// assert_eq!(tokens.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    delimiters: &'a [u8],
}

impl<'a> Tokens<'a> {
    /// Start tokenizing `line`, splitting on any byte in `delimiters`.
    ///
    /// # Arguments
    ///
    /// * `line` - Completed command line
    /// * `delimiters` - Separator bytes; non-ASCII bytes in the set are ignored
    pub fn new(line: &'a str, delimiters: &'a [u8]) -> Self {
        Self {
            rest: line,
            delimiters,
        }
    }

    // Only ASCII bytes split, so a token boundary is always a char boundary.
    fn is_delimiter(&self, byte: u8) -> bool {
        byte.is_ascii() && self.delimiters.contains(&byte)
    }

    /// The unconsumed remainder of the line, without leading delimiters.
    ///
    /// Useful for commands taking free text as their last argument. Calling
    /// it does not advance the session.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialcmd::Tokens;
    ///
    /// let mut tokens = Tokens::new("SAY   hello radio  ", b" ");
    /// assert_eq!(tokens.next(), Some("SAY"));
    /// assert_eq!(tokens.rest(), "hello radio  ");
    /// ```
    pub fn rest(&self) -> &'a str {
        let start = self
            .rest
            .bytes()
            .position(|b| !self.is_delimiter(b))
            .unwrap_or(self.rest.len());
        &self.rest[start..]
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }

        let end = rest
            .bytes()
            .position(|b| self.is_delimiter(b))
            .unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        self.rest = match tail.len() {
            0 => tail,
            _ => &tail[1..],
        };
        Some(token)
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}
