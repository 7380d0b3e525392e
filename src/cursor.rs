//! Position-tracking view over an input string.
//!
//! [`Cursor`] is the backtracking substrate of the parser: it tracks a byte
//! offset into the source text, supports lookahead-by-one via
//! [`current_char`](Cursor::current_char), and supports nested save/restore
//! [`Checkpoint`]s so an alternative that fails to match can put the cursor
//! back without copying the string.
//!
//! A cursor is a sequential, single-owner state machine: exactly one parse
//! operation uses a given cursor for its entire duration. The offset only
//! moves forward, except through an explicit [`restore`](Cursor::restore).
//!
//! ## Examples
//!
//! ```rust
//! use datastring::Cursor;
//!
//! let mut cursor = Cursor::new("abc");
//! let cp = cursor.checkpoint();
//! cursor.advance();
//! cursor.advance();
//! assert_eq!(cursor.text_since(&cp), "ab");
//! cursor.restore(&cp);
//! cursor.release(cp);
//! assert_eq!(cursor.current_char(), Some('a'));
//! ```

/// A handle to a saved cursor position.
///
/// Obtained from [`Cursor::checkpoint`] and consumed by [`Cursor::release`].
/// Checkpoints may be nested; releasing one does not affect the others.
#[derive(Debug)]
#[must_use = "checkpoints must be released on every exit path"]
pub struct Checkpoint {
    slot: usize,
    offset: usize,
}

impl Checkpoint {
    /// The byte offset the cursor had when this checkpoint was opened.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

/// A position-tracking view over an input string.
#[derive(Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    offset: usize,
    // Offsets of currently open checkpoints, indexed by slot.
    open: Vec<Option<usize>>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Cursor {
            input,
            offset: 0,
            open: Vec::new(),
        }
    }

    /// The character under the cursor, or `None` at end of input.
    ///
    /// `None` is the end-of-input sentinel; reaching the end is not an error.
    #[inline]
    #[must_use]
    pub fn current_char(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    /// Advances past the current character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.offset += ch.len_utf8();
        }
    }

    /// Current byte offset into the input.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once the whole input has been consumed.
    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Opens a checkpoint capturing the current offset.
    pub fn checkpoint(&mut self) -> Checkpoint {
        let slot = match self.open.iter().position(Option::is_none) {
            Some(slot) => slot,
            None => {
                self.open.push(None);
                self.open.len() - 1
            }
        };
        self.open[slot] = Some(self.offset);
        Checkpoint {
            slot,
            offset: self.offset,
        }
    }

    /// The input consumed between `checkpoint` and the current offset.
    #[must_use]
    pub fn text_since(&self, checkpoint: &Checkpoint) -> &'a str {
        &self.input[checkpoint.offset..self.offset]
    }

    /// Moves the cursor back to where `checkpoint` was opened.
    ///
    /// A `restore` followed by [`release`](Cursor::release) returns the cursor
    /// to exactly the state it had when the checkpoint was opened.
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        debug_assert_eq!(self.open.get(checkpoint.slot), Some(&Some(checkpoint.offset)));
        self.offset = checkpoint.offset;
    }

    /// Closes `checkpoint` without moving the cursor.
    pub fn release(&mut self, checkpoint: Checkpoint) {
        if let Some(slot) = self.open.get_mut(checkpoint.slot) {
            *slot = None;
        }
        while self.open.last() == Some(&None) {
            let _ = self.open.pop();
        }
    }
}
