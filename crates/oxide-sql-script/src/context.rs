//! Statement-boundary parsing context.
//!
//! A [`ParserContext`] is the state a scanner consults while walking a
//! script: how deep it is inside parentheses and procedural blocks, which
//! keyword opened the innermost block, which delimiter is active and how
//! identifier letters are classified for the current statement. It never
//! reads the script itself; the scanner reports structural events and asks
//! questions.
//!
//! Paren depth and block depth are deliberately validated differently.
//! Paren depth fluctuates constantly while scanning and is never checked
//! here, so decrementing an unopened paren makes it negative. Closing a
//! block that was never opened is rejected with
//! [`ParserError::BlockDepthUnderflow`] because the script cannot be split
//! safely after that.

use tracing::trace;

use crate::delimiter::Delimiter;
use crate::error::{ParserError, Result};
use crate::statement_type::StatementType;

/// Per-script boundary tracking state.
#[derive(Debug, Clone)]
pub struct ParserContext {
    parens_depth: i32,
    block_initiators: Vec<String>,
    last_closed_block_initiator: Option<String>,
    delimiter: Delimiter,
    statement_type: StatementType,
}

impl ParserContext {
    /// Creates a context for a script starting with `delimiter`.
    #[must_use]
    pub const fn new(delimiter: Delimiter) -> Self {
        Self {
            parens_depth: 0,
            block_initiators: Vec::new(),
            last_closed_block_initiator: None,
            delimiter,
            statement_type: StatementType::Unknown,
        }
    }

    /// Records an opening parenthesis.
    pub fn increase_parens_depth(&mut self) {
        self.parens_depth += 1;
    }

    /// Records a closing parenthesis.
    ///
    /// The floor is not checked: callers keep parens balanced, and a
    /// negative depth is observable rather than rejected.
    pub fn decrease_parens_depth(&mut self) {
        self.parens_depth -= 1;
    }

    /// Returns the current paren depth.
    #[must_use]
    pub const fn parens_depth(&self) -> i32 {
        self.parens_depth
    }

    /// Opens a block started by `initiator` (e.g. `BEGIN`, `CASE`).
    pub fn increase_block_depth(&mut self, initiator: impl Into<String>) {
        let initiator = initiator.into();
        trace!(initiator = %initiator, depth = self.block_initiators.len() + 1, "Opened block");
        self.block_initiators.push(initiator);
    }

    /// Closes the innermost block and returns the keyword that opened it.
    ///
    /// The returned initiator is also retained as the last closed block
    /// initiator, so the meaning of a closing `END` can be determined.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::BlockDepthUnderflow`] when no block is open.
    /// The context is left unchanged in that case.
    pub fn decrease_block_depth(&mut self) -> Result<&str> {
        let initiator = self
            .block_initiators
            .pop()
            .ok_or(ParserError::BlockDepthUnderflow)?;
        trace!(initiator = %initiator, depth = self.block_initiators.len(), "Closed block");
        Ok(self.last_closed_block_initiator.insert(initiator).as_str())
    }

    /// Returns the number of open blocks.
    #[must_use]
    pub fn block_depth(&self) -> usize {
        self.block_initiators.len()
    }

    /// Returns the keyword that opened the innermost open block, or `""`.
    #[must_use]
    pub fn block_initiator(&self) -> &str {
        self.block_initiators.last().map_or("", String::as_str)
    }

    /// Returns the keyword that opened the most recently closed block.
    #[must_use]
    pub fn last_closed_block_initiator(&self) -> Option<&str> {
        self.last_closed_block_initiator.as_deref()
    }

    /// Returns the active delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    /// Replaces the active delimiter for everything scanned from now on.
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    /// Returns the current statement type ([`StatementType::Unknown`] until
    /// one is assigned).
    #[must_use]
    pub const fn statement_type(&self) -> StatementType {
        self.statement_type
    }

    /// Assigns the statement type of the statement being scanned.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::InvalidArgument`] for
    /// [`StatementType::Unknown`]; once assigned, a statement type is always
    /// a concrete classification.
    pub fn set_statement_type(&mut self, statement_type: StatementType) -> Result<()> {
        if statement_type.is_unknown() {
            return Err(ParserError::InvalidArgument(
                "statement type must be a concrete classification".to_string(),
            ));
        }
        self.statement_type = statement_type;
        Ok(())
    }

    /// Returns whether `c` is an identifier letter for the current statement.
    ///
    /// Standard letters always qualify. Once a concrete statement type is
    /// assigned, its dialect may admit further characters.
    #[must_use]
    pub fn is_letter(&self, c: char) -> bool {
        if c.is_alphabetic() {
            return true;
        }
        !self.statement_type.is_unknown() && self.statement_type.treat_as_if_letter(c)
    }
}

impl Default for ParserContext {
    fn default() -> Self {
        Self::new(Delimiter::default())
    }
}
