//! Script splitter.
//!
//! [`StatementSplitter`] walks a script character by character and drives a
//! [`ParserContext`]: parentheses and block keywords update the depths,
//! `DELIMITER` directives replace the delimiter, and a statement ends where
//! the active delimiter appears outside any open block. Strings, quoted
//! identifiers, comments and dollar-quoted bodies are skipped as opaque
//! text.

use serde::Serialize;
use tracing::{debug, warn};

use crate::context::ParserContext;
use crate::delimiter::Delimiter;
use crate::dialect::{Dialect, ScannedWord};
use crate::error::{ParserError, Result};

/// Number of leading words kept per statement for classification.
const LEADING_WORDS: usize = 8;

/// Words after which a procedural statement may begin.
const CLAUSE_OPENERS: &[&str] = &["BEGIN", "THEN", "ELSE", "DO", "LOOP", "REPEAT"];

/// Words that may follow `END` to name the kind of block it closes.
const BLOCK_SUFFIXES: &[&str] = &["IF", "CASE", "LOOP", "WHILE", "REPEAT"];

/// A statement split from a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlStatement {
    /// Line (1-based) where the statement starts.
    pub line: usize,
    /// Start byte offset in the script (inclusive).
    pub start: usize,
    /// End byte offset in the script (exclusive), before the delimiter.
    pub end: usize,
    /// The statement text, without the delimiter and trailing whitespace.
    pub sql: String,
    /// The delimiter in effect for this statement.
    pub delimiter: Delimiter,
}

/// Scanning state of the statement being read.
#[derive(Debug)]
struct Pending {
    /// Byte offset of the first significant character.
    start: Option<usize>,
    line: usize,
    leading: Vec<String>,
    previous: Option<String>,
    clause_start: bool,
}

impl Pending {
    const fn new() -> Self {
        Self {
            start: None,
            line: 0,
            leading: Vec::new(),
            previous: None,
            clause_start: true,
        }
    }
}

/// Splits a script into statements for one dialect.
pub struct StatementSplitter<'a, D: Dialect + ?Sized> {
    /// The script.
    input: &'a str,
    dialect: &'a D,
    context: ParserContext,
    /// Delimiter set by the script (default or last directive).
    script_delimiter: Delimiter,
    /// The current byte position.
    pos: usize,
    /// The current line (1-based).
    line: usize,
    /// Whether a non-whitespace character precedes `pos` on this line.
    line_has_content: bool,
    done: bool,
}

impl<'a, D: Dialect + ?Sized> StatementSplitter<'a, D> {
    /// Creates a splitter starting with the dialect's default delimiter.
    #[must_use]
    pub fn new(input: &'a str, dialect: &'a D) -> Self {
        Self::with_delimiter(input, dialect, dialect.default_delimiter())
    }

    /// Creates a splitter starting with `delimiter`.
    #[must_use]
    pub fn with_delimiter(input: &'a str, dialect: &'a D, delimiter: Delimiter) -> Self {
        Self {
            input,
            dialect,
            context: ParserContext::new(delimiter.clone()),
            script_delimiter: delimiter,
            pos: 0,
            line: 1,
            line_has_content: false,
            done: false,
        }
    }

    /// Returns the parsing context.
    #[must_use]
    pub const fn context(&self) -> &ParserContext {
        &self.context
    }

    /// Splits the remaining script.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; see [`Self::next_statement`].
    pub fn split(self) -> Result<Vec<SqlStatement>> {
        self.collect()
    }

    /// Reads the next statement, or `None` at the end of the script.
    ///
    /// # Errors
    ///
    /// Returns a `ParserError` for unterminated strings or comments,
    /// unmatched or unclosed blocks, and invalid delimiter directives.
    pub fn next_statement(&mut self) -> Result<Option<SqlStatement>> {
        let mut pending = Pending::new();
        loop {
            let Some(c) = self.peek() else {
                return self.finish(&pending);
            };

            if c.is_whitespace() {
                self.advance();
                continue;
            }

            if let Some(len) = self.delimiter_len() {
                let end = self.pos;
                self.advance_to(self.pos + len);
                if let Some(statement) = self.emit(&pending, end) {
                    return Ok(Some(statement));
                }
                continue;
            }

            if pending.start.is_none() && self.skip_standalone_terminator() {
                continue;
            }

            if self.skip_comment()? {
                continue;
            }

            if pending.start.is_none() {
                self.begin_statement(&mut pending)?;
            }

            self.scan_token(c, &mut pending)?;
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_has_content = false;
        } else if !c.is_whitespace() {
            self.line_has_content = true;
        }
        Some(c)
    }

    /// Advances until `end` (a character boundary) is reached.
    fn advance_to(&mut self, end: usize) {
        while self.pos < end && self.advance().is_some() {}
    }

    /// Returns the byte offset of the end of the current line.
    fn line_end(&self) -> usize {
        self.input[self.pos..]
            .find('\n')
            .map_or(self.input.len(), |offset| self.pos + offset)
    }

    /// Returns whether the rest of the current line, which must have nothing
    /// before the cursor, consists of `delimiter` alone.
    fn line_is(&self, delimiter: &Delimiter) -> bool {
        !self.line_has_content
            && self.input[self.pos..self.line_end()]
                .trim_end()
                .eq_ignore_ascii_case(delimiter.as_str())
    }

    /// Returns whether an inline delimiter starts at the cursor.
    fn at_inline_delimiter(&self) -> bool {
        let delimiter = self.context.delimiter();
        !delimiter.is_alone_on_line()
            && !delimiter.as_str().is_empty()
            && self.input[self.pos..].starts_with(delimiter.as_str())
    }

    /// Returns how many bytes to consume if the active delimiter ends a
    /// statement at the cursor.
    fn delimiter_len(&self) -> Option<usize> {
        if self.context.block_depth() > 0 {
            return None;
        }
        let delimiter = self.context.delimiter();
        if delimiter.is_alone_on_line() {
            self.line_is(delimiter).then(|| self.line_end() - self.pos)
        } else if self.context.parens_depth() <= 0 && self.at_inline_delimiter() {
            Some(delimiter.as_str().len())
        } else {
            None
        }
    }

    /// Skips a line holding only the dialect's standalone terminator.
    fn skip_standalone_terminator(&mut self) -> bool {
        if self.line_has_content {
            return false;
        }
        match self.dialect.standalone_terminator() {
            Some(terminator) if self.line_is(&terminator) => {
                let end = self.line_end();
                self.advance_to(end);
                true
            }
            _ => false,
        }
    }

    /// Skips a comment at the cursor, if any.
    fn skip_comment(&mut self) -> Result<bool> {
        match (self.peek(), self.peek_next()) {
            (Some('-'), Some('-')) => {}
            (Some('#'), _) if self.dialect.hash_comments() => {}
            (Some('/'), Some('*')) => {
                let line = self.line;
                self.advance(); // /
                self.advance(); // *
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            return Ok(true);
                        }
                        Some(_) => {}
                        None => {
                            return Err(ParserError::Unterminated {
                                construct: "block comment",
                                line,
                            });
                        }
                    }
                }
            }
            _ => return Ok(false),
        }
        let end = self.line_end();
        self.advance_to(end);
        Ok(true)
    }

    /// Marks the start of a statement and classifies it.
    fn begin_statement(&mut self, pending: &mut Pending) -> Result<()> {
        pending.start = Some(self.pos);
        pending.line = self.line;
        self.context
            .set_statement_type(self.dialect.statement_type())
            .map_err(|e| e.at_line(pending.line))
    }

    /// Scans one token of a started statement.
    fn scan_token(&mut self, c: char, pending: &mut Pending) -> Result<()> {
        if c == '$' && self.dialect.dollar_quotes() && self.skip_dollar_quoted()? {
            pending.clause_start = false;
            return Ok(());
        }

        if matches!(c, 'E' | 'e') && self.peek_next() == Some('\'') && self.dialect.escape_strings() {
            self.advance(); // E prefix
            self.skip_quoted('\'', true, "string literal")?;
        } else if self.dialect.string_quotes().contains(&c) {
            self.skip_quoted(c, self.dialect.backslash_escapes(), "string literal")?;
        } else if let Some(close) = self.identifier_quote_close(c) {
            self.skip_quoted(close, false, "quoted identifier")?;
        } else if self.context.is_letter(c) || c == '_' {
            return self.scan_word(pending);
        } else {
            self.advance();
            match c {
                '(' => self.context.increase_parens_depth(),
                ')' if self.context.parens_depth() > 0 => self.context.decrease_parens_depth(),
                ';' => {
                    pending.clause_start = true;
                    return Ok(());
                }
                // Label (`outer: LOOP`), not `:=` or `::`
                ':' if !matches!(self.peek(), Some('=' | ':')) => {
                    pending.clause_start = true;
                    return Ok(());
                }
                _ => {}
            }
        }
        pending.clause_start = false;
        Ok(())
    }

    /// Returns the closing character of a quoted identifier opened by `c`.
    fn identifier_quote_close(&self, c: char) -> Option<char> {
        self.dialect
            .identifier_quotes()
            .iter()
            .find(|(open, _)| *open == c)
            .map(|(_, close)| *close)
    }

    /// Skips a quoted string or identifier; a doubled `close` is an escape.
    fn skip_quoted(&mut self, close: char, backslash: bool, construct: &'static str) -> Result<()> {
        let line = self.line;
        self.advance(); // consume opening quote
        loop {
            match self.advance() {
                Some('\\') if backslash => {
                    self.advance();
                }
                Some(c) if c == close => {
                    if self.peek() == Some(close) {
                        self.advance();
                    } else {
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => return Err(ParserError::Unterminated { construct, line }),
            }
        }
    }

    /// Skips a `$tag$ ... $tag$` string. Returns `false` when the `$` at the
    /// cursor does not open one (e.g. a `$1` parameter).
    fn skip_dollar_quoted(&mut self) -> Result<bool> {
        let input = self.input;
        let rest = &input[self.pos + 1..];
        let tag_len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if !rest[tag_len..].starts_with('$') || rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Ok(false);
        }
        let tag = &input[self.pos..self.pos + tag_len + 2];
        let body = self.pos + tag.len();
        let close = input[body..]
            .find(tag)
            .ok_or(ParserError::Unterminated {
                construct: "dollar-quoted string",
                line: self.line,
            })?;
        self.advance_to(body + close + tag.len());
        Ok(true)
    }

    /// Returns the next token after the cursor without consuming it: an
    /// upper-cased word or a single symbol.
    fn peek_token(&self) -> Option<String> {
        let rest = self.input[self.pos..].trim_start();
        let first = rest.chars().next()?;
        if self.context.is_letter(first) || first == '_' {
            let end = rest
                .find(|c: char| !self.is_word_char(c))
                .unwrap_or(rest.len());
            Some(rest[..end].to_ascii_uppercase())
        } else {
            Some(first.to_string())
        }
    }

    fn is_word_char(&self, c: char) -> bool {
        self.context.is_letter(c) || c.is_ascii_digit() || c == '_'
    }

    /// Scans a word and applies its effect on blocks and delimiters.
    fn scan_word(&mut self, pending: &mut Pending) -> Result<()> {
        let input = self.input;
        let start = self.pos;
        // `END$$` must leave the delimiter alone even where `$` is a letter.
        while self
            .peek()
            .is_some_and(|c| self.is_word_char(c) && !self.at_inline_delimiter())
        {
            self.advance();
        }
        let word = input[start..self.pos].to_ascii_uppercase();

        if pending.leading.is_empty()
            && word == "DELIMITER"
            && self.dialect.supports_delimiter_directive()
            && self.apply_directive(start)?
        {
            *pending = Pending::new();
            return Ok(());
        }

        let next = self.peek_token();
        if word == "END" {
            self.close_block(pending, next.as_deref())?;
        } else {
            let scanned = ScannedWord {
                word: &word,
                previous: pending.previous.as_deref(),
                next: next.as_deref(),
                leading: &pending.leading,
                clause_start: pending.clause_start,
                rest: &input[self.pos..],
            };
            if self.dialect.opens_block(&scanned, &self.context) {
                debug!(
                    initiator = %word,
                    depth = self.context.block_depth() + 1,
                    line = self.line,
                    "Block opened"
                );
                self.context.increase_block_depth(word.clone());
            }
        }

        pending.clause_start = CLAUSE_OPENERS.contains(&word.as_str());
        if pending.leading.len() < LEADING_WORDS {
            pending.leading.push(word.clone());
            if let Some(delimiter) = self.dialect.statement_delimiter(&pending.leading) {
                if self.context.delimiter() != &delimiter {
                    debug!(delimiter = %delimiter.as_str(), line = pending.line, "Statement delimiter switched");
                    self.context.set_delimiter(delimiter);
                }
            }
        }
        pending.previous = Some(word);
        Ok(())
    }

    /// Handles `END`: closes the innermost block unless it is a standalone
    /// transaction terminator, and the enclosing one when the dialect says
    /// the same `END` ends both.
    fn close_block(&mut self, pending: &Pending, next: Option<&str>) -> Result<()> {
        if self.context.block_depth() == 0
            && pending.leading.is_empty()
            && self.dialect.standalone_end()
        {
            return Ok(());
        }
        let line = self.line;
        self.context
            .decrease_block_depth()
            .map_err(|e| e.at_line(line))?;
        let closed = self
            .context
            .last_closed_block_initiator()
            .unwrap_or_default()
            .to_string();
        debug!(
            initiator = %closed,
            depth = self.context.block_depth(),
            line,
            "Block closed"
        );
        if let Some(found) = next.filter(|next| BLOCK_SUFFIXES.contains(next)) {
            if found != closed {
                warn!(line, "END {found} closes a block opened by {closed}");
            }
        }
        if self.dialect.closes_enclosing_block(&closed, &self.context) {
            self.context
                .decrease_block_depth()
                .map_err(|e| e.at_line(line))?;
            debug!(
                initiator = self.context.last_closed_block_initiator().unwrap_or_default(),
                depth = self.context.block_depth(),
                line,
                "Enclosing block closed"
            );
        }
        Ok(())
    }

    /// Applies a `DELIMITER` directive starting at `start`. Returns `false`
    /// when the line is not a directive after all.
    fn apply_directive(&mut self, start: usize) -> Result<bool> {
        let line = self.line;
        let end = self.line_end();
        let Some(delimiter) =
            Delimiter::from_directive(&self.input[start..end]).map_err(|e| e.at_line(line))?
        else {
            return Ok(false);
        };
        self.advance_to(end);
        debug!(delimiter = %delimiter.as_str(), line, "Delimiter changed");
        self.script_delimiter = delimiter.clone();
        self.context.set_delimiter(delimiter);
        Ok(true)
    }

    /// Builds the statement ending at `end` and restores the script
    /// delimiter. Returns `None` when nothing but whitespace and comments
    /// was read.
    fn emit(&mut self, pending: &Pending, end: usize) -> Option<SqlStatement> {
        let delimiter = self.context.delimiter().clone();
        if delimiter != self.script_delimiter {
            self.context.set_delimiter(self.script_delimiter.clone());
        }
        let start = pending.start?;
        let sql = self.input[start..end].trim_end();
        debug!(line = pending.line, bytes = sql.len(), "Statement split");
        Some(SqlStatement {
            line: pending.line,
            start,
            end: start + sql.len(),
            sql: sql.to_string(),
            delimiter,
        })
    }

    /// Ends the script: the last statement needs no delimiter, but every
    /// block must be closed.
    fn finish(&mut self, pending: &Pending) -> Result<Option<SqlStatement>> {
        if self.context.block_depth() > 0 {
            return Err(ParserError::UnclosedBlock {
                initiator: self.context.block_initiator().to_string(),
                line: pending.line,
            });
        }
        let end = self.input.len();
        Ok(self.emit(pending, end))
    }
}

impl<D: Dialect + ?Sized> Iterator for StatementSplitter<'_, D> {
    type Item = Result<SqlStatement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_statement().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}
