//! Physical-line to statement assembly.
//!
//! A CMake statement may span several physical lines:
//!
//! ```text
//! set(SOURCES
//!     a.c     # comment
//!     b.c)
//! ```
//!
//! The assembler consumes one physical line at a time, strips comments that
//! appear outside double-quoted text, and joins lines until the parentheses
//! in the accumulated buffer balance out.  Only then is a complete statement
//! emitted.

/// Accumulates physical lines into complete statements.
///
/// Feed lines with [`push`](LineAssembler::push); a `Some` return is one
/// complete statement.  A statement left open at end of input (unbalanced
/// parentheses) is never emitted — malformed trailing statements are dropped,
/// matching the permissive extraction policy.
#[derive(Debug, Default)]
pub struct LineAssembler {
    buf: String,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one physical line; returns a completed statement, if any.
    pub fn push(&mut self, raw: &str) -> Option<String> {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            return None;
        }

        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(line);

        // Recount over the whole buffer; an excess `)` clamps to closed and
        // does not reopen accounting.
        if paren_balance(&self.buf) > 0 {
            None
        } else {
            Some(std::mem::take(&mut self.buf))
        }
    }
}

/// Truncate `line` at the first `#` that is not inside double quotes.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Net `(` minus `)` count.
fn paren_balance(s: &str) -> i32 {
    let mut depth = 0i32;
    for ch in s.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
    }
    depth
}

// ── Tests ─────────────────────────────────────────────────────────────────────
