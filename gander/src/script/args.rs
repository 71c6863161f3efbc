//! Statement argument tokenizer.
//!
//! Splits the text between a statement's parentheses into tokens bounded by
//! unquoted whitespace.  A token beginning with `"` is read verbatim (no
//! escape processing) until the next `"` or end of input, with the quotes
//! stripped from the emitted token.

/// Hard cap on arguments parsed from one statement.  Excess arguments are
/// simply not parsed; this replaces the fixed-array truncation of older
/// converters with an explicit, documented limit.
pub const MAX_ARGS: usize = 64;

/// Tokenize a statement body.
pub fn split_args(body: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::new();
    let mut chars = body.chars().peekable();

    while args.len() < MAX_ARGS {
        while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
            chars.next();
        }
        let Some(&first) = chars.peek() else { break };

        let mut cur = String::new();
        if first == '"' {
            chars.next(); // opening quote
            for ch in chars.by_ref() {
                if ch == '"' {
                    break;
                }
                cur.push(ch);
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                cur.push(ch);
                chars.next();
            }
        }

        if !cur.is_empty() {
            args.push(cur);
        }
    }
    args
}

/// Strip one pair of surrounding double or single quotes, if present.
///
/// The tokenizer already removes quotes from tokens that *begin* with `"`;
/// this catches values quoted after variable expansion (e.g. an expanded
/// `"${DIR}"`) and single-quoted paths.
pub fn strip_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 && ((b[0] == b'"' && b[b.len() - 1] == b'"') || (b[0] == b'\'' && b[b.len() - 1] == b'\'')) {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple() {
        assert_eq!(split_args("foo bar baz"), ["foo", "bar", "baz"]);
    }

    #[test]
    fn split_collapses_whitespace_runs() {
        assert_eq!(split_args("  a \t b\t\tc "), ["a", "b", "c"]);
    }

    #[test]
    fn quoted_token_keeps_spaces() {
        assert_eq!(split_args(r#"x "a b" y"#), ["x", "a b", "y"]);
    }

    #[test]
    fn quotes_are_stripped() {
        assert_eq!(split_args(r#""hello""#), ["hello"]);
    }

    #[test]
    fn unterminated_quote_reads_to_end() {
        assert_eq!(split_args(r#""a b"#), ["a b"]);
    }

    #[test]
    fn no_escape_processing_inside_quotes() {
        // The backslash is literal; the second quote ends the token.
        assert_eq!(split_args(r#""a\" b"#), [r#"a\"#, "b"]);
    }

    #[test]
    fn empty_quoted_token_dropped() {
        assert_eq!(split_args(r#"a "" b"#), ["a", "b"]);
    }

    #[test]
    fn arg_cap_is_enforced() {
        let body = "x ".repeat(MAX_ARGS + 10);
        assert_eq!(split_args(&body).len(), MAX_ARGS);
    }

    #[test]
    fn strip_quotes_pairs_only() {
        assert_eq!(strip_quotes(r#""a b""#), "a b");
        assert_eq!(strip_quotes("'a'"), "a");
        assert_eq!(strip_quotes(r#""half"#), r#""half"#);
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
