//! Variable expansion and generator-expression stripping.
//!
//! Applied to each assembled statement before tokenization, in this order:
//!
//! 1. [`expand`] — substitute `${name}` references from the variable table.
//! 2. [`strip_genexpr`] — remove `$<...>` generator-expression spans, which
//!    cannot be evaluated without a configured toolchain.

use super::vars::VarTable;

/// Expand `${name}` references in `src`.
///
/// Single-pass and non-recursive: substituted text is not itself re-expanded.
/// Undefined references are replaced with empty text.  A `${` with no closing
/// `}` is copied through literally.
pub fn expand(src: &str, vars: &VarTable) -> String {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;

    while let Some(i) = rest.find("${") {
        out.push_str(&rest[..i]);
        let after = &rest[i + 2..];
        match after.find('}') {
            Some(j) => {
                if let Some(val) = vars.get(&after[..j]) {
                    out.push_str(val);
                }
                rest = &after[j + 1..];
            }
            None => {
                // No closing brace anywhere ahead: emit the `$` literally and
                // resume scanning one character further on.
                out.push('$');
                rest = &rest[i + 1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Remove `$<...>` spans from `src`.
///
/// `$<` opens a span (nesting tracked by a depth counter), `>` closes one.
/// An unterminated `$<` silently discards all remaining text; this mirrors
/// the reference extraction behavior and is a documented limitation.
pub fn strip_genexpr(src: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut depth = 0usize;
    let mut chars = src.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && chars.peek() == Some(&'<') {
            chars.next();
            depth += 1;
        } else if depth > 0 && ch == '>' {
            depth -= 1;
        } else if depth == 0 {
            out.push(ch);
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> VarTable {
        let mut vars = VarTable::new();
        for (k, v) in pairs {
            vars.set(*k, *v);
        }
        vars
    }

    // -- expand ---------------------------------------------------------------

    #[test]
    fn expands_defined_variable() {
        let vars = table(&[("NAME", "demo")]);
        assert_eq!(expand("lib${NAME}.a", &vars), "libdemo.a");
    }

    #[test]
    fn undefined_reference_becomes_empty() {
        let vars = table(&[("A", "x")]);
        assert_eq!(expand("${A}-${B}", &vars), "x-");
    }

    #[test]
    fn expansion_is_single_pass() {
        let vars = table(&[("A", "${B}"), ("B", "deep")]);
        assert_eq!(expand("${A}", &vars), "${B}");
    }

    #[test]
    fn unterminated_reference_copied_literally() {
        let vars = table(&[("A", "x")]);
        assert_eq!(expand("pre ${A oops", &vars), "pre ${A oops");
    }

    #[test]
    fn unterminated_then_plain_text() {
        let vars = VarTable::new();
        assert_eq!(expand("${", &vars), "${");
    }

    #[test]
    fn adjacent_references() {
        let vars = table(&[("A", "1"), ("B", "2")]);
        assert_eq!(expand("${A}${B}", &vars), "12");
    }

    // -- strip_genexpr --------------------------------------------------------

    #[test]
    fn strips_simple_genexpr() {
        assert_eq!(strip_genexpr("pre$<CONFIG:Debug>post"), "prepost");
    }

    #[test]
    fn strips_nested_genexpr() {
        assert_eq!(strip_genexpr("a$<$<BOOL:x>:flag>b"), "ab");
    }

    #[test]
    fn unterminated_genexpr_discards_rest() {
        assert_eq!(strip_genexpr("a$<b"), "a");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(strip_genexpr("x > y $z"), "x > y $z");
    }
}
