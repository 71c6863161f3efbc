//! Condition evaluation for `if`/`elseif`.
//!
//! Supported forms, tried in order against the tokenized condition body:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `NOT <name>` | negated truthiness of `<name>`'s resolved value |
//! | `DEFINED <name>` | true iff `<name>` exists in the table |
//! | `<name> STREQUAL <literal>` | resolved left value equals the literal |
//! | `<name> MATCHES <pattern>` | always false (pattern matching unsupported) |
//! | `<name>` | truthiness of its resolved value |
//!
//! Anything else (compound `AND`/`OR` conditions, comparison operators, …)
//! evaluates to false: the goal is best-effort extraction, not a validating
//! parser.

use super::vars::VarTable;

/// Evaluate a tokenized condition body.
pub fn eval(args: &[String], vars: &VarTable) -> bool {
    match args {
        [op, name] if op == "NOT" => !truthy(vars.get(name)),
        [op, name] if op == "DEFINED" => vars.contains(name),
        [name, op, literal] if op == "STREQUAL" => vars.get(name).unwrap_or("") == literal,
        [_, op, _] if op == "MATCHES" => false,
        [name] => truthy(vars.get(name)),
        _ => false,
    }
}

/// Boolean interpretation of a resolved variable value.
///
/// Undefined or empty is false; the usual boolean constants are recognized
/// case-insensitively; `NOTFOUND` and any `*-NOTFOUND` value are false; any
/// other non-empty value is true.
pub fn truthy(value: Option<&str>) -> bool {
    let Some(v) = value else { return false };
    if v.is_empty() {
        return false;
    }
    if v.eq_ignore_ascii_case("ON") || v.eq_ignore_ascii_case("TRUE") || v.eq_ignore_ascii_case("YES") || v == "1" {
        return true;
    }
    if v.eq_ignore_ascii_case("OFF")
        || v.eq_ignore_ascii_case("FALSE")
        || v.eq_ignore_ascii_case("NO")
        || v == "0"
        || v.eq_ignore_ascii_case("NOTFOUND")
        || v.to_ascii_uppercase().ends_with("-NOTFOUND")
    {
        return false;
    }
    true
}

// ── Tests ─────────────────────────────────────────────────────────────────────
