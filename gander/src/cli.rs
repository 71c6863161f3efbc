//! Command-line argument parsing for the converter binary.
//!
//! Usage:
//!   gander [--input <CMakeLists.txt>] [--output <gander.yaml>] [<file>]
//!
//! A bare positional path is shorthand for `--input`.

use std::path::PathBuf;

use crate::manifest::MANIFEST_FILE;

/// Parsed converter arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    /// Root script to interpret.
    pub input: PathBuf,
    /// Manifest file to write.
    pub output: PathBuf,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(crate::script::interp::SCRIPT_FILE_NAME),
            output: PathBuf::from(MANIFEST_FILE),
        }
    }
}

/// Parse `std::env::args()` and return [`ConvertArgs`] or an error message.
pub fn parse_args() -> Result<ConvertArgs, String> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    parse_argv(&raw)
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<ConvertArgs, String> {
    let mut args = ConvertArgs::default();
    let mut i = 0;

    while i < argv.len() {
        match argv[i].as_str() {
            "--input" => {
                i += 1;
                let path = argv.get(i).ok_or("--input requires a path")?;
                args.input = PathBuf::from(path);
            }
            "--output" => {
                i += 1;
                let path = argv.get(i).ok_or("--output requires a path")?;
                args.output = PathBuf::from(path);
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unrecognized flag: {flag}"));
            }
            positional => {
                args.input = PathBuf::from(positional);
            }
        }
        i += 1;
    }

    Ok(args)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let args = parse_argv(&[]).unwrap();
        assert_eq!(args.input, PathBuf::from("CMakeLists.txt"));
        assert_eq!(args.output, PathBuf::from("gander.yaml"));
    }

    #[test]
    fn explicit_input_and_output() {
        let args = parse_argv(&argv(&["--input", "sub/CMakeLists.txt", "--output", "out.yaml"])).unwrap();
        assert_eq!(args.input, PathBuf::from("sub/CMakeLists.txt"));
        assert_eq!(args.output, PathBuf::from("out.yaml"));
    }

    #[test]
    fn positional_input() {
        let args = parse_argv(&argv(&["proj/CMakeLists.txt"])).unwrap();
        assert_eq!(args.input, PathBuf::from("proj/CMakeLists.txt"));
    }

    #[test]
    fn missing_value_is_an_error() {
        assert!(parse_argv(&argv(&["--input"])).is_err());
        assert!(parse_argv(&argv(&["--output"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(parse_argv(&argv(&["--frobnicate"])).is_err());
    }
}
