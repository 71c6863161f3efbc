//! Script interpretation and directory traversal.
//!
//! The [`Interpreter`] owns the variable table, the accumulating
//! [`Manifest`], and the advisory list for one run.  It walks a
//! `CMakeLists.txt` tree: each file's lines flow through the
//! [`LineAssembler`], each completed statement is variable-expanded,
//! stripped of generator expressions, tokenized, filtered through the
//! [`FlowStack`], and dispatched.  `add_subdirectory` recurses into child
//! scripts sharing the same table and manifest, with the current-directory
//! marker extended per scope.

use std::io;
use std::path::{Path, PathBuf};

use crate::fs;
use crate::manifest::Manifest;
use super::args::split_args;
use super::commands::{self, Command, CommandCtx};
use super::cond;
use super::expand::{expand, strip_genexpr};
use super::flow::FlowStack;
use super::line::LineAssembler;
use super::vars::VarTable;

/// File name looked up in each referenced sub-directory.
pub const SCRIPT_FILE_NAME: &str = "CMakeLists.txt";

/// Defensive bound on `add_subdirectory` recursion, guarding against
/// malformed or cyclic inclusion.
pub const MAX_SUBDIR_DEPTH: usize = 16;

// ── Errors ────────────────────────────────────────────────────────────────────

/// A fatal interpretation error.
#[derive(Debug)]
pub enum ScriptError {
    /// A script file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Conditionals nested beyond [`MAX_IF_DEPTH`](super::flow::MAX_IF_DEPTH).
    TooDeeplyNested { path: PathBuf },
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Io { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            ScriptError::TooDeeplyNested { path } => {
                write!(f, "{}: conditionals nested too deeply", path.display())
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::TooDeeplyNested { .. } => None,
        }
    }
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// One interpretation run over a script tree.
#[derive(Debug)]
pub struct Interpreter {
    vars: VarTable,
    manifest: Manifest,
    advisories: Vec<String>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let mut vars = VarTable::new();
        vars.set("CMAKE_CURRENT_SOURCE_DIR", ".");
        vars.set("PROJECT_SOURCE_DIR", ".");
        Self {
            vars,
            manifest: Manifest::new(),
            advisories: Vec::new(),
        }
    }

    /// Interpret the script tree rooted at `path`.
    ///
    /// Returns the finalized manifest and any advisories.  A missing or
    /// unreadable root script is fatal; missing sub-directory scripts are
    /// silently skipped during the walk.
    pub fn run(path: &Path) -> Result<(Manifest, Vec<String>), ScriptError> {
        let mut interp = Interpreter::new();
        interp.walk(path, ".", 0)?;
        interp.manifest.finalize();
        Ok((interp.manifest, interp.advisories))
    }

    /// Interpret a script from a string (exposed for testing; relative
    /// sub-directory references resolve against the current directory).
    pub fn run_str(src: &str) -> Result<(Manifest, Vec<String>), ScriptError> {
        let mut interp = Interpreter::new();
        interp.exec_source(src, Path::new(SCRIPT_FILE_NAME), ".", 0)?;
        interp.manifest.finalize();
        Ok((interp.manifest, interp.advisories))
    }

    /// Read and interpret one script file.
    fn walk(&mut self, path: &Path, marker: &str, depth: usize) -> Result<(), ScriptError> {
        let src = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_owned(),
            source,
        })?;
        self.exec_source(&src, path, marker, depth)
    }

    /// Interpret one script's text.  `marker` is this scope's logical
    /// directory; `path` locates sub-directory scripts on disk.
    fn exec_source(&mut self, src: &str, path: &Path, marker: &str, depth: usize) -> Result<(), ScriptError> {
        self.vars.set("CMAKE_CURRENT_SOURCE_DIR", marker);

        let mut assembler = LineAssembler::new();
        let mut flow = FlowStack::new();
        for raw in src.lines() {
            let Some(stmt) = assembler.push(raw) else { continue };
            self.exec_statement(&stmt, path, marker, depth, &mut flow)?;
        }
        Ok(())
    }

    fn exec_statement(
        &mut self,
        stmt: &str,
        path: &Path,
        marker: &str,
        depth: usize,
        flow: &mut FlowStack,
    ) -> Result<(), ScriptError> {
        let expanded = strip_genexpr(&expand(stmt, &self.vars));

        // Statements without parentheses are malformed; skip them.
        let Some(open) = expanded.find('(') else { return Ok(()) };
        let head = expanded[..open].trim();
        let body = &expanded[open + 1..];
        let body = match body.rfind(')') {
            Some(close) => &body[..close],
            None => body,
        };
        let args = split_args(body);

        let Some(cmd) = Command::from_keyword(head) else { return Ok(()) };
        match cmd {
            // Control flow runs even inside inactive branches so nesting
            // stays balanced.
            Command::If => {
                let active = cond::eval(&args, &self.vars);
                flow.push_if(active)
                    .map_err(|_| ScriptError::TooDeeplyNested { path: path.to_owned() })?;
            }
            Command::ElseIf => flow.handle_elseif(|| cond::eval(&args, &self.vars)),
            Command::Else => flow.handle_else(),
            Command::EndIf => flow.pop(),

            _ if !flow.active() => {}

            Command::AddSubdirectory => self.add_subdirectory(&args, path, marker, depth)?,

            other => {
                let mut ctx = CommandCtx {
                    vars: &mut self.vars,
                    manifest: &mut self.manifest,
                    advisories: &mut self.advisories,
                    current_dir: marker,
                };
                commands::execute(other, &args, &mut ctx);
            }
        }
        Ok(())
    }

    /// Recurse into a referenced sub-directory, if its script exists.
    fn add_subdirectory(
        &mut self,
        args: &[String],
        path: &Path,
        marker: &str,
        depth: usize,
    ) -> Result<(), ScriptError> {
        let Some(dir) = args.first() else { return Ok(()) };

        if depth >= MAX_SUBDIR_DEPTH {
            self.advisories.push(format!(
                "add_subdirectory({dir}) skipped: inclusion depth limit reached"
            ));
            return Ok(());
        }

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let script = base.join(dir).join(SCRIPT_FILE_NAME);
        // Optional sub-directories are routinely referenced but absent.
        if !fs::exists(&script) {
            return Ok(());
        }

        let child_marker = if marker == "." {
            dir.clone()
        } else {
            format!("{marker}/{dir}")
        };
        self.walk(&script, &child_marker, depth + 1)?;

        // Restore this scope's current-directory marker.
        self.vars.set("CMAKE_CURRENT_SOURCE_DIR", marker);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
