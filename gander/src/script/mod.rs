//! Build-script interpreter.
//!
//! Reads a hierarchy of `CMakeLists.txt` files and distills them into a
//! [`Manifest`](crate::manifest::Manifest) using textual line analysis only;
//! no toolchain is invoked.  The pipeline per file:
//!
//! 1. [`line`] — assemble physical lines into complete statements
//! 2. [`expand`] — `${var}` substitution, then `$<...>` stripping
//! 3. [`args`] — tokenize the statement body
//! 4. [`flow`] + [`cond`] — decide whether the statement executes
//! 5. [`commands`] — dispatch to a handler
//!
//! [`interp`] drives the pipeline and recurses through `add_subdirectory`.
//!
//! Only the dialect subset that small and medium projects commonly use is
//! modeled; unrecognized constructs are ignored, not rejected.
//!
//! # Quick start
//!
//! ```rust
//! use gander::script::Interpreter;
//!
//! let (manifest, _notes) =
//!     Interpreter::run_str("project(Demo VERSION 1.2)\n").unwrap();
//! assert_eq!(manifest.name, "Demo");
//! assert_eq!(manifest.version, "1.2");
//! ```

pub mod args;
pub mod commands;
pub mod cond;
pub mod expand;
pub mod flow;
pub mod interp;
pub mod line;
pub mod vars;

// Re-exports for convenience.
pub use interp::{Interpreter, ScriptError};
pub use vars::VarTable;
