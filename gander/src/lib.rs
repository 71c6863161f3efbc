//! gander — a build tool for C projects.
//!
//! This crate houses the tool's build-script interpreter: it converts an
//! existing `CMakeLists.txt` tree into the tool's own YAML project manifest
//! without invoking CMake or a compiler.  See [`script`] for the interpreter
//! pipeline and [`manifest`] for the output record.

pub mod cli;
pub mod fs;
pub mod manifest;
pub mod report;
pub mod script;
