//! Command dispatch.
//!
//! Maps a statement's head keyword (case-insensitive) to a [`Command`] and
//! executes it against the variable table and manifest.  Control-flow
//! commands (`if`/`elseif`/`else`/`endif`) and `add_subdirectory` carry
//! state the walker owns, so the walker handles them itself; everything
//! else goes through [`execute`].  Unrecognized keywords are ignored.

use crate::manifest::{normalize_path, Manifest};
use super::args::strip_quotes;
use super::vars::VarTable;

/// A recognized statement keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Project,
    CmakeMinimumRequired,
    Option,
    Set,
    List,
    AddLibrary,
    AddExecutable,
    IncludeDirectories,
    TargetIncludeDirectories,
    TargetLinkLibraries,
    File,
    CheckIncludeFile,
    AddSubdirectory,
    FindPackage,
    If,
    ElseIf,
    Else,
    EndIf,
}

impl Command {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(kw: &str) -> Option<Command> {
        Some(match kw.to_ascii_lowercase().as_str() {
            "project" => Command::Project,
            "cmake_minimum_required" => Command::CmakeMinimumRequired,
            "option" => Command::Option,
            "set" => Command::Set,
            "list" => Command::List,
            "add_library" => Command::AddLibrary,
            "add_executable" => Command::AddExecutable,
            "include_directories" => Command::IncludeDirectories,
            "target_include_directories" => Command::TargetIncludeDirectories,
            "target_link_libraries" => Command::TargetLinkLibraries,
            "file" => Command::File,
            "check_include_file" | "check_include_files" => Command::CheckIncludeFile,
            "add_subdirectory" => Command::AddSubdirectory,
            "find_package" => Command::FindPackage,
            "if" => Command::If,
            "elseif" => Command::ElseIf,
            "else" => Command::Else,
            "endif" => Command::EndIf,
            _ => return None,
        })
    }
}

/// Mutable interpreter state a command handler may touch.
pub struct CommandCtx<'a> {
    pub vars: &'a mut VarTable,
    pub manifest: &'a mut Manifest,
    pub advisories: &'a mut Vec<String>,
    /// Logical directory of the script being interpreted (`.` at the root).
    pub current_dir: &'a str,
}

/// Execute a non-control-flow command.
///
/// Control-flow keywords and `add_subdirectory` reach here only if the
/// walker failed to intercept them; they are no-ops.
pub fn execute(cmd: Command, args: &[String], ctx: &mut CommandCtx) {
    match cmd {
        Command::Project => cmd_project(args, ctx),
        Command::CmakeMinimumRequired => {}
        Command::Option => cmd_option(args, ctx),
        Command::Set => cmd_set(args, ctx),
        Command::List => cmd_list(args, ctx),
        Command::AddLibrary => cmd_add_library(args, ctx),
        Command::AddExecutable => cmd_add_executable(args, ctx),
        Command::IncludeDirectories => cmd_include_directories(args, ctx),
        Command::TargetIncludeDirectories => cmd_target_include_directories(args, ctx),
        Command::TargetLinkLibraries => cmd_target_link_libraries(args, ctx),
        Command::File => cmd_file(args, ctx),
        Command::CheckIncludeFile => cmd_check_include_file(args, ctx),
        Command::FindPackage => cmd_find_package(args, ctx),
        Command::AddSubdirectory | Command::If | Command::ElseIf | Command::Else | Command::EndIf => {}
    }
}

// ── project() ─────────────────────────────────────────────────────────────────

fn cmd_project(args: &[String], ctx: &mut CommandCtx) {
    let Some(name) = args.first() else { return };
    ctx.manifest.name = name.clone();
    for pair in args.windows(2) {
        if pair[0] == "VERSION" {
            ctx.manifest.version = pair[1].clone();
            break;
        }
    }

    let upper = name.to_ascii_uppercase();
    let dir = ctx.current_dir;
    ctx.vars.set("PROJECT_NAME", name.as_str());
    // Some scripts alias `${UPPERNAME}` to the project name; honor the
    // convention so those references expand.
    ctx.vars.set(upper.as_str(), name.as_str());
    ctx.vars.set(format!("{name}_SOURCE_DIR"), dir);
    ctx.vars.set(format!("{name}_BINARY_DIR"), dir);
    ctx.vars.set(format!("{upper}_SOURCE_DIR"), dir);
    ctx.vars.set(format!("{upper}_BINARY_DIR"), dir);
    ctx.vars.set(format!("{upper}_LIB"), name.to_ascii_lowercase());
}

// ── option() ──────────────────────────────────────────────────────────────────

const BOOL_LITERALS: &[&str] = &["ON", "OFF", "TRUE", "FALSE", "YES", "NO", "0", "1"];

fn is_bool_literal(s: &str) -> bool {
    BOOL_LITERALS.iter().any(|b| s.eq_ignore_ascii_case(b))
}

fn cmd_option(args: &[String], ctx: &mut CommandCtx) {
    let Some(var) = args.first() else { return };
    if ctx.vars.contains(var) {
        return; // an earlier set() wins
    }
    // args[1] is the description string; args[2] the optional default.
    let default = args.get(2).map(String::as_str).unwrap_or("OFF");
    let value = if is_bool_literal(default) { default } else { "OFF" };
    ctx.vars.set(var.as_str(), value);
}

// ── set() / list() ────────────────────────────────────────────────────────────

/// Scope/type keywords that terminate a `set()` value list.
const SET_TERMINATORS: &[&str] = &[
    "CACHE", "PARENT_SCOPE", "FORCE", "STRING", "BOOL", "PATH", "FILEPATH", "INTERNAL",
];

fn cmd_set(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 2 {
        return;
    }
    let values: Vec<&str> = args[1..]
        .iter()
        .map(String::as_str)
        .take_while(|a| !SET_TERMINATORS.contains(a))
        .collect();
    ctx.vars.set(args[0].as_str(), values.join(" "));
}

fn cmd_list(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 3 || args[0] != "APPEND" {
        return;
    }
    let var = &args[1];
    for item in &args[2..] {
        ctx.vars.append(var, item);
    }
}

// ── add_library() / add_executable() ──────────────────────────────────────────

const LIBRARY_TYPE_KEYWORDS: &[&str] = &["STATIC", "SHARED", "OBJECT", "MODULE", "EXCLUDE_FROM_ALL"];
const EXECUTABLE_KEYWORDS: &[&str] = &["WIN32", "MACOSX_BUNDLE", "EXCLUDE_FROM_ALL"];

/// Prefix `path` with the current-directory marker.
fn qualify(current_dir: &str, path: &str) -> String {
    if current_dir == "." {
        path.to_owned()
    } else {
        format!("{current_dir}/{path}")
    }
}

/// Directory portion of a path, `.` when there is none.
fn parent_dir(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => ".",
    }
}

/// Seed the manifest's source-directory hint from the first real source.
fn seed_src_dir(manifest: &mut Manifest, qualified: &str) {
    let Some(p) = normalize_path(qualified) else { return };
    let dir = parent_dir(&p);
    if dir != "." && manifest.src_dir == "src" {
        manifest.src_dir = dir.to_owned();
    }
}

fn cmd_add_library(args: &[String], ctx: &mut CommandCtx) {
    if args.is_empty() {
        return;
    }
    // IMPORTED/ALIAS/INTERFACE libraries have no sources to collect.
    if args.iter().any(|a| a == "IMPORTED" || a == "ALIAS" || a == "INTERFACE") {
        return;
    }

    let mut first = true;
    for arg in &args[1..] {
        if LIBRARY_TYPE_KEYWORDS.contains(&arg.as_str()) {
            continue;
        }
        let qualified = qualify(ctx.current_dir, arg);
        if first {
            seed_src_dir(ctx.manifest, &qualified);
            first = false;
        }
        ctx.manifest.add_source(&qualified);
    }
}

fn cmd_add_executable(args: &[String], ctx: &mut CommandCtx) {
    let Some(name) = args.first() else { return };
    if ctx.manifest.name == "unnamed" {
        ctx.manifest.name = name.clone();
    }
    for arg in &args[1..] {
        if EXECUTABLE_KEYWORDS.contains(&arg.as_str()) {
            continue;
        }
        seed_src_dir(ctx.manifest, &qualify(ctx.current_dir, arg));
        break;
    }
}

// ── include_directories() and friends ─────────────────────────────────────────

fn cmd_include_directories(args: &[String], ctx: &mut CommandCtx) {
    for arg in args {
        if matches!(arg.as_str(), "BEFORE" | "AFTER" | "SYSTEM") {
            continue;
        }
        ctx.manifest.add_include(strip_quotes(arg));
    }
}

fn cmd_target_include_directories(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 2 {
        return;
    }
    for arg in &args[1..] {
        if matches!(arg.as_str(), "PUBLIC" | "PRIVATE" | "INTERFACE" | "SYSTEM" | "BEFORE" | "AFTER") {
            continue;
        }
        ctx.manifest.add_include(strip_quotes(arg));
    }
}

// ── target_link_libraries() ───────────────────────────────────────────────────

fn cmd_target_link_libraries(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 2 {
        return;
    }
    for lib in &args[1..] {
        if matches!(lib.as_str(), "PUBLIC" | "PRIVATE" | "INTERFACE" | "IMPORTED" | "STATIC" | "SHARED") {
            continue;
        }
        // Namespaced targets and unexpanded references cannot be mapped to a
        // linker flag.
        if lib.contains("::") || lib.contains("${") {
            continue;
        }
        let flag = if lib.starts_with('-') {
            lib.clone()
        } else {
            format!("-l{lib}")
        };
        ctx.manifest.add_ldflag(&flag);
    }
}

// ── file(GLOB …) ──────────────────────────────────────────────────────────────

fn cmd_file(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 2 || (args[0] != "GLOB" && args[0] != "GLOB_RECURSE") {
        return;
    }
    let var = &args[1];

    let mut patterns: Vec<&str> = Vec::new();
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "RELATIVE" => {
                i += 2; // skip the keyword and its path argument
                continue;
            }
            "CONFIGURE_DEPENDS" => {
                i += 1;
                continue;
            }
            _ => {}
        }
        let pattern = strip_quotes(&args[i]);
        // The directory portion of a glob pattern is a useful include hint.
        let dir = parent_dir(pattern);
        if dir != "." {
            ctx.manifest.add_include(dir);
        }
        patterns.push(pattern);
        i += 1;
    }

    // Store the pattern list so later ${var} references expand to something.
    ctx.vars.set(var.as_str(), patterns.join(" "));
}

// ── check_include_file[s]() ───────────────────────────────────────────────────

/// Standard headers we can vouch for without probing a real toolchain.
const KNOWN_HEADERS: &[&str] = &[
    "assert.h", "ctype.h", "errno.h", "fcntl.h", "inttypes.h", "limits.h",
    "math.h", "pthread.h", "signal.h", "stdbool.h", "stddef.h", "stdint.h",
    "stdio.h", "stdlib.h", "string.h", "strings.h", "time.h", "unistd.h",
    "sys/stat.h", "sys/time.h", "sys/types.h",
];

fn cmd_check_include_file(args: &[String], ctx: &mut CommandCtx) {
    if args.len() < 2 {
        return;
    }
    let header = strip_quotes(&args[0]);
    let var = &args[1];
    if KNOWN_HEADERS.contains(&header) {
        ctx.vars.set(var.as_str(), "1");
        ctx.manifest.add_cflag(&format!("-D{var}"));
    } else {
        ctx.vars.set(var.as_str(), "0");
    }
}

// ── find_package() ────────────────────────────────────────────────────────────

fn cmd_find_package(args: &[String], ctx: &mut CommandCtx) {
    let Some(package) = args.first() else { return };
    ctx.advisories.push(format!(
        "find_package({package}) cannot be resolved; add ldflags manually if needed"
    ));
}

// ── Tests ─────────────────────────────────────────────────────────────────────
