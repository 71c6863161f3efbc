//! The normalized project manifest.
//!
//! The interpreter accumulates everything it extracts from a
//! `CMakeLists.txt` tree into a [`Manifest`]; the converter then serializes
//! it as the tool's YAML project file.  Include paths and source files are
//! de-duplicated on insertion after path normalization.

use std::io;
use std::path::Path;

use serde::Serialize;

/// Default manifest file name written by the converter.
pub const MANIFEST_FILE: &str = "gander.yaml";

/// Compiler flags a fresh manifest starts with.
pub const DEFAULT_CFLAGS: &str = "-Wall -Wextra -std=c11";

/// Linker flag appended at finalization when absent.
pub const DEFAULT_LDFLAG: &str = "-lm";

/// Accumulated description of a buildable project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    /// Source-directory hint, seeded from the first source file seen.
    pub src_dir: String,
    pub cflags: String,
    pub ldflags: String,
    /// Ordered, de-duplicated include paths.
    pub includes: Vec<String>,
    /// Ordered, de-duplicated source files.
    pub sources: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: "unnamed".to_owned(),
            version: "0.1.0".to_owned(),
            src_dir: "src".to_owned(),
            cflags: DEFAULT_CFLAGS.to_owned(),
            ldflags: String::new(),
            includes: Vec::new(),
            sources: Vec::new(),
        }
    }
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include path, normalized and de-duplicated.
    pub fn add_include(&mut self, path: &str) {
        let Some(p) = normalize_path(path) else { return };
        if !self.includes.iter().any(|i| *i == p) {
            self.includes.push(p);
        }
    }

    /// Add a source file, normalized and de-duplicated.
    pub fn add_source(&mut self, path: &str) {
        let Some(p) = normalize_path(path) else { return };
        if p == "." {
            return;
        }
        if !self.sources.iter().any(|s| *s == p) {
            self.sources.push(p);
        }
    }

    /// Append a linker flag unless already present.
    pub fn add_ldflag(&mut self, flag: &str) {
        if self.ldflags.split_whitespace().any(|f| f == flag) {
            return;
        }
        if !self.ldflags.is_empty() {
            self.ldflags.push(' ');
        }
        self.ldflags.push_str(flag);
    }

    /// Append a compiler flag unless already present.
    pub fn add_cflag(&mut self, flag: &str) {
        if self.cflags.split_whitespace().any(|f| f == flag) {
            return;
        }
        if !self.cflags.is_empty() {
            self.cflags.push(' ');
        }
        self.cflags.push_str(flag);
    }

    /// Apply end-of-traversal defaults: at least one include path, and the
    /// default linker flag.
    pub fn finalize(&mut self) {
        if self.includes.is_empty() {
            self.includes.push(".".to_owned());
        }
        self.add_ldflag(DEFAULT_LDFLAG);
    }

    /// Render the manifest as the tool's YAML project document.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&ManifestDoc::from(self))
    }

    /// Write the YAML document to `path`.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let yaml = self.to_yaml().map_err(io::Error::other)?;
        std::fs::write(path, yaml)
    }
}

/// Normalize a path for manifest insertion.
///
/// Absolute paths and paths still containing an unexpanded `${` reference
/// are rejected; a leading `./` is stripped; an empty or `.`-only result
/// normalizes to `.`.
pub fn normalize_path(path: &str) -> Option<String> {
    if path.starts_with('/') || path.contains("${") {
        return None;
    }
    let p = path.strip_prefix("./").unwrap_or(path);
    if p.is_empty() || p == "." {
        return Some(".".to_owned());
    }
    Some(p.to_owned())
}

// ── YAML document shape ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct ManifestDoc<'a> {
    project: ProjectSection<'a>,
    build: BuildSection<'a>,
}

#[derive(Serialize)]
struct ProjectSection<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct BuildSection<'a> {
    src_dir: &'a str,
    cflags: &'a str,
    ldflags: &'a str,
    includes: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    sources: &'a [String],
}

impl<'a> From<&'a Manifest> for ManifestDoc<'a> {
    fn from(m: &'a Manifest) -> Self {
        ManifestDoc {
            project: ProjectSection { name: &m.name, version: &m.version },
            build: BuildSection {
                src_dir: &m.src_dir,
                cflags: &m.cflags,
                ldflags: &m.ldflags,
                includes: &m.includes,
                sources: &m.sources,
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // -- normalize_path -------------------------------------------------------

    #[test]
    fn normalize_rejects_absolute_and_unexpanded() {
        assert_eq!(normalize_path("/usr/include"), None);
        assert_eq!(normalize_path("${DIR}/include"), None);
    }

    #[test]
    fn normalize_strips_leading_dot_slash() {
        assert_eq!(normalize_path("./src").as_deref(), Some("src"));
        assert_eq!(normalize_path("./").as_deref(), Some("."));
        assert_eq!(normalize_path(".").as_deref(), Some("."));
        assert_eq!(normalize_path("").as_deref(), Some("."));
    }

    // -- insertion ------------------------------------------------------------

    #[test]
    fn includes_deduplicate_after_normalization() {
        let mut m = Manifest::new();
        m.add_include("include");
        m.add_include("./include");
        m.add_include("include");
        assert_eq!(m.includes, ["include"]);
    }

    #[test]
    fn sources_deduplicate() {
        let mut m = Manifest::new();
        m.add_source("src/a.c");
        m.add_source("./src/a.c");
        m.add_source("src/b.c");
        assert_eq!(m.sources, ["src/a.c", "src/b.c"]);
    }

    #[test]
    fn ldflags_deduplicate() {
        let mut m = Manifest::new();
        m.add_ldflag("-lpthread");
        m.add_ldflag("-lm");
        m.add_ldflag("-lpthread");
        assert_eq!(m.ldflags, "-lpthread -lm");
    }

    #[test]
    fn cflags_append_after_defaults() {
        let mut m = Manifest::new();
        m.add_cflag("-DHAVE_PTHREAD_H");
        assert_eq!(m.cflags, "-Wall -Wextra -std=c11 -DHAVE_PTHREAD_H");
    }

    // -- finalize -------------------------------------------------------------

    #[test]
    fn finalize_adds_defaults() {
        let mut m = Manifest::new();
        m.finalize();
        assert_eq!(m.includes, ["."]);
        assert_eq!(m.ldflags, "-lm");
    }

    #[test]
    fn finalize_keeps_collected_includes() {
        let mut m = Manifest::new();
        m.add_include("include");
        m.add_ldflag("-lm");
        m.finalize();
        assert_eq!(m.includes, ["include"]);
        assert_eq!(m.ldflags, "-lm"); // not duplicated
    }

    // -- YAML -----------------------------------------------------------------

    #[test]
    fn yaml_document_shape() {
        let mut m = Manifest::new();
        m.name = "demo".to_owned();
        m.version = "2.0".to_owned();
        m.add_include("include");
        m.finalize();
        let yaml = m.to_yaml().unwrap();
        assert!(yaml.contains("project:"), "{yaml}");
        assert!(yaml.contains("name: demo"), "{yaml}");
        assert!(yaml.contains("version: '2.0'") || yaml.contains("version: 2.0"), "{yaml}");
        assert!(yaml.contains("build:"), "{yaml}");
        assert!(yaml.contains("- include"), "{yaml}");
        // no sources collected: key omitted entirely
        assert!(!yaml.contains("sources:"), "{yaml}");
    }
}
