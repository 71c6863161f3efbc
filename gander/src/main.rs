use gander::script::Interpreter;
use gander::{cli, fs, report};

fn main() {
    let args = match cli::parse_args() {
        Ok(a) => a,
        Err(e) => {
            report::error(&e);
            eprintln!("Usage: gander [--input <CMakeLists.txt>] [--output <gander.yaml>] [<file>]");
            std::process::exit(1);
        }
    };

    if !fs::exists(&args.input) {
        report::error(&format!("cannot find {}", args.input.display()));
        std::process::exit(1);
    }
    if fs::exists(&args.output) {
        report::warn(
            "Warning",
            &format!("{} already exists, overwriting", args.output.display()),
        );
    }

    report::info("Converting", &args.input.display().to_string());

    let (manifest, advisories) = match Interpreter::run(&args.input) {
        Ok(result) => result,
        Err(e) => {
            report::error(&e.to_string());
            std::process::exit(1);
        }
    };

    for note in &advisories {
        report::warn("Note", note);
    }

    // Summarize what was extracted before writing.
    report::info("Name", &manifest.name);
    report::info("Version", &manifest.version);
    if manifest.src_dir != "src" {
        report::info("Source", &manifest.src_dir);
    }
    for include in &manifest.includes {
        report::info("Include", include);
    }
    if !manifest.ldflags.is_empty() {
        report::info("Ldflags", &manifest.ldflags);
    }
    if !manifest.sources.is_empty() {
        report::info("Sources", &format!("{} files", manifest.sources.len()));
    }

    if let Err(e) = manifest.save(&args.output) {
        report::error(&format!("failed to write {}: {e}", args.output.display()));
        std::process::exit(1);
    }
    report::info("Wrote", &args.output.display().to_string());
}
