use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    for path in ["build.rs", ".git/HEAD", ".git/refs"] {
        println!("cargo:rerun-if-changed={path}");
    }

    let hash = tool_output("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let tree = match tool_output("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => UNKNOWN,
    };
    let built_at = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    let rustc = tool_output("rustc", &["--version"]).unwrap_or_else(|| UNKNOWN.to_string());

    emit("GIT", &format!("{hash} ({tree})"));
    emit("TIMESTAMP", &built_at);
    emit("TARGET", &cargo_var("TARGET"));
    emit("PROFILE", &cargo_var("PROFILE"));
    emit("RUSTC", &rustc);
}

/// Trimmed stdout of a successful tool run.
fn tool_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}

fn cargo_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| UNKNOWN.to_string())
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=TALLY_BUILD_{key}={value}");
}
