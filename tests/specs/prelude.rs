//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing stobind CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Create a CLI builder for stobind commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
            stdin: None,
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Feed text on stdin
    pub fn stdin(mut self, text: &str) -> Self {
        self.stdin = Some(text.to_string());
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(binary_path("stobind"));
        cmd.args(&self.args);
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        // Keep the developer's own config, catalog and colors out of specs
        for key in [
            "STOBIND_CONFIG",
            "STOBIND_CATALOG",
            "STOBIND_LOG",
            "RUST_LOG",
            "COLOR",
        ] {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1");
        cmd.env("XDG_CONFIG_HOME", "/nonexistent-stobind-config");
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        if let Some(text) = self.stdin {
            cmd.write_stdin(text);
        }
        cmd
    }

    fn output(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect a specific exit code
    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.output();
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr is empty.
    pub fn stderr_empty(self) -> Self {
        let stderr = self.stderr();
        assert!(stderr.is_empty(), "expected empty stderr, got: {}", stderr);
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary directory holding keybind, config and catalog files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Read a file back
    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    /// Run stobind with this project as working directory
    pub fn stobind(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// A small, clean keybind file.
pub const SPACE_BINDS: &str = "\
; Fires everything
alias AttackAll <& FireAll $$ Target_Enemy_Near &>
F1 \"AttackAll\" \"\"
Space \"+TrayExecByTray 0 0 $$ +TrayExecByTray 0 1\" \"\"
";

/// Same content with two broken lines.
pub const BROKEN_BINDS: &str = "\
F1 \"FireAll\" \"\"
this is not a keybind
alias 1Bad <& FireAll &>
F2 \"Target_Self\" \"\"
";
