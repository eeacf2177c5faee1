//! Common test utilities for Lumin CLI tests.
//!
//! - `TestEnv`: an isolated project directory plus helpers to run `lumin`
//! - Fixtures: reusable SVG content

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A 24×24 icon that already uses `currentColor`
pub const STAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="currentColor" d="M12 2l3 7h7l-6 4 2 7-6-4-6 4 2-7-6-4h7z"/></svg>"#;

/// An icon drawn on the 256 canvas with a black fill
pub const MOON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path fill="#000" d="M128 24a104 104 0 1 0 104 104A80 80 0 0 1 128 24z"/></svg>"##;

/// Result of running a Lumin CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}\n{}", e, l, self.stdout))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    lumin_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create temp dir"),
            lumin_bin: PathBuf::from(env!("CARGO_BIN_EXE_lumin")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run lumin from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run lumin from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.lumin_bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("LUMIN_NO_COLOR", "1")
            .env_remove("LUMIN_PRESET")
            .env_remove("GITHUB_ACTIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute lumin");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative_path, e))
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.project_path(relative_path).exists()
    }

    /// Every file under the project, relative and sorted
    pub fn files(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_files(self.project_root.path(), self.project_root.path(), &mut out);
        out.sort();
        out
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read dir") {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).unwrap_or(&path);
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Write `<root>/<weight>/<name>[-weight].svg` for the given weights
pub fn write_corpus_icon(env: &TestEnv, root: &str, name: &str, weights: &[&str]) {
    for weight in weights {
        let file = if *weight == "regular" {
            format!("{}/{}/{}.svg", root, weight, name)
        } else {
            format!("{}/{}/{}-{}.svg", root, weight, name, weight)
        };
        env.write_file(&file, MOON_SVG);
    }
}

pub const ALL_WEIGHTS: &[&str] = &["regular", "thin", "light", "bold", "fill", "duotone"];
