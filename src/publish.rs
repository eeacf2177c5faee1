//! npm publish workflow
//!
//! package.json → private check → git status → npm auth → test → build →
//! dist check → publish. Steps run one after another; the first failing
//! step aborts the run.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;

use crate::error::{LuminError, LuminResult};

/// Options for [`Publisher::publish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOptions {
    /// npm dist-tag
    pub tag: String,
    /// Run `npm publish --dry-run` and skip the auth check
    pub dry_run: bool,
    pub skip_tests: bool,
    pub skip_build: bool,
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self {
            tag: "latest".to_string(),
            dry_run: false,
            skip_tests: false,
            skip_build: false,
        }
    }
}

/// The fields of package.json the workflow reads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub private: bool,
}

impl fmt::Display for PackageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a quiet command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands
pub trait CommandRunner {
    /// Run with the terminal attached; returns the exit code
    fn run(&self, cmd: &CommandSpec, cwd: &Path) -> LuminResult<Option<i32>>;

    /// Run with output captured
    fn capture(&self, cmd: &CommandSpec, cwd: &Path) -> LuminResult<CommandOutput>;
}

/// Blocking `std::process` runner
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &CommandSpec, cwd: &Path) -> LuminResult<Option<i32>> {
        let status = Command::new(&cmd.program)
            .args(&cmd.args)
            .current_dir(cwd)
            .status()?;
        Ok(status.code())
    }

    fn capture(&self, cmd: &CommandSpec, cwd: &Path) -> LuminResult<CommandOutput> {
        let output = Command::new(&cmd.program)
            .args(&cmd.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Progress of a publish run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    Package { name: String, version: String },
    StepStarted { description: String },
    StepSucceeded { description: String },
    Warning { message: String },
    Completed { package: String, dry_run: bool },
}

/// Trait for receiving publish events
pub trait PublishEventSink {
    fn on_event(&self, event: PublishEvent);
}

impl<F: Fn(PublishEvent)> PublishEventSink for F {
    fn on_event(&self, event: PublishEvent) {
        self(event)
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub package: PackageInfo,
    /// Descriptions of the commands that ran, in order
    pub steps: Vec<String>,
    pub dry_run: bool,
}

/// Drives the publish steps for the package in `root`
pub struct Publisher<'a> {
    root: PathBuf,
    runner: &'a dyn CommandRunner,
}

impl<'a> Publisher<'a> {
    pub fn new(root: impl Into<PathBuf>, runner: &'a dyn CommandRunner) -> Self {
        Self {
            root: root.into(),
            runner,
        }
    }

    /// Read name, version and private flag from package.json
    pub fn package_info(&self) -> LuminResult<PackageInfo> {
        let path = self.root.join("package.json");
        if !path.is_file() {
            return Err(LuminError::PackageJsonNotFound {
                root: self.root.clone(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn publish(
        &self,
        options: &PublishOptions,
        sink: &dyn PublishEventSink,
    ) -> LuminResult<PublishReport> {
        let package = self.package_info()?;
        sink.on_event(PublishEvent::Package {
            name: package.name.clone(),
            version: package.version.clone(),
        });

        if package.private {
            return Err(LuminError::PrivatePackage { name: package.name });
        }

        self.check_git_status(sink);

        if !options.dry_run {
            self.check_npm_auth()?;
        }

        let mut steps = Vec::new();

        if !options.skip_tests {
            self.step(
                &CommandSpec::new("npm", &["run", "test"]),
                "Running tests",
                sink,
                &mut steps,
            )?;
        }

        if !options.skip_build {
            self.step(
                &CommandSpec::new("npm", &["run", "build"]),
                "Building package",
                sink,
                &mut steps,
            )?;
        }

        self.check_dist()?;

        if options.dry_run {
            self.step(
                &CommandSpec::new("npm", &["publish", "--dry-run"]),
                "Running publish dry-run",
                sink,
                &mut steps,
            )?;
        } else {
            self.step(
                &CommandSpec::new("npm", &["publish", "--tag", &options.tag]),
                &format!("Publishing to npm with tag '{}'", options.tag),
                sink,
                &mut steps,
            )?;
        }

        sink.on_event(PublishEvent::Completed {
            package: package.to_string(),
            dry_run: options.dry_run,
        });

        Ok(PublishReport {
            package,
            steps,
            dry_run: options.dry_run,
        })
    }

    /// Uncommitted changes are only a warning
    fn check_git_status(&self, sink: &dyn PublishEventSink) {
        let cmd = CommandSpec::new("git", &["status", "--porcelain"]);
        match self.runner.capture(&cmd, &self.root) {
            Ok(out) if out.success() => {
                let status = out.stdout.trim();
                if !status.is_empty() {
                    sink.on_event(PublishEvent::Warning {
                        message: format!(
                            "You have uncommitted changes:\n{}\nConsider committing your changes before publishing.",
                            status
                        ),
                    });
                }
            }
            _ => sink.on_event(PublishEvent::Warning {
                message: "Could not check git status".to_string(),
            }),
        }
    }

    fn check_npm_auth(&self) -> LuminResult<()> {
        let cmd = CommandSpec::new("npm", &["whoami"]);
        match self.runner.capture(&cmd, &self.root) {
            Ok(out) if out.success() => Ok(()),
            _ => Err(LuminError::NpmAuth),
        }
    }

    fn check_dist(&self) -> LuminResult<()> {
        let dist = self.root.join("dist");
        if dist.exists() {
            Ok(())
        } else {
            Err(LuminError::DistMissing { path: dist })
        }
    }

    fn step(
        &self,
        cmd: &CommandSpec,
        description: &str,
        sink: &dyn PublishEventSink,
        steps: &mut Vec<String>,
    ) -> LuminResult<()> {
        sink.on_event(PublishEvent::StepStarted {
            description: description.to_string(),
        });
        let code = self.runner.run(cmd, &self.root)?;
        if code != Some(0) {
            return Err(LuminError::CommandFailed {
                step: description.to_string(),
                code,
            });
        }
        steps.push(description.to_string());
        sink.on_event(PublishEvent::StepSucceeded {
            description: description.to_string(),
        });
        Ok(())
    }
}
