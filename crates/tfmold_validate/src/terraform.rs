//! Terraform CLI invocation and validation reporting.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::error::{ValidateError, ValidateResult};

/// Default per-command timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Result of a single terraform invocation.
#[derive(Debug)]
pub struct TerraformOutcome {
    pub success: bool,
    pub output: String,
    pub exit_code: i32,
}

/// Wrapper around the external `terraform` binary.
pub struct TerraformCli {
    program: String,
    timeout: Duration,
}

impl Default for TerraformCli {
    fn default() -> Self {
        Self::new()
    }
}

impl TerraformCli {
    pub fn new() -> Self {
        Self {
            program: "terraform".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different binary name or path.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Override the per-command timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check if the terraform binary is available on the system.
    pub fn is_available(&self) -> bool {
        std::process::Command::new(&self.program)
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Run `terraform init`.
    pub async fn init(&self, working_dir: &Path) -> ValidateResult<TerraformOutcome> {
        info!("Running terraform init in {:?}", working_dir);
        self.run_command(working_dir, &["init", "-input=false", "-backend=false", "-no-color"])
            .await
    }

    /// Run `terraform validate`.
    pub async fn validate(&self, working_dir: &Path) -> ValidateResult<TerraformOutcome> {
        info!("Running terraform validate in {:?}", working_dir);
        self.run_command(working_dir, &["validate", "-no-color"]).await
    }

    /// Run `terraform fmt` in check mode.
    pub async fn fmt_check(&self, working_dir: &Path) -> ValidateResult<TerraformOutcome> {
        info!("Running terraform fmt check in {:?}", working_dir);
        self.run_command(working_dir, &["fmt", "-check", "-recursive"])
            .await
    }

    async fn run_command(
        &self,
        working_dir: &Path,
        args: &[&str],
    ) -> ValidateResult<TerraformOutcome> {
        debug!("Executing terraform {:?}", args);

        let output_future = Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = timeout(self.timeout, output_future)
            .await
            .map_err(|_| ValidateError::Timeout {
                command: format!("terraform {}", args.join(" ")),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| ValidateError::Spawn(format!("{}: {}", self.program, e)))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(TerraformOutcome {
            success: output.status.success(),
            output: combined,
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

/// Validator that runs the full terraform check sequence.
pub struct TerraformValidator {
    cli: TerraformCli,
}

impl TerraformValidator {
    pub fn new(cli: TerraformCli) -> Self {
        Self { cli }
    }

    /// Run format check, init, and validate against a module directory.
    ///
    /// Init failure short-circuits since validate cannot run without it.
    pub async fn full_validate(&self, working_dir: &Path) -> ValidateResult<ValidationReport> {
        let mut report = ValidationReport::new();

        let fmt_result = self.cli.fmt_check(working_dir).await?;
        report.add_check("format", fmt_result.success, &fmt_result.output);

        let init_result = self.cli.init(working_dir).await?;
        if !init_result.success {
            report.add_check("init", false, &init_result.output);
            return Ok(report);
        }
        report.add_check("init", true, "Initialization successful");

        let validate_result = self.cli.validate(working_dir).await?;
        report.add_check("validate", validate_result.success, &validate_result.output);

        Ok(report)
    }
}

/// Report of validation checks against a module directory.
#[derive(Debug)]
pub struct ValidationReport {
    pub checks: Vec<ValidationCheck>,
    pub passed: bool,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            passed: true,
        }
    }

    pub fn add_check(&mut self, name: &str, passed: bool, message: &str) {
        if !passed {
            self.passed = false;
        }
        self.checks.push(ValidationCheck {
            name: name.to_string(),
            passed,
            message: message.to_string(),
        });
    }

    /// Look up a check by name.
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct ValidationCheck {
    pub name: String,
    pub passed: bool,
    pub message: String,
}
