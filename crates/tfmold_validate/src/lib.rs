//! # tfmold_validate
//!
//! External `terraform` CLI validation harness for tfmold.
//!
//! Runs `terraform init` and `terraform validate` (plus a format check)
//! against a generated module directory, with a per-command timeout. The
//! terraform binary is an advisory collaborator: its absence is a skip
//! condition for callers, never an error raised by this crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tfmold_validate::{TerraformCli, TerraformValidator};
//!
//! # async fn run() {
//! let cli = TerraformCli::new();
//! if cli.is_available() {
//!     let validator = TerraformValidator::new(cli);
//!     let report = validator.full_validate(Path::new("./my_module")).await.unwrap();
//!     assert!(report.passed);
//! }
//! # }
//! ```

pub mod error;
pub mod terraform;

pub use error::{ValidateError, ValidateResult};
pub use terraform::{
    TerraformCli, TerraformOutcome, TerraformValidator, ValidationCheck, ValidationReport,
};
