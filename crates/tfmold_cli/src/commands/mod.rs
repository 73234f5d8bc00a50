//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod new;
pub mod validate;

/// tfmold - Terraform module scaffolder
#[derive(Parser)]
#[command(name = "tfmold")]
#[command(version, about = "tfmold - Terraform module scaffolder")]
#[command(long_about = r#"
tfmold generates ready-to-publish Terraform module skeletons from a small
answer set, and can check the rendered output with the terraform CLI.

WORKFLOWS:
  new       → Generate a module skeleton from answers
  validate  → Run terraform init/validate against a module directory

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid answers
  3 - Validation failure
  4 - Scaffold error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new Terraform module skeleton
    New(new::NewArgs),

    /// Validate a module directory with the terraform CLI
    Validate(validate::ValidateArgs),
}
