//! Validate command - Run the terraform harness against a module directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use tfmold_validate::{TerraformCli, TerraformValidator};

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the module directory
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

pub async fn execute(args: ValidateArgs) -> Result<()> {
    if !args.path.exists() {
        anyhow::bail!("Module directory not found: {}", args.path.display());
    }

    let cli = TerraformCli::new();
    if !cli.is_available() {
        println!("⚠️  terraform CLI not found, skipping validation");
        return Ok(());
    }

    info!("Validating module at {:?}", args.path);
    println!("🏗️  Validating {}...", args.path.display());

    let validator = TerraformValidator::new(cli);
    let report = validator.full_validate(&args.path).await?;

    for check in &report.checks {
        if check.passed {
            println!("   ✅ {}", check.name);
        } else {
            println!("   ❌ {}: {}", check.name, check.message.trim());
        }
    }

    if !report.passed {
        anyhow::bail!("validation failed");
    }

    println!("✅ Module is valid");
    Ok(())
}
