//! New command - Generate a module skeleton.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use tracing::info;

use tfmold_answers::AnswerSet;
use tfmold_scaffold::ModuleScaffold;
use tfmold_validate::{TerraformCli, TerraformValidator};

#[derive(Args)]
pub struct NewArgs {
    /// Module name (snake_case)
    #[arg(short, long)]
    pub name: Option<String>,

    /// One-line module description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author full name
    #[arg(long)]
    pub author: Option<String>,

    /// GitHub user or organization
    #[arg(long)]
    pub github_user: Option<String>,

    /// Answer file (.yaml, .yml or .json); flags override file values
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Output directory (defaults to ./<module_name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate into a non-empty directory
    #[arg(long)]
    pub overwrite: bool,

    /// Print the file plan without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the examples/ subtree
    #[arg(long)]
    pub no_examples: bool,

    /// Skip the test/ Terratest subtree
    #[arg(long)]
    pub no_terratest: bool,

    /// Run terraform init/validate after generation
    #[arg(long)]
    pub validate: bool,
}

impl NewArgs {
    /// Build the answer set from the answer file and/or flags.
    fn resolve_answers(&self) -> Result<AnswerSet> {
        let mut answers = match &self.answers {
            Some(path) => AnswerSet::from_path(path)?,
            None => AnswerSet::new(
                self.name
                    .clone()
                    .ok_or_else(|| anyhow!("--name is required without --answers"))?,
                self.description
                    .clone()
                    .ok_or_else(|| anyhow!("--description is required without --answers"))?,
                self.author
                    .clone()
                    .ok_or_else(|| anyhow!("--author is required without --answers"))?,
                self.github_user
                    .clone()
                    .ok_or_else(|| anyhow!("--github-user is required without --answers"))?,
            ),
        };

        if self.answers.is_some() {
            if let Some(name) = &self.name {
                answers.module_name = name.clone();
            }
            if let Some(description) = &self.description {
                answers.description = description.clone();
            }
            if let Some(author) = &self.author {
                answers.author_full_name = author.clone();
            }
            if let Some(github_user) = &self.github_user {
                answers.github_user_name = github_user.clone();
            }
        }

        if self.no_examples {
            answers = answers.with_examples(false);
        }
        if self.no_terratest {
            answers = answers.with_terratest(false);
        }

        Ok(answers)
    }
}

pub async fn execute(args: NewArgs) -> Result<()> {
    let answers = args.resolve_answers()?;
    answers.validated()?;

    let target = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&answers.module_name));

    let scaffold = ModuleScaffold::new().overwrite(args.overwrite);

    if args.dry_run {
        println!("📋 Files that would be generated in {}:", target.display());
        for path in scaffold.plan(&answers)? {
            println!("   {}", path.display());
        }
        return Ok(());
    }

    info!("Generating module '{}'", answers.module_name);
    let result = scaffold.generate(&target, &answers)?;

    println!(
        "✅ Generated {} files in {}",
        result.created_files.len(),
        target.display()
    );

    if args.validate {
        let cli = TerraformCli::new();
        if !cli.is_available() {
            println!("⚠️  terraform CLI not found, skipping validation");
            return Ok(());
        }

        println!("🏗️  Validating generated module...");
        let validator = TerraformValidator::new(cli);
        let report = validator.full_validate(&target).await?;

        for check in &report.checks {
            if check.passed {
                println!("   ✅ {}", check.name);
            } else {
                println!("   ❌ {}: {}", check.name, check.message.trim());
            }
        }

        if !report.passed {
            anyhow::bail!("validation failed for generated module");
        }
    }

    Ok(())
}
