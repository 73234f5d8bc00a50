//! Integration tests for the terraform validation harness.
//!
//! These tests exercise the real terraform CLI when it is installed and
//! skip (print and return) when it is not.

use tempfile::tempdir;

use tfmold_answers::AnswerSet;
use tfmold_scaffold::ModuleScaffold;
use tfmold_validate::{TerraformCli, TerraformValidator};

fn answers() -> AnswerSet {
    AnswerSet::new("test_module", "Test module", "John Doe", "jdoe")
}

#[tokio::test]
async fn test_generated_module_passes_init_and_validate() {
    let cli = TerraformCli::new();
    if !cli.is_available() {
        println!("terraform CLI not available, skipping test");
        return;
    }

    let dir = tempdir().unwrap();
    ModuleScaffold::new().generate(dir.path(), &answers()).unwrap();

    let init = cli.init(dir.path()).await.unwrap();
    assert!(init.success, "terraform init failed: {}", init.output);

    let validate = cli.validate(dir.path()).await.unwrap();
    assert!(
        validate.success,
        "terraform validate failed: {}",
        validate.output
    );
}

#[tokio::test]
async fn test_full_validate_reports_validate_check() {
    let cli = TerraformCli::new();
    if !cli.is_available() {
        println!("terraform CLI not available, skipping test");
        return;
    }

    let dir = tempdir().unwrap();
    ModuleScaffold::new()
        .generate(dir.path(), &answers().with_examples(false).with_terratest(false))
        .unwrap();

    let validator = TerraformValidator::new(cli);
    let report = validator.full_validate(dir.path()).await.unwrap();

    let check = report.check("validate").expect("validate check missing");
    assert!(check.passed, "terraform validate failed: {}", check.message);
}

#[tokio::test]
async fn test_validate_surfaces_syntax_errors() {
    let cli = TerraformCli::new();
    if !cli.is_available() {
        println!("terraform CLI not available, skipping test");
        return;
    }

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("main.tf"), "resource \"broken\" {").unwrap();

    let outcome = cli.validate(dir.path()).await.unwrap();
    assert!(!outcome.success);
    assert_ne!(outcome.exit_code, 0);
    assert!(!outcome.output.is_empty());
}
