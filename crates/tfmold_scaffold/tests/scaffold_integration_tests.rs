//! Integration tests for module generation.

use std::fs;
use std::path::Path;

use tempfile::tempdir;
use walkdir::WalkDir;

use tfmold_answers::AnswerSet;
use tfmold_scaffold::{ModuleScaffold, ScaffoldError};

const REQUIRED_FILES: [&str; 6] = [
    "main.tf",
    "outputs.tf",
    "variables.tf",
    "versions.tf",
    "README.md",
    "LICENSE",
];

fn answers() -> AnswerSet {
    AnswerSet::new("test_module", "Test module", "John Doe", "jdoe")
}

fn assert_required_files(module_dir: &Path) {
    for file in REQUIRED_FILES {
        assert!(
            module_dir.join(file).exists(),
            "required file missing: {}",
            file
        );
    }
}

#[test]
fn test_generate_with_defaults() {
    let dir = tempdir().unwrap();
    let scaffold = ModuleScaffold::new();

    let result = scaffold.generate(dir.path(), &answers()).unwrap();

    assert_eq!(result.target_path, dir.path());
    assert!(!result.created_files.is_empty());
    assert_required_files(dir.path());

    // Defaults enable both optional subtrees.
    assert!(dir.path().join("examples/complete/main.tf").exists());
    assert!(dir.path().join("test/Makefile").exists());
    assert!(dir.path().join("test/test_module_test.go").exists());
}

fn check_conditional_directories(include_examples: bool, include_terratest: bool) {
    let dir = tempdir().unwrap();
    let scaffold = ModuleScaffold::new();
    let answers = answers()
        .with_examples(include_examples)
        .with_terratest(include_terratest);

    scaffold.generate(dir.path(), &answers).unwrap();
    assert_required_files(dir.path());

    let examples_dir = dir.path().join("examples");
    let test_dir = dir.path().join("test");

    if include_examples {
        assert!(examples_dir.exists());
        assert!(examples_dir.join("complete/main.tf").exists());
    } else {
        assert!(!examples_dir.exists());
    }

    if include_terratest {
        assert!(test_dir.exists());
        assert!(test_dir.join("Makefile").exists());
        assert!(test_dir.join("test_module_test.go").exists());
    } else {
        assert!(!test_dir.exists());
    }
}

#[test]
fn test_conditional_directories_both() {
    check_conditional_directories(true, true);
}

#[test]
fn test_conditional_directories_examples_only() {
    check_conditional_directories(true, false);
}

#[test]
fn test_conditional_directories_terratest_only() {
    check_conditional_directories(false, true);
}

#[test]
fn test_conditional_directories_neither() {
    check_conditional_directories(false, false);
}

#[test]
fn test_invalid_answers_leave_no_partial_tree() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("out");

    let mut bad = answers();
    bad.module_name = "Not A Module Name".to_string();

    let scaffold = ModuleScaffold::new();
    let result = scaffold.generate(&target, &bad);

    assert!(matches!(result, Err(ScaffoldError::InvalidAnswers(_))));
    assert!(!target.exists(), "no tree should be created on failure");
}

#[test]
fn test_missing_required_answer_fails() {
    let mut bad = answers();
    bad.description = String::new();

    let scaffold = ModuleScaffold::new();
    let result = scaffold.generate(tempdir().unwrap().path(), &bad);
    assert!(matches!(result, Err(ScaffoldError::InvalidAnswers(_))));
}

#[test]
fn test_rendered_content_substitutes_answers() {
    let dir = tempdir().unwrap();
    ModuleScaffold::new().generate(dir.path(), &answers()).unwrap();

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("# test_module"));
    assert!(readme.contains("Test module"));
    assert!(readme.contains("github.com/jdoe"));
    assert!(readme.contains("John Doe"));
    assert!(!readme.contains("{{"), "unresolved variables in README");

    let license = fs::read_to_string(dir.path().join("LICENSE")).unwrap();
    assert!(license.contains("John Doe"));
    assert!(!license.contains("{{year}}"));
}

#[test]
fn test_generated_go_test_uses_module_name() {
    let dir = tempdir().unwrap();
    ModuleScaffold::new().generate(dir.path(), &answers()).unwrap();

    let go_test = fs::read_to_string(dir.path().join("test/test_module_test.go")).unwrap();
    assert!(go_test.contains("func TestTestModuleComplete"));
    assert!(go_test.contains("../examples/complete"));
}

#[test]
fn test_plan_matches_generated_tree() {
    let dir = tempdir().unwrap();
    let scaffold = ModuleScaffold::new();

    let plan = scaffold.plan(&answers()).unwrap();
    scaffold.generate(dir.path(), &answers()).unwrap();

    let generated: Vec<_> = WalkDir::new(dir.path())
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();

    assert_eq!(plan.len(), generated.len());
    for path in &plan {
        assert!(generated.contains(path), "planned but not generated: {:?}", path);
    }
}
