//! Answer set model.
//!
//! The answer set is the single input to module generation: every file in
//! the rendered tree is a deterministic function of these values.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AnswerError, AnswerResult};

/// `module_name` must be a lowercase snake_case identifier so it stays valid
/// as a Terraform module name, a Go test file prefix, and a directory name.
const MODULE_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";

fn default_true() -> bool {
    true
}

/// The full parameterization of a generated Terraform module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSet {
    /// Module name (snake_case)
    pub module_name: String,
    /// One-line module description
    pub description: String,
    /// Author name used in LICENSE and README
    pub author_full_name: String,
    /// GitHub user or organization owning the module
    pub github_user_name: String,
    /// Generate `examples/complete/`
    #[serde(default = "default_true")]
    pub include_examples: bool,
    /// Generate `test/` with Terratest scaffolding
    #[serde(default = "default_true")]
    pub include_terratest: bool,
}

impl AnswerSet {
    /// Create an answer set with both optional subtrees enabled.
    pub fn new(
        module_name: impl Into<String>,
        description: impl Into<String>,
        author_full_name: impl Into<String>,
        github_user_name: impl Into<String>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            description: description.into(),
            author_full_name: author_full_name.into(),
            github_user_name: github_user_name.into(),
            include_examples: true,
            include_terratest: true,
        }
    }

    pub fn with_examples(mut self, include: bool) -> Self {
        self.include_examples = include;
        self
    }

    pub fn with_terratest(mut self, include: bool) -> Self {
        self.include_terratest = include;
        self
    }

    /// Validate the answer set, returning all problems found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("module_name", &self.module_name),
            ("description", &self.description),
            ("author_full_name", &self.author_full_name),
            ("github_user_name", &self.github_user_name),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("Missing required answer: {}", name));
            }
        }

        let pattern = Regex::new(MODULE_NAME_PATTERN).unwrap();
        if !self.module_name.is_empty() && !pattern.is_match(&self.module_name) {
            errors.push(format!(
                "Answer 'module_name' does not match pattern {}: {}",
                MODULE_NAME_PATTERN, self.module_name
            ));
        }

        errors
    }

    /// Validate, failing with the combined problem list.
    pub fn validated(&self) -> AnswerResult<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AnswerError::Invalid(errors.join("; ")))
        }
    }

    /// Build the variable map used for template substitution.
    ///
    /// Alongside the raw answers this includes derived variables: name case
    /// variants and the current year for the LICENSE header.
    pub fn variable_map(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        vars.insert("module_name".to_string(), self.module_name.clone());
        vars.insert("description".to_string(), self.description.clone());
        vars.insert(
            "author_full_name".to_string(),
            self.author_full_name.clone(),
        );
        vars.insert(
            "github_user_name".to_string(),
            self.github_user_name.clone(),
        );
        vars.insert(
            "include_examples".to_string(),
            self.include_examples.to_string(),
        );
        vars.insert(
            "include_terratest".to_string(),
            self.include_terratest.to_string(),
        );

        vars.insert(
            "module_name_kebab".to_string(),
            to_kebab_case(&self.module_name),
        );
        vars.insert(
            "module_name_pascal".to_string(),
            to_pascal_case(&self.module_name),
        );
        vars.insert("year".to_string(), Utc::now().year().to_string());

        vars
    }
}

/// Convert snake_case to kebab-case.
fn to_kebab_case(s: &str) -> String {
    s.replace(['_', ' '], "-")
}

/// Convert snake_case to PascalCase.
fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}
