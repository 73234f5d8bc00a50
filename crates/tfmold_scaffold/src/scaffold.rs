//! Module tree generation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use tfmold_answers::AnswerSet;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::renderer::Renderer;
use crate::templates;

/// Result of a successful generation.
#[derive(Debug)]
pub struct GeneratedModule {
    /// Directory the module was generated into.
    pub target_path: PathBuf,
    /// Files that were created, in generation order.
    pub created_files: Vec<PathBuf>,
}

/// Terraform module generator.
pub struct ModuleScaffold {
    renderer: Renderer,
    overwrite: bool,
}

impl Default for ModuleScaffold {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleScaffold {
    pub fn new() -> Self {
        Self {
            renderer: Renderer::new(),
            overwrite: false,
        }
    }

    /// Allow generating into a non-empty target directory.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// The relative paths `generate` would create for these answers.
    pub fn plan(&self, answers: &AnswerSet) -> ScaffoldResult<Vec<PathBuf>> {
        answers.validated()?;

        let vars = answers.variable_map();
        Ok(templates::file_set(answers)
            .iter()
            .map(|(path, _)| self.renderer.render_path(Path::new(path), &vars))
            .collect())
    }

    /// Generate a module tree at `target_path`.
    ///
    /// Answers are validated up front; nothing is written when they are
    /// malformed. A non-empty existing target is refused unless `overwrite`
    /// is set.
    pub fn generate(
        &self,
        target_path: &Path,
        answers: &AnswerSet,
    ) -> ScaffoldResult<GeneratedModule> {
        let errors = answers.validate();
        if !errors.is_empty() {
            return Err(ScaffoldError::InvalidAnswers(errors.join("; ")));
        }

        if target_path.exists() && !self.overwrite {
            let has_files = fs::read_dir(target_path)?.next().is_some();
            if has_files {
                return Err(ScaffoldError::AlreadyExists(target_path.to_path_buf()));
            }
        }

        info!(
            "Generating module '{}' at {:?}",
            answers.module_name, target_path
        );

        fs::create_dir_all(target_path)?;

        let vars = answers.variable_map();
        let mut created_files = Vec::new();

        for (path_template, content_template) in templates::file_set(answers) {
            let relative = self.renderer.render_path(Path::new(path_template), &vars);
            let target = target_path.join(&relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }

            let rendered = self.renderer.render_content(content_template, &vars);
            fs::write(&target, rendered)?;
            debug!("Rendered: {:?}", relative);

            created_files.push(target);
        }

        info!("Created {} files", created_files.len());

        Ok(GeneratedModule {
            target_path: target_path.to_path_buf(),
            created_files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn answers() -> AnswerSet {
        AnswerSet::new("test_module", "Test module", "John Doe", "jdoe")
    }

    #[test]
    fn test_plan_renders_paths() {
        let scaffold = ModuleScaffold::new();
        let plan = scaffold.plan(&answers()).unwrap();
        assert!(plan.contains(&PathBuf::from("test/test_module_test.go")));
    }

    #[test]
    fn test_plan_rejects_invalid_answers() {
        let mut bad = answers();
        bad.module_name = "Bad-Name".to_string();
        let scaffold = ModuleScaffold::new();
        assert!(scaffold.plan(&bad).is_err());
    }

    #[test]
    fn test_generate_into_empty_existing_dir() {
        let dir = tempdir().unwrap();
        let scaffold = ModuleScaffold::new();
        let result = scaffold.generate(dir.path(), &answers()).unwrap();
        assert!(!result.created_files.is_empty());
    }

    #[test]
    fn test_generate_refuses_non_empty_target() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("existing.txt"), "data").unwrap();

        let scaffold = ModuleScaffold::new();
        let result = scaffold.generate(dir.path(), &answers());
        assert!(matches!(result, Err(ScaffoldError::AlreadyExists(_))));
    }

    #[test]
    fn test_generate_overwrite_allows_non_empty_target() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("existing.txt"), "data").unwrap();

        let scaffold = ModuleScaffold::new().overwrite(true);
        scaffold.generate(dir.path(), &answers()).unwrap();
        assert!(dir.path().join("main.tf").exists());
    }
}
