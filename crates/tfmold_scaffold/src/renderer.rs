//! Variable substitution for template content and paths.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Renderer that replaces `{{variable_name}}` markers.
///
/// Unknown variables are left in place rather than erased, so a typo in a
/// template shows up verbatim in the rendered output instead of vanishing.
pub struct Renderer {
    variable_pattern: Regex,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}").unwrap(),
        }
    }

    /// Render content by replacing variables.
    pub fn render_content(&self, content: &str, variables: &HashMap<String, String>) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                variables
                    .get(var_name)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", var_name))
            })
            .to_string()
    }

    /// Render a relative path by replacing variables in its components.
    pub fn render_path(&self, path: &Path, variables: &HashMap<String, String>) -> PathBuf {
        let path_str = path.to_string_lossy();
        PathBuf::from(self.render_content(&path_str, variables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("module_name".to_string(), "test_module".to_string());
        vars.insert("description".to_string(), "Test module".to_string());
        vars
    }

    #[test]
    fn test_render_content() {
        let renderer = Renderer::new();
        let rendered = renderer.render_content("# {{module_name}} - {{description}}", &vars());
        assert_eq!(rendered, "# test_module - Test module");
    }

    #[test]
    fn test_render_unknown_variable_left_in_place() {
        let renderer = Renderer::new();
        let rendered = renderer.render_content("{{module_name}} {{missing}}", &vars());
        assert_eq!(rendered, "test_module {{missing}}");
    }

    #[test]
    fn test_render_path() {
        let renderer = Renderer::new();
        let rendered = renderer.render_path(Path::new("test/{{module_name}}_test.go"), &vars());
        assert_eq!(rendered, PathBuf::from("test/test_module_test.go"));
    }

    #[test]
    fn test_render_ignores_go_braces() {
        // Go source contains `interface{}{}` which must survive untouched.
        let renderer = Renderer::new();
        let content = "Vars: map[string]interface{}{},";
        assert_eq!(renderer.render_content(content, &vars()), content);
    }
}
