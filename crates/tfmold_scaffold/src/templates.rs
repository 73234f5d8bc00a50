//! Embedded file templates for the generated module tree.
//!
//! Every file tfmold emits lives here as data. Templates use
//! `{{variable}}` markers resolved against
//! [`AnswerSet::variable_map`](tfmold_answers::AnswerSet::variable_map);
//! the Terraform content is kept `terraform fmt` canonical so a freshly
//! generated module passes format checks untouched.

use tfmold_answers::AnswerSet;

pub const MAIN_TF: &str = r#"# {{module_name}} - {{description}}
#
# Declare the module's resources here.

locals {
  module_name = "{{module_name}}"

  tags = merge(var.tags, {
    Module    = local.module_name
    ManagedBy = "terraform"
  })
}
"#;

pub const VARIABLES_TF: &str = r#"# Input variables for the {{module_name}} module

variable "name" {
  description = "Name prefix applied to resources created by this module"
  type        = string
  default     = "{{module_name_kebab}}"
}

variable "tags" {
  description = "Additional tags to apply to resources"
  type        = map(string)
  default     = {}
}
"#;

pub const OUTPUTS_TF: &str = r#"# Output values from the {{module_name}} module

output "name" {
  description = "The resolved name prefix"
  value       = var.name
}

output "tags" {
  description = "Tags applied to resources created by this module"
  value       = local.tags
}
"#;

pub const VERSIONS_TF: &str = r#"# Terraform version constraints

terraform {
  required_version = ">= 1.0"
}
"#;

pub const README_MD: &str = r#"# {{module_name}}

{{description}}

## Usage

```hcl
module "{{module_name}}" {
  source = "github.com/{{github_user_name}}/terraform-{{module_name_kebab}}"

  name = "example"

  tags = {
    Environment = "dev"
  }
}
```

## Requirements

| Name | Version |
|------|---------|
| terraform | >= 1.0 |

## Inputs

| Name | Description | Type | Default |
|------|-------------|------|---------|
| name | Name prefix applied to resources created by this module | `string` | `"{{module_name_kebab}}"` |
| tags | Additional tags to apply to resources | `map(string)` | `{}` |

## Outputs

| Name | Description |
|------|-------------|
| name | The resolved name prefix |
| tags | Tags applied to resources created by this module |

## Authors

Maintained by [{{author_full_name}}](https://github.com/{{github_user_name}}).

## License

MIT Licensed. See [LICENSE](LICENSE) for full details.
"#;

pub const LICENSE_MIT: &str = r#"MIT License

Copyright (c) {{year}} {{author_full_name}}

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

pub const GITIGNORE: &str = r#"# Local .terraform directories
**/.terraform/*

# .tfstate files
*.tfstate
*.tfstate.*

# Crash log files
crash.log
crash.*.log

# Exclude all .tfvars files, which are likely to contain sensitive data
*.tfvars
*.tfvars.json

# Ignore override files
override.tf
override.tf.json
*_override.tf
*_override.tf.json

# Ignore CLI configuration files
.terraformrc
terraform.rc
"#;

pub const TERRAFORM_VERSION: &str = "1.6.0\n";

pub const EXAMPLE_MAIN_TF: &str = r#"# Complete example for the {{module_name}} module

module "{{module_name}}" {
  source = "../.."

  name = "{{module_name_kebab}}-complete"

  tags = {
    Environment = "dev"
  }
}
"#;

pub const EXAMPLE_OUTPUTS_TF: &str = r#"output "name" {
  description = "Name prefix returned by the module"
  value       = module.{{module_name}}.name
}
"#;

pub const TEST_MAKEFILE: &str = r#".PHONY: test

test:
	go test -v -timeout 30m
"#;

pub const TEST_GO: &str = r#"package test

import (
	"testing"

	"github.com/gruntwork-io/terratest/modules/terraform"
	"github.com/stretchr/testify/assert"
)

func Test{{module_name_pascal}}Complete(t *testing.T) {
	terraformOptions := terraform.WithDefaultRetryableErrors(t, &terraform.Options{
		TerraformDir: "../examples/complete",
		Vars:         map[string]interface{}{},
	})

	defer terraform.Destroy(t, terraformOptions)
	terraform.InitAndApply(t, terraformOptions)

	name := terraform.Output(t, terraformOptions, "name")
	assert.NotEmpty(t, name)
}
"#;

/// The files generated for a given answer set, as
/// `(relative path template, content template)` pairs.
///
/// Required files come first; the `examples/` and `test/` subtrees are
/// appended only when the corresponding flag is set.
pub fn file_set(answers: &AnswerSet) -> Vec<(&'static str, &'static str)> {
    let mut files = vec![
        ("main.tf", MAIN_TF),
        ("variables.tf", VARIABLES_TF),
        ("outputs.tf", OUTPUTS_TF),
        ("versions.tf", VERSIONS_TF),
        ("README.md", README_MD),
        ("LICENSE", LICENSE_MIT),
        (".gitignore", GITIGNORE),
        (".terraform-version", TERRAFORM_VERSION),
    ];

    if answers.include_examples {
        files.push(("examples/complete/main.tf", EXAMPLE_MAIN_TF));
        files.push(("examples/complete/outputs.tf", EXAMPLE_OUTPUTS_TF));
        files.push(("examples/complete/versions.tf", VERSIONS_TF));
    }

    if answers.include_terratest {
        files.push(("test/Makefile", TEST_MAKEFILE));
        files.push(("test/{{module_name}}_test.go", TEST_GO));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> AnswerSet {
        AnswerSet::new("test_module", "Test module", "John Doe", "jdoe")
    }

    #[test]
    fn test_file_set_with_all_flags() {
        let files = file_set(&answers());
        let paths: Vec<&str> = files.iter().map(|(p, _)| *p).collect();
        assert!(paths.contains(&"main.tf"));
        assert!(paths.contains(&"examples/complete/main.tf"));
        assert!(paths.contains(&"test/{{module_name}}_test.go"));
    }

    #[test]
    fn test_file_set_without_flags() {
        let answers = answers().with_examples(false).with_terratest(false);
        let files = file_set(&answers);
        assert!(files.iter().all(|(p, _)| !p.starts_with("examples/")));
        assert!(files.iter().all(|(p, _)| !p.starts_with("test/")));
        assert_eq!(files.len(), 8);
    }
}
