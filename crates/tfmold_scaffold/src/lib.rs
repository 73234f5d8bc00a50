//! # tfmold_scaffold
//!
//! Terraform module tree generation for tfmold.
//!
//! This crate turns a validated [`AnswerSet`](tfmold_answers::AnswerSet)
//! into a complete Terraform module skeleton: the always-present files
//! (`main.tf`, `outputs.tf`, `variables.tf`, `versions.tf`, `README.md`,
//! `LICENSE`) plus the flag-controlled `examples/` and `test/` subtrees.
//! Template content is embedded data rendered through `{{variable}}`
//! substitution.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tfmold_answers::AnswerSet;
//! use tfmold_scaffold::ModuleScaffold;
//!
//! let answers = AnswerSet::new("vpc_peering", "VPC peering module", "John Doe", "jdoe");
//! let scaffold = ModuleScaffold::new();
//! let generated = scaffold.generate(Path::new("./vpc_peering"), &answers).unwrap();
//! println!("created {} files", generated.created_files.len());
//! ```

pub mod error;
pub mod renderer;
pub mod scaffold;
pub mod templates;

pub use error::{ScaffoldError, ScaffoldResult};
pub use renderer::Renderer;
pub use scaffold::{GeneratedModule, ModuleScaffold};
