//! # tfmold_answers
//!
//! Answer set schema, defaults, and validation for tfmold.
//!
//! An answer set is the full parameterization of a generated Terraform
//! module: the module name, its description, author details, and the flags
//! that switch optional subtrees (examples, Terratest) on or off.
//!
//! ## Example
//!
//! ```rust
//! use tfmold_answers::AnswerSet;
//!
//! let answers = AnswerSet::new("vpc_peering", "VPC peering module", "John Doe", "jdoe")
//!     .with_terratest(false);
//!
//! assert!(answers.validate().is_empty());
//! assert!(answers.include_examples);
//! assert!(!answers.include_terratest);
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::{AnswerError, AnswerResult};
pub use model::AnswerSet;
