//! Answer file loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AnswerError, AnswerResult};
use crate::model::AnswerSet;

impl AnswerSet {
    /// Load an answer set from a YAML or JSON file.
    ///
    /// The format is chosen by file extension. The returned answers are
    /// parsed but not yet validated; callers decide when to run
    /// [`AnswerSet::validated`].
    pub fn from_path(path: &Path) -> AnswerResult<Self> {
        if !path.exists() {
            return Err(AnswerError::NotFound(path.to_path_buf()));
        }

        debug!("Loading answers from {:?}", path);
        let content = fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(AnswerError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
