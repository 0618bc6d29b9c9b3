//! PostDraft domain model.
//!
//! Holds the title and tags of a post being written in the editor.

use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};

/// Maximum number of tags a post can carry.
pub const MAX_TAGS: usize = 4;

/// A post being composed in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    tags: Vec<String>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Adds a tag from the tag input.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: the tag was added
    /// - `Ok(false)`: the input was blank and nothing changed
    /// - `Err(ScribeError::Validation)`: the draft already has [`MAX_TAGS`] tags
    pub fn add_tag(&mut self, input: &str) -> Result<bool> {
        let tag = input.trim();
        if tag.is_empty() {
            return Ok(false);
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(ScribeError::validation(
                "tags",
                format!("a post can have at most {} tags", MAX_TAGS),
            ));
        }
        self.tags.push(tag.to_string());
        Ok(true)
    }

    /// Removes the tag at `index`, returning it. Out-of-range is a no-op.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        if index < self.tags.len() {
            Some(self.tags.remove(index))
        } else {
            None
        }
    }
}
