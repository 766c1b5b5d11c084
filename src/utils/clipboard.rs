//! Clipboard collaborator
//!
//! Export copies the pretty-printed markup. The primary path may fail (no
//! permission, insecure context); callers then fall back to the legacy
//! select-and-copy path.

use crate::utils::error::{EditorError, EditorResult};

/// Clipboard access used by the export command
pub trait Clipboard {
    /// Primary write path
    fn write_text(&mut self, text: &str) -> EditorResult<()>;

    /// Fallback used when `write_text` fails
    fn legacy_copy(&mut self, text: &str) -> EditorResult<()>;
}

/// In-memory clipboard with switchable failure modes
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    /// Make `write_text` fail
    pub fail_primary: bool,
    /// Make `legacy_copy` fail
    pub fail_legacy: bool,
    /// How many times the fallback path was taken
    pub legacy_uses: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> EditorResult<()> {
        if self.fail_primary {
            return Err(EditorError::clipboard("clipboard write not permitted"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }

    fn legacy_copy(&mut self, text: &str) -> EditorResult<()> {
        self.legacy_uses += 1;
        if self.fail_legacy {
            return Err(EditorError::clipboard("copy command unavailable"));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
