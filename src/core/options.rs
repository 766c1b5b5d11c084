//! Editor configuration

use log::warn;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Editor options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Text of cells created by add row / add column / split
    /// Default: "Cell"
    pub default_cell_text: String,

    /// Text of header cells created by add column, and the prefix of the
    /// placeholder table's headers
    /// Default: "Header"
    pub default_header_text: String,

    /// Row count of the placeholder table (including its header row)
    /// Default: 3
    pub default_rows: usize,

    /// Column count of the placeholder table
    /// Default: 3
    pub default_cols: usize,

    /// Container elements preserved around a pasted table
    /// Default: ["figure"]
    pub wrapper_tags: Vec<String>,

    /// One level of indentation in the formatted output
    /// Default: two spaces
    pub indent: String,

    /// Transient class marking selected cells in the live markup
    /// Default: "selected"
    pub selected_class: String,

    /// Key the editor content is persisted under
    /// Default: "tableEditorContent"
    pub storage_key: String,

    /// Markup shown when there is no table; never persisted as content
    pub placeholder: String,

    /// Delay between accepting a paste and parsing it, in milliseconds
    /// Default: 10
    pub paste_delay_ms: u64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_cell_text: "Cell".to_string(),
            default_header_text: "Header".to_string(),
            default_rows: 3,
            default_cols: 3,
            wrapper_tags: vec!["figure".to_string()],
            indent: "  ".to_string(),
            selected_class: "selected".to_string(),
            storage_key: "tableEditorContent".to_string(),
            placeholder:
                "<p>Click \"Parse &amp; Create Table\" or paste content above to start editing.</p>"
                    .to_string(),
            paste_delay_ms: 10,
        }
    }
}

impl EditorOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with a four-space output indent
    pub fn wide_indent() -> Self {
        Self {
            indent: "    ".to_string(),
            ..Self::default()
        }
    }

    /// Options deserialized from a host, or the defaults (with a warning)
    /// when the host's value could not be read
    pub fn or_defaults<E: fmt::Display>(parsed: Result<Self, E>) -> Self {
        parsed.unwrap_or_else(|err| {
            warn!("ignoring malformed editor options, using defaults: {}", err);
            Self::default()
        })
    }

    pub fn paste_delay(&self) -> Duration {
        Duration::from_millis(self.paste_delay_ms)
    }

    /// Whether `tag` names a container kept around a pasted table
    pub fn is_wrapper_tag(&self, tag: &str) -> bool {
        self.wrapper_tags
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(tag))
    }

    /// Whether `markup` is the placeholder rather than real content
    pub fn is_placeholder(&self, markup: &str) -> bool {
        let markup = markup.trim();
        markup.is_empty() || markup == self.placeholder.trim()
    }
}
