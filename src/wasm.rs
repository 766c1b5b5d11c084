//! WASM bindings for tabled
//!
//! This module exposes the editor session to a browser host. The host owns
//! the DOM, localStorage and the clipboard: it feeds user actions in, reads
//! the markup back out, and mirrors `persisted()` into localStorage.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::Serialize;

#[cfg(feature = "wasm")]
use crate::core::edit::{ClassTarget, Direction};
#[cfg(feature = "wasm")]
use crate::core::options::EditorOptions;
#[cfg(feature = "wasm")]
use crate::features::session::{error_notice, Command, Editor, Outcome};
#[cfg(feature = "wasm")]
use crate::utils::error::{EditorError, EditorResult};
#[cfg(feature = "wasm")]
use crate::utils::notify::Notice;
#[cfg(feature = "wasm")]
use crate::utils::storage::MemoryStore;

/// Result of one editor command (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct CommandResult {
    /// Whether the command succeeded
    pub ok: bool,
    /// Notices to show, in order
    pub notices: Vec<Notice>,
    /// Formatted export markup after the command
    pub output: String,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Editor session handle
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct TableEditor {
    inner: Editor,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl TableEditor {
    /// Create a session
    ///
    /// # Arguments
    /// * `saved` - markup previously read from `persisted()`, if any
    /// * `options` - partial `EditorOptions` object; missing fields use
    ///   defaults, and a malformed object is replaced by the defaults with a
    ///   logged warning
    #[wasm_bindgen(constructor)]
    pub fn new(saved: Option<String>, options: JsValue) -> TableEditor {
        let options = if options.is_undefined() || options.is_null() {
            EditorOptions::default()
        } else {
            EditorOptions::or_defaults(serde_wasm_bindgen::from_value(options))
        };
        let store = match saved {
            Some(markup) => MemoryStore::with_entry(&options.storage_key, &markup),
            None => MemoryStore::new(),
        };
        TableEditor {
            inner: Editor::with_store(options, Box::new(store)),
        }
    }

    /// Parse pasted content, replacing the table
    pub fn parse(&mut self, text: &str) -> JsValue {
        self.execute(Command::Parse(text.to_string()))
    }

    /// Accept a paste; returns the delay in milliseconds before calling
    /// `runPendingParse`
    #[wasm_bindgen(js_name = "acceptPaste")]
    pub fn accept_paste(&mut self) -> u32 {
        self.inner.accept_paste().as_millis() as u32
    }

    /// Parse the post-paste content; `null` if no paste was accepted
    #[wasm_bindgen(js_name = "runPendingParse")]
    pub fn run_pending_parse(&mut self, text: &str) -> JsValue {
        match self.inner.run_pending_parse(text) {
            Some(result) => self.respond(result),
            None => JsValue::NULL,
        }
    }

    /// Click on a cell; `extend` for Shift+Click
    pub fn select(&mut self, row: usize, col: usize, extend: bool) -> JsValue {
        self.execute(Command::Select { row, col, extend })
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&mut self) -> JsValue {
        self.execute(Command::ClearSelection)
    }

    /// Report an in-place edit of a cell's markup
    #[wasm_bindgen(js_name = "setCellContent")]
    pub fn set_cell_content(&mut self, row: usize, col: usize, content: String) -> JsValue {
        self.execute(Command::SetCellContent { row, col, content })
    }

    #[wasm_bindgen(js_name = "addRow")]
    pub fn add_row(&mut self) -> JsValue {
        self.execute(Command::AddRow)
    }

    #[wasm_bindgen(js_name = "addColumn")]
    pub fn add_column(&mut self) -> JsValue {
        self.execute(Command::AddColumn)
    }

    #[wasm_bindgen(js_name = "deleteRow")]
    pub fn delete_row(&mut self) -> JsValue {
        self.execute(Command::DeleteRow)
    }

    #[wasm_bindgen(js_name = "deleteColumn")]
    pub fn delete_column(&mut self) -> JsValue {
        self.execute(Command::DeleteColumn)
    }

    #[wasm_bindgen(js_name = "mergeCells")]
    pub fn merge_cells(&mut self) -> JsValue {
        self.execute(Command::MergeCells)
    }

    #[wasm_bindgen(js_name = "splitCell")]
    pub fn split_cell(&mut self) -> JsValue {
        self.execute(Command::SplitCell)
    }

    /// Move the current cell's column; `direction` is "left" or "right"
    #[wasm_bindgen(js_name = "moveColumn")]
    pub fn move_column(&mut self, direction: &str) -> JsValue {
        match Direction::from_name(direction) {
            Some(direction) => self.execute(Command::MoveColumn(direction)),
            None => self.reject(EditorError::invalid(format!(
                "unknown direction '{}'",
                direction
            ))),
        }
    }

    /// Add classes; `target` is "cell", "row" or "column"
    #[wasm_bindgen(js_name = "addClass")]
    pub fn add_class(&mut self, names: String, target: &str) -> JsValue {
        match ClassTarget::from_name(target) {
            Some(target) => self.execute(Command::AddClass { names, target }),
            None => self.reject(unknown_target(target)),
        }
    }

    /// Remove classes; `target` is "cell", "row" or "column"
    #[wasm_bindgen(js_name = "removeClass")]
    pub fn remove_class(&mut self, names: String, target: &str) -> JsValue {
        match ClassTarget::from_name(target) {
            Some(target) => self.execute(Command::RemoveClass { names, target }),
            None => self.reject(unknown_target(target)),
        }
    }

    pub fn clear(&mut self) -> JsValue {
        self.execute(Command::Clear)
    }

    /// Formatted export markup; empty without a table
    pub fn output(&self) -> String {
        self.inner.output().to_string()
    }

    /// Markup for the editing surface, selection marker included
    #[wasm_bindgen(js_name = "editorMarkup")]
    pub fn editor_markup(&self) -> String {
        self.inner.editor_markup()
    }

    /// Markup to mirror into localStorage
    pub fn persisted(&self) -> Option<String> {
        let key = &self.inner.options().storage_key;
        self.inner.store().load(key).ok().flatten()
    }

    #[wasm_bindgen(js_name = "storageKey")]
    pub fn storage_key(&self) -> String {
        self.inner.options().storage_key.clone()
    }

    /// Notice for an export attempt; the host performs the clipboard write
    /// itself and reports whether it (or its fallback) succeeded
    #[wasm_bindgen(js_name = "copyNotice")]
    pub fn copy_notice(&self, copied: bool) -> JsValue {
        let notice = if self.inner.output().is_empty() {
            error_notice(&EditorError::NothingToCopy)
        } else if copied {
            Notice::success(crate::features::session::COPY_SUCCESS)
        } else {
            error_notice(&EditorError::clipboard("copy was blocked by the browser"))
        };
        to_js(&notice)
    }
}

#[cfg(feature = "wasm")]
impl TableEditor {
    fn execute(&mut self, command: Command) -> JsValue {
        let result = self.inner.dispatch(command);
        self.respond(result)
    }

    fn respond(&mut self, result: EditorResult<Outcome>) -> JsValue {
        let (ok, mut notices) = match result {
            Ok(outcome) => (true, outcome.notice().into_iter().collect::<Vec<_>>()),
            Err(err) => (false, vec![error_notice(&err)]),
        };
        if let Some(err) = self.inner.take_storage_error() {
            notices.push(Notice::danger(err.to_string()));
        }

        to_js(&CommandResult {
            ok,
            notices,
            output: self.inner.output().to_string(),
        })
    }

    fn reject(&self, err: EditorError) -> JsValue {
        to_js(&CommandResult {
            ok: false,
            notices: vec![error_notice(&err)],
            output: self.inner.output().to_string(),
        })
    }
}

#[cfg(feature = "wasm")]
fn unknown_target(target: &str) -> EditorError {
    EditorError::invalid(format!("unknown class target '{}'", target))
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

/// Detect the format of pasted content ("html", "tsv", "csv" or "unknown")
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input)
        .map(|format| format.name())
        .unwrap_or("unknown")
        .to_string()
}

/// Parse pasted content and return formatted HTML (empty on failure)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatTable")]
pub fn format_table_wasm(input: &str) -> String {
    crate::format_table(input).unwrap_or_default()
}

/// Pretty-print arbitrary markup with the default options
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatHtml")]
pub fn format_html_wasm(markup: &str) -> String {
    crate::format_html(markup, &EditorOptions::default())
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
