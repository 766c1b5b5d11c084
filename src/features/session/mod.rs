//! Editor Session
//!
//! [`Editor`] is the context object behind one editing surface. It owns the
//! document, the selection and the current cell, turns [`Command`]s into
//! calls on the edit engine, and after every successful change refreshes the
//! formatted output and persists the compact markup.
//!
//! # Architecture
//!
//! ```text
//! Command -> Editor::dispatch -> parser / edit engine -> Grid
//!                             -> refresh: render -> format_html -> output
//!                             -> persist: render -> Store::save
//! ```
//!
//! # Example
//!
//! ```rust
//! use tabled::features::session::{Command, Editor};
//! use tabled::core::options::EditorOptions;
//!
//! let mut editor = Editor::new(EditorOptions::default());
//! editor.dispatch(Command::Parse("a,b\n1,2".to_string())).unwrap();
//! editor.dispatch(Command::AddRow).unwrap();
//! assert!(editor.output().contains("<th>"));
//! ```

mod command;

#[cfg(test)]
mod tests;

pub use command::{error_notice, Command, Outcome};

use indexmap::IndexSet;
use log::{debug, warn};
use std::time::Duration;

use crate::core::edit::{self, ClassTarget};
use crate::core::grid::{CellId, CellPos, Document, Grid};
use crate::core::markup::{render, render_with_selection};
use crate::core::options::EditorOptions;
use crate::core::parser::{load_document, parse_detected};
use crate::features::pretty::format_html;
use crate::utils::clipboard::Clipboard;
use crate::utils::error::{EditorError, EditorResult};
use crate::utils::notify::{Notice, Notifier};
use crate::utils::storage::{NoopStore, Store};

/// Message shown after a successful export
pub const COPY_SUCCESS: &str = "HTML copied to clipboard! Ready to paste into WordPress.";

/// One editing session
pub struct Editor {
    options: EditorOptions,
    document: Option<Document>,
    selection: IndexSet<CellId>,
    current: Option<CellId>,
    output: String,
    store: Box<dyn Store>,
    paste_pending: bool,
    storage_error: Option<EditorError>,
}

impl Editor {
    /// Session that persists nothing
    pub fn new(options: EditorOptions) -> Self {
        Self::with_store(options, Box::new(NoopStore))
    }

    /// Session backed by `store`; previously saved content is loaded once here
    pub fn with_store(options: EditorOptions, store: Box<dyn Store>) -> Self {
        let document = match store.load(&options.storage_key) {
            Ok(Some(markup)) => load_document(&markup, &options),
            Ok(None) => None,
            Err(err) => {
                warn!("could not load saved table: {}", err);
                None
            }
        };
        debug!(
            "editor session started ({})",
            if document.is_some() { "restored table" } else { "empty" }
        );

        let mut editor = Self {
            options,
            document,
            selection: IndexSet::new(),
            current: None,
            output: String::new(),
            store,
            paste_pending: false,
            storage_error: None,
        };
        editor.refresh();
        editor
    }

    // ========================================================================
    // State access
    // ========================================================================

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.document.as_ref().map(|document| &document.grid)
    }

    pub fn has_table(&self) -> bool {
        self.document.is_some()
    }

    /// Selected cells, in the order they were selected
    pub fn selection(&self) -> &IndexSet<CellId> {
        &self.selection
    }

    pub fn current_cell(&self) -> Option<CellId> {
        self.current
    }

    /// Position of the current cell, if it is still in the table
    pub fn current_position(&self) -> Option<CellPos> {
        self.grid()?.position(self.current?)
    }

    /// Formatted export markup; empty without a table
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Live markup for the editing surface, selection marker included
    pub fn editor_markup(&self) -> String {
        match &self.document {
            Some(document) => {
                render_with_selection(document, &self.selection, &self.options.selected_class)
            }
            None => self.options.placeholder.clone(),
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Storage failure from the last persisted change, if any
    pub fn take_storage_error(&mut self) -> Option<EditorError> {
        self.storage_error.take()
    }

    // ========================================================================
    // Paste scheduling
    // ========================================================================

    /// Mark a paste as accepted; the host waits the returned delay and then
    /// calls [`Editor::run_pending_parse`] with the post-paste content
    pub fn accept_paste(&mut self) -> Duration {
        self.paste_pending = true;
        self.options.paste_delay()
    }

    pub fn has_pending_paste(&self) -> bool {
        self.paste_pending
    }

    /// Parse the content of an accepted paste; `None` if nothing is pending
    pub fn run_pending_parse(&mut self, text: &str) -> Option<EditorResult<Outcome>> {
        if !std::mem::take(&mut self.paste_pending) {
            return None;
        }
        Some(self.dispatch(Command::Parse(text.to_string())))
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run a command and report it to `notifier`
    ///
    /// Returns the main notice, if the outcome has one. A storage failure
    /// while persisting is reported as an additional danger notice.
    pub fn run(&mut self, command: Command, notifier: &mut dyn Notifier) -> Option<Notice> {
        let notice = match self.dispatch(command) {
            Ok(outcome) => outcome.notice(),
            Err(err) => Some(error_notice(&err)),
        };
        if let Some(notice) = &notice {
            notifier.notify(notice);
        }
        if let Some(err) = self.take_storage_error() {
            notifier.notify(&Notice::danger(err.to_string()));
        }
        notice
    }

    /// Run a command
    ///
    /// On error nothing has changed. On success the output is refreshed and,
    /// for mutations, the table is persisted.
    pub fn dispatch(&mut self, command: Command) -> EditorResult<Outcome> {
        debug!("dispatch {}", command.name());
        let mutation = command.is_mutation();

        let outcome = match command {
            Command::Parse(text) => self.parse(&text)?,
            Command::Select { row, col, extend } => self.select(row, col, extend)?,
            Command::ClearSelection => {
                self.selection.clear();
                Outcome::SelectionChanged
            }
            Command::SetCellContent { row, col, content } => {
                let cell = self
                    .grid_mut()
                    .and_then(|grid| grid.cell_at_mut(CellPos::new(row, col)))
                    .ok_or(EditorError::CellNotFound { row, col })?;
                cell.content = content;
                Outcome::ContentChanged
            }
            Command::AddRow => match self.document.as_mut() {
                Some(document) => {
                    edit::add_row(&mut document.grid, &self.options);
                    Outcome::Edited("Row added.")
                }
                None => self.initialize(),
            },
            Command::AddColumn => match self.document.as_mut() {
                Some(document) => {
                    edit::add_column(&mut document.grid, &self.options);
                    Outcome::Edited("Column added.")
                }
                None => self.initialize(),
            },
            Command::DeleteRow => {
                let (target, grid) =
                    current_target(&mut self.document, self.current, "in the row you want to delete")?;
                edit::delete_row(grid, target)?;
                self.reset_selection();
                Outcome::Edited("Row deleted.")
            }
            Command::DeleteColumn => {
                let (target, grid) =
                    current_target(&mut self.document, self.current, "in the column you want to delete")?;
                edit::delete_column(grid, target)?;
                self.reset_selection();
                Outcome::Edited("Column deleted.")
            }
            Command::MergeCells => self.merge()?,
            Command::SplitCell => {
                let (target, grid) =
                    current_target(&mut self.document, self.current, "to split")?;
                edit::split_cell(grid, target, &self.options)?;
                Outcome::Edited("Cell split.")
            }
            Command::MoveColumn(direction) => {
                let (target, grid) =
                    current_target(&mut self.document, self.current, "in the column you want to move")?;
                edit::move_column(grid, target, direction)?;
                Outcome::Edited("Column moved.")
            }
            Command::AddClass { names, target } => {
                self.update_classes(&names, target, edit::add_classes)?;
                Outcome::Edited("Class added.")
            }
            Command::RemoveClass { names, target } => {
                self.update_classes(&names, target, edit::remove_classes)?;
                Outcome::Edited("Class removed.")
            }
            Command::Clear => {
                self.document = None;
                self.reset_selection();
                Outcome::Cleared
            }
        };

        if mutation {
            self.refresh();
            self.persist();
        }
        Ok(outcome)
    }

    /// Copy the formatted output, falling back to the legacy path
    pub fn copy_output(&self, clipboard: &mut dyn Clipboard) -> EditorResult<()> {
        if self.output.is_empty() {
            return Err(EditorError::NothingToCopy);
        }

        if let Err(err) = clipboard.write_text(&self.output) {
            warn!("clipboard write failed ({}), trying legacy copy", err);
            clipboard.legacy_copy(&self.output)?;
        }
        Ok(())
    }

    /// Copy the output and report the result to `notifier`
    pub fn copy(&self, clipboard: &mut dyn Clipboard, notifier: &mut dyn Notifier) -> Notice {
        let notice = match self.copy_output(clipboard) {
            Ok(()) => Notice::success(COPY_SUCCESS),
            Err(err) => {
                if !err.is_precondition() {
                    warn!("copy failed: {}", err);
                }
                error_notice(&err)
            }
        };
        notifier.notify(&notice);
        notice
    }

    // ========================================================================
    // Command handlers
    // ========================================================================

    fn parse(&mut self, text: &str) -> EditorResult<Outcome> {
        let (format, document) = parse_detected(text, &self.options)?;
        let outcome = Outcome::Parsed {
            format,
            rows: document.grid.row_count(),
            cols: document.grid.column_count(),
        };
        self.document = Some(document);
        self.reset_selection();
        Ok(outcome)
    }

    fn select(&mut self, row: usize, col: usize, extend: bool) -> EditorResult<Outcome> {
        let id = self
            .grid()
            .and_then(|grid| grid.id_at(row, col))
            .ok_or(EditorError::CellNotFound { row, col })?;

        if !extend {
            self.selection.clear();
        }
        if !self.selection.shift_remove(&id) {
            self.selection.insert(id);
        }
        self.current = Some(id);
        Ok(Outcome::SelectionChanged)
    }

    fn merge(&mut self) -> EditorResult<Outcome> {
        let selected: Vec<CellId> = self.selection.iter().copied().collect();
        let grid = self
            .document
            .as_mut()
            .map(|document| &mut document.grid)
            .ok_or(EditorError::TooFewCellsSelected)?;

        edit::merge_cells(grid, &selected)?;
        let current_removed = self.current.is_some_and(|id| !grid.contains(id));

        self.selection.clear();
        if current_removed {
            self.current = None;
        }
        Ok(Outcome::Edited("Cells merged."))
    }

    fn update_classes(
        &mut self,
        names: &str,
        target: ClassTarget,
        op: fn(&mut Grid, &str, ClassTarget, &[CellId]) -> EditorResult<usize>,
    ) -> EditorResult<usize> {
        if names.trim().is_empty() {
            return Err(EditorError::EmptyClassName);
        }

        let targets: Vec<CellId> = match target {
            ClassTarget::Cell if !self.selection.is_empty() => {
                self.selection.iter().copied().collect()
            }
            ClassTarget::Cell => self.current.into_iter().collect(),
            ClassTarget::Row | ClassTarget::Column => self
                .current
                .or_else(|| self.selection.first().copied())
                .into_iter()
                .collect(),
        };

        let grid = self.grid_mut().ok_or(EditorError::NoClassTarget)?;
        op(grid, names, target, &targets)
    }

    /// No table yet: start from the default one
    fn initialize(&mut self) -> Outcome {
        self.document = Some(Document::new(Grid::placeholder(&self.options)));
        self.reset_selection();
        Outcome::Initialized
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn grid_mut(&mut self) -> Option<&mut Grid> {
        self.document.as_mut().map(|document| &mut document.grid)
    }

    fn reset_selection(&mut self) {
        self.selection.clear();
        self.current = None;
    }

    fn refresh(&mut self) {
        self.output = match &self.document {
            Some(document) => format_html(&render(document), &self.options),
            None => String::new(),
        };
    }

    /// Save the compact, marker-free markup (or the placeholder when there
    /// is no table)
    fn persist(&mut self) {
        let markup = match &self.document {
            Some(document) => render(document),
            None => self.options.placeholder.clone(),
        };

        match self.store.save(&self.options.storage_key, &markup) {
            Ok(()) => debug!("persisted {} bytes", markup.len()),
            Err(err) => {
                warn!("could not persist table: {}", err);
                self.storage_error = Some(err);
            }
        }
    }
}

/// The current cell (if still in the table) and the grid to edit
fn current_target<'a>(
    document: &'a mut Option<Document>,
    current: Option<CellId>,
    action: &'static str,
) -> EditorResult<(CellId, &'a mut Grid)> {
    let grid = document
        .as_mut()
        .map(|document| &mut document.grid)
        .ok_or_else(|| EditorError::no_current_cell(action))?;

    match current {
        Some(id) if grid.contains(id) => Ok((id, grid)),
        Some(id) => {
            warn!("current cell {} is no longer in the table", id);
            Err(EditorError::no_current_cell(action))
        }
        None => Err(EditorError::no_current_cell(action)),
    }
}
