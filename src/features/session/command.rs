//! User intents and their results

use crate::core::edit::{ClassTarget, Direction};
use crate::core::parser::Format;
use crate::utils::error::EditorError;
use crate::utils::notify::Notice;

/// Everything a user can ask the editor to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Parse pasted content, replacing the current table
    Parse(String),
    /// Click on a cell; `extend` keeps the existing selection (Shift+Click)
    Select { row: usize, col: usize, extend: bool },
    ClearSelection,
    /// In-place edit of a cell's markup
    SetCellContent {
        row: usize,
        col: usize,
        content: String,
    },
    AddRow,
    AddColumn,
    DeleteRow,
    DeleteColumn,
    MergeCells,
    SplitCell,
    MoveColumn(Direction),
    AddClass { names: String, target: ClassTarget },
    RemoveClass { names: String, target: ClassTarget },
    /// Drop the table
    Clear,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Parse(_) => "parse",
            Command::Select { .. } => "select",
            Command::ClearSelection => "clear-selection",
            Command::SetCellContent { .. } => "set-cell-content",
            Command::AddRow => "add-row",
            Command::AddColumn => "add-column",
            Command::DeleteRow => "delete-row",
            Command::DeleteColumn => "delete-column",
            Command::MergeCells => "merge-cells",
            Command::SplitCell => "split-cell",
            Command::MoveColumn(Direction::Left) => "move-column-left",
            Command::MoveColumn(Direction::Right) => "move-column-right",
            Command::AddClass { .. } => "add-class",
            Command::RemoveClass { .. } => "remove-class",
            Command::Clear => "clear",
        }
    }

    /// Whether a successful run changes the table (and so the output and
    /// the persisted markup)
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Command::Select { .. } | Command::ClearSelection)
    }
}

/// What a successful command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new table was built from pasted content
    Parsed {
        format: Format,
        rows: usize,
        cols: usize,
    },
    /// There was no table, so the default one was created instead
    Initialized,
    /// The table was edited
    Edited(&'static str),
    /// A cell's content was replaced in place
    ContentChanged,
    /// Only the selection or current cell moved
    SelectionChanged,
    /// The table was dropped
    Cleared,
}

impl Outcome {
    /// Notice to show for this outcome; quiet outcomes have none
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Outcome::Parsed { format, rows, cols } => Some(Notice::success(format!(
                "Table created from {} ({} rows, {} columns).",
                format.name().to_uppercase(),
                rows,
                cols
            ))),
            Outcome::Initialized => Some(Notice::success("Created a default table.")),
            Outcome::Edited(message) => Some(Notice::success(*message)),
            Outcome::Cleared => Some(Notice::success("Table cleared.")),
            Outcome::ContentChanged | Outcome::SelectionChanged => None,
        }
    }
}

/// Notice for a failed command: unmet preconditions warn, the rest is danger
pub fn error_notice(err: &EditorError) -> Notice {
    if err.is_precondition() {
        Notice::warning(err.to_string())
    } else {
        Notice::danger(err.to_string())
    }
}
