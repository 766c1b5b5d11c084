//! Error handling for Tabled
//!
//! Every failure in the editor core is recoverable: an operation either
//! succeeds or returns one of these errors without touching the grid. The
//! session turns errors into user-facing notices.

use std::fmt;

/// Broad classification of an [`EditorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Pasted content matches none of the detectable shapes
    UnrecognizedFormat,
    /// An operation's target is missing or insufficient
    PreconditionNotMet,
    /// Input could not be read at all
    InvalidInput,
    /// Persistence collaborator failed
    Storage,
    /// Clipboard collaborator failed
    Clipboard,
}

/// Editor error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// Paste content is not an HTML table, TSV or CSV
    UnrecognizedFormat,
    /// Nothing was pasted
    EmptyInput,
    /// Operation needs a current cell
    NoCurrentCell { action: &'static str },
    /// The grid's only row cannot be deleted
    LastRow,
    /// The grid's only column cannot be deleted
    LastColumn,
    /// Merge needs at least two selected cells
    TooFewCellsSelected,
    /// Split target has no span to undo
    NotMerged,
    /// Column is already at the edge
    CannotMoveFurther,
    /// Class operation without a class name
    EmptyClassName,
    /// Class operation without a cell to act on
    NoClassTarget,
    /// A position or id does not name a cell of the grid
    CellNotFound { row: usize, col: usize },
    /// Export requested without a table
    NothingToCopy,
    /// Malformed input the readers could not process
    InvalidInput { message: String },
    /// Persistence failure
    StorageError { message: String },
    /// Clipboard failure
    ClipboardError { message: String },
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::UnrecognizedFormat => write!(
                f,
                "Could not detect format. Please paste HTML, TSV, or CSV content."
            ),
            EditorError::EmptyInput => write!(f, "Paste some table content first."),
            EditorError::NoCurrentCell { action } => {
                write!(f, "Please select a cell {}.", action)
            }
            EditorError::LastRow => write!(f, "Cannot delete the last row."),
            EditorError::LastColumn => write!(f, "Cannot delete the last column."),
            EditorError::TooFewCellsSelected => write!(
                f,
                "Please select at least 2 cells to merge (Shift+Click to select multiple)."
            ),
            EditorError::NotMerged => write!(f, "This cell is not merged."),
            EditorError::CannotMoveFurther => {
                write!(f, "Cannot move column further in that direction.")
            }
            EditorError::EmptyClassName => write!(f, "Please enter a class name."),
            EditorError::NoClassTarget => write!(f, "Please select a cell first."),
            EditorError::CellNotFound { row, col } => {
                write!(f, "No cell at row {}, column {}.", row, col)
            }
            EditorError::NothingToCopy => {
                write!(f, "No table to copy. Create a table first.")
            }
            EditorError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            EditorError::StorageError { message } => {
                write!(f, "Could not save table: {}", message)
            }
            EditorError::ClipboardError { message } => {
                write!(f, "Could not copy to clipboard: {}", message)
            }
        }
    }
}

impl std::error::Error for EditorError {}

impl From<csv::Error> for EditorError {
    fn from(err: csv::Error) -> Self {
        EditorError::InvalidInput {
            message: err.to_string(),
        }
    }
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

impl EditorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditorError::UnrecognizedFormat => ErrorKind::UnrecognizedFormat,
            EditorError::InvalidInput { .. } => ErrorKind::InvalidInput,
            EditorError::StorageError { .. } => ErrorKind::Storage,
            EditorError::ClipboardError { .. } => ErrorKind::Clipboard,
            EditorError::EmptyInput
            | EditorError::NoCurrentCell { .. }
            | EditorError::LastRow
            | EditorError::LastColumn
            | EditorError::TooFewCellsSelected
            | EditorError::NotMerged
            | EditorError::CannotMoveFurther
            | EditorError::EmptyClassName
            | EditorError::NoClassTarget
            | EditorError::CellNotFound { .. }
            | EditorError::NothingToCopy => ErrorKind::PreconditionNotMet,
        }
    }

    /// Whether retrying after satisfying a precondition can succeed
    pub fn is_precondition(&self) -> bool {
        self.kind() == ErrorKind::PreconditionNotMet
    }

    pub fn no_current_cell(action: &'static str) -> Self {
        EditorError::NoCurrentCell { action }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        EditorError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        EditorError::StorageError {
            message: message.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        EditorError::ClipboardError {
            message: message.into(),
        }
    }
}
