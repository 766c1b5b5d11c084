use super::*;
use crate::core::edit::Direction;
use crate::core::parser::Format;
use crate::utils::clipboard::MemoryClipboard;
use crate::utils::notify::{NoticeLog, Severity};
use crate::utils::storage::MemoryStore;
use pretty_assertions::assert_eq;

fn editor() -> Editor {
    Editor::new(EditorOptions::default())
}

fn editor_with(text: &str) -> Editor {
    let mut editor = editor();
    editor.dispatch(Command::Parse(text.to_string())).unwrap();
    editor
}

fn select(editor: &mut Editor, row: usize, col: usize, extend: bool) {
    editor
        .dispatch(Command::Select { row, col, extend })
        .unwrap();
}

fn texts(editor: &Editor) -> Vec<Vec<String>> {
    editor.grid().map(Grid::texts).unwrap_or_default()
}

/// Store whose saves always fail
struct FailingStore;

impl Store for FailingStore {
    fn save(&mut self, _key: &str, _markup: &str) -> EditorResult<()> {
        Err(EditorError::storage("quota exceeded"))
    }

    fn load(&self, _key: &str) -> EditorResult<Option<String>> {
        Ok(None)
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_replaces_table_and_resets_selection() {
    let mut editor = editor_with("a,b\n1,2");
    select(&mut editor, 1, 0, false);
    assert!(editor.current_cell().is_some());

    let outcome = editor.dispatch(Command::Parse("x\ty\tz".to_string())).unwrap();
    assert_eq!(
        outcome,
        Outcome::Parsed {
            format: Format::Tsv,
            rows: 1,
            cols: 3
        }
    );
    assert!(editor.selection().is_empty());
    assert_eq!(editor.current_cell(), None);
    assert_eq!(texts(&editor), vec![vec!["x", "y", "z"]]);
}

#[test]
fn test_failed_parse_keeps_table() {
    let mut editor = editor_with("a,b\n1,2");
    let before = editor.output().to_string();

    let err = editor
        .dispatch(Command::Parse("no delimiters here".to_string()))
        .unwrap_err();
    assert_eq!(err, EditorError::UnrecognizedFormat);
    assert_eq!(editor.output(), before);
}

#[test]
fn test_output_is_formatted_and_marker_free() {
    let mut editor = editor_with("a,b\n1,2");
    select(&mut editor, 1, 1, false);

    assert!(editor.editor_markup().contains("class=\"selected\""));
    assert!(!editor.output().contains("selected"));
    assert!(editor.output().starts_with("<table>\n  <thead>"));
}

#[test]
fn test_no_table_shows_placeholder() {
    let editor = editor();
    assert_eq!(editor.output(), "");
    assert_eq!(editor.editor_markup(), editor.options().placeholder);
    assert!(!editor.has_table());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_replaces_and_extend_toggles() {
    let mut editor = editor_with("a,b\n1,2\n3,4");
    let grid = editor.grid().unwrap();
    let a = grid.id_at(1, 0).unwrap();
    let b = grid.id_at(2, 1).unwrap();

    select(&mut editor, 1, 0, false);
    select(&mut editor, 2, 1, true);
    assert_eq!(editor.selection().iter().copied().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(editor.current_cell(), Some(b));

    // Shift+Click on a selected cell deselects it but still makes it current
    select(&mut editor, 1, 0, true);
    assert_eq!(editor.selection().iter().copied().collect::<Vec<_>>(), vec![b]);
    assert_eq!(editor.current_cell(), Some(a));

    select(&mut editor, 1, 1, false);
    assert_eq!(editor.selection().len(), 1);

    editor.dispatch(Command::ClearSelection).unwrap();
    assert!(editor.selection().is_empty());
}

#[test]
fn test_select_missing_cell() {
    let mut editor = editor_with("a,b");
    assert_eq!(
        editor.dispatch(Command::Select {
            row: 5,
            col: 0,
            extend: false
        }),
        Err(EditorError::CellNotFound { row: 5, col: 0 })
    );
}

// ============================================================================
// Edits through the session
// ============================================================================

#[test]
fn test_add_row_without_table_initializes_default() {
    let mut editor = editor();
    assert_eq!(editor.dispatch(Command::AddRow), Ok(Outcome::Initialized));

    let grid = editor.grid().unwrap();
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 3);

    // Only the second call adds a row
    editor.dispatch(Command::AddRow).unwrap();
    assert_eq!(editor.grid().unwrap().row_count(), 4);
}

#[test]
fn test_delete_row_needs_current_cell() {
    let mut editor = editor_with("a,b\n1,2");
    let err = editor.dispatch(Command::DeleteRow).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please select a cell in the row you want to delete."
    );
    assert_eq!(editor.grid().unwrap().row_count(), 2);
}

#[test]
fn test_delete_row_clears_selection() {
    let mut editor = editor_with("a,b\n1,2\n3,4");
    select(&mut editor, 1, 0, false);
    select(&mut editor, 2, 0, true);

    editor.dispatch(Command::DeleteRow).unwrap();
    assert_eq!(texts(&editor), vec![vec!["a", "b"], vec!["1", "2"]]);
    assert!(editor.selection().is_empty());
    assert_eq!(editor.current_cell(), None);
}

#[test]
fn test_delete_column_and_last_column() {
    let mut editor = editor_with("a,b\n1,2");
    select(&mut editor, 0, 1, false);
    editor.dispatch(Command::DeleteColumn).unwrap();
    assert_eq!(texts(&editor), vec![vec!["a"], vec!["1"]]);

    select(&mut editor, 0, 0, false);
    assert_eq!(
        editor.dispatch(Command::DeleteColumn),
        Err(EditorError::LastColumn)
    );
}

#[test]
fn test_merge_three_by_three_scenario() {
    let mut editor = editor();
    editor.dispatch(Command::AddRow).unwrap();
    select(&mut editor, 1, 0, false);
    select(&mut editor, 1, 1, true);
    select(&mut editor, 2, 0, true);
    select(&mut editor, 2, 1, true);

    editor.dispatch(Command::MergeCells).unwrap();
    let grid = editor.grid().unwrap();
    let merged = grid.cell_at(CellPos::new(1, 0)).unwrap();
    assert_eq!((merged.colspan(), merged.rowspan()), (2, 2));
    assert_eq!(merged.text(), "Cell Cell Cell Cell");
    assert!(grid.is_rectangular());
    assert!(editor.selection().is_empty());
    // The current cell (2, 1) was merged away
    assert_eq!(editor.current_cell(), None);

    assert!(editor
        .output()
        .contains("<td colspan=\"2\" rowspan=\"2\">\n        Cell Cell Cell Cell\n      </td>"));
}

#[test]
fn test_merge_keeps_unselected_current_cell() {
    let mut editor = editor_with("a,b\n1,2");
    select(&mut editor, 1, 0, false);
    select(&mut editor, 1, 1, true);
    // Clicking a cell twice leaves it current but unselected
    select(&mut editor, 0, 0, true);
    select(&mut editor, 0, 0, true);

    let header = editor.grid().unwrap().id_at(0, 0).unwrap();
    assert_eq!(editor.selection().len(), 2);
    editor.dispatch(Command::MergeCells).unwrap();
    assert_eq!(editor.current_cell(), Some(header));
}

#[test]
fn test_merge_header_with_body_keeps_spans_in_section() {
    let mut editor = editor();
    editor.dispatch(Command::AddRow).unwrap();
    select(&mut editor, 0, 0, false);
    select(&mut editor, 1, 0, true);
    editor.dispatch(Command::MergeCells).unwrap();

    assert!(!editor.output().contains("rowspan"));
    assert_eq!(texts(&editor)[0][0], "Header 1 Cell");
    assert_eq!(texts(&editor)[1], vec!["Cell", "Cell"]);

    // A span built inside the body splits back within the body
    select(&mut editor, 1, 0, false);
    select(&mut editor, 2, 0, true);
    editor.dispatch(Command::MergeCells).unwrap();
    assert!(editor.output().contains("<td rowspan=\"2\">"));
    select(&mut editor, 1, 0, false);
    editor.dispatch(Command::SplitCell).unwrap();
    assert_eq!(texts(&editor)[0].len(), 3);
    assert_eq!(texts(&editor)[2].len(), 3);
}

#[test]
fn test_merge_needs_selection() {
    let mut editor = editor_with("a,b\n1,2");
    select(&mut editor, 1, 0, false);
    assert_eq!(
        editor.dispatch(Command::MergeCells),
        Err(EditorError::TooFewCellsSelected)
    );
}

#[test]
fn test_split_then_move() {
    let mut editor = editor_with("a,b,c\n1,2,3");
    select(&mut editor, 1, 0, false);
    select(&mut editor, 1, 1, true);
    editor.dispatch(Command::MergeCells).unwrap();

    select(&mut editor, 1, 0, false);
    editor.dispatch(Command::SplitCell).unwrap();
    assert_eq!(texts(&editor)[1], vec!["1 2", "Cell", "3"]);

    editor
        .dispatch(Command::MoveColumn(Direction::Right))
        .unwrap();
    assert_eq!(texts(&editor)[0], vec!["b", "a", "c"]);
    assert_eq!(texts(&editor)[1], vec!["Cell", "1 2", "3"]);
}

#[test]
fn test_class_targets() {
    let mut editor = editor_with("a,b\n1,2\n3,4");

    // Cell target uses the selection
    select(&mut editor, 1, 0, false);
    select(&mut editor, 2, 1, true);
    editor
        .dispatch(Command::AddClass {
            names: "hl".to_string(),
            target: ClassTarget::Cell,
        })
        .unwrap();
    let grid = editor.grid().unwrap();
    assert!(grid.cell_at(CellPos::new(1, 0)).unwrap().has_class("hl"));
    assert!(grid.cell_at(CellPos::new(2, 1)).unwrap().has_class("hl"));
    assert!(!grid.cell_at(CellPos::new(1, 1)).unwrap().has_class("hl"));

    // Column target anchors on the current cell
    editor
        .dispatch(Command::AddClass {
            names: "num".to_string(),
            target: ClassTarget::Column,
        })
        .unwrap();
    let grid = editor.grid().unwrap();
    assert!(grid.rows().iter().all(|row| row.cells[1].has_class("num")));

    editor
        .dispatch(Command::RemoveClass {
            names: "hl num".to_string(),
            target: ClassTarget::Cell,
        })
        .unwrap();
    let cell = editor.grid().unwrap().cell_at(CellPos::new(2, 1)).unwrap();
    assert!(cell.classes.is_empty());
    assert!(editor.output().contains("<td class=\"num\">"));
}

#[test]
fn test_class_errors() {
    let mut editor = editor_with("a,b");
    assert_eq!(
        editor.dispatch(Command::AddClass {
            names: " ".to_string(),
            target: ClassTarget::Cell
        }),
        Err(EditorError::EmptyClassName)
    );
    assert_eq!(
        editor.dispatch(Command::AddClass {
            names: "x".to_string(),
            target: ClassTarget::Row
        }),
        Err(EditorError::NoClassTarget)
    );
}

#[test]
fn test_set_cell_content() {
    let mut editor = editor_with("a,b\n1,2");
    let outcome = editor
        .dispatch(Command::SetCellContent {
            row: 1,
            col: 1,
            content: "<em>two</em>".to_string(),
        })
        .unwrap();

    assert_eq!(outcome, Outcome::ContentChanged);
    assert!(editor.output().contains("<em>"));
    assert_eq!(texts(&editor)[1], vec!["1", "two"]);
}

#[test]
fn test_clear() {
    let store = MemoryStore::new();
    let mut editor = Editor::with_store(EditorOptions::default(), Box::new(store));
    editor.dispatch(Command::Parse("a,b".to_string())).unwrap();

    assert_eq!(editor.dispatch(Command::Clear), Ok(Outcome::Cleared));
    assert!(!editor.has_table());
    assert_eq!(editor.output(), "");

    let saved = editor.store().load("tableEditorContent").unwrap();
    assert_eq!(saved, Some(editor.options().placeholder.clone()));
}

// ============================================================================
// Notices, persistence, paste, clipboard
// ============================================================================

#[test]
fn test_run_maps_severities() {
    let mut editor = editor();
    let mut log = NoticeLog::new();

    let notice = editor.run(Command::DeleteRow, &mut log).unwrap();
    assert_eq!(notice.severity, Severity::Warning);

    let notice = editor
        .run(Command::Parse("plain".to_string()), &mut log)
        .unwrap();
    assert_eq!(notice.severity, Severity::Danger);

    let notice = editor
        .run(Command::Parse("a,b".to_string()), &mut log)
        .unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.message, "Table created from CSV (1 rows, 2 columns).");

    // Selection changes are quiet
    assert_eq!(
        editor.run(
            Command::Select {
                row: 0,
                col: 0,
                extend: false
            },
            &mut log
        ),
        None
    );
    assert_eq!(log.notices.len(), 3);
}

#[test]
fn test_persists_after_each_edit() {
    let mut editor = Editor::with_store(EditorOptions::default(), Box::new(MemoryStore::new()));
    editor.dispatch(Command::Parse("a,b\n1,2".to_string())).unwrap();
    select(&mut editor, 1, 0, false);

    let saved = editor.store().load("tableEditorContent").unwrap().unwrap();
    assert!(saved.starts_with("<table><thead>"));
    assert!(!saved.contains("selected"));

    editor.dispatch(Command::AddColumn).unwrap();
    let saved = editor.store().load("tableEditorContent").unwrap().unwrap();
    assert_eq!(saved.matches("<th>").count(), 3);
}

#[test]
fn test_restores_saved_table() {
    let markup = "<table><tbody><tr><td>kept</td></tr></tbody></table>";
    let store = MemoryStore::with_entry("tableEditorContent", markup);
    let editor = Editor::with_store(EditorOptions::default(), Box::new(store));

    assert!(editor.has_table());
    assert_eq!(texts(&editor), vec![vec!["kept"]]);
    assert!(editor.output().contains("kept"));
}

#[test]
fn test_saved_placeholder_is_not_content() {
    let options = EditorOptions::default();
    let store = MemoryStore::with_entry(&options.storage_key, &options.placeholder);
    let editor = Editor::with_store(options, Box::new(store));
    assert!(!editor.has_table());
}

#[test]
fn test_storage_failure_does_not_abort_edit() {
    let mut editor = Editor::with_store(EditorOptions::default(), Box::new(FailingStore));
    let mut log = NoticeLog::new();

    editor.run(Command::AddRow, &mut log);
    assert!(editor.has_table());

    let severities: Vec<Severity> = log.notices.iter().map(|n| n.severity).collect();
    assert_eq!(severities, vec![Severity::Success, Severity::Danger]);
    assert!(log.last().unwrap().message.contains("quota exceeded"));
}

#[test]
fn test_paste_is_parsed_after_delay() {
    let mut editor = editor();
    assert!(editor.run_pending_parse("a,b").is_none());

    let delay = editor.accept_paste();
    assert_eq!(delay, Duration::from_millis(10));
    assert!(editor.has_pending_paste());

    let result = editor.run_pending_parse("a,b\n1,2").unwrap();
    assert!(result.is_ok());
    assert!(!editor.has_pending_paste());
    assert_eq!(editor.grid().unwrap().row_count(), 2);

    assert!(editor.run_pending_parse("x,y").is_none());
}

#[test]
fn test_copy_output() {
    let mut editor = editor();
    let mut clipboard = MemoryClipboard::new();
    let mut log = NoticeLog::new();

    let notice = editor.copy(&mut clipboard, &mut log);
    assert_eq!(notice.message, "No table to copy. Create a table first.");
    assert_eq!(notice.severity, Severity::Warning);

    editor.dispatch(Command::AddRow).unwrap();
    let notice = editor.copy(&mut clipboard, &mut log);
    assert_eq!(notice.message, COPY_SUCCESS);
    assert_eq!(clipboard.contents(), Some(editor.output()));
    assert_eq!(clipboard.legacy_uses, 0);
}

#[test]
fn test_copy_falls_back_to_legacy() {
    let mut editor = editor();
    editor.dispatch(Command::AddRow).unwrap();

    let mut clipboard = MemoryClipboard::new();
    clipboard.fail_primary = true;
    assert_eq!(editor.copy_output(&mut clipboard), Ok(()));
    assert_eq!(clipboard.legacy_uses, 1);

    clipboard.fail_legacy = true;
    let mut log = NoticeLog::new();
    let notice = editor.copy(&mut clipboard, &mut log);
    assert_eq!(notice.severity, Severity::Danger);
}

#[test]
fn test_command_names() {
    assert_eq!(Command::MoveColumn(Direction::Left).name(), "move-column-left");
    assert!(Command::Clear.is_mutation());
    assert!(!Command::ClearSelection.is_mutation());
}
