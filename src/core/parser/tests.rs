use super::*;
use crate::core::grid::{CellKind, Section};
use crate::utils::error::EditorError;

fn opts() -> EditorOptions {
    EditorOptions::default()
}

fn rows_of(document: &Document) -> Vec<Vec<String>> {
    document.grid.texts()
}

// ============================================================================
// Detection
// ============================================================================

#[test]
fn test_detect_html_first() {
    assert_eq!(detect_format("<TABLE>\t,</TABLE>"), Some(Format::Html));
    assert_eq!(detect_format("x\n<table class=\"a\">"), Some(Format::Html));
    assert_eq!(detect_format("<table/>"), Some(Format::Html));
}

#[test]
fn test_detect_tab_before_comma() {
    assert_eq!(detect_format("a,b\tc"), Some(Format::Tsv));
    assert_eq!(detect_format("a,b\nc,d"), Some(Format::Csv));
}

#[test]
fn test_detect_rejects_lookalike_tags() {
    // `<tablex>` is not a table start tag
    assert_eq!(detect_format("<tablex>"), None);
    assert!(!has_table_tag("<tablecloth>"));
    assert_eq!(detect_format("plain words"), None);
}

#[test]
fn test_format_names() {
    assert_eq!(Format::Html.to_string(), "html");
    assert_eq!(Format::Tsv.name(), "tsv");
    assert_eq!(Format::Csv.name(), "csv");
}

// ============================================================================
// Delimited input
// ============================================================================

#[test]
fn test_csv_scenario() {
    let document = parse("a,b\n1,2\n3,4", &opts()).unwrap();
    let grid = &document.grid;

    assert!(document.wrapper.is_none());
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.rows()[0].section, Section::Header);
    assert!(grid.rows()[0].cells.iter().all(|c| c.kind == CellKind::Header));
    assert_eq!(grid.rows()[1].section, Section::Body);
    assert!(grid.rows()[2].cells.iter().all(|c| c.kind == CellKind::Data));
    assert_eq!(
        rows_of(&document),
        vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["1".to_string(), "2".to_string()],
            vec!["3".to_string(), "4".to_string()],
        ]
    );
}

#[test]
fn test_csv_trims_fields_and_keeps_quotes() {
    let document = parse(" name , \"Smith, J\" \n1,2", &opts()).unwrap();
    assert_eq!(
        rows_of(&document)[0],
        vec!["name".to_string(), "\"Smith".to_string(), "J\"".to_string()]
    );
}

#[test]
fn test_tsv_trailing_empty_field() {
    let document = parse("a\tb\n1\t\n2\t", &opts()).unwrap();
    let rows = rows_of(&document);

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1], vec!["1".to_string(), String::new()]);
    assert_eq!(rows[2], vec!["2".to_string(), String::new()]);
    assert!(document.grid.is_rectangular());
}

#[test]
fn test_tsv_keeps_spaces() {
    let document = parse(" a \tb\r\n1\t2\r\n", &opts()).unwrap();
    assert_eq!(document.grid.rows()[0].cells[0].content, " a ");
    assert_eq!(document.grid.row_count(), 2);
}

#[test]
fn test_delimited_skips_blank_lines() {
    let document = parse("\n\na,b\n\n1,2\n\n", &opts()).unwrap();
    assert_eq!(document.grid.row_count(), 2);
}

#[test]
fn test_delimited_escapes_markup() {
    let document = parse("<b>,a&b\n1,2", &opts()).unwrap();
    let header = &document.grid.rows()[0];

    assert_eq!(header.cells[0].content, "&lt;b&gt;");
    assert_eq!(header.cells[1].content, "a&amp;b");
    assert_eq!(header.cells[1].text(), "a&b");
}

#[test]
fn test_ragged_rows_pass_through() {
    let document = parse("a,b,c\n1,2\n3,4,5,6", &opts()).unwrap();
    let grid = &document.grid;

    assert_eq!(grid.rows()[0].len(), 3);
    assert_eq!(grid.rows()[1].len(), 2);
    assert_eq!(grid.rows()[2].len(), 4);
    assert!(!grid.is_rectangular());
}

#[test]
fn test_read_records_direct() {
    let records = read_records("x\ty\n1\t2", Delimiter::Tab).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], vec!["1".to_string(), "2".to_string()]);
}

// ============================================================================
// HTML input
// ============================================================================

#[test]
fn test_html_basic_table() {
    let html = "<table><thead><tr><th>Name</th><th>Age</th></tr></thead>\
                <tbody><tr><td>Ann</td><td>30</td></tr></tbody></table>";
    let document = parse(html, &opts()).unwrap();
    let grid = &document.grid;

    assert!(document.wrapper.is_none());
    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.rows()[0].section, Section::Header);
    assert_eq!(grid.rows()[0].cells[0].kind, CellKind::Header);
    assert_eq!(grid.rows()[1].section, Section::Body);
    assert_eq!(rows_of(&document)[1], vec!["Ann".to_string(), "30".to_string()]);
}

#[test]
fn test_html_figure_wrapper_kept() {
    let html = "<figure class=\"wp-block-table\"><table><tbody><tr><td>1</td></tr></tbody></table>\
                <figcaption>Totals</figcaption></figure>";
    let document = parse(html, &opts()).unwrap();
    let wrapper = document.wrapper.expect("figure wrapper");

    assert_eq!(wrapper.tag, "figure");
    assert_eq!(
        wrapper.attrs,
        vec![("class".to_string(), "wp-block-table".to_string())]
    );
    assert_eq!(wrapper.before, "");
    assert_eq!(wrapper.after, "<figcaption>Totals</figcaption>");
}

#[test]
fn test_html_wrapper_before_content() {
    let html = "<figure><p>Intro</p><table><tr><td>1</td></tr></table></figure>";
    let document = parse(html, &opts()).unwrap();
    let wrapper = document.wrapper.expect("figure wrapper");

    assert_eq!(wrapper.before, "<p>Intro</p>");
    assert_eq!(wrapper.after, "");
}

#[test]
fn test_html_non_qualifying_parent_dropped() {
    let html = "<div class=\"x\"><table><tr><td>1</td></tr></table></div>";
    let document = parse(html, &opts()).unwrap();
    assert!(document.wrapper.is_none());
    assert_eq!(document.grid.cell_count(), 1);

    // A figure that is not at the top level does not qualify either
    let nested = "<div><figure><table><tr><td>1</td></tr></table></figure></div>";
    assert!(parse(nested, &opts()).unwrap().wrapper.is_none());
}

#[test]
fn test_html_custom_wrapper_tags() {
    let mut options = opts();
    options.wrapper_tags = vec!["div".to_string()];
    let html = "<div><table><tr><td>1</td></tr></table></div>";

    let document = parse(html, &options).unwrap();
    assert_eq!(document.wrapper.map(|w| w.tag), Some("div".to_string()));
}

#[test]
fn test_html_spans_classes_and_attrs() {
    let html = "<table><tr><th colspan=\"2\" class=\"a b\">H</th></tr>\
                <tr><td rowspan=\"0\" data-x=\"1\">x</td><td colspan=\"abc\">y</td></tr></table>";
    let document = parse(html, &opts()).unwrap();
    let grid = &document.grid;

    let header = &grid.rows()[0].cells[0];
    assert_eq!(header.colspan(), 2);
    assert!(header.has_class("a"));
    assert!(header.has_class("b"));
    assert!(header.attrs.is_empty());

    let body = &grid.rows()[1];
    assert_eq!(body.cells[0].rowspan(), 1);
    assert_eq!(body.cells[0].attr("data-x"), Some("1"));
    assert_eq!(body.cells[1].colspan(), 1);
}

#[test]
fn test_html_spans_clamped_to_browser_limits() {
    let html = "<table><tr><td colspan=\"2000000\" rowspan=\"99999999999999999999999\">x</td>\
                <td colspan=\"1000\" rowspan=\"65534\">y</td></tr></table>";
    let document = parse(html, &opts()).unwrap();
    let cells = &document.grid.rows()[0].cells;

    assert_eq!(cells[0].colspan(), 1000);
    assert_eq!(cells[0].rowspan(), 65534);
    assert_eq!(cells[1].colspan(), 1000);
    assert_eq!(cells[1].rowspan(), 65534);
}

#[test]
fn test_html_caption_and_footer() {
    let html = "<table class=\"data\"><caption> Sales </caption>\
                <thead><tr><th>A</th></tr></thead>\
                <tbody><tr><td>1</td></tr></tbody>\
                <tfoot><tr><td>Sum</td></tr></tfoot></table>";
    let document = parse(html, &opts()).unwrap();
    let grid = &document.grid;

    assert_eq!(grid.caption.as_deref(), Some("Sales"));
    assert_eq!(grid.attrs, vec![("class".to_string(), "data".to_string())]);
    let sections: Vec<Section> = grid.rows().iter().map(|row| row.section).collect();
    assert_eq!(sections, vec![Section::Header, Section::Body, Section::Footer]);
}

#[test]
fn test_html_nested_table_stays_in_cell() {
    let html = "<table><tr><td><table><tr><td>inner</td></tr></table></td></tr></table>";
    let document = parse(html, &opts()).unwrap();

    assert_eq!(document.grid.cell_count(), 1);
    assert!(document.grid.rows()[0].cells[0].content.contains("<table>"));
}

#[test]
fn test_html_content_is_trimmed_inner_markup() {
    let html = "<table><tr><td>\n  <b>bold</b> &amp; more \n</td></tr></table>";
    let document = parse(html, &opts()).unwrap();
    let cell = &document.grid.rows()[0].cells[0];

    assert_eq!(cell.content, "<b>bold</b> &amp; more");
    assert_eq!(cell.text(), "bold & more");
}

#[test]
fn test_html_without_table_element_uses_placeholder() {
    // The tag only appears inside a comment, so no table element is parsed
    let document = parse("<!-- <table> -->", &opts()).unwrap();
    let grid = &document.grid;

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.rows()[0].cells[2].text(), "Header 3");
    assert_eq!(grid.rows()[2].cells[0].text(), "Cell");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(parse("", &opts()), Err(EditorError::EmptyInput));
    assert_eq!(parse("  \n\t\n ", &opts()), Err(EditorError::EmptyInput));
}

#[test]
fn test_unrecognized_format() {
    let err = parse("just some words", &opts()).unwrap_err();
    assert_eq!(err, EditorError::UnrecognizedFormat);
    assert_eq!(
        err.to_string(),
        "Could not detect format. Please paste HTML, TSV, or CSV content."
    );
}

// ============================================================================
// Persisted markup
// ============================================================================

#[test]
fn test_load_document_ignores_placeholder() {
    let options = opts();
    assert!(load_document(&options.placeholder, &options).is_none());
    assert!(load_document("", &options).is_none());
    assert!(load_document("<p>no table</p>", &options).is_none());
}

#[test]
fn test_load_document_restores_table() {
    let markup = "<figure><table><tbody><tr><td>1</td><td>2</td></tr></tbody></table></figure>";
    let document = load_document(markup, &opts()).expect("saved table");

    assert!(document.wrapper.is_some());
    assert_eq!(rows_of(&document), vec![vec!["1".to_string(), "2".to_string()]]);
}

#[test]
fn test_parse_detected_reports_format() {
    let (format, document) = parse_detected("a\tb\n1\t2", &opts()).unwrap();
    assert_eq!(format, Format::Tsv);
    assert_eq!(document.grid.row_count(), 2);

    let (format, _) = parse_detected("<table><tr><td>1</td></tr></table>", &opts()).unwrap();
    assert_eq!(format, Format::Html);
}
