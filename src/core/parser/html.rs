//! HTML table extraction
//!
//! Parses markup as an HTML fragment and turns the first `table` element
//! into a [`Grid`]. Only direct children of the table are read, so tables
//! nested inside cells stay part of the cell content.

use lazy_static::lazy_static;
use log::debug;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::core::grid::{CellKind, Document, Grid, Row, Section, Wrapper};
use crate::core::options::EditorOptions;
use crate::data::{CELL_TAGS, SECTION_TAGS};
use crate::utils::escape::escape_text;

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
}

/// Parse pasted HTML, falling back to the placeholder table when the markup
/// holds no table element
pub fn parse_html(input: &str, options: &EditorOptions) -> Document {
    match parse_html_table(input, options) {
        Some(document) => document,
        None => {
            debug!("no table element in pasted markup, using placeholder table");
            Document::new(Grid::placeholder(options))
        }
    }
}

/// Extract the first table (and its qualifying wrapper) from markup
pub fn parse_html_table(input: &str, options: &EditorOptions) -> Option<Document> {
    let fragment = Html::parse_fragment(input);
    let table = fragment.select(&TABLE_SELECTOR).next()?;
    let grid = extract_grid(table);

    Some(match extract_wrapper(&fragment, table, options) {
        Some(wrapper) => Document::with_wrapper(grid, wrapper),
        None => Document::new(grid),
    })
}

/// The table's parent, if it is a wrapper tag sitting directly under the
/// fragment root
fn extract_wrapper(fragment: &Html, table: ElementRef, options: &EditorOptions) -> Option<Wrapper> {
    let parent = table.parent().and_then(ElementRef::wrap)?;
    if !options.is_wrapper_tag(parent.value().name()) {
        return None;
    }

    let grandparent = parent.parent()?;
    if grandparent.id() != fragment.root_element().id() {
        return None;
    }

    let mut wrapper = Wrapper::new(parent.value().name());
    wrapper.attrs = collect_attrs(parent, &[]);

    let mut after_table = false;
    for child in parent.children() {
        if child.id() == table.id() {
            after_table = true;
            continue;
        }
        let markup = match child.value() {
            Node::Text(text) => escape_text(&text.text),
            Node::Comment(comment) => format!("<!--{}-->", &*comment.comment),
            Node::Element(_) => ElementRef::wrap(child)
                .map(|element| element.html())
                .unwrap_or_default(),
            _ => String::new(),
        };
        if after_table {
            wrapper.after.push_str(&markup);
        } else {
            wrapper.before.push_str(&markup);
        }
    }

    Some(wrapper)
}

fn extract_grid(table: ElementRef) -> Grid {
    let mut grid = Grid::new();
    grid.attrs = collect_attrs(table, &[]);

    for child in table.children().filter_map(ElementRef::wrap) {
        let name = child.value().name();
        if name == "caption" {
            grid.caption = Some(child.inner_html().trim().to_string());
        } else if SECTION_TAGS.contains(name) {
            let section = Section::from_tag(name).unwrap_or_default();
            for tr in child.children().filter_map(ElementRef::wrap) {
                if tr.value().name() == "tr" {
                    push_row(&mut grid, tr, section);
                }
            }
        } else if name == "tr" {
            push_row(&mut grid, child, Section::Body);
        }
    }

    grid
}

fn push_row(grid: &mut Grid, tr: ElementRef, section: Section) {
    let mut row = Row::new(section);
    row.classes = tr.value().classes().map(str::to_string).collect();
    row.attrs = collect_attrs(tr, &["class"]);

    for element in tr.children().filter_map(ElementRef::wrap) {
        let name = element.value().name();
        if !CELL_TAGS.contains(name) {
            continue;
        }
        let kind = CellKind::from_tag(name).unwrap_or_default();

        let mut cell = grid.new_cell(kind, element.inner_html().trim());
        cell.set_colspan(span_attr(element, "colspan"));
        cell.set_rowspan(span_attr(element, "rowspan"));
        cell.classes = element.value().classes().map(str::to_string).collect();
        cell.attrs = collect_attrs(element, &["class", "colspan", "rowspan"]);
        row.push(cell);
    }

    grid.push_row(row);
}

/// Span attribute value; missing, invalid or zero spans are 1, and the cell
/// setters clamp large ones to the browser limits
fn span_attr(element: ElementRef, name: &str) -> usize {
    element
        .value()
        .attr(name)
        .and_then(|value| parse_span(value.trim()))
        .filter(|&span| span >= 1)
        .unwrap_or(1)
}

fn parse_span(value: &str) -> Option<usize> {
    match value.parse::<usize>() {
        Ok(span) => Some(span),
        // All digits but too large for usize
        Err(_) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
            Some(usize::MAX)
        }
        Err(_) => None,
    }
}

fn collect_attrs(element: ElementRef, skip: &[&str]) -> Vec<(String, String)> {
    element
        .value()
        .attrs()
        .filter(|(name, _)| !skip.contains(name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
