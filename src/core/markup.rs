//! Grid to HTML rendering
//!
//! Produces compact markup (no whitespace between tags). Consecutive rows of
//! the same section share one `thead` / `tbody` / `tfoot` element. When a
//! selection is given, selected cells get the transient marker class so the
//! host can highlight them; the pretty-printer strips it again for export.

use indexmap::IndexSet;
use std::fmt::Write;

use crate::core::grid::{Cell, CellId, Document, Grid, Row, Section};
use crate::utils::escape::escape_attr;

/// Render a document without selection markers
pub fn render(document: &Document) -> String {
    Renderer::new(None).document(document)
}

/// Render a document, marking the selected cells with `marker`
pub fn render_with_selection(
    document: &Document,
    selected: &IndexSet<CellId>,
    marker: &str,
) -> String {
    Renderer::new(Some((selected, marker))).document(document)
}

/// Render just the table element of a grid
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    Renderer::new(None).grid(grid, &mut out);
    out
}

struct Renderer<'a> {
    selection: Option<(&'a IndexSet<CellId>, &'a str)>,
}

impl<'a> Renderer<'a> {
    fn new(selection: Option<(&'a IndexSet<CellId>, &'a str)>) -> Self {
        Self { selection }
    }

    fn document(&self, document: &Document) -> String {
        let mut out = String::new();
        match &document.wrapper {
            Some(wrapper) => {
                out.push('<');
                out.push_str(&wrapper.tag);
                push_attrs(&mut out, &wrapper.attrs);
                out.push('>');
                out.push_str(&wrapper.before);
                self.grid(&document.grid, &mut out);
                out.push_str(&wrapper.after);
                let _ = write!(out, "</{}>", wrapper.tag);
            }
            None => self.grid(&document.grid, &mut out),
        }
        out
    }

    fn grid(&self, grid: &Grid, out: &mut String) {
        out.push_str("<table");
        push_attrs(out, &grid.attrs);
        out.push('>');

        if let Some(caption) = &grid.caption {
            let _ = write!(out, "<caption>{}</caption>", caption);
        }

        let mut open_section: Option<Section> = None;
        for row in grid.rows() {
            if open_section != Some(row.section) {
                if let Some(section) = open_section {
                    let _ = write!(out, "</{}>", section.tag());
                }
                let _ = write!(out, "<{}>", row.section.tag());
                open_section = Some(row.section);
            }
            self.row(row, out);
        }
        if let Some(section) = open_section {
            let _ = write!(out, "</{}>", section.tag());
        }

        out.push_str("</table>");
    }

    fn row(&self, row: &Row, out: &mut String) {
        out.push_str("<tr");
        push_classes(out, row.classes.iter().map(String::as_str));
        push_attrs(out, &row.attrs);
        out.push('>');
        for cell in &row.cells {
            self.cell(cell, out);
        }
        out.push_str("</tr>");
    }

    fn cell(&self, cell: &Cell, out: &mut String) {
        let tag = cell.kind.tag();
        out.push('<');
        out.push_str(tag);

        let marker = self
            .selection
            .filter(|(selected, _)| selected.contains(&cell.id()))
            .map(|(_, marker)| marker);
        push_classes(out, cell.classes.iter().map(String::as_str).chain(marker));
        push_attrs(out, &cell.attrs);
        if cell.colspan() > 1 {
            let _ = write!(out, " colspan=\"{}\"", cell.colspan());
        }
        if cell.rowspan() > 1 {
            let _ = write!(out, " rowspan=\"{}\"", cell.rowspan());
        }

        out.push('>');
        out.push_str(&cell.content);
        let _ = write!(out, "</{}>", tag);
    }
}

fn push_attrs(out: &mut String, attrs: &[(String, String)]) {
    for (name, value) in attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
}

fn push_classes<'c>(out: &mut String, classes: impl Iterator<Item = &'c str>) {
    let joined = classes.collect::<Vec<_>>().join(" ");
    if !joined.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&joined));
    }
}
