//! HTML Pretty-Printer
//!
//! A streaming indenter for arbitrary markup. The input is split into tags
//! and text runs by a regex tokenizer; an indent counter goes up after every
//! opening tag and down before every closing tag. Nothing here knows about
//! tables, so wrapper elements and nested markup inside cells format the
//! same way.
//!
//! ```text
//! <table><tbody><tr><td>1</td></tr></tbody></table>
//!
//! <table>
//!   <tbody>
//!     <tr>
//!       <td>
//!         1
//!       </td>
//!     </tr>
//!   </tbody>
//! </table>
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::core::options::EditorOptions;
use crate::data::is_void_element;

lazy_static! {
    // Comments, tag-like runs, text, and a stray `<` that starts no tag
    static ref TOKEN: Regex =
        Regex::new(r"(?s)<!--.*?-->|<[!/?A-Za-z][^>]*>|[^<]+|<").unwrap();

    static ref TAG_NAME: Regex = Regex::new(r"^</?([A-Za-z][^\s/>]*)").unwrap();

    static ref START_TAG: Regex = Regex::new(r"<[A-Za-z][^>]*>").unwrap();

    static ref CLASS_ATTR: Regex =
        Regex::new(r#"(?i)\s+class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>/]+))"#).unwrap();
}

/// Format markup for export: strip the selection marker, then indent
pub fn format_html(markup: &str, options: &EditorOptions) -> String {
    let cleaned = strip_class(markup, &options.selected_class);
    HtmlFormatter::new(&options.indent).format(&cleaned)
}

/// Remove one class name from every start tag
///
/// A `class` attribute left with no names is dropped entirely. Text content
/// is never touched.
pub fn strip_class(markup: &str, class: &str) -> String {
    let class = class.trim();
    if class.is_empty() || !markup.contains(class) {
        return markup.to_string();
    }

    START_TAG
        .replace_all(markup, |tag: &Captures| {
            CLASS_ATTR
                .replace_all(&tag[0], |attr: &Captures| {
                    let value = attr
                        .get(1)
                        .or_else(|| attr.get(2))
                        .or_else(|| attr.get(3))
                        .map_or("", |m| m.as_str());
                    let tokens: Vec<&str> = value.split_whitespace().collect();
                    let kept: Vec<&str> =
                        tokens.iter().copied().filter(|token| *token != class).collect();

                    if kept.len() == tokens.len() {
                        attr[0].to_string()
                    } else if kept.is_empty() {
                        String::new()
                    } else {
                        format!(" class=\"{}\"", kept.join(" "))
                    }
                })
                .into_owned()
        })
        .into_owned()
}

/// Kind of a markup token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// `<name ...>` that opens a level
    Open(&'a str),
    /// `</name>`
    Close(&'a str),
    /// Void element, self-closing tag, comment, doctype or processing instruction
    Standalone(&'a str),
    /// Anything between tags
    Text(&'a str),
}

fn classify(raw: &str) -> Token<'_> {
    if raw.starts_with("<!") || raw.starts_with("<?") {
        return Token::Standalone(raw);
    }
    if !raw.starts_with('<') || !raw.ends_with('>') {
        return Token::Text(raw);
    }

    let name = match TAG_NAME.captures(raw).and_then(|caps| caps.get(1)) {
        Some(name) => name.as_str(),
        None => return Token::Text(raw),
    };

    if raw.starts_with("</") {
        Token::Close(raw)
    } else if raw.ends_with("/>") || is_void_element(name) {
        Token::Standalone(raw)
    } else {
        Token::Open(raw)
    }
}

/// Indenting formatter state
pub struct HtmlFormatter<'a> {
    indent: &'a str,
    depth: usize,
    lines: Vec<String>,
    text: String,
}

impl<'a> HtmlFormatter<'a> {
    pub fn new(indent: &'a str) -> Self {
        Self {
            indent,
            depth: 0,
            lines: Vec::new(),
            text: String::new(),
        }
    }

    /// Format a whole document, consuming the formatter
    pub fn format(mut self, markup: &str) -> String {
        for token in TOKEN.find_iter(markup) {
            match classify(token.as_str()) {
                Token::Text(text) => self.text.push_str(text),
                Token::Open(tag) => {
                    self.flush_text();
                    self.emit(tag);
                    self.depth += 1;
                }
                Token::Close(tag) => {
                    self.flush_text();
                    self.depth = self.depth.saturating_sub(1);
                    self.emit(tag);
                }
                Token::Standalone(tag) => {
                    self.flush_text();
                    self.emit(tag);
                }
            }
        }
        self.flush_text();
        self.finish()
    }

    fn emit(&mut self, content: &str) {
        let mut line = self.indent.repeat(self.depth);
        line.push_str(content);
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Emit the buffered text run, one trimmed line per source line
    ///
    /// A whitespace-only run between tags is layout, not content: it only
    /// survives as a blank line when it held a paragraph break.
    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);

        if text.trim().is_empty() {
            if text.matches('\n').count() >= 2 {
                self.blank();
            }
            return;
        }

        for line in text.trim().lines() {
            let line = line.trim();
            if line.is_empty() {
                self.blank();
            } else {
                self.emit(line);
            }
        }
    }

    /// Collapse blank-line runs and drop blank lines at either end
    fn finish(self) -> String {
        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            let blank = line.is_empty();
            if blank && out.last().map_or(true, |last: &String| last.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|line| line.is_empty()) {
            out.pop();
        }
        out.join("\n")
    }
}
