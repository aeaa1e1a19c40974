//! A small width-aware layout engine.
//!
//! You describe text as a [`Doc`] built from a handful of primitives and
//! [`render`] lays it out within a maximum column:
//!
//! - [`text`]: an atomic piece of text. It is never split.
//! - [`concat`]: pieces joined with nothing in between.
//! - [`format`]: pieces joined on one line if they fit, otherwise each piece
//!   starts its own line.
//! - [`indent`]: lines starting inside it are indented further.
//! - [`stack`]: pieces that always start their own line.
//!
//! ```rust
//! use htmlcode::layout::{format, indent, render, text};
//!
//! let doc = format([text("<p>"), indent(2, format([text("hello")])), text("</p>")]);
//! assert_eq!(render(&doc, 80), "<p>hello</p>");
//! assert_eq!(render(&doc, 8), "<p>\n  hello\n</p>");
//! ```

/// A layout description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Doc {
    /// Atomic text.
    Text(String),
    /// Joined without separation.
    Concat(Vec<Doc>),
    /// One line if it fits, otherwise one line per item.
    Format(Vec<Doc>),
    /// Extra indentation for lines that start inside.
    Indent(usize, Box<Doc>),
    /// Always one line per item.
    Stack(Vec<Doc>),
}

pub fn text(text: impl Into<String>) -> Doc {
    Doc::Text(text.into())
}

pub fn concat(docs: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::Concat(docs.into_iter().collect())
}

pub fn format(docs: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::Format(docs.into_iter().collect())
}

pub fn indent(amount: usize, doc: Doc) -> Doc {
    Doc::Indent(amount, Box::new(doc))
}

pub fn stack(docs: impl IntoIterator<Item = Doc>) -> Doc {
    Doc::Stack(docs.into_iter().collect())
}

/// Lay out `doc` so that, where possible, no line goes past `max_column`.
///
/// Text longer than the available width still goes on one line. The result
/// has no trailing newline, and no line ends in whitespace added by the
/// layout.
pub fn render(doc: &Doc, max_column: usize) -> String {
    let mut printer = Printer {
        output: String::new(),
        column: 0,
        max_column,
        line_break: false,
    };
    printer.print(doc, 0, 0, false);
    printer.output
}

fn width(text: &str) -> usize {
    text.chars().count()
}

struct Printer {
    output: String,
    column: usize,
    max_column: usize,
    // a line break is owed before the next text; emitted lazily so it picks
    // up the indentation of whatever comes next
    line_break: bool,
}

impl Printer {
    // `trailing` is the width of what follows `doc` on the same line, up to
    // the next place a line can break
    fn print(&mut self, doc: &Doc, indentation: usize, trailing: usize, flat: bool) {
        match doc {
            Doc::Text(text) => self.text(text, indentation),
            Doc::Concat(docs) => {
                for (i, doc) in docs.iter().enumerate() {
                    let trailing = rest_width(&docs[i + 1..], trailing);
                    self.print(doc, indentation, trailing, flat);
                }
            }
            Doc::Format(docs) => {
                if flat || self.fits(doc, indentation, trailing) {
                    for doc in docs {
                        self.print(doc, indentation, 0, true);
                    }
                } else {
                    tracing::trace!(indentation, items = docs.len(), "breaking format");
                    self.lines(docs, indentation, trailing, false);
                }
            }
            Doc::Indent(amount, doc) => self.print(doc, indentation + amount, trailing, flat),
            Doc::Stack(docs) => self.lines(docs, indentation, trailing, flat),
        }
    }

    fn lines(&mut self, docs: &[Doc], indentation: usize, trailing: usize, flat: bool) {
        for (i, doc) in docs.iter().enumerate() {
            if i > 0 {
                self.line_break = true;
            }
            // only the last item shares its line with what follows
            let trailing = if i + 1 == docs.len() { trailing } else { 0 };
            self.print(doc, indentation, trailing, flat);
        }
    }

    fn text(&mut self, text: &str, indentation: usize) {
        if text.is_empty() {
            return;
        }
        if self.line_break {
            self.output.push('\n');
            self.output.extend(std::iter::repeat(' ').take(indentation));
            self.column = indentation;
            self.line_break = false;
        }
        self.output.push_str(text);
        match text.rfind('\n') {
            Some(pos) => self.column = width(&text[pos + 1..]),
            None => self.column += width(text),
        }
    }

    fn fits(&self, doc: &Doc, indentation: usize, trailing: usize) -> bool {
        let start = if self.line_break {
            indentation
        } else {
            self.column
        };
        self.max_column
            .checked_sub(start)
            .and_then(|budget| remaining(doc, budget))
            .and_then(|budget| budget.checked_sub(trailing))
            .is_some()
    }
}

// the budget left after laying out `doc` flat, or `None` if it doesn't fit
fn remaining(doc: &Doc, budget: usize) -> Option<usize> {
    match doc {
        Doc::Text(text) => budget.checked_sub(width(text)),
        Doc::Concat(docs) | Doc::Format(docs) => docs
            .iter()
            .try_fold(budget, |budget, doc| remaining(doc, budget)),
        Doc::Indent(_, doc) => remaining(doc, budget),
        Doc::Stack(_) => None,
    }
}

// width of `doc` up to its first possible line break, and whether it has one
fn head_width(doc: &Doc) -> (usize, bool) {
    match doc {
        Doc::Text(text) => (width(text), false),
        Doc::Concat(docs) => head_width_of(docs),
        Doc::Format(docs) | Doc::Stack(docs) => match docs.as_slice() {
            [] => (0, false),
            [doc] => head_width(doc),
            [first, ..] => (head_width(first).0, true),
        },
        Doc::Indent(_, doc) => head_width(doc),
    }
}

fn head_width_of(docs: &[Doc]) -> (usize, bool) {
    let mut total = 0;
    for doc in docs {
        let (width, breaks) = head_width(doc);
        total += width;
        if breaks {
            return (total, true);
        }
    }
    (total, false)
}

// width on the current line taken by `docs` followed by `trailing`
fn rest_width(docs: &[Doc], trailing: usize) -> usize {
    match head_width_of(docs) {
        (width, true) => width,
        (width, false) => width + trailing,
    }
}
