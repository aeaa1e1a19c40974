//! Pretty output method.
//!
//! Renders a tree with line breaks and indentation, fitting lines within a
//! maximum column where possible. The tree is translated into a
//! [`Doc`](crate::layout::Doc) and laid out by [`crate::layout`].
//!
//! Pretty output only differs from compact output in the whitespace between
//! nodes. Escaping, attribute order and void elements are the same.
use std::io;

use crate::entity::escape;
use crate::error::Error;
use crate::layout::{self, concat, format, indent, stack, text, Doc};
use crate::node::{Attribute, Element, Node};

use super::DOCTYPE;

/// Parameters for pretty HTML generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Emit `<!DOCTYPE html>` on its own line before the root element.
    pub include_doctype: bool,
    /// Lines are broken to stay within this column where possible.
    pub max_column: usize,
    /// Spaces of indentation per nesting level.
    pub indent_by: usize,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            include_doctype: true,
            max_column: 100,
            indent_by: 4,
        }
    }
}

fn attribute_doc(attribute: &Attribute) -> Doc {
    concat([
        text(" "),
        text(attribute.name()),
        text("=\""),
        text(escape(attribute.value())),
        text("\""),
    ])
}

fn element_doc(element: &Element, indent_by: usize) -> Doc {
    // the name leads the attribute block so that a start tag that doesn't
    // fit breaks before its first attribute too
    let name_and_attributes = std::iter::once(text(element.name()))
        .chain(element.attributes().iter().map(attribute_doc));
    let open = concat([text("<"), format(name_and_attributes), text(">")]);
    if element.is_void() {
        return open;
    }
    let close = text(format!("</{}>", element.name()));
    if element.children().is_empty() {
        return format([open, close]);
    }
    let children = element
        .children()
        .iter()
        .map(|child| node_doc(child, indent_by));
    format([open, indent(indent_by, format(children)), close])
}

fn node_doc(node: &Node, indent_by: usize) -> Doc {
    match node {
        Node::Element(element) => element_doc(element, indent_by),
        Node::Text(t) => text(escape(t.get())),
        Node::RawText(t) => text(t.get()),
    }
}

/// Translate `root` into a layout description.
pub(crate) fn document_doc(root: &Element, parameters: &Parameters) -> Doc {
    let root_doc = element_doc(root, parameters.indent_by);
    if parameters.include_doctype {
        stack([text(DOCTYPE), root_doc])
    } else {
        root_doc
    }
}

/// Render `root` as indented HTML that fits within `max_column` where
/// possible.
///
/// ```rust
/// use htmlcode::{h, render_pretty};
///
/// let html = h("html").child(h("body").child(h("p").text("Hello")));
/// assert_eq!(
///     render_pretty(&html, true, 20, 2),
///     "<!DOCTYPE html>\n<html>\n  <body>\n    <p>Hello</p>\n  </body>\n</html>"
/// );
/// ```
pub fn render_pretty(
    root: &Element,
    include_doctype: bool,
    max_column: usize,
    indent_by: usize,
) -> String {
    root.render_pretty_with(&Parameters {
        include_doctype,
        max_column,
        indent_by,
    })
}

/// Write `root` as pretty HTML to `w`.
pub fn write_pretty<W: io::Write>(
    w: &mut W,
    root: &Element,
    parameters: &Parameters,
) -> Result<(), Error> {
    w.write_all(root.render_pretty_with(parameters).as_bytes())?;
    Ok(())
}

impl Element {
    /// Render this element as a pretty HTML document with default
    /// [`Parameters`].
    pub fn render_pretty(&self) -> String {
        self.render_pretty_with(&Parameters::default())
    }

    /// Render this element as pretty HTML with the given parameters.
    pub fn render_pretty_with(&self, parameters: &Parameters) -> String {
        tracing::debug!(root = self.name(), ?parameters, "pretty render");
        layout::render(&document_doc(self, parameters), parameters.max_column)
    }
}
