//! Compact output method.
//!
//! Renders a tree on a single line, without adding any whitespace. The
//! main entry point is [`Parameters`], which you pass to
//! [`Element::render_with`] or [`write`].
use std::borrow::Cow;
use std::io;

use crate::entity::escape;
use crate::error::Error;
use crate::node::Element;

use super::serializer::Output;
use super::DOCTYPE;

/// Parameters for compact HTML generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Emit `<!DOCTYPE html>` before the root element.
    pub include_doctype: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            include_doctype: true,
        }
    }
}

/// Render the HTML text of a single output token.
pub(crate) fn render_output<'a>(output: &Output<'a>) -> Cow<'a, str> {
    match output {
        Output::StartTagOpen(element) => format!("<{}", element.name()).into(),
        Output::Attribute(attribute) => format!(
            " {}=\"{}\"",
            attribute.name(),
            escape(attribute.value())
        )
        .into(),
        Output::StartTagClose => ">".into(),
        Output::EndTag(element) => format!("</{}>", element.name()).into(),
        Output::Text(text) => escape(*text),
        Output::RawText(text) => (*text).into(),
    }
}

/// Render `root` as a single line of HTML.
///
/// ```rust
/// use htmlcode::{h, render};
///
/// let html = h("html").child(h("head")).child(h("body"));
/// assert_eq!(
///     render(&html, true),
///     "<!DOCTYPE html><html><head></head><body></body></html>"
/// );
/// assert_eq!(render(&h("input"), false), "<input>");
/// ```
pub fn render(root: &Element, include_doctype: bool) -> String {
    tracing::debug!(root = root.name(), include_doctype, "compact render");
    let mut result = String::new();
    if include_doctype {
        result.push_str(DOCTYPE);
    }
    for output in root.outputs() {
        result.push_str(&render_output(&output));
    }
    result
}

/// Write `root` as a single line of HTML to `w`.
pub fn write<W: io::Write>(
    w: &mut W,
    root: &Element,
    parameters: &Parameters,
) -> Result<(), Error> {
    tracing::debug!(root = root.name(), ?parameters, "compact write");
    if parameters.include_doctype {
        w.write_all(DOCTYPE.as_bytes())?;
    }
    for output in root.outputs() {
        w.write_all(render_output(&output).as_bytes())?;
    }
    Ok(())
}

impl Element {
    /// Render this element as a compact HTML document, with doctype.
    ///
    /// ```rust
    /// use htmlcode::h;
    ///
    /// assert_eq!(h("html").render(), "<!DOCTYPE html><html></html>");
    /// ```
    pub fn render(&self) -> String {
        render(self, true)
    }

    /// Render this element compactly with the given parameters.
    pub fn render_with(&self, parameters: &Parameters) -> String {
        render(self, parameters.include_doctype)
    }
}
