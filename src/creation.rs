//! Builders for HTML trees.
//!
//! Trees are built bottom-up: children are created first and then moved
//! into their parent.
//!
//! ```rust
//! use htmlcode::{a, h, r};
//!
//! let html = h("html")
//!     .attrs(a(&["lang", "en"])?)
//!     .child(h("head").child(h("title").text("Title")))
//!     .child(h("body").child(r("<p>Raw paragraph</p>")));
//! assert_eq!(
//!     html.render(),
//!     r#"<!DOCTYPE html><html lang="en"><head><title>Title</title></head><body><p>Raw paragraph</p></body></html>"#
//! );
//! # Ok::<(), htmlcode::Error>(())
//! ```
use crate::error::Error;
use crate::node::{Attribute, Element, Node, RawText, Text};

/// Create an element with the given tag name.
pub fn h(name: impl Into<String>) -> Element {
    Element::new(name)
}

/// Create a single attribute.
pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Attribute {
    Attribute::new(name, value)
}

/// Pair up a flat list of names and values into attributes.
///
/// `a(&["class", "x", "id", "y"])` gives `class="x"` and `id="y"`, in that
/// order. A trailing name without a value is an error.
///
/// ```rust
/// use htmlcode::{a, Error};
///
/// assert!(matches!(a(&["class"]), Err(Error::UnpairedAttribute(name)) if name == "class"));
/// ```
pub fn a(names_and_values: &[&str]) -> Result<Vec<Attribute>, Error> {
    let chunks = names_and_values.chunks(2);
    chunks
        .map(|chunk| match chunk {
            [name, value] => Ok(Attribute::new(*name, *value)),
            [name] => Err(Error::UnpairedAttribute(name.to_string())),
            _ => unreachable!(),
        })
        .collect()
}

/// A text node. It is escaped when rendered.
pub fn text(text: impl Into<String>) -> Node {
    Node::Text(Text::new(text))
}

/// A raw text node. It is rendered verbatim, without escaping.
pub fn r(text: impl Into<String>) -> Node {
    Node::RawText(RawText::new(text))
}

/// A fragment: a list of nodes to be spliced into a parent.
///
/// ```rust
/// use htmlcode::{f, h};
///
/// let div = h("div").children_from(f([h("span").text("a"), h("span").text("b")]));
/// assert_eq!(
///     div.render_with(&Default::default()),
///     "<!DOCTYPE html><div><span>a</span><span>b</span></div>"
/// );
/// ```
pub fn f<N: Into<Node>>(nodes: impl IntoIterator<Item = N>) -> Vec<Node> {
    nodes.into_iter().map(Into::into).collect()
}

impl Element {
    /// Add an attribute after the existing ones.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Add attributes after the existing ones, in iteration order.
    pub fn attrs(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Add a child after the existing ones.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add children after the existing ones, in iteration order.
    pub fn children_from<N: Into<Node>>(mut self, children: impl IntoIterator<Item = N>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Add a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Text::new(text))
    }

    /// Add a raw text child.
    pub fn raw(self, text: impl Into<String>) -> Self {
        self.child(RawText::new(text))
    }
}

impl From<Element> for Node {
    #[inline]
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    #[inline]
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl From<RawText> for Node {
    #[inline]
    fn from(text: RawText) -> Self {
        Node::RawText(text)
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(text: &str) -> Self {
        Node::Text(Text::new(text))
    }
}

impl From<String> for Node {
    #[inline]
    fn from(text: String) -> Self {
        Node::Text(Text::new(text))
    }
}
