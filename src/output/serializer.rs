use genawaiter::rc::gen;
use genawaiter::yield_;

use crate::node::{Attribute, Element, Node};

/// Output of serialization
///
/// A depth-first walk over a tree produces a stream of these. Each one
/// stands for a fragment of HTML.
#[derive(Debug, PartialEq)]
pub enum Output<'a> {
    /// Start tag open, i.e `<foo`
    StartTagOpen(&'a Element),
    /// Attribute, i.e. ` foo="bar"`
    Attribute(&'a Attribute),
    /// Start tag close, i.e. `>`
    StartTagClose,
    /// End tag, i.e. `</foo>`. Void elements have none.
    EndTag(&'a Element),
    /// Text, escaped when rendered
    Text(&'a str),
    /// Raw text, rendered verbatim
    RawText(&'a str),
}

/// Walk the tree under `root`, depth first.
///
/// The children of void elements are never visited, and void elements get no
/// [`Output::EndTag`].
pub(crate) fn gen_outputs(root: &Element) -> impl Iterator<Item = Output<'_>> + '_ {
    gen!({
        // each entry is an open element with the children still to visit
        let mut stack = Vec::new();

        yield_!(Output::StartTagOpen(root));
        for attribute in root.attributes() {
            yield_!(Output::Attribute(attribute));
        }
        yield_!(Output::StartTagClose);
        if !root.is_void() {
            stack.push((root, root.children().iter()));
        }

        while let Some((element, children)) = stack.last_mut() {
            let element: &Element = *element;
            match children.next() {
                Some(Node::Element(child)) => {
                    yield_!(Output::StartTagOpen(child));
                    for attribute in child.attributes() {
                        yield_!(Output::Attribute(attribute));
                    }
                    yield_!(Output::StartTagClose);
                    if !child.is_void() {
                        stack.push((child, child.children().iter()));
                    }
                }
                Some(Node::Text(text)) => yield_!(Output::Text(text.get())),
                Some(Node::RawText(text)) => yield_!(Output::RawText(text.get())),
                None => {
                    stack.pop();
                    yield_!(Output::EndTag(element));
                }
            }
        }
    })
    .into_iter()
}

impl Element {
    /// The output tokens of this element and its descendants, in document
    /// order.
    ///
    /// Use this for customized serialization.
    ///
    /// ```rust
    /// use htmlcode::h;
    /// use htmlcode::output::Output;
    ///
    /// let p = h("p").text("hi");
    /// let texts: Vec<_> = p
    ///     .outputs()
    ///     .filter_map(|output| match output {
    ///         Output::Text(text) => Some(text),
    ///         _ => None,
    ///     })
    ///     .collect();
    /// assert_eq!(texts, vec!["hi"]);
    /// ```
    pub fn outputs(&self) -> impl Iterator<Item = Output<'_>> + '_ {
        gen_outputs(self)
    }
}
