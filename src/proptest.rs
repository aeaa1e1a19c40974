//! Proptest support
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. This module lets you generate an arbitrary HTML tree.
//!
//! This can be enabled by adding the `proptest` feature to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! htmlcode = { version = "0.1", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::node::{Attribute, Element, Node, RawText, Text};

// includes void names in mixed case; generated void elements may get children
const ELEMENT_NAMES: &[&str] = &["div", "p", "span", "b", "br", "input", "Img"];
const ATTRIBUTE_NAMES: &[&str] = &["q", "r", "s"];
// no line breaks, and never starting with whitespace
const TEXT: &str = "([a-z<>&\"'][a-z<>&\"' ]{0,7})?";
const ATTRIBUTE_VALUE: &str = "[a-z0-9]{0,4}";

fn arb_attribute() -> impl Strategy<Value = Attribute> {
    (prop::sample::select(ATTRIBUTE_NAMES), ATTRIBUTE_VALUE)
        .prop_map(|(name, value)| Attribute::new(name, value))
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        TEXT.prop_map(|text| Node::Text(Text::new(text))),
        TEXT.prop_map(|text| Node::RawText(RawText::new(text))),
    ];

    leaf.prop_recursive(
        4,  // levels deep
        64, // maximum size of 64 nodes
        6,  // up to 6 items per collection
        |inner| {
            (
                prop::sample::select(ELEMENT_NAMES),
                prop::collection::vec(arb_attribute(), 0..4),
                prop::collection::vec(inner, 0..6),
            )
                .prop_map(|(name, attributes, children)| {
                    Node::Element(Element::with_content(name, attributes, children))
                })
        },
    )
}

prop_compose! {
    /// Generate a random HTML element with attributes and descendants.
    ///
    /// Text never contains line breaks or starts with whitespace, and
    /// attribute values are short and need no escaping.
    pub fn arb_element()(name in prop::sample::select(ELEMENT_NAMES),
                         attributes in prop::collection::vec(arb_attribute(), 0..4),
                         children in prop::collection::vec(arb_node(), 0..6)) -> Element {
        Element::with_content(name, attributes, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{compact, pretty};

    // undo what pretty printing adds: line breaks and the indentation after
    // them. A wrapped attribute line starts with the attribute's own
    // separating space, which is put back; generated text never contains
    // `=` so it can't be mistaken for one.
    fn flatten(s: &str) -> String {
        let mut lines = s.split('\n');
        let mut result = lines.next().unwrap_or_default().to_string();
        for line in lines {
            let line = line.trim_start_matches(' ');
            if ATTRIBUTE_NAMES
                .iter()
                .any(|name| line.starts_with(&format!("{}=\"", name)))
            {
                result.push(' ');
            }
            result.push_str(line);
        }
        result
    }

    #[test]
    fn test_flatten_wrapped_attributes() {
        let element = Element::with_content(
            "div",
            vec![Attribute::new("q", "1"), Attribute::new("r", "2")],
            vec![Node::Element(Element::with_content(
                "p",
                vec![],
                vec![Node::Text(Text::new("x"))],
            ))],
        );
        let pretty = pretty::render_pretty(&element, false, 8, 4);
        assert_eq!(
            pretty,
            "<div\n q=\"1\"\n r=\"2\">\n    <p>\n        x\n    </p>\n</div>"
        );
        assert_eq!(flatten(&pretty), compact::render(&element, false));
    }

    proptest! {
        #[test]
        fn test_pretty_flattens_to_compact(
            element in arb_element(),
            include_doctype in any::<bool>(),
            max_column in 0usize..200,
            indent_by in 0usize..6
        ) {
            let compact = compact::render(&element, include_doctype);
            let pretty = pretty::render_pretty(&element, include_doctype, max_column, indent_by);
            prop_assert_eq!(flatten(&pretty), compact);
        }
    }

    proptest! {
        #[test]
        fn test_rendering_is_idempotent(element in arb_element()) {
            prop_assert_eq!(element.render(), element.render());
            prop_assert_eq!(element.render_pretty(), element.render_pretty());
        }
    }

    proptest! {
        #[test]
        fn test_wide_pretty_is_compact(element in arb_element()) {
            let parameters = pretty::Parameters {
                max_column: usize::MAX,
                ..Default::default()
            };
            let expected = format!("<!DOCTYPE html>\n{}", element.render_with(&compact::Parameters {
                include_doctype: false,
            }));
            prop_assert_eq!(element.render_pretty_with(&parameters), expected);
        }
    }

    proptest! {
        #[test]
        fn test_pretty_lines_fit(element in arb_element(), max_column in 80usize..120) {
            // every line fits unless it is a single atomic piece too long by
            // itself; generated text is short enough that this never happens
            let pretty = pretty::render_pretty(&element, false, max_column, 4);
            for line in pretty.lines() {
                prop_assert!(line.chars().count() <= max_column, "{:?} too long", line);
            }
        }
    }
}
