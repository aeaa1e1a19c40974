use crate::output::html5elements::is_void;

/// The type of a node.
///
/// Access it using [`Node::node_type`] if you are interested in the type of
/// a node without needing to match on it.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum NodeType {
    /// Element; it has a name, attributes and children.
    Element,
    /// Text, escaped when rendered.
    Text,
    /// Raw text, rendered verbatim.
    RawText,
}

/// A node in an HTML tree.
///
/// A tree owns all of its nodes; there are no parent links and no sharing.
/// Nodes are never changed after they are built, so the same tree can be
/// rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Element, i.e. `<p class="x">...</p>`.
    Element(Element),
    /// Text, i.e. `Hello & goodbye`. Escaped when rendered.
    Text(Text),
    /// Raw text. Rendered byte for byte, without escaping.
    RawText(RawText),
}

impl Node {
    /// Returns the type of the node.
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Element(_) => NodeType::Element,
            Node::Text(_) => NodeType::Text,
            Node::RawText(_) => NodeType::RawText,
        }
    }

    /// The element, if this node is one.
    pub fn element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }
}

/// An HTML attribute.
///
/// Example: `lang="en"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl Attribute {
    /// Create a new attribute. The value may be empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unescaped attribute value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// HTML element value.
///
/// Attributes and children keep the order they were added in, and are
/// rendered in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) children: Vec<Node>,
}

impl Element {
    /// Create an element without attributes or children.
    ///
    /// ```rust
    /// use htmlcode::Element;
    ///
    /// let element = Element::new("html");
    /// assert_eq!(element.render(), "<!DOCTYPE html><html></html>");
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element from its parts.
    pub fn with_content(
        name: impl Into<String>,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    ) -> Self {
        Element {
            name: name.into(),
            attributes,
            children,
        }
    }

    /// The tag name, as given when the element was created.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attributes in rendering order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get the value of the first attribute with this name.
    ///
    /// ```rust
    /// use htmlcode::h;
    ///
    /// let element = h("html").attr("lang", "en");
    /// assert_eq!(element.get_attribute("lang"), Some("en"));
    /// assert_eq!(element.get_attribute("dir"), None);
    /// ```
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// The children in rendering order.
    ///
    /// A void element may have children here; they are never rendered.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this is a void element such as `<br>` or `<input>`.
    ///
    /// The tag name is matched case-insensitively.
    pub fn is_void(&self) -> bool {
        is_void(&self.name)
    }
}

/// Text content, escaped when rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Text {
    pub(crate) text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Text { text: text.into() }
    }

    /// The unescaped text.
    pub fn get(&self) -> &str {
        &self.text
    }
}

/// Raw text, rendered without escaping.
///
/// The caller is responsible for it being well-formed HTML.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawText {
    pub(crate) text: String,
}

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        RawText { text: text.into() }
    }

    pub fn get(&self) -> &str {
        &self.text
    }
}
