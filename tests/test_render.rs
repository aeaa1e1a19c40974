use htmlcode::{a, attr, f, h, r, render, text, Attribute, Element, Node, RawText, Text};

#[test]
fn test_simplest_html_document() {
    let html = h("html");
    assert_eq!(html.render(), "<!DOCTYPE html><html></html>");
}

#[test]
fn test_with_head_and_body() {
    let html = h("html").child(h("head")).child(h("body"));
    assert_eq!(
        html.render(),
        "<!DOCTYPE html><html><head></head><body></body></html>"
    );
}

#[test]
fn test_with_attributes() {
    let html = h("html")
        .attrs(a(&["lang", "en"]).unwrap())
        .child(
            h("head")
                .child(h("title").text("Test Title"))
                .child(h("script").attrs(a(&["src", "script.js"]).unwrap())),
        )
        .child(h("body"));
    assert_eq!(
        html.render(),
        r#"<!DOCTYPE html><html lang="en"><head><title>Test Title</title><script src="script.js"></script></head><body></body></html>"#
    );
}

#[test]
fn test_with_text() {
    let html = h("html").child(h("body").text("Hello, World!"));
    assert_eq!(
        html.render(),
        "<!DOCTYPE html><html><body>Hello, World!</body></html>"
    );
}

#[test]
fn test_with_raw_html() {
    let html = h("html").child(r("<body>Hello, World!</body>"));
    assert_eq!(
        html.render(),
        "<!DOCTYPE html><html><body>Hello, World!</body></html>"
    );
}

#[test]
fn test_with_void_element() {
    let html = h("input");
    assert_eq!(render(&html, false), "<input>");
}

#[test]
fn test_void_element_with_children() {
    let html = h("br").child(h("span").text("never shown"));
    assert_eq!(render(&html, false), "<br>");
}

#[test]
fn test_with_collection() {
    let html = h("div")
        .children_from(vec![Node::Text(Text::new("Hello, "))])
        .children_from(vec![Node::Text(Text::new("World!"))]);
    assert_eq!(render(&html, false), "<div>Hello, World!</div>");
}

#[test]
fn test_with_explicit_text() {
    let html = h("div").child(text("Hello, World!"));
    assert_eq!(render(&html, false), "<div>Hello, World!</div>");
}

#[test]
fn test_with_explicit_attribute() {
    let html = h("div").attrs([Attribute::new("class", "test")]);
    assert_eq!(render(&html, false), r#"<div class="test"></div>"#);
}

#[test]
fn test_with_fragment() {
    let html = h("div").children_from(f([
        h("span").text("Hello, World"),
        h("span").text("Another World"),
    ]));
    assert_eq!(
        render(&html, false),
        "<div><span>Hello, World</span><span>Another World</span></div>"
    );
}

#[test]
fn test_with_content() {
    let html = Element::with_content(
        "p",
        vec![attr("id", "x")],
        vec![
            Node::RawText(RawText::new("<b>bold</b>")),
            Node::Text(Text::new(" & more")),
        ],
    );
    assert_eq!(
        render(&html, false),
        r#"<p id="x"><b>bold</b> &amp; more</p>"#
    );
}

#[test]
fn test_empty_attribute_value() {
    let html = h("input").attr("disabled", "");
    assert_eq!(render(&html, false), r#"<input disabled="">"#);
}

#[test]
fn test_render_twice() {
    let html = h("html").child(h("body").text("a < b"));
    assert_eq!(html.render(), html.render());
    assert_eq!(html.render_pretty(), html.render_pretty());
}
