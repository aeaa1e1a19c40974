use htmlcode::{h, r, render};
use rstest::rstest;

#[rstest]
#[case("&", "&amp;")]
#[case("<", "&lt;")]
#[case(">", "&gt;")]
#[case("\"", "&quot;")]
#[case("'", "&#39;")]
#[case("plain", "plain")]
fn test_escape_in_attribute(#[case] value: &str, #[case] escaped: &str) {
    let html = h("a").attr("title", value);
    assert_eq!(render(&html, false), format!(r#"<a title="{}"></a>"#, escaped));
}

#[rstest]
#[case("Fish & chips", "Fish &amp; chips")]
#[case("1 < 2 > 0", "1 &lt; 2 &gt; 0")]
#[case("say \"hi\"", "say &quot;hi&quot;")]
fn test_escape_in_text(#[case] content: &str, #[case] escaped: &str) {
    let html = h("p").text(content);
    assert_eq!(render(&html, false), format!("<p>{}</p>", escaped));
}

#[test]
fn test_raw_text_not_escaped() {
    let html = h("script").child(r(r#"if (a < b && c > "d") {}"#));
    assert_eq!(
        render(&html, false),
        r#"<script>if (a < b && c > "d") {}</script>"#
    );
}

#[test]
fn test_tag_and_attribute_names_not_escaped() {
    let html = h("x-y").attr("data-a&b", "v");
    assert_eq!(render(&html, false), r#"<x-y data-a&b="v"></x-y>"#);
}

#[test]
fn test_pretty_escapes_the_same() {
    let html = h("p").attr("title", "<&>").text("<&>").child(r("<&>"));
    assert_eq!(
        html.render_pretty_with(&htmlcode::output::pretty::Parameters {
            include_doctype: false,
            ..Default::default()
        }),
        r#"<p title="&lt;&amp;&gt;">&lt;&amp;&gt;<&></p>"#
    );
}
