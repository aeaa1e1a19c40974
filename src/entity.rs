use std::borrow::Cow;

/// Escape text for use in HTML text content or a double-quoted attribute
/// value.
///
/// `&`, `<`, `>`, `"` and `'` are replaced by character references. If
/// nothing needs escaping the input is given back as is.
///
/// ```rust
/// use htmlcode::escape;
///
/// assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// ```
pub fn escape<'a>(content: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
    let content = content.into();
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return content;
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result.into()
}
