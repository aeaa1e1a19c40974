use std::borrow::Cow;
use std::sync::LazyLock;

use ahash::HashSet;

// elements that never have content or an end tag
const VOID_NAMES: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

static VOID_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_NAMES.iter().copied().collect());

/// Whether `name` is a void element, such as `br` or `input`.
///
/// The match is ASCII case-insensitive: `BR` and `Input` are void too.
///
/// ```rust
/// use htmlcode::is_void;
///
/// assert!(is_void("img"));
/// assert!(is_void("IMG"));
/// assert!(!is_void("div"));
/// ```
pub fn is_void(name: &str) -> bool {
    // avoid allocating for the common lowercase case
    let name: Cow<str> = if name.bytes().any(|b| b.is_ascii_uppercase()) {
        name.to_ascii_lowercase().into()
    } else {
        name.into()
    };
    VOID_NAME_SET.contains(name.as_ref())
}
