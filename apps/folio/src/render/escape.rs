use std::borrow::Cow;

use url::Url;

/// Escapes text for interpolation into HTML element content or a quoted
/// attribute value.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Returns an escaped `href` value for `http`/`https` URLs only. Any other
/// scheme (`javascript:`, `data:`) is rendered as text by the caller.
pub fn safe_href(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    match url.scheme() {
        "http" | "https" => Some(escape_html(raw).into_owned()),
        _ => None,
    }
}
