//! Allow-list HTML filter for user-supplied text.
//!
//! Text is scanned for tags. A tag on the allow-list is re-emitted with only
//! its permitted attributes; any other tag, and any stray `<` or `>`, is
//! entity-escaped so the browser renders it as text. Everything else passes
//! through untouched, quotes included.
//!
//! # Rules
//!
//! 1. **Comments**: `<!-- ... -->` are removed
//! 2. **Allowed tags**: kept, closing tags normalised to `</name>`
//! 3. **Attributes**: only allow-listed names survive; values are re-quoted
//!    with `"`, `<`, `>` and `&` escaped
//! 4. **URL attributes** (`href`, `src`, `cite`, `poster`): emptied unless the
//!    value starts with a safe scheme or is relative
//! 5. **Other tags**: `<` → `&lt;`, `>` → `&gt;`
//!
//! # Examples
//!
//! ```ignore
//! assert_eq!(
//!     sanitize_html("<script>alert(1)</script>"),
//!     "&lt;script&gt;alert(1)&lt;/script&gt;"
//! );
//! assert_eq!(
//!     sanitize_html(r#"<img src="/a.png" onerror="steal()">"#),
//!     r#"<img src="/a.png">"#
//! );
//! ```

use html_escape::{decode_html_entities, encode_double_quoted_attribute};
use regex::Regex;
use std::sync::LazyLock;

static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Matches `name`, `name="v"`, `name='v'` and `name=v` inside a tag.
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#,
    )
    .unwrap()
});

/// Attributes whose value is a URL and must use a safe scheme.
const URL_ATTRIBUTES: &[&str] = &["href", "src", "cite", "poster"];

const SAFE_URL_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "mailto:",
    "tel:",
    "data:image/",
    "ftp://",
    "./",
    "../",
    "#",
    "/",
];

const CELL_ATTRIBUTES: &[&str] = &["width", "rowspan", "colspan", "align", "valign"];
const ALIGN_ATTRIBUTES: &[&str] = &["align", "valign"];
const COLUMN_ATTRIBUTES: &[&str] = &["align", "valign", "span", "width"];
const MEDIA_ATTRIBUTES: &[&str] = &[
    "autoplay",
    "controls",
    "crossorigin",
    "loop",
    "muted",
    "preload",
    "src",
];

/// Returns the attributes permitted on `tag`, or `None` when the tag itself
/// is not allowed.
fn allowed_attributes(tag: &str) -> Option<&'static [&'static str]> {
    let attrs: &'static [&'static str] = match tag {
        "a" => &["target", "href", "title"],
        "abbr" => &["title"],
        "area" => &["shape", "coords", "href", "alt"],
        "audio" => MEDIA_ATTRIBUTES,
        "bdi" | "bdo" => &["dir"],
        "blockquote" => &["cite"],
        "col" | "colgroup" => COLUMN_ATTRIBUTES,
        "del" | "ins" => &["datetime"],
        "details" => &["open"],
        "font" => &["color", "size", "face"],
        "img" => &["src", "alt", "title", "width", "height", "loading"],
        "table" => &["width", "border", "align", "valign"],
        "tbody" | "tfoot" | "thead" => ALIGN_ATTRIBUTES,
        "td" | "th" => CELL_ATTRIBUTES,
        "tr" => &["rowspan", "align", "valign"],
        "video" => &[
            "autoplay",
            "controls",
            "crossorigin",
            "loop",
            "muted",
            "playsinline",
            "poster",
            "preload",
            "src",
            "height",
            "width",
        ],
        "address" | "article" | "aside" | "b" | "big" | "br" | "caption" | "center" | "cite"
        | "code" | "dd" | "div" | "dl" | "dt" | "em" | "figcaption" | "figure" | "footer"
        | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "header" | "hr" | "i" | "kbd" | "li"
        | "mark" | "nav" | "ol" | "p" | "pre" | "s" | "section" | "small" | "span" | "strike"
        | "strong" | "sub" | "summary" | "sup" | "tt" | "u" | "ul" => &[],
        _ => return None,
    };
    Some(attrs)
}

/// Filters `input`, keeping allow-listed markup and escaping everything else.
pub fn sanitize_html(input: &str) -> String {
    let input: &str = &COMMENT_REGEX.replace_all(input, "");
    let mut out = String::with_capacity(input.len());

    // Byte offset of the first character not yet copied to `out`.
    let mut last = 0;
    let mut tag_start: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut prev_significant: Option<char> = None;

    for (i, c) in input.char_indices() {
        let Some(start) = tag_start else {
            if c == '<' {
                tag_start = Some(i);
                prev_significant = None;
            }
            continue;
        };

        if let Some(q) = quote {
            if c == q {
                quote = None;
                prev_significant = Some(c);
            }
            continue;
        }

        match c {
            '<' => {
                // The earlier `<` never closed; it was plain text.
                out.push_str(&escape_text(&input[last..i]));
                last = i;
                tag_start = Some(i);
                prev_significant = None;
                continue;
            }
            '>' => {
                out.push_str(&escape_text(&input[last..start]));
                out.push_str(&filter_tag(&input[start..=i]));
                last = i + 1;
                tag_start = None;
            }
            '"' | '\'' if prev_significant == Some('=') => quote = Some(c),
            _ => {}
        }

        if !c.is_whitespace() {
            prev_significant = Some(c);
        }
    }

    out.push_str(&escape_text(&input[last..]));
    out
}

/// Escapes the characters that open or close markup.
fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Rebuilds a single `<...>` tag from its allowed parts, or escapes it.
fn filter_tag(tag: &str) -> String {
    let inner = &tag[1..tag.len() - 1];
    let (closing, rest) = match inner.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, inner),
    };

    let name_end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    let name = rest[..name_end].to_ascii_lowercase();

    let Some(allowed) = allowed_attributes(&name) else {
        return escape_text(tag);
    };

    if closing {
        return format!("</{name}>");
    }

    let mut attributes = rest[name_end..].trim_end();
    let self_closing = attributes.ends_with('/');
    if self_closing {
        attributes = attributes.trim_end_matches('/');
    }

    let mut out = format!("<{name}");
    for caps in ATTRIBUTE_REGEX.captures_iter(attributes) {
        let attr = caps[1].to_ascii_lowercase();
        if !allowed.contains(&attr.as_str()) {
            continue;
        }

        out.push(' ');
        out.push_str(&attr);

        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .or_else(|| caps.get(4))
            .map(|m| m.as_str());

        if let Some(value) = value {
            let value = safe_attribute_value(&attr, value);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(&value));
            out.push('"');
        }
    }

    if self_closing {
        out.push_str(" /");
    }
    out.push('>');
    out
}

/// Decodes entities in an attribute value and blanks unsafe URLs.
fn safe_attribute_value(attr: &str, value: &str) -> String {
    let decoded = decode_html_entities(value);

    if !URL_ATTRIBUTES.contains(&attr) {
        return decoded.into_owned();
    }

    let trimmed = decoded.trim();
    let lower = trimmed.to_ascii_lowercase();
    if SAFE_URL_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
    {
        trimmed.to_string()
    } else {
        String::new()
    }
}
