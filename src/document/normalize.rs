//! Normalization of exported HTML documents into embeddable fragments.
//!
//! Documents are exported with a "save as web page" style tool, which
//! produces a full HTML document plus a sibling `{name}_files/` directory of
//! images and stylesheets. Normalization keeps the `<style>` blocks from the
//! head and the inner content of the body, then rewrites every reference
//! into the `_files/` directory so it resolves from the site root.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::identifiers::Slug;

/// Marker that identifies paths produced by the HTML exporter.
pub const EXPORTED_ASSETS_MARKER: &str = "_files/";

// `</head>` is optional; an unclosed head runs to the end of its search slice.
static HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<head(?:\s[^>]*)?>(.*?)(?:</head\s*>|\z)").expect("head regex is valid")
});

static BODY_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body(?:\s[^>]*)?>").expect("body regex is valid"));

// `</body>` is optional too; `</html>` or end of input also close the body.
static BODY_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)</body\s*>|</html\s*>").expect("body close regex is valid"));

static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style(?:\s[^>]*)?>.*?</style\s*>").expect("style regex is valid"));

// Leftover document-level wrappers once head/body have been handled.
static WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!DOCTYPE[^>]*>|</?html(?:\s[^>]*)?>|</?body(?:\s[^>]*)?>").expect("wrapper regex is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(src|href)(\s*=\s*)(?:"([^"]*)"|'([^']*)')"#).expect("attribute regex is valid")
});

static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\burl\(\s*(?:"([^"]*)"|'([^']*)'|([^)"'\s]*))\s*\)"#).expect("css url regex is valid")
});

/// Full normalization pass: extraction followed by asset rewriting.
pub fn normalize_document_html(raw: &str, slug: &Slug) -> String {
    let fragment = extract_fragment(raw);
    rewrite_asset_paths(&fragment, slug)
}

/// Reduce a full HTML document to `head styles + body content`.
///
/// Either closing tag may be missing: the head ends at `</head>` or where the
/// body opens, the body ends at `</body>`, `</html>` or the end of input.
/// Input without `<head>` or `<body>` passes through unchanged.
pub fn extract_fragment(raw: &str) -> String {
    let body_open = BODY_OPEN.find(raw);
    let before_body = body_open.map_or(raw, |m| &raw[..m.start()]);
    let head = HEAD.captures(before_body);

    if head.is_none() && body_open.is_none() {
        return raw.to_string();
    }

    let styles: String = head
        .as_ref()
        .and_then(|c| c.get(1))
        .map(|inner| {
            STYLE
                .find_iter(inner.as_str())
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .concat()
        })
        .unwrap_or_default();

    let content = match (body_open, head.as_ref().and_then(|c| c.get(0))) {
        (Some(open), _) => {
            let rest = &raw[open.end()..];
            let end = BODY_CLOSE.find(rest).map_or(rest.len(), |m| m.start());
            rest[..end].to_string()
        }
        // A head without a body: keep whatever surrounded it, minus wrappers.
        (None, Some(head)) => {
            let outside = [&raw[..head.start()], &raw[head.end()..]].concat();
            WRAPPER.replace_all(&outside, "").into_owned()
        }
        (None, None) => String::new(),
    };

    let mut fragment = String::with_capacity(styles.len() + content.len());
    fragment.push_str(&styles);
    fragment.push_str(&content);
    fragment
}

/// Prefix every exported-asset reference with `documents/{slug}/`.
///
/// Handles `src`/`href` attributes in either quote style and CSS `url()`
/// with single, double or no quotes. Only relative paths are touched: values
/// without `_files/`, absolute URLs, root-relative paths and values already
/// carrying the prefix are left as they are.
pub fn rewrite_asset_paths(html: &str, slug: &Slug) -> String {
    let prefix = format!("{}/", slug.base_path());

    let rewritten = ATTRIBUTE.replace_all(html, |caps: &Captures| {
        let name = &caps[1];
        let eq = &caps[2];
        match (caps.get(3), caps.get(4)) {
            (Some(value), _) => format!(r#"{name}{eq}"{}""#, prefix_path(value.as_str(), &prefix)),
            (None, Some(value)) => format!("{name}{eq}'{}'", prefix_path(value.as_str(), &prefix)),
            (None, None) => caps[0].to_string(),
        }
    });

    CSS_URL
        .replace_all(&rewritten, |caps: &Captures| {
            if let Some(value) = caps.get(1) {
                format!(r#"url("{}")"#, prefix_path(value.as_str(), &prefix))
            } else if let Some(value) = caps.get(2) {
                format!("url('{}')", prefix_path(value.as_str(), &prefix))
            } else if let Some(value) = caps.get(3) {
                format!("url({})", prefix_path(value.as_str(), &prefix))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn prefix_path(path: &str, prefix: &str) -> String {
    if path.contains(EXPORTED_ASSETS_MARKER) && is_relative(path) && !path.starts_with(prefix) {
        format!("{prefix}{path}")
    } else {
        path.to_string()
    }
}

// No scheme (`https:`, `data:`), not `/...` or `//host/...`.
fn is_relative(path: &str) -> bool {
    if path.starts_with('/') {
        return false;
    }
    let Some((scheme, _)) = path.split_once(':') else {
        return true;
    };
    let mut chars = scheme.chars();
    let is_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    !is_scheme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(s: &str) -> Slug {
        Slug::new(s).unwrap()
    }

    #[test]
    fn extracts_head_styles_then_body() {
        let raw = "<!DOCTYPE html><html><head><title>T</title>\
                   <style>p{color:red}</style><meta charset=\"utf-8\">\
                   <style type=\"text/css\">h1{margin:0}</style></head>\
                   <body class=\"x\"><h1>Hello</h1></body></html>";

        assert_eq!(
            extract_fragment(raw),
            "<style>p{color:red}</style><style type=\"text/css\">h1{margin:0}</style><h1>Hello</h1>"
        );
    }

    #[test]
    fn fragment_passes_through() {
        let raw = "<div><p>already a fragment</p></div>";
        assert_eq!(extract_fragment(raw), raw);
    }

    #[test]
    fn body_without_head() {
        let raw = "<html><BODY>\n<p>x</p>\n</BODY></html>";
        assert_eq!(extract_fragment(raw), "\n<p>x</p>\n");
    }

    #[test]
    fn head_without_body_drops_wrappers() {
        let raw = "<html><head><style>a{}</style></head><p>loose</p></html>";
        assert_eq!(extract_fragment(raw), "<style>a{}</style><p>loose</p>");
    }

    #[test]
    fn unclosed_body_is_still_unwrapped() {
        let out = extract_fragment("<html><body><p>x</p></html>");
        assert_eq!(out, "<p>x</p>");

        let out = extract_fragment("<body class=\"c\"><p>y</p>");
        assert_eq!(out, "<p>y</p>");
        assert!(!out.contains("<body"));
    }

    #[test]
    fn unclosed_head_keeps_its_styles() {
        let raw = "<html><head><style>a{}</style><body><p>x</p></body></html>";
        assert_eq!(extract_fragment(raw), "<style>a{}</style><p>x</p>");
    }

    #[test]
    fn header_element_is_not_a_head() {
        let raw = "<body><header><style>h{}</style></header></body>";
        assert_eq!(extract_fragment(raw), "<header><style>h{}</style></header>");
    }

    #[test]
    fn styles_outside_head_are_not_duplicated() {
        let raw = "<head></head><body><style>b{}</style><p>x</p></body>";
        assert_eq!(extract_fragment(raw), "<style>b{}</style><p>x</p>");
    }

    #[test]
    fn rewrites_double_quoted_src() {
        let out = rewrite_asset_paths(r#"<img src="foo_files/img.png">"#, &slug("abc"));
        assert_eq!(out, r#"<img src="documents/abc/foo_files/img.png">"#);
    }

    #[test]
    fn rewrites_single_quoted_href() {
        let out = rewrite_asset_paths("<link href='doc_files/s.css'>", &slug("abc"));
        assert_eq!(out, "<link href='documents/abc/doc_files/s.css'>");
    }

    #[test]
    fn leaves_other_paths_alone() {
        let html = r#"<img src="other/img.png"><a href="https://example.com/">x</a>"#;
        assert_eq!(rewrite_asset_paths(html, &slug("abc")), html);
    }

    #[test]
    fn absolute_asset_urls_are_not_prefixed() {
        let html = concat!(
            r#"<img src="https://cdn.example.com/a_files/x.png">"#,
            r#"<img src="//cdn.example.com/a_files/y.png">"#,
            r#"<link href="/static/a_files/s.css">"#,
            r#"<div style="background:url(data:a_files/z)"></div>"#,
        );
        assert_eq!(rewrite_asset_paths(html, &slug("abc")), html);

        let out = rewrite_asset_paths(r#"<img src="a_files/t:1.png">"#, &slug("abc"));
        assert_eq!(out, r#"<img src="documents/abc/a_files/t:1.png">"#);
    }

    #[test]
    fn rewrites_css_urls_in_all_quote_styles() {
        let css = r#"a{background:url(x_files/a.png)} b{background:url('x_files/b.png')} c{background:url("x_files/c.png")} d{background:url(none.png)}"#;
        let out = rewrite_asset_paths(css, &slug("s"));
        assert_eq!(
            out,
            r#"a{background:url(documents/s/x_files/a.png)} b{background:url('documents/s/x_files/b.png')} c{background:url("documents/s/x_files/c.png")} d{background:url(none.png)}"#
        );
    }

    #[test]
    fn rewriting_is_idempotent() {
        let once = rewrite_asset_paths(r#"<img src="foo_files/img.png">"#, &slug("abc"));
        let twice = rewrite_asset_paths(&once, &slug("abc"));
        assert_eq!(once, twice);
    }

    #[test]
    fn full_pass_on_export() {
        let raw = "<html><head><style>.c{background:url(p_files/bg.png)}</style></head>\
                   <body><img SRC=\"p_files/i.png\"></body></html>";
        assert_eq!(
            normalize_document_html(raw, &slug("paper")),
            "<style>.c{background:url(documents/paper/p_files/bg.png)}</style><img SRC=\"documents/paper/p_files/i.png\">"
        );
    }
}
