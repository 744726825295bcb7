use std::io::Cursor;
use std::sync::LazyLock;

use regex::Regex;

const RENDER_WIDTH: usize = 10_000;

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").expect("valid body regex"));
static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("valid script regex"));
static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("valid style regex"));
static TOC_NAV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<nav\b[^>]*\bepub:type\s*=\s*["'][^"']*\btoc\b"#).expect("valid toc nav regex")
});

pub fn is_navigation_document(xhtml: &str) -> bool {
    TOC_NAV.is_match(xhtml)
}

pub fn body_text(xhtml: &str) -> Result<String, html2text::Error> {
    let body = BODY
        .captures(xhtml)
        .and_then(|captures| captures.get(1))
        .map_or(xhtml, |body| body.as_str());
    let body = SCRIPT.replace_all(body, "");
    let body = STYLE.replace_all(&body, "");

    html2text::config::plain_no_decorate()
        .string_from_read(Cursor::new(body.as_bytes()), RENDER_WIDTH)
}

pub fn html_to_text(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .flat_map(|line| line.split("  "))
        .map(str::trim)
        .filter(|phrase| !phrase.is_empty())
        .collect::<Vec<&str>>()
        .join("\n")
}
