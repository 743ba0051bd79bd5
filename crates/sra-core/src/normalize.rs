//! Field-level cleanup applied by the table builders
//!
//! Each normalizer is a pure function on a borrowed string; absence is
//! handled at the call site so "absent stays absent" holds for every
//! transform.

/// Title-case each whitespace-separated token, collapsing runs of
/// whitespace to single spaces. Idempotent.
pub fn proper_name(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a token, lowercase the rest
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Blank out values carrying CJK ideographs (U+4E00..U+9FFF); the
/// destination tables hold Latin-script names only.
pub fn blank_if_cjk(value: &str) -> String {
    if value.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)) {
        String::new()
    } else {
        value.to_string()
    }
}

/// Normalize a website value: trim surrounding whitespace, strip one
/// leading scheme prefix, and ensure a `www.` prefix. Nothing else about
/// the value is touched.
pub fn clean_website(value: &str) -> String {
    let mut site = value.trim();
    if let Some(rest) = site.strip_prefix("https://") {
        site = rest;
    } else if let Some(rest) = site.strip_prefix("http://") {
        site = rest;
    }
    if site.starts_with("www.") {
        site.to_string()
    } else {
        format!("www.{site}")
    }
}
