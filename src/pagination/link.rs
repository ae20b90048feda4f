//! Link header parsing (RFC 8288 web linking)
//!
//! Parses values like
//! `<https://api.github.com/user/orgs?page=2>; rel="next", <...>; rel="last"`
//! into ordered [`LinkEntry`] values resolved against a base URL.

use crate::error::{Error, Result};
use tracing::trace;
use url::Url;

/// One typed hyperlink from a Link header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    /// Relation type from the `rel` parameter (empty when absent)
    pub rel: String,
    /// Absolute target URL
    pub target: Url,
}

impl LinkEntry {
    /// Check whether this entry carries the given relation type
    ///
    /// Comparison is ASCII case-insensitive. A `rel` holding several
    /// space-separated types matches any of them.
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rel
            .split_ascii_whitespace()
            .any(|r| r.eq_ignore_ascii_case(rel))
    }
}

/// Ordered links parsed from a single Link header value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkHeader {
    entries: Vec<LinkEntry>,
}

impl LinkHeader {
    /// Parse an optional header value; absent or blank yields no links
    pub fn parse(base: &Url, header: Option<&str>) -> Result<Self> {
        let entries = match header {
            Some(value) => parse_links(base, value)?,
            None => Vec::new(),
        };
        Ok(Self { entries })
    }

    /// First entry with the given relation type
    pub fn find(&self, rel: &str) -> Option<&LinkEntry> {
        self.entries.iter().find(|entry| entry.has_rel(rel))
    }

    /// Target of the `next` relation
    pub fn next(&self) -> Option<&Url> {
        self.find("next").map(|entry| &entry.target)
    }

    /// Number of parsed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were parsed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in header order
    pub fn iter(&self) -> std::slice::Iter<'_, LinkEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a LinkHeader {
    type Item = &'a LinkEntry;
    type IntoIter = std::slice::Iter<'a, LinkEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse a Link header value into entries resolved against `base`
///
/// Entries that cannot be parsed (no `<...>` target, unresolvable URL) are
/// skipped. An unterminated quoted string makes the whole value
/// unsegmentable and is an error.
pub fn parse_links(base: &Url, header: &str) -> Result<Vec<LinkEntry>> {
    let mut entries = Vec::new();

    for segment in split_outside(header, ',')? {
        match parse_entry(base, segment)? {
            Some(entry) => entries.push(entry),
            None => {
                if !segment.trim().is_empty() {
                    trace!(segment, "Skipping malformed link entry");
                }
            }
        }
    }

    Ok(entries)
}

/// Parse one `<url>; param=value; ...` entry
fn parse_entry(base: &Url, segment: &str) -> Result<Option<LinkEntry>> {
    let segment = segment.trim();
    let Some(rest) = segment.strip_prefix('<') else {
        return Ok(None);
    };
    let Some(close) = rest.find('>') else {
        return Ok(None);
    };

    let target = rest[..close].trim();
    if target.is_empty() {
        return Ok(None);
    }
    let Ok(target) = base.join(target) else {
        return Ok(None);
    };

    let mut rel = None;
    for param in split_outside(&rest[close + 1..], ';')? {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("rel") && rel.is_none() {
            rel = Some(unquote(value.trim()));
        }
    }

    Ok(Some(LinkEntry {
        rel: rel.unwrap_or_default(),
        target,
    }))
}

/// Split on `sep` where it is outside `<...>` and outside quoted strings
///
/// A `<` that is never closed ends its segment at the first `sep` after it,
/// so the unclosed entry cannot swallow the entries that follow.
fn split_outside(input: &str, sep: char) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_angle = false;
    let mut in_quote = false;
    let mut escaped = false;
    // First separator seen inside the currently open `<`
    let mut angle_sep: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if in_quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_quote = false,
                _ => {}
            }
            continue;
        }

        match c {
            '<' if in_angle => {
                if let Some(at) = angle_sep {
                    return split_unclosed(input, start, at, sep, parts);
                }
            }
            '<' => in_angle = true,
            '>' if in_angle => {
                in_angle = false;
                angle_sep = None;
            }
            '"' if !in_angle => in_quote = true,
            c if c == sep && in_angle => {
                angle_sep.get_or_insert(i);
            }
            c if c == sep => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if in_quote {
        return Err(Error::link_header(format!(
            "unterminated quoted string in '{input}'"
        )));
    }

    if let (true, Some(at)) = (in_angle, angle_sep) {
        return split_unclosed(input, start, at, sep, parts);
    }

    parts.push(&input[start..]);
    Ok(parts)
}

/// Close the segment `start..at` left open by an unterminated `<` and
/// split the remainder afresh
fn split_unclosed<'a>(
    input: &'a str,
    start: usize,
    at: usize,
    sep: char,
    mut parts: Vec<&'a str>,
) -> Result<Vec<&'a str>> {
    parts.push(&input[start..at]);
    parts.extend(split_outside(&input[at + sep.len_utf8()..], sep)?);
    Ok(parts)
}

/// Strip surrounding quotes and unescape a parameter value
fn unquote(value: &str) -> String {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
    else {
        return value.trim_matches('\'').to_string();
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}
