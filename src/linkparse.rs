//! Update link parsing
//!
//! Converts one raw anchor element into a structured [`UpdateRecord`]. Each
//! extraction works on the serialized markup alone and fails with a named
//! error instead of degrading to an empty string.

use chrono::NaiveDate;
use url::Url;

use crate::domain::{RawLink, UpdateRecord};
use crate::error::{PatchlagError, Result};

/// Class marker carried by update-history navigation links
pub const UPDATE_LINK_CLASS: &str = "supLeftNavLink";

/// Distinguishes cumulative-update links from other navigation links
const BUILD_MARKER: &str = "OS Build";

/// Origin the site-relative hrefs resolve against
const SUPPORT_ORIGIN: &str = "https://support.microsoft.com";

/// Date format on en-US update-history pages, e.g. "July 11, 2023"
const DATE_FORMAT: &str = "%B %d, %Y";

/// The "is an update link" predicate: navigation class plus a build token
pub fn is_update_link(link: &RawLink) -> bool {
    link.css_class == UPDATE_LINK_CLASS && link.markup.contains(BUILD_MARKER)
}

/// Parse one update link into an [`UpdateRecord`]
pub fn parse(link: &RawLink) -> Result<UpdateRecord> {
    if !is_update_link(link) {
        return Err(malformed(format!(
            "element with class '{}' is not an update link",
            link.css_class
        )));
    }

    let name = normalize_separator(&inner_text(&link.markup)?);
    let release_date = release_date(&name)?;
    let kb = kb_identifier(&link.href)?;
    let info_url = info_url(&link.href)?;
    let build = build_token(&link.markup)?;

    Ok(UpdateRecord {
        name,
        kb,
        info_url,
        build,
        release_date,
    })
}

/// Anchor inner text: strictly between the closing '>' of the open tag and
/// the next '<'
fn inner_text(markup: &str) -> Result<String> {
    let open = markup
        .find('>')
        .ok_or_else(|| malformed("markup has no tag close"))?;
    let rest = &markup[open + 1..];
    let end = rest
        .find('<')
        .ok_or_else(|| malformed("unterminated inner text"))?;
    let text = rest[..end].trim();
    if text.is_empty() {
        return Err(malformed("empty inner text"));
    }
    Ok(text.to_string())
}

/// The vendor encodes the date/KB separator inconsistently: as the
/// `&#x2014;` escape, as a literal em-dash, or already as a plain hyphen.
fn normalize_separator(label: &str) -> String {
    label
        .replace("&#x2014;", " - ")
        .replace('\u{2014}', " - ")
}

/// Release date: the text before the first "-" in the normalized label
fn release_date(label: &str) -> Result<NaiveDate> {
    let text = match label.find('-') {
        Some(i) => &label[..i],
        None => label,
    }
    .trim();
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| PatchlagError::DateParseFailed {
        text: text.to_string(),
    })
}

/// KB identifier: "KB" prefixed to the final href path segment
fn kb_identifier(href: &str) -> Result<String> {
    let segment = href
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(format!("href '{}' has no path segment", href)))?;
    Ok(format!("KB{}", segment))
}

/// Support article URL: fixed origin plus the site-relative href
fn info_url(href: &str) -> Result<Url> {
    Url::parse(&format!("{}{}", SUPPORT_ORIGIN, href))
        .map_err(|e| malformed(format!("href '{}' yields an invalid url: {}", href, e)))
}

/// Build token(s): inside the first parenthesis pair, with the
/// "OS Build"/"OS Builds" prefix stripped. May carry two builds when an
/// update covers two architectures ("22621.1992 and 22631.1992").
fn build_token(markup: &str) -> Result<String> {
    let open = markup
        .find('(')
        .ok_or_else(|| malformed("no build parenthesis"))?;
    let rest = &markup[open + 1..];
    let close = rest
        .find(')')
        .ok_or_else(|| malformed("unterminated build parenthesis"))?;
    let inner = &rest[..close];
    let after = inner
        .find(BUILD_MARKER)
        .map(|i| &inner[i + BUILD_MARKER.len()..])
        .ok_or_else(|| malformed("parenthesis does not name an OS build"))?;
    let token = after.trim_start_matches('s').trim();
    if token.is_empty() {
        return Err(malformed("empty build token"));
    }
    Ok(token.to_string())
}

fn malformed(reason: impl Into<String>) -> PatchlagError {
    PatchlagError::MalformedUpdateLink {
        reason: reason.into(),
    }
}
