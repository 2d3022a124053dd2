//! Version descriptor parser.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::error::VersionError;

/// Characters accepted as the separator and stripped from the file's ends:
/// ASCII whitespace, the information separators U+001C..U+001F, and the
/// Unicode space characters, so `1.2.3\u{a0}Beta` parses.
const SEPARATOR_CLASS: &str = "[\t\n\u{b}\u{c}\r\u{1c}-\u{1f} \u{85}\u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}]";

fn descriptor_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Two to four dotted integer groups, then optionally one separator
        // and a display suffix running to the end of the line.
        let pattern = format!(r"^(\d+(\.\d+){{1,3}})(?:{}(.+))?$", SEPARATOR_CLASS);
        Regex::new(&pattern).expect("descriptor pattern is valid")
    })
}

/// Whitespace as the descriptor format understands it.
pub fn is_descriptor_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// A version descriptor split into its numeric and display parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    /// Dotted-integer prefix, e.g. `1.2.3`.
    pub numeric_version: String,

    /// The whole descriptor, suffix included, used as the display name.
    pub full_descriptor: String,

    /// Display suffix after the separator, if present.
    pub suffix: Option<String>,
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_descriptor)
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse an already-stripped version descriptor.
///
/// The entire input must match; there is no partial or fallback result.
pub fn parse_version(text: &str) -> Result<ParsedVersion, VersionError> {
    let caps = descriptor_regex()
        .captures(text)
        .ok_or_else(|| VersionError::InvalidFormat(text.to_string()))?;

    // Group 0 and 1 always participate in a successful match.
    let full = caps.get(0).map_or("", |m| m.as_str());
    let numeric = caps.get(1).map_or("", |m| m.as_str());

    Ok(ParsedVersion {
        numeric_version: numeric.to_string(),
        full_descriptor: full.to_string(),
        suffix: caps.get(3).map(|m| m.as_str().to_string()),
    })
}
