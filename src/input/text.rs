//! Line oriented text import.
//!
//! One subnet per line: `<cidr> [description words...] [#color]`.
//! A trailing word starting with `#` is the color. Blank lines and lines
//! whose first word starts with `#` are comments and skipped.

use crate::models::SubnetRecord;
use regex::Regex;
use std::sync::OnceLock;

/// Regex for splitting a line into the CIDR and the rest.
static LINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_line_regex() -> &'static Regex {
    LINE_REGEX.get_or_init(|| Regex::new(r"^(\S+)(?:\s+(.*?))?\s*$").expect("Invalid Regex"))
}

/// Parse text into records. CIDRs are validated later by [`crate::build_subnets`].
pub fn parse_subnet_text(input: &str) -> Vec<SubnetRecord> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<SubnetRecord> {
    let caps = get_line_regex().captures(line)?;
    let cidr = caps.get(1)?.as_str().to_string();
    let mut words: Vec<&str> = caps
        .get(2)
        .map_or_else(Vec::new, |m| m.as_str().split_whitespace().collect());
    let color = match words.last() {
        Some(word) if word.starts_with('#') => words.pop().map(str::to_string),
        _ => None,
    };
    let description = Some(words.join(" ")).filter(|d| !d.is_empty());
    log::trace!("parse_line({line}) -> cidr={cidr} description={description:?} color={color:?}");
    Some(SubnetRecord {
        cidr,
        description,
        color,
    })
}

/// Render records back to the text format, `<cidr> [description] [color]`.
pub fn to_subnet_text(records: &[SubnetRecord]) -> String {
    records
        .iter()
        .map(|r| {
            let mut line = r.cidr.clone();
            for part in [r.description.as_deref(), r.color.as_deref()]
                .into_iter()
                .flatten()
                .filter(|p| !p.is_empty())
            {
                line.push(' ');
                line.push_str(part);
            }
            line.push('\n');
            line
        })
        .collect()
}
