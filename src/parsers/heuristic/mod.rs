//! Best-effort function finder for languages without a bundled grammar.
//!
//! A header regex locates something that looks like a function signature
//! ending in `{`, and the body is closed by counting brace pairs from that
//! brace. Braces inside string or character literals and comments are
//! counted like any other brace, preprocessor conditionals are not
//! understood, and declarations without a body are never reported.

pub mod c_family;
pub mod javascript;

use log::warn;
use regex::Regex;

/// A function located by the scanner, as byte offsets into the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFunction {
    pub name: String,
    pub start: usize,
    /// Exclusive end. When `terminated` is false this is the end of input.
    pub end: usize,
    pub terminated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderMatch {
    name: String,
    start: usize,
    open_brace: usize,
}

/// A set of header patterns for one language family.
///
/// Every pattern must end with `\{` and define a `name` group. An optional
/// `decl` group marks where the snippet starts; without it the whole match
/// start is used.
pub struct HeaderScanner {
    patterns: Vec<Regex>,
    reserved: &'static [&'static str],
}

impl HeaderScanner {
    pub fn new(sources: &[&str], reserved: &'static [&'static str]) -> Self {
        let patterns = sources
            .iter()
            .filter_map(|source| match Regex::new(source) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!("Failed to compile header pattern {:?}: {}", source, e);
                    None
                }
            })
            .collect();

        Self { patterns, reserved }
    }

    /// Scans the whole source. After each function the scan resumes past its
    /// closing brace, so blocks inside a body are never reported.
    pub fn scan(&self, source: &str) -> Vec<ScannedFunction> {
        let mut functions = Vec::new();
        let mut pos = 0;

        while let Some(header) = self.next_header(source, pos) {
            match find_matching_brace(source, header.open_brace) {
                Some(close) => {
                    functions.push(ScannedFunction {
                        name: header.name,
                        start: header.start,
                        end: close + 1,
                        terminated: true,
                    });
                    pos = close + 1;
                }
                None => {
                    functions.push(ScannedFunction {
                        name: header.name,
                        start: header.start,
                        end: source.len(),
                        terminated: false,
                    });
                    break;
                }
            }
        }

        functions
    }

    fn next_header(&self, source: &str, from: usize) -> Option<HeaderMatch> {
        self.patterns
            .iter()
            .filter_map(|pattern| self.first_match(pattern, source, from))
            .min_by_key(|header| header.start)
    }

    fn first_match(&self, pattern: &Regex, source: &str, from: usize) -> Option<HeaderMatch> {
        let mut pos = from;

        while pos <= source.len() {
            let caps = pattern.captures_at(source, pos)?;
            let whole = caps.get(0)?;
            let name = caps.name("name")?.as_str();

            if self.reserved.contains(&name) {
                // `if (...) {` and friends: step over the header only, the
                // block itself may still hold function definitions.
                pos = whole.end();
                continue;
            }

            let start = caps.name("decl").map_or(whole.start(), |decl| decl.start());
            return Some(HeaderMatch {
                name: name.to_string(),
                start,
                open_brace: whole.end() - 1,
            });
        }

        None
    }
}

/// Returns the index of the brace that closes the one at `open`.
pub fn find_matching_brace(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, byte) in bytes[open..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }

    None
}
