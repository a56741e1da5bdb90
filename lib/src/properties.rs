//! Reads the persisted metadata record: a flat, Java-style `.properties` file.
//!
//! Records are always decoded as UTF-8. Supported syntax: `key=value`, `key:value` and
//! `key value` entries, `#`/`!` comment lines, backslash line continuations and the
//! `\t \n \r \f \uXXXX` escapes. A later entry for the same key replaces an earlier one.

use crate::errors::MetadataError;
use log::debug;
use std::collections::HashMap;
use std::path::Path;
use std::str::Chars;

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyRecord {
    entries: HashMap<String, String>,
}

impl PropertyRecord {
    pub fn from_file(path: &Path) -> Result<Self, MetadataError> {
        debug!("Reading record: {}", path.display());
        let bytes =
            std::fs::read(path).map_err(|e| MetadataError::source_unavailable(path.display(), e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| MetadataError::source_unavailable(path.display(), e))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, MetadataError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut entries = HashMap::new();
        for (line_no, line) in logical_lines(text) {
            let (key, value) = split_entry(&line);
            let key = unescape(key, line_no)?;
            let value = unescape(value, line_no)?;
            entries.insert(key, value);
        }
        Ok(PropertyRecord { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// The value for `key`, or `default` when the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

// Natural lines end at `\r\n`, `\n` or a bare `\r`.
fn natural_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let skip = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[i + skip..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

// Joins continued natural lines and drops blanks and comments. Each logical line carries
// the number of the natural line it started on.
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, String)> = None;
    for (idx, raw) in natural_lines(text).enumerate() {
        let trimmed = raw.trim_start_matches(WHITESPACE);
        let (start, mut buf) = match current.take() {
            Some(partial) => partial,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };
        if ends_with_continuation(trimmed) {
            buf.push_str(&trimmed[..trimmed.len() - 1]);
            current = Some((start, buf));
        } else {
            buf.push_str(trimmed);
            lines.push((start, buf));
        }
    }
    if let Some(last) = current {
        lines.push(last);
    }
    lines
}

// The key ends at the first unescaped separator or whitespace.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let rest = line[key_end..].trim_start_matches(WHITESPACE);
    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
    (&line[..key_end], rest.trim_start_matches(WHITESPACE))
}

fn read_hex(chars: &mut Chars, line: usize) -> Result<u32, MetadataError> {
    let hex: String = chars.by_ref().take(4).collect();
    let malformed = || MetadataError::MalformedRecord {
        line,
        reason: format!("bad \\u escape '\\u{}'", hex),
    };
    if hex.chars().count() != 4 {
        return Err(malformed());
    }
    u32::from_str_radix(&hex, 16).map_err(|_| malformed())
}

fn unicode_escape(chars: &mut Chars, line: usize) -> Result<char, MetadataError> {
    let code = read_hex(chars, line)?;
    let code = if (0xD800..0xDC00).contains(&code) {
        // high surrogate: the low half follows as a second escape
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return Err(MetadataError::MalformedRecord {
                line,
                reason: "unpaired surrogate in \\u escape".to_string(),
            });
        }
        let low = read_hex(chars, line)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(MetadataError::MalformedRecord {
                line,
                reason: "unpaired surrogate in \\u escape".to_string(),
            });
        }
        0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00)
    } else {
        code
    };
    char::from_u32(code).ok_or_else(|| MetadataError::MalformedRecord {
        line,
        reason: format!("invalid code point {:#x}", code),
    })
}

fn unescape(s: &str, line: usize) -> Result<String, MetadataError> {
    if !s.contains('\\') {
        return Ok(s.to_string());
    }
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(unicode_escape(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        let record = PropertyRecord::parse("a=1\nb:2\nc 3\nd = 4\ne\t:  5\nf\n").unwrap();
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.get("c"), Some("3"));
        assert_eq!(record.get("d"), Some("4"));
        assert_eq!(record.get("e"), Some("5"));
        assert_eq!(record.get("f"), Some(""));
        assert_eq!(record.len(), 6);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let record = PropertyRecord::parse("# comment\n! another\n\n   \ntitle=Hello\n").unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("title"), Some("Hello"));
        assert_eq!(record.get("# comment"), None);
    }

    #[test]
    fn test_value_keeps_separators_and_trailing_space() {
        let record = PropertyRecord::parse("licenseURL=http://example.org/a=b:c \n").unwrap();
        assert_eq!(record.get("licenseURL"), Some("http://example.org/a=b:c "));
    }

    #[test]
    fn test_continuation() {
        let text = "authors=Alice;\\\n    Bob;\\\n    Carol\nnext=1\n";
        let record = PropertyRecord::parse(text).unwrap();
        assert_eq!(record.get("authors"), Some("Alice;Bob;Carol"));
        assert_eq!(record.get("next"), Some("1"));
    }

    #[test]
    fn test_escaped_backslash_is_not_a_continuation() {
        let record = PropertyRecord::parse("path=C:\\\\\nother=x\n").unwrap();
        assert_eq!(record.get("path"), Some("C:\\"));
        assert_eq!(record.get("other"), Some("x"));
    }

    #[test]
    fn test_escapes() {
        let record =
            PropertyRecord::parse("key\\=with\\:seps=v\\tw\nname=Garc\\u00eda\nemoji=\\ud83d\\ude00\n")
                .unwrap();
        assert_eq!(record.get("key=with:seps"), Some("v\tw"));
        assert_eq!(record.get("name"), Some("García"));
        assert_eq!(record.get("emoji"), Some("😀"));
    }

    #[test]
    fn test_utf8_is_read_verbatim() {
        let record = PropertyRecord::parse("\u{feff}title=Ontología de ejemplo\n").unwrap();
        assert_eq!(record.get("title"), Some("Ontología de ejemplo"));
    }

    #[test]
    fn test_bad_unicode_escape() {
        let err = PropertyRecord::parse("a=1\nb=\\u12x\n").unwrap_err();
        match err {
            MetadataError::MalformedRecord { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }
        assert!(PropertyRecord::parse("b=\\ud83d\n").is_err());
    }

    #[test]
    fn test_line_endings() {
        let record = PropertyRecord::parse("a=1\rb=2\r\nc=3\nd=Alice;\\\r  Bob\r").unwrap();
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.get("c"), Some("3"));
        assert_eq!(record.get("d"), Some("Alice;Bob"));
        assert_eq!(record.len(), 4);

        let err = PropertyRecord::parse("a=1\r\nb=2\rc=\\u12x\n").unwrap_err();
        match err {
            MetadataError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_later_duplicate_wins() {
        let record = PropertyRecord::parse("title=one\ntitle=two\n").unwrap();
        assert_eq!(record.get("title"), Some("two"));
        assert_eq!(record.get_or("missing", "fallback"), "fallback");
    }

    #[test]
    fn test_missing_file() {
        let err = PropertyRecord::from_file(Path::new("fixtures/nope.properties")).unwrap_err();
        assert!(err.is_recoverable());
    }
}
