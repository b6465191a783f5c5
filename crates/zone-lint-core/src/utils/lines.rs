//! Line-oriented helpers for lexical rules.
//!
//! Most built-in rules work on raw text rather than a syntax tree. These
//! helpers give them 1-indexed line numbers and a cheap way to ignore
//! comment text.

use regex::Regex;
use std::borrow::Cow;

/// Strips comments from source lines while tracking `/* ... */` blocks.
///
/// String literals on a single line are respected, so `"http://x"` is not
/// mistaken for a line comment. Template literals spanning lines are not
/// tracked.
#[derive(Debug, Default)]
pub struct CommentTracker {
    in_block: bool,
}

impl CommentTracker {
    /// Creates a tracker positioned outside any comment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while inside an unterminated block comment.
    #[must_use]
    pub fn in_block(&self) -> bool {
        self.in_block
    }

    /// Returns the code portion of `line` and advances the block state.
    pub fn strip<'a>(&mut self, line: &'a str) -> Cow<'a, str> {
        if !self.in_block && !line.contains("//") && !line.contains("/*") {
            return Cow::Borrowed(line);
        }

        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        let mut quote: Option<char> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if self.in_block {
                if c == '*' && next == Some('/') {
                    self.in_block = false;
                    i += 2;
                } else {
                    i += 1;
                }
                continue;
            }

            if let Some(q) = quote {
                out.push(c);
                if c == '\\' {
                    if let Some(n) = next {
                        out.push(n);
                        i += 2;
                        continue;
                    }
                } else if c == q {
                    quote = None;
                }
                i += 1;
                continue;
            }

            match (c, next) {
                ('/', Some('/')) => break,
                ('/', Some('*')) => {
                    self.in_block = true;
                    i += 2;
                }
                ('"' | '\'' | '`', _) => {
                    quote = Some(c);
                    out.push(c);
                    i += 1;
                }
                _ => {
                    out.push(c);
                    i += 1;
                }
            }
        }

        Cow::Owned(out)
    }
}

/// Returns the 1-indexed lines whose text matches `pattern`.
///
/// With `skip_comments`, matches inside `//` and `/* */` comments are ignored.
#[must_use]
pub fn matching_lines(content: &str, pattern: &Regex, skip_comments: bool) -> Vec<usize> {
    let mut tracker = CommentTracker::new();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let code = if skip_comments {
                tracker.strip(line)
            } else {
                Cow::Borrowed(line)
            };
            pattern.is_match(&code).then_some(i + 1)
        })
        .collect()
}

/// Returns the `(byte offset, length)` of a 1-indexed line, without its
/// line terminator.
#[must_use]
pub fn line_span(content: &str, line: usize) -> Option<(usize, usize)> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (i, raw) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let text = raw.trim_end_matches(['\n', '\r']);
            return Some((offset, text.len()));
        }
        offset += raw.len();
    }
    None
}
