//! Format-string scanner
//!
//! A single forward pass over the format string. Literal runs are copied
//! verbatim; `%` starts a directive:
//!
//! | Directive     | Output                                      |
//! |---------------|---------------------------------------------|
//! | `%yyyy`       | 4-digit year                                |
//! | `%yy`         | 2-digit year                                |
//! | `%mm`         | month, 01-12                                |
//! | `%m`          | minute, 00-59                               |
//! | `%dd`         | day of month                                |
//! | `%h`          | hour, 00-23                                 |
//! | `%s`          | second                                      |
//! | `%v`          | next substitution value                     |
//! | `%FILE`       | call-site file name                         |
//! | `%FUNC`       | call-site function                          |
//! | `%PATH`       | call-site path                              |
//! | `%LINE`       | call-site line                              |
//! | `%.<name>(`   | open the registered style `<name>`          |
//! | `%)`          | close the innermost style                   |
//! | `%%`          | a literal `%`                               |
//!
//! `%m` versus `%mm` is decided only by whether a second `m` follows, and the
//! `(` after a style name is a delimiter: no closing `)` is expected.

use super::call_site::CallSite;
use super::error::{LoggerError, Result};
use super::modifier::RESET_SEQUENCE;
use super::padding::pad_left;
use super::style::StyleRegistry;
use super::style_stack::StyleStack;
use super::value::SubstitutionQueue;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Output of one render.
///
/// `styled` carries the terminal escape sequences, `plain` is the same text
/// with every escape left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub styled: String,
    pub plain: String,
}

impl Rendered {
    fn push_text(&mut self, text: &str) {
        self.styled.push_str(text);
        self.plain.push_str(text);
    }

    fn push_char(&mut self, c: char) {
        self.styled.push(c);
        self.plain.push(c);
    }

    fn push_escape(&mut self, escape: &str) {
        self.styled.push_str(escape);
    }

    /// Styled output terminated by a full reset and a newline
    pub fn styled_line(&self) -> String {
        format!("{}{}\n", self.styled, RESET_SEQUENCE)
    }

    /// Plain output terminated by a newline
    pub fn plain_line(&self) -> String {
        format!("{}\n", self.plain)
    }
}

/// Renders format strings against one call site and one instant
pub struct DirectiveScanner<'a> {
    registry: &'a StyleRegistry,
    site: &'a CallSite,
    now: NaiveDateTime,
}

impl<'a> DirectiveScanner<'a> {
    pub fn new(registry: &'a StyleRegistry, site: &'a CallSite, now: NaiveDateTime) -> Self {
        Self {
            registry,
            site,
            now,
        }
    }

    /// Render `format`, consuming values from `queue` for each `%v`.
    ///
    /// Any malformed directive aborts the whole render. Styles left open at
    /// the end of the string are not closed here; the line terminator added by
    /// [`Rendered::styled_line`] resets them.
    pub fn scan(&self, format: &str, queue: &mut SubstitutionQueue) -> Result<Rendered> {
        let bytes = format.as_bytes();
        let n = bytes.len();
        let mut out = Rendered::default();
        let mut stack = StyleStack::new();
        let mut literal_start = 0;
        let mut i = 0;

        while i < n {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            if i + 1 == n {
                return Err(LoggerError::EmptyDirective);
            }

            out.push_text(&format[literal_start..i]);

            let at = |k: usize| bytes.get(k).copied();
            let last = match bytes[i + 1] {
                b'y' => {
                    if at(i + 2) != Some(b'y') {
                        return Err(LoggerError::unknown_directive("%y"));
                    }
                    if at(i + 3) == Some(b'y') && at(i + 4) == Some(b'y') {
                        out.push_text(&self.now.year().to_string());
                        i + 4
                    } else {
                        out.push_text(&two_digits(self.now.year().rem_euclid(100)));
                        i + 2
                    }
                }
                b'm' => {
                    if at(i + 2) == Some(b'm') {
                        out.push_text(&two_digits(self.now.month()));
                        i + 2
                    } else {
                        out.push_text(&two_digits(self.now.minute()));
                        i + 1
                    }
                }
                b's' => {
                    out.push_text(&two_digits(self.now.second()));
                    i + 1
                }
                b'h' => {
                    out.push_text(&two_digits(self.now.hour()));
                    i + 1
                }
                b'd' => {
                    if at(i + 2) != Some(b'd') {
                        return Err(LoggerError::unknown_directive("%d"));
                    }
                    out.push_text(&two_digits(self.now.day()));
                    i + 2
                }
                b'v' => {
                    out.push_text(&queue.pop()?);
                    i + 1
                }
                b'F' => {
                    if matches_word(bytes, i + 2, b"ILE") {
                        out.push_text(self.site.filename);
                    } else if matches_word(bytes, i + 2, b"UNC") {
                        out.push_text(self.site.function);
                    } else {
                        return Err(LoggerError::directive_parse(directive_at(format, i, 5)));
                    }
                    i + 4
                }
                b'P' => {
                    if !matches_word(bytes, i + 2, b"ATH") {
                        return Err(LoggerError::directive_parse(directive_at(format, i, 5)));
                    }
                    out.push_text(self.site.path);
                    i + 4
                }
                b'L' => {
                    if !matches_word(bytes, i + 2, b"INE") {
                        return Err(LoggerError::directive_parse(directive_at(format, i, 5)));
                    }
                    out.push_text(&self.site.line.to_string());
                    i + 4
                }
                b'.' => {
                    let name_start = i + 2;
                    let Some(offset) = bytes[name_start..].iter().position(|&b| b == b'(') else {
                        return Err(LoggerError::directive_parse(&format[i..]));
                    };
                    let name_end = name_start + offset;

                    let style = self.registry.lookup(&format[name_start..name_end])?;
                    out.push_escape(&stack.open(style, self.registry)?);
                    name_end
                }
                b')' => {
                    out.push_escape(&stack.close(self.registry)?);
                    i + 1
                }
                b'%' => {
                    out.push_char('%');
                    i + 1
                }
                _ => {
                    let token = format[i + 1..].chars().next().map_or_else(
                        || "%".to_string(),
                        |c| format!("%{}", c),
                    );
                    return Err(LoggerError::unknown_directive(token));
                }
            };

            i = last + 1;
            literal_start = i;
        }

        if literal_start < n {
            out.push_text(&format[literal_start..]);
        }

        Ok(out)
    }
}

fn two_digits(value: impl ToString) -> String {
    pad_left(value.to_string(), 2, '0')
}

fn matches_word(bytes: &[u8], start: usize, word: &[u8]) -> bool {
    bytes.get(start..start + word.len()) == Some(word)
}

/// Up to `len` characters of the directive starting at byte `start`, for error messages
fn directive_at(format: &str, start: usize, len: usize) -> String {
    format[start..].chars().take(len).collect()
}
