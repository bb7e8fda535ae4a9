//! Line-level separation of code from comments in C++ source.

/// One source line with comments removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    /// Code outside comments; string and character literals are kept verbatim.
    pub code: String,
    /// Whether any part of the line is comment text.
    pub has_comment: bool,
    /// Byte offset of a `//` marker that is not inside a literal or block comment.
    pub line_comment: Option<usize>,
}

/// Separate the code of a line from its comments, carrying `/* ... */` state across lines.
///
/// A `'` inside a numeric literal and followed by a hex digit is a digit separator
/// (`1'000`, `0xFF'FF`), not the start of a character literal.
pub fn split_comment(line: &str, in_block: &mut bool) -> SplitLine {
    let mut code = String::with_capacity(line.len());
    let mut has_comment = *in_block;
    let mut line_comment = None;
    let mut in_literal: Option<char> = None;
    let mut prev: Option<char> = None;
    let mut in_number = false;
    let mut chars = line.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if *in_block {
            if c == '*' && next == Some('/') {
                chars.next();
                *in_block = false;
            }
            continue;
        }
        if let Some(quote) = in_literal {
            code.push(c);
            if c == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    code.push(escaped);
                }
            } else if c == quote {
                in_literal = None;
            }
            continue;
        }
        match (c, next) {
            ('/', Some('/')) => {
                has_comment = true;
                line_comment = Some(offset);
                break;
            }
            ('/', Some('*')) => {
                chars.next();
                has_comment = true;
                *in_block = true;
                prev = None;
                in_number = false;
                continue;
            }
            ('\'', Some(n)) if in_number && n.is_ascii_hexdigit() => {}
            ('"' | '\'', _) => in_literal = Some(c),
            _ => {}
        }
        in_number = if c.is_ascii_digit() && !prev.is_some_and(is_word_char) {
            true
        } else {
            in_number && (is_word_char(c) || c == '.' || c == '\'')
        };
        code.push(c);
        prev = Some(c);
    }

    SplitLine {
        code,
        has_comment,
        line_comment,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "source_text_tests.rs"]
mod tests;
