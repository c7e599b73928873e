//! Line assembly for the INI parser.
//!
//! Joins continuation lines into logical lines and strips inline comments
//! while respecting quotes and backslash escapes.

/// A logical line and the 1-based number of the physical line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub number: usize,
    pub text: String,
}

/// Split `content` on `\n` and join continued lines.
///
/// A trimmed line ending in an unescaped `\` absorbs the next trimmed line,
/// separated by one space. An empty next line contributes nothing. A marker on
/// the very last line is left in place since there is nothing to join.
///
/// Every physical line starts its own logical line, including lines already
/// absorbed by a continuation above them.
pub fn logical_lines(content: &str) -> Vec<LogicalLine> {
    let physical: Vec<&str> = content.split('\n').collect();

    physical
        .iter()
        .enumerate()
        .map(|(start, line)| {
            let mut text = line.trim().to_string();
            let mut next = start + 1;

            while ends_with_continuation(&text) && next < physical.len() {
                text.pop();
                text.truncate(text.trim_end().len());

                let absorbed = physical[next].trim();
                if !absorbed.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(absorbed);
                }
                next += 1;
            }

            LogicalLine {
                number: start + 1,
                text,
            }
        })
        .collect()
}

/// True when `line` ends in an odd run of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.bytes().rev().take_while(|b| *b == b'\\').count();
    trailing % 2 == 1
}

/// Truncate `line` at the first `#` or `;` that is outside quotes.
///
/// A backslash skips the following character. The result is trimmed.
pub fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match (b, quote) {
            (b'\\', _) if i + 1 < bytes.len() => i += 1,
            (b'"' | b'\'', None) => quote = Some(b),
            (_, Some(open)) if b == open => quote = None,
            (b'#' | b';', None) => return line[..i].trim(),
            _ => {}
        }
        i += 1;
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(content: &str) -> Vec<String> {
        logical_lines(content).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_plain_lines_are_trimmed() {
        assert_eq!(texts("  a=1  \n\tb=2"), vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_continuation_joins_with_single_space() {
        assert_eq!(texts("a=1 \\\n   2"), vec!["a=1 2", "2"]);
        assert_eq!(
            texts("v=Line 1 \\\n    Line 2 \\\n    Line 3\nnext=x"),
            vec!["v=Line 1 Line 2 Line 3", "Line 2 Line 3", "Line 3", "next=x"]
        );
    }

    #[test]
    fn test_absorbed_lines_start_their_own_logical_line() {
        let lines = logical_lines("a=1 \\\n2\nb=3");
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[0].number, lines[0].text.as_str()), (1, "a=1 2"));
        assert_eq!((lines[1].number, lines[1].text.as_str()), (2, "2"));
        assert_eq!((lines[2].number, lines[2].text.as_str()), (3, "b=3"));
    }

    #[test]
    fn test_continuation_into_empty_line() {
        assert_eq!(texts("v=Value \\\n\nw=1"), vec!["v=Value", "", "w=1"]);
    }

    #[test]
    fn test_escaped_backslash_is_not_continuation() {
        assert_eq!(texts("path=C:\\\\\nnext=1"), vec!["path=C:\\\\", "next=1"]);
    }

    #[test]
    fn test_marker_on_last_line_is_kept() {
        assert_eq!(texts("v=end \\"), vec!["v=end \\"]);
    }

    #[test]
    fn test_strip_inline_comment() {
        let cases = [
            ("key=value", "key=value"),
            ("key=value # comment", "key=value"),
            ("key=value ; comment", "key=value"),
            ("key=\"value # not comment\"", "key=\"value # not comment\""),
            ("key='value ; not comment'", "key='value ; not comment'"),
            ("key=\"value \\\" # comment\"", "key=\"value \\\" # comment\""),
            (
                "key=\"value 'with' quotes # comment\"",
                "key=\"value 'with' quotes # comment\"",
            ),
            ("key=value #", "key=value"),
            ("# just a comment", ""),
            (
                "key=\"unmatched quote # comment",
                "key=\"unmatched quote # comment",
            ),
            ("key=a\\#b # c", "key=a\\#b"),
        ];
        for (input, expected) in cases {
            assert_eq!(strip_inline_comment(input), expected, "input: {input:?}");
        }
    }
}
