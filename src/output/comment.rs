//! Paragraph wrapping and `#`-comment formatting.

/// Prefix of every comment listing line.
pub const COMMENT_PREFIX: &str = "#    ";

/// Default wrap width for comment listings.
pub const DEFAULT_WIDTH: usize = 75;

/// Fill words greedily into lines of at most `width` chars. A word longer
/// than `width` first fills what is left of the current line, then is broken
/// into `width`-sized pieces.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        let word_chars: Vec<char> = word.chars().collect();
        let mut chars = word_chars.as_slice();
        if current_len > 0 {
            let space_left = width.saturating_sub(current_len + 1);
            if word_len > width && space_left > 0 {
                current.push(' ');
                current.extend(&chars[..space_left]);
                chars = &chars[space_left..];
            }
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        let mut chunks = chars.chunks(width).peekable();
        while let Some(chunk) = chunks.next() {
            if chunks.peek().is_some() {
                lines.push(chunk.iter().collect());
            } else {
                current = chunk.iter().collect();
                current_len = chunk.len();
            }
        }
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wrap multi-paragraph `text` to `width` columns.
///
/// Paragraphs are separated by blank lines. Whitespace inside a paragraph is
/// collapsed to single spaces. Each blank separator line becomes an empty
/// string in the result.
///
/// # Examples
/// ```
/// use ip_exclude::output::wrap_text;
/// let lines = wrap_text("one two\nthree\n\nfour", 9);
/// assert_eq!(lines, vec!["one two", "three", "", "four"]);
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut acc = String::new();
    for line in text.trim().split('\n') {
        acc.push(' ');
        acc.push_str(line);
        if line.trim().is_empty() {
            out.extend(wrap_line(&acc, width));
            acc.clear();
            out.push(String::new());
        }
    }
    if !acc.is_empty() {
        out.extend(wrap_line(&acc, width));
    }
    out
}

/// Format `items` one per paragraph line, wrapped and prefixed with
/// [`COMMENT_PREFIX`].
pub fn comment_lines<T: ToString>(items: impl IntoIterator<Item = T>, width: usize) -> Vec<String> {
    let text = items
        .into_iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    wrap_text(&text, width)
        .into_iter()
        .map(|line| format!("{COMMENT_PREFIX}{line}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_line_fills_greedily() {
        assert_eq!(wrap_line("aa bb cc dd", 5), vec!["aa bb", "cc dd"]);
        assert_eq!(wrap_line("  aa   bb ", 80), vec!["aa bb"]);
        assert!(wrap_line("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_line_breaks_long_words() {
        assert_eq!(wrap_line("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert_eq!(wrap_line("x abcdef", 3), vec!["x a", "bcd", "ef"]);
    }

    #[test]
    fn test_wrap_line_long_word_fills_current_line() {
        // no room after "xy " for a piece of the long word
        assert_eq!(wrap_line("xy abcd", 3), vec!["xy", "abc", "d"]);
        assert_eq!(wrap_line("10.0/8 2001:db8::/32", 12), vec!["10.0/8 2001:", "db8::/32"]);
        assert_eq!(wrap_line("10.0.0.0/8 2001:db8::/32", 16), vec!["10.0.0.0/8", "2001:db8::/32"]);
    }

    #[test]
    fn test_wrap_text_paragraphs() {
        let text = "first  line\nsecond\n\n\nthird";
        assert_eq!(
            wrap_text(text, 20),
            vec!["first line second", "", "", "third"]
        );
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 75), vec![""]);
    }

    #[test]
    fn test_comment_lines_wraps_networks() {
        let nets = ["10.0.0.0/8", "172.16.0.0/12", "192.168.0.0/16"];
        assert_eq!(
            comment_lines(nets, 30),
            vec!["#    10.0.0.0/8 172.16.0.0/12", "#    192.168.0.0/16"]
        );
    }

    #[test]
    fn test_comment_lines_empty() {
        assert_eq!(comment_lines(Vec::<String>::new(), 75), vec!["#    "]);
    }
}
