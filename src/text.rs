//! Text helpers shared by the dialogs and the document layout

/// Wrap text to fit within a maximum width, measured in characters.
/// Newlines always break; a word longer than the width is split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && current_len > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if current_len > 0 {
                current_line.push(' ');
                current_len += 1;
            }
            if word_len <= max_width - current_len {
                current_line.push_str(word);
                current_len += word_len;
                continue;
            }
            for c in word.chars() {
                if current_len == max_width {
                    lines.push(std::mem::take(&mut current_line));
                    current_len = 0;
                }
                current_line.push(c);
                current_len += 1;
            }
        }
        if current_len > 0 {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_newlines_are_kept() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_long_word_is_split() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        // Each Tamil letter here is three bytes but one char
        let lines = wrap_text("தமிழ் நாடு", 5);
        assert_eq!(lines, vec!["தமிழ்", "நாடு"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
