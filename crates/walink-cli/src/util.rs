use anyhow::{Context as _, Result};
use std::io::BufRead;

/// Joins positional words so unquoted numbers like `+91 98765 43210` work.
pub fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

/// Non-blank lines from a batch input.
pub fn read_input_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| "read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::{join_words, read_input_lines};
    use std::io::Cursor;

    #[test]
    fn join_words_returns_none_without_words() {
        assert!(join_words(&[]).is_none());
    }

    #[test]
    fn join_words_uses_single_spaces() {
        let words = vec!["+91".to_string(), "98765".to_string(), "43210".to_string()];
        assert_eq!(join_words(&words).as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn read_input_lines_skips_blank_lines() {
        let input = Cursor::new("9876543210\n\n   \n+44 20 7946 0958\n");
        let lines = read_input_lines(input).expect("lines");
        assert_eq!(lines, vec!["9876543210", "+44 20 7946 0958"]);
    }
}
