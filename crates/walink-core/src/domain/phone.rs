use serde::Serialize;
use std::fmt;

/// Characters dropped before digit extraction: en dash, em dash and parentheses.
const DECORATIVE_CHARS: [char; 4] = ['\u{2013}', '\u{2014}', '(', ')'];

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Phone input reduced to ASCII digits, optionally led by a single `+`.
///
/// Only [`sanitize`] builds values of this type, so a `+` can never appear
/// anywhere but the first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SanitizedNumber(String);

impl SanitizedNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_international(&self) -> bool {
        self.0.starts_with('+')
    }

    /// Digits without the leading `+`.
    pub fn digits(&self) -> &str {
        self.0.strip_prefix('+').unwrap_or(&self.0)
    }
}

impl fmt::Display for SanitizedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unicode whitespace plus the byte order mark that pasted text often carries.
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch == BYTE_ORDER_MARK
}

pub fn sanitize(raw: &str) -> SanitizedNumber {
    let trimmed = raw.trim_matches(is_blank);
    if trimmed.is_empty() {
        return SanitizedNumber::default();
    }

    let stripped: String = trimmed
        .chars()
        .filter(|ch| !DECORATIVE_CHARS.contains(ch))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let rest = match stripped.strip_prefix('+') {
        Some(rest) => {
            out.push('+');
            rest
        }
        None => stripped.as_str(),
    };
    out.extend(rest.chars().filter(char::is_ascii_digit));

    SanitizedNumber(out)
}

/// Collapses whitespace runs into single spaces and trims the ends.
pub fn normalize_pasted(raw: &str) -> String {
    raw.split(is_blank)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{normalize_pasted, sanitize};

    #[test]
    fn sanitize_returns_empty_for_blank_input() {
        assert!(sanitize("").is_empty());
        assert!(sanitize("   \t ").is_empty());
    }

    #[test]
    fn sanitize_keeps_leading_plus_and_strips_formatting() {
        let value = sanitize("+1 (202) 555-0143");
        assert_eq!(value.as_str(), "+12025550143");
        assert!(value.is_international());
        assert_eq!(value.digits(), "12025550143");
    }

    #[test]
    fn sanitize_removes_dashes_and_parentheses() {
        assert_eq!(sanitize("98765\u{2013}43210").as_str(), "9876543210");
        assert_eq!(sanitize("98765\u{2014}43210").as_str(), "9876543210");
        assert_eq!(sanitize("(987) 654 3210").as_str(), "9876543210");
    }

    #[test]
    fn sanitize_recognizes_plus_after_opening_parenthesis() {
        assert_eq!(sanitize("(+91) 98765 43210").as_str(), "+919876543210");
    }

    #[test]
    fn sanitize_drops_interior_plus_signs() {
        let value = sanitize("91+98765+43210");
        assert_eq!(value.as_str(), "919876543210");
        assert!(!value.is_international());
    }

    #[test]
    fn sanitize_keeps_single_plus_when_leading_plus_repeats() {
        assert_eq!(sanitize("++91 98765").as_str(), "+9198765");
    }

    #[test]
    fn sanitize_ignores_non_ascii_digits() {
        assert_eq!(sanitize("٩٨٧ 123").as_str(), "123");
    }

    #[test]
    fn sanitize_trims_byte_order_mark_before_plus() {
        assert_eq!(sanitize("\u{FEFF}+123456").as_str(), "+123456");
        assert_eq!(sanitize(" \u{FEFF}98765 43210\u{FEFF}").as_str(), "9876543210");
        assert!(sanitize("\u{FEFF}").is_empty());
    }

    #[test]
    fn sanitize_keeps_lone_plus() {
        assert_eq!(sanitize(" + ").as_str(), "+");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "",
            "+",
            "  +1 (202) 555-0143 ",
            "098765\u{2014}43210",
            "tel: 91-98765-43210",
            "abc",
            "+ 44 20 7946 0958 ext. 12",
        ];
        for input in inputs {
            let once = sanitize(input);
            let twice = sanitize(once.as_str());
            assert_eq!(once, twice, "input {input:?}");
        }
    }

    #[test]
    fn normalize_pasted_collapses_whitespace() {
        assert_eq!(normalize_pasted("  +91\t98765 \n 43210  "), "+91 98765 43210");
        assert_eq!(normalize_pasted(" \n "), "");
    }

    #[test]
    fn normalize_pasted_treats_byte_order_mark_as_whitespace() {
        assert_eq!(normalize_pasted("\u{FEFF}+44 20\u{FEFF}7946"), "+44 20 7946");
    }
}
