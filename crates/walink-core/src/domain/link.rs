use crate::domain::phone::{sanitize, SanitizedNumber};
use crate::error::LinkFailure;
use serde::{Deserialize, Serialize};

pub const WA_ME_BASE: &str = "https://wa.me/";
pub const DEFAULT_COUNTRY_CODE: &str = "91";
pub const MIN_INTERNATIONAL_DIGITS: usize = 6;
pub const LOCAL_NUMBER_DIGITS: usize = 10;

const TRUNK_NUMBER_DIGITS: usize = 11;
const COUNTRY_NUMBER_DIGITS: usize = 12;
const TRUNK_PREFIX: char = '0';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhatsappLink {
    pub link: String,
    pub display: String,
}

impl WhatsappLink {
    fn from_digits(digits: &str) -> Self {
        let display = format!("+{digits}");
        Self {
            link: format!("{WA_ME_BASE}{display}"),
            display,
        }
    }

    fn with_default_country(local: &str) -> Self {
        Self::from_digits(&format!("{DEFAULT_COUNTRY_CODE}{local}"))
    }

    /// Link label without the scheme, e.g. `wa.me/+919876543210`.
    pub fn link_text(&self) -> &str {
        self.link.strip_prefix("https://").unwrap_or(&self.link)
    }
}

pub type LinkResult = Result<WhatsappLink, LinkFailure>;

/// Classifies a sanitized number; the first matching rule wins.
///
/// `+`-prefixed numbers pass through untouched once they carry enough digits.
/// Bare numbers are read against the default country: ten digits are local,
/// eleven digits with a trunk `0` drop it, and anything longer is assumed to
/// already carry a country code.
pub fn build_link(sanitized: &SanitizedNumber) -> LinkResult {
    if sanitized.is_empty() {
        return Err(LinkFailure::Empty);
    }

    let digits = sanitized.digits();
    if sanitized.is_international() {
        if digits.len() < MIN_INTERNATIONAL_DIGITS {
            return Err(LinkFailure::TooShort);
        }
        return Ok(WhatsappLink::from_digits(digits));
    }

    match digits.len() {
        LOCAL_NUMBER_DIGITS => Ok(WhatsappLink::with_default_country(digits)),
        TRUNK_NUMBER_DIGITS if digits.starts_with(TRUNK_PREFIX) => Ok(
            WhatsappLink::with_default_country(&digits[TRUNK_PREFIX.len_utf8()..]),
        ),
        COUNTRY_NUMBER_DIGITS if digits.starts_with(DEFAULT_COUNTRY_CODE) => {
            Ok(WhatsappLink::from_digits(digits))
        }
        len if len > LOCAL_NUMBER_DIGITS => Ok(WhatsappLink::from_digits(digits)),
        _ => Err(LinkFailure::Invalid),
    }
}

pub fn generate(raw: &str) -> LinkResult {
    build_link(&sanitize(raw))
}

/// Display form for input that would generate successfully.
pub fn preview(raw: &str) -> Option<String> {
    generate(raw).ok().map(|link| link.display)
}

#[cfg(test)]
mod tests {
    use super::{build_link, generate, preview, WhatsappLink};
    use crate::domain::phone::sanitize;
    use crate::error::LinkFailure;

    fn link_for(raw: &str) -> Result<WhatsappLink, LinkFailure> {
        build_link(&sanitize(raw))
    }

    fn expect_link(raw: &str, expected_display: &str) {
        let link = link_for(raw).unwrap_or_else(|err| panic!("{raw:?} failed: {err}"));
        assert_eq!(link.display, expected_display);
        assert_eq!(link.link, format!("https://wa.me/{expected_display}"));
    }

    #[test]
    fn build_link_rejects_empty() {
        assert_eq!(link_for(""), Err(LinkFailure::Empty));
        assert_eq!(link_for("()"), Err(LinkFailure::Empty));
    }

    #[test]
    fn build_link_rejects_short_international_numbers() {
        assert_eq!(link_for("+123"), Err(LinkFailure::TooShort));
        assert_eq!(link_for("+12345"), Err(LinkFailure::TooShort));
        assert_eq!(link_for("+"), Err(LinkFailure::TooShort));
    }

    #[test]
    fn build_link_passes_international_numbers_through() {
        expect_link("+919876543210", "+919876543210");
        expect_link("+123456", "+123456");
        expect_link("+0123456789", "+0123456789");
        expect_link("+1 (202) 555-0143", "+12025550143");
    }

    #[test]
    fn build_link_prefixes_local_numbers_with_default_country() {
        expect_link("9876543210", "+919876543210");
        expect_link("98765 43210", "+919876543210");
    }

    #[test]
    fn build_link_drops_trunk_zero() {
        expect_link("09876543210", "+919876543210");
        expect_link("0 98765\u{2013}43210", "+919876543210");
    }

    #[test]
    fn build_link_keeps_numbers_with_country_code() {
        expect_link("919876543210", "+919876543210");
        expect_link("447911123456", "+447911123456");
    }

    #[test]
    fn build_link_assumes_country_code_for_long_numbers() {
        expect_link("19876543210", "+19876543210");
        expect_link("4915112345678", "+4915112345678");
    }

    #[test]
    fn build_link_rejects_short_bare_numbers() {
        assert_eq!(link_for("12345"), Err(LinkFailure::Invalid));
        assert_eq!(link_for("987654321"), Err(LinkFailure::Invalid));
        assert_eq!(link_for("1"), Err(LinkFailure::Invalid));
    }

    #[test]
    fn link_text_strips_scheme() {
        let link = generate("9876543210").expect("link");
        assert_eq!(link.link_text(), "wa.me/+919876543210");
    }

    #[test]
    fn preview_only_reports_successful_input() {
        assert_eq!(preview("09876543210").as_deref(), Some("+919876543210"));
        assert_eq!(preview("12345"), None);
        assert_eq!(preview("  "), None);
    }
}
