pub mod link;
pub mod phone;

pub use link::{
    build_link, generate, preview, LinkResult, WhatsappLink, DEFAULT_COUNTRY_CODE,
    LOCAL_NUMBER_DIGITS, MIN_INTERNATIONAL_DIGITS, WA_ME_BASE,
};
pub use phone::{normalize_pasted, sanitize, SanitizedNumber};
