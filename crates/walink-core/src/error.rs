use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkFailure {
    #[error("phone number is required")]
    Empty,
    #[error("international number needs at least 6 digits after '+'")]
    TooShort,
    #[error("phone number does not match a known format")]
    Invalid,
}

impl LinkFailure {
    pub fn reason(self) -> &'static str {
        match self {
            LinkFailure::Empty => "empty",
            LinkFailure::TooShort => "too-short",
            LinkFailure::Invalid => "invalid",
        }
    }
}
