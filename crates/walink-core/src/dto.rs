use crate::domain::{LinkResult, SanitizedNumber};
use crate::error::LinkFailure;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOutputDto {
    pub input: String,
    pub sanitized: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<LinkFailure>,
}

impl LinkOutputDto {
    pub fn new(input: &str, sanitized: &SanitizedNumber, result: &LinkResult) -> Self {
        let (link, display, reason) = match result {
            Ok(link) => (Some(link.link.clone()), Some(link.display.clone()), None),
            Err(failure) => (None, None, Some(*failure)),
        };
        Self {
            input: input.to_string(),
            sanitized: sanitized.as_str().to_string(),
            ok: result.is_ok(),
            link,
            display,
            reason,
        }
    }
}
