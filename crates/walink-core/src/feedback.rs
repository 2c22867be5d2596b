use crate::domain::LinkResult;
use crate::error::LinkFailure;
use serde::Serialize;

pub const MSG_EMPTY: &str = "Please enter a phone number.";
pub const MSG_INVALID: &str = "Could not generate link: number looks invalid.";
pub const MSG_GENERATED: &str = "Link generated. Click or copy.";
pub const MSG_COPIED: &str = "Link copied to clipboard.";
pub const MSG_NOTHING_TO_COPY: &str = "Nothing to copy. Generate a link first.";
pub const MSG_NOTHING_TO_OPEN: &str = "Nothing to open. Generate a link first.";
pub const MSG_OPENED: &str = "Link opened in browser.";
pub const MSG_COPY_FAILED: &str =
    "Could not copy automatically. Select and copy the link manually.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

/// User-facing message for an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub tone: Tone,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            text: text.into(),
        }
    }

    pub fn for_result(result: &LinkResult) -> Self {
        match result {
            Ok(_) => Self::success(MSG_GENERATED),
            Err(failure) => Self::for_failure(*failure),
        }
    }

    pub fn for_failure(failure: LinkFailure) -> Self {
        match failure {
            LinkFailure::Empty => Self::error(MSG_EMPTY),
            LinkFailure::TooShort | LinkFailure::Invalid => Self::error(MSG_INVALID),
        }
    }

    pub fn preview(display: &str) -> Self {
        Self::success(format!("Preview: {display}"))
    }

    pub fn copied() -> Self {
        Self::success(MSG_COPIED)
    }

    pub fn nothing_to_copy() -> Self {
        Self::error(MSG_NOTHING_TO_COPY)
    }

    pub fn nothing_to_open() -> Self {
        Self::error(MSG_NOTHING_TO_OPEN)
    }

    pub fn opened() -> Self {
        Self::success(MSG_OPENED)
    }

    pub fn copy_failed() -> Self {
        Self::error(MSG_COPY_FAILED)
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}
