pub mod domain;
pub mod dto;
pub mod error;
pub mod feedback;

pub use domain::*;
pub use dto::*;
pub use error::LinkFailure;
pub use feedback::{Feedback, Tone};
