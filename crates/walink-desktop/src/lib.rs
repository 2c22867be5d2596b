pub mod command;
pub mod detect;
pub mod error;
pub mod fallback;
pub mod open;
pub mod sink;

pub use command::CommandClipboard;
pub use detect::{detect_sinks, sinks_from_config, DisplayEnv};
pub use error::{DesktopError, Result};
pub use fallback::{copy_with_fallback, CopyOutcome, FailedAttempt};
pub use open::open_link;
pub use sink::ClipboardSink;
