use anyhow::Result;
use walink_core::Feedback;
use walink_desktop::{copy_with_fallback, open_link, ClipboardSink};

use crate::app::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Copy(String),
    Open(String),
}

pub fn execute_action(
    app: &mut App,
    sinks: &[Box<dyn ClipboardSink>],
    action: Action,
) -> Result<()> {
    match action {
        Action::Copy(text) => {
            let outcome = copy_with_fallback(&text, sinks);
            app.apply_copy_outcome(&outcome);
        }
        Action::Open(link) => {
            open_link(&link)?;
            app.set_message(Feedback::opened());
        }
    }
    Ok(())
}
