use crate::commands::Context;
use anyhow::{Context as _, Result};
use tracing::{debug, warn};
use walink_core::Feedback;
use walink_desktop::{copy_with_fallback, open_link, sinks_from_config, CopyOutcome, DisplayEnv};

pub fn copy_text(ctx: &Context<'_>, text: &str) -> Result<()> {
    let sinks = sinks_from_config(&ctx.config.clipboard, DisplayEnv::from_env())
        .with_context(|| "configure clipboard")?;

    let outcome = copy_with_fallback(text, &sinks);
    let copied = outcome.is_copied();
    for attempt in outcome.failed() {
        if copied {
            debug!(backend = %attempt.backend, error = %attempt.error, "clipboard backend failed");
        } else {
            warn!(backend = %attempt.backend, error = %attempt.error, "clipboard backend failed");
        }
    }

    match outcome {
        CopyOutcome::Copied { backend, .. } => {
            debug!(backend = %backend, "copied to clipboard");
            report(ctx, &Feedback::copied());
        }
        CopyOutcome::Manual { failed } => {
            if failed.is_empty() {
                warn!("no clipboard backend available, falling back to manual copy");
            }
            report(ctx, &Feedback::copy_failed());
        }
    }
    Ok(())
}

pub fn open(link: &str) -> Result<()> {
    open_link(link).with_context(|| format!("open {link}"))?;
    debug!(link, "opened link");
    Ok(())
}

fn report(ctx: &Context<'_>, feedback: &Feedback) {
    if !ctx.json {
        eprintln!("{}", feedback.text);
    }
}
