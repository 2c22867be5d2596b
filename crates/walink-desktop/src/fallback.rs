use crate::sink::ClipboardSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    pub backend: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied {
        backend: String,
        failed: Vec<FailedAttempt>,
    },
    /// No sink accepted the text; the user has to copy it by hand.
    Manual { failed: Vec<FailedAttempt> },
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }

    pub fn failed(&self) -> &[FailedAttempt] {
        match self {
            CopyOutcome::Copied { failed, .. } | CopyOutcome::Manual { failed } => failed,
        }
    }
}

pub fn copy_with_fallback(text: &str, sinks: &[Box<dyn ClipboardSink>]) -> CopyOutcome {
    let mut failed = Vec::new();
    for sink in sinks {
        match sink.write_text(text) {
            Ok(()) => {
                return CopyOutcome::Copied {
                    backend: sink.sink_name().to_string(),
                    failed,
                }
            }
            Err(err) => failed.push(FailedAttempt {
                backend: sink.sink_name().to_string(),
                error: err.to_string(),
            }),
        }
    }
    CopyOutcome::Manual { failed }
}
