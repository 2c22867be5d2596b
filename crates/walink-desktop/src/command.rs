use std::io::Write;
use std::process::{Command, Stdio};

use crate::sink::ClipboardSink;
use crate::{DesktopError, Result};

/// Clipboard backed by a program that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Builds from `[program, args...]` as written in the config file.
    pub fn from_parts(parts: &[String]) -> Result<Self> {
        let Some((program, args)) = parts.split_first() else {
            return Err(DesktopError::Unavailable(
                "clipboard command is empty".to_string(),
            ));
        };
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardSink for CommandClipboard {
    fn sink_name(&self) -> &str {
        &self.program
    }

    fn write_text(&self, text: &str) -> Result<()> {
        // Output streams stay detached: wl-copy and xclip fork a server that
        // would otherwise hold the pipes open.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(DesktopError::Command(format!(
                "{} exited with status {}",
                self.program, status
            )));
        }
        Ok(())
    }
}
