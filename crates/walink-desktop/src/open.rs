use std::process::{Command, Stdio};

use url::Url;

use crate::{DesktopError, Result};

const NO_ARGS: &[&str] = &[];
const WINDOWS_START_ARGS: &[&str] = &["/C", "start", ""];

/// Program and leading arguments that hand a URL to the default browser.
fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else if cfg!(windows) {
        ("cmd", WINDOWS_START_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

fn parse_https(link: &str) -> Result<Url> {
    let url = Url::parse(link)?;
    if url.scheme() != "https" {
        return Err(DesktopError::InsecureUrl(link.to_string()));
    }
    Ok(url)
}

pub fn open_link(link: &str) -> Result<()> {
    let url = parse_https(link)?;
    let (program, args) = opener_command();
    let status = Command::new(program)
        .args(args)
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(DesktopError::Command(format!(
            "{program} exited with status {status}"
        )));
    }
    Ok(())
}
