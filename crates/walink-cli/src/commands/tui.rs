use anyhow::{anyhow, Result};
use clap::Args;
use std::env;
use std::path::PathBuf;
use std::process::Command;

#[derive(Debug, Args)]
pub struct TuiArgs {
    /// Prefill the phone field
    #[arg(long, value_name = "NUMBER")]
    pub number: Option<String>,
}

pub fn launch(config_path: Option<PathBuf>, args: TuiArgs, verbose: bool) -> Result<()> {
    let mut command = build_command(config_path, args.number);
    if verbose {
        eprintln!("tui: {}", command.get_program().to_string_lossy());
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let err = command.exec();
        Err(exec_error(err))
    }

    #[cfg(not(unix))]
    {
        use anyhow::Context as _;
        let status = command.status().with_context(|| "launch walink-tui")?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

fn build_command(config_path: Option<PathBuf>, number: Option<String>) -> Command {
    let binary = find_tui_binary();
    let mut command = Command::new(binary);
    if let Some(path) = config_path {
        command.arg("--config").arg(path);
    }
    if let Some(number) = number {
        command.arg("--number").arg(number);
    }
    command
}

fn find_tui_binary() -> PathBuf {
    let name = format!("walink-tui{}", env::consts::EXE_SUFFIX);
    if let Ok(current) = env::current_exe() {
        if let Some(dir) = current.parent() {
            let candidate = dir.join(&name);
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(name)
}

fn exec_error(err: std::io::Error) -> anyhow::Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        return anyhow!(
            "walink-tui binary not found; build it with `cargo build -p walink-tui` or install the package"
        );
    }
    anyhow!("launch walink-tui failed: {}", err)
}
