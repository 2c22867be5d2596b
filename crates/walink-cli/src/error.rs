use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use walink_config::ConfigError;
use walink_core::LinkFailure;
use walink_desktop::DesktopError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            };
        }
        if let Some(_failure) = cause.downcast_ref::<LinkFailure>() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(desktop_err) = cause.downcast_ref::<DesktopError>() {
            return desktop_exit_code(desktop_err);
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::MissingClipboardCommand
        | ConfigError::UnexpectedClipboardCommand
        | ConfigError::InvalidClipboardCommand
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn desktop_exit_code(err: &DesktopError) -> u8 {
    match err {
        DesktopError::Unavailable(_) | DesktopError::Url(_) | DesktopError::InsecureUrl(_) => {
            EXIT_INVALID_INPUT
        }
        DesktopError::Command(_) | DesktopError::Io(_) => EXIT_FAILURE,
    }
}
