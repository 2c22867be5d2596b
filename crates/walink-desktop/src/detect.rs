use std::env;

use walink_config::{ClipboardBackend, ClipboardConfig};

use crate::command::CommandClipboard;
use crate::sink::ClipboardSink;
use crate::Result;

/// Graphical sessions visible to the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayEnv {
    pub wayland: bool,
    pub x11: bool,
}

impl DisplayEnv {
    pub fn from_env() -> Self {
        Self {
            wayland: has_var("WAYLAND_DISPLAY"),
            x11: has_var("DISPLAY"),
        }
    }
}

fn has_var(name: &str) -> bool {
    env::var_os(name).is_some_and(|value| !value.is_empty())
}

/// Platform clipboard programs, most specific first.
pub fn detect_sinks(display: DisplayEnv) -> Vec<CommandClipboard> {
    if cfg!(target_os = "macos") {
        return vec![CommandClipboard::new("pbcopy", &[])];
    }
    if cfg!(windows) {
        return vec![CommandClipboard::new("clip", &[])];
    }
    unix_sinks(display)
}

fn unix_sinks(display: DisplayEnv) -> Vec<CommandClipboard> {
    let mut sinks = Vec::new();
    if display.wayland {
        sinks.push(CommandClipboard::new("wl-copy", &[]));
    }
    if display.x11 {
        sinks.push(CommandClipboard::new("xclip", &["-selection", "clipboard"]));
        sinks.push(CommandClipboard::new("xsel", &["--clipboard", "--input"]));
    }
    sinks
}

pub fn sinks_from_config(
    config: &ClipboardConfig,
    display: DisplayEnv,
) -> Result<Vec<Box<dyn ClipboardSink>>> {
    let sinks: Vec<Box<dyn ClipboardSink>> = match config.backend {
        ClipboardBackend::Auto => detect_sinks(display)
            .into_iter()
            .map(|sink| Box::new(sink) as Box<dyn ClipboardSink>)
            .collect(),
        ClipboardBackend::Command => {
            vec![Box::new(CommandClipboard::from_parts(&config.command)?)]
        }
        ClipboardBackend::None => Vec::new(),
    };
    Ok(sinks)
}

#[cfg(test)]
mod tests {
    use super::{sinks_from_config, unix_sinks, DisplayEnv};
    use walink_config::{ClipboardBackend, ClipboardConfig};

    fn names(display: DisplayEnv) -> Vec<String> {
        unix_sinks(display)
            .iter()
            .map(|sink| sink.program().to_string())
            .collect()
    }

    #[test]
    fn unix_sinks_prefer_wayland() {
        let display = DisplayEnv {
            wayland: true,
            x11: true,
        };
        assert_eq!(names(display), vec!["wl-copy", "xclip", "xsel"]);
    }

    #[test]
    fn unix_sinks_without_display_are_empty() {
        assert!(names(DisplayEnv::default()).is_empty());
    }

    #[test]
    fn sinks_from_config_uses_configured_command() {
        let config = ClipboardConfig {
            backend: ClipboardBackend::Command,
            command: vec!["tmux".to_string(), "load-buffer".to_string(), "-".to_string()],
        };
        let sinks = sinks_from_config(&config, DisplayEnv::default()).expect("sinks");
        assert_eq!(sinks.len(), 1);
        assert_eq!(sinks[0].sink_name(), "tmux");
    }

    #[test]
    fn sinks_from_config_none_is_empty() {
        let config = ClipboardConfig {
            backend: ClipboardBackend::None,
            command: Vec::new(),
        };
        let display = DisplayEnv {
            wayland: true,
            x11: true,
        };
        let sinks = sinks_from_config(&config, display).expect("sinks");
        assert!(sinks.is_empty());
    }
}
