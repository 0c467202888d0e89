//! Command line arguments

use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::logging::verbosity_level;

/// Token issued by the scripted provider unless overridden
pub const DEFAULT_TOKEN: &str = "pushbridge-device-token";

#[derive(Parser, Debug, Clone)]
#[command(name = "pushbridge")]
#[command(about = "Drive a push notification coordinator from a JSON script")]
#[command(disable_version_flag = true)]
pub struct Args {
    /// JSON script of steps to run
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level (overrides -v/-q)
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force colored output
    #[arg(long = "color", action = ArgAction::SetTrue)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, conflicts_with = "color")]
    pub no_color: bool,

    /// More verbose logging (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less verbose logging (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Token the scripted provider hands out on register
    #[arg(long = "token", value_name = "TOKEN", default_value = DEFAULT_TOKEN)]
    pub token: String,

    /// Make token requests fail with this message instead
    #[arg(long = "token-error", value_name = "MESSAGE")]
    pub token_error: Option<String>,

    /// Print version information
    #[arg(short = 'V', long = "version", action = ArgAction::SetTrue)]
    pub version: bool,
}

impl Args {
    /// Level for the logger: explicit `--log-level`, else from `-v`/`-q`
    pub fn effective_log_level(&self) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| verbosity_level(self.verbose, self.quiet).to_string())
    }

    /// Log file to write to, if any
    pub fn log_file_path(&self) -> Option<String> {
        self.log_file
            .as_ref()
            .filter(|path| path.as_os_str() != "none")
            .map(|path| path.to_string_lossy().into_owned())
    }

    /// `--color` forces color on, `--no-color` forces it off, otherwise follow the terminal
    pub fn use_color(&self) -> bool {
        self.use_color_with(std::io::stdout().is_terminal())
    }

    pub(crate) fn use_color_with(&self, is_terminal: bool) -> bool {
        !self.no_color && (self.color || is_terminal)
    }
}
