//! CLI integration test modules

pub mod configuration;
pub mod script_runs;

use std::path::Path;
use std::process::{Command, Output};

/// Run the binary with colors and file logging off
pub fn run_pushbridge(args: &[&str], script: Option<&Path>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_pushbridge"));
    command.args(["--no-color", "--log-level", "off"]).args(args);
    if let Some(script) = script {
        command.arg(script);
    }
    command.output().expect("failed to run pushbridge")
}

/// Parse stdout as JSON lines
pub fn output_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("stdout line should be JSON"))
        .collect()
}
