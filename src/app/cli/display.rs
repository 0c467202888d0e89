//! Output line formatting

use colored::Colorize;
use serde_json::Value;

/// Format one output line; dispatched events stand out from step results when color is on
pub fn format_output_line(line: &Value) -> String {
    let text = line.to_string();
    if line.get("event").is_some() {
        text.green().to_string()
    } else if line.get("error").is_some() {
        text.red().to_string()
    } else {
        text
    }
}
