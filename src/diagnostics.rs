//! Stderr diagnostics helpers shared by the loader and the CLI.

/// Print a warning to stderr without interrupting the current operation.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("WARN: {}", message.as_ref());
}

/// Prefix an error message so fatal failures are visually distinct from warnings.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("ERROR: {}", message.as_ref())
}
