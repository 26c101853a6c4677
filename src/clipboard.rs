use anyhow::{anyhow, Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};

const READ_ARGS: [&str; 2] = ["--output", "--clipboard"];
const WRITE_ARGS: [&str; 2] = ["--input", "--clipboard"];

/// Read the current clipboard text through the external accessor.
pub fn read_clipboard(command: &str) -> Result<String> {
    let output = Command::new(command)
        .args(READ_ARGS)
        .output()
        .with_context(|| format!("Failed to execute '{command}'"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "'{}' failed with exit code {:?}: {}",
            command,
            output.status.code(),
            stderr.trim()
        ));
    }

    let stdout = String::from_utf8(output.stdout)
        .with_context(|| format!("Invalid UTF-8 output from '{command}'"))?;

    Ok(stdout)
}

/// Write `text` to the clipboard by feeding the external accessor's stdin.
pub fn write_clipboard(command: &str, text: &str) -> Result<()> {
    let mut child = Command::new(command)
        .args(WRITE_ARGS)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to start '{command}'"))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| anyhow!("Failed to open stdin of '{command}'"))?;
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to '{command}'"))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for '{command}'"))?;

    if !status.success() {
        return Err(anyhow!(
            "'{}' failed with exit code {:?}",
            command,
            status.code()
        ));
    }

    Ok(())
}
