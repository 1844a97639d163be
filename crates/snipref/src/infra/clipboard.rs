//! Clipboard sinks.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, anyhow};
use tracing::debug;

/// Destination for rendered copy output.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by `arboard`, falling back to platform clipboard
/// utilities when no native backend is available (e.g. headless sessions).
pub struct SystemClipboard {
    arboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            arboard: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if let Some(clipboard) = self.arboard.as_mut() {
            match clipboard.set_text(text.to_owned()) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!(error = %err, "arboard write failed, trying fallback commands");
                    self.arboard = None;
                }
            }
        }

        for argv in FALLBACK_COMMANDS {
            if pipe_to_command(argv, text).is_ok() {
                return Ok(());
            }
        }

        Err(anyhow!("no usable clipboard backend"))
    }
}

/// Sink that prints to stdout instead of mutating the clipboard.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ClipboardSink for StdoutSink {
    fn write_text(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        Ok(())
    }
}

fn pipe_to_command(argv: &[&str], text: &str) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .context("clipboard command missing program")?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn clipboard command: {program}"))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .context("failed to write clipboard contents")?;
    }

    let status = child
        .wait()
        .with_context(|| format!("clipboard command did not exit cleanly: {program}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(anyhow!("clipboard command exited with status {status}"))
    }
}

#[cfg(target_os = "macos")]
const FALLBACK_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(all(unix, not(target_os = "macos")))]
const FALLBACK_COMMANDS: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

#[cfg(target_os = "windows")]
const FALLBACK_COMMANDS: &[&[&str]] =
    &[&["powershell.exe", "-NoProfile", "-Command", "Set-Clipboard"]];

#[cfg(not(any(unix, target_os = "windows")))]
const FALLBACK_COMMANDS: &[&[&str]] = &[];
