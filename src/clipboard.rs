/*!
 * Clipboard sink
 *
 * Copies the document to the system clipboard by piping it into the first
 * available platform clipboard command.
 */

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to run or talk to the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Something that can receive the aggregated document
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy(&self, text: &str) -> Result<()>;
}

/// Clipboard commands, in the order they are tried on each platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCommand {
    Tmux,
    Pbcopy,
    WlCopy,
    Xsel,
    Xclip,
    ClipExe,
    Termux,
}

impl ClipboardCommand {
    fn program(&self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Pbcopy => "pbcopy",
            Self::WlCopy => "wl-copy",
            Self::Xsel => "xsel",
            Self::Xclip => "xclip",
            Self::ClipExe => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Tmux => &["load-buffer", "-w", "-"],
            Self::Xsel => &["-b", "-i"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            _ => &[],
        }
    }

    /// Pipe `text` into the command's stdin
    pub fn run(&self, text: &str) -> Result<()> {
        pipe_to(self.program(), self.args(), text)
    }
}

/// Spawn `program`, write `text` to its stdin and wait for it to exit.
///
/// The child is always waited on. A failed write is reported ahead of the
/// exit status.
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("{}: {}", program, e)))?;

    let written = match child.stdin.take() {
        // stdin is dropped at the end of the arm, so the command sees EOF
        Some(mut stdin) => stdin
            .write_all(text.as_bytes())
            .map_err(ClipboardError::from),
        None => Err(ClipboardError::CommandFailed(format!(
            "Failed to open stdin for {}",
            program
        ))),
    };

    let status = child.wait();
    written?;
    let status = status?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            program, status
        )))
    }
}

/// The platform clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let candidates = detect_commands();
        let mut last_error = ClipboardError::NoClipboardFound;

        for command in candidates {
            match command.run(text) {
                Ok(()) => {
                    log::debug!("Copied {} bytes with {}", text.len(), command.program());
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("Clipboard command {} failed: {}", command.program(), e);
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}

/// Check if a command exists on the PATH
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH").is_some_and(|paths| {
        env::split_paths(&paths).any(|dir| Path::new(&dir).join(command).is_file())
    })
}

/// Clipboard commands usable on this system, most preferred first
fn detect_commands() -> Vec<ClipboardCommand> {
    let mut commands = Vec::new();

    if env::var_os("TMUX").is_some() && command_exists("tmux") {
        commands.push(ClipboardCommand::Tmux);
    }

    let platform = if cfg!(target_os = "macos") {
        vec![ClipboardCommand::Pbcopy]
    } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
        vec![ClipboardCommand::ClipExe]
    } else if cfg!(target_os = "android") {
        vec![ClipboardCommand::Termux]
    } else {
        vec![
            ClipboardCommand::WlCopy,
            ClipboardCommand::Xsel,
            ClipboardCommand::Xclip,
        ]
    };

    commands.extend(
        platform
            .into_iter()
            .filter(|command| command_exists(command.program())),
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("sh"));
        assert!(!command_exists("nonexistentcommandxyz"));
    }

    #[test]
    fn test_detected_commands_are_installed() {
        for command in detect_commands() {
            assert!(command_exists(command.program()));
        }
    }

    #[test]
    fn test_pipe_to_reading_command() {
        assert!(pipe_to("cat", &[], "hello").is_ok());
    }

    #[test]
    fn test_pipe_to_reports_exit_status() {
        let err = pipe_to("sh", &["-c", "cat >/dev/null; exit 3"], "hello").unwrap_err();
        assert!(err.to_string().contains("exited with status"));
    }

    #[test]
    fn test_pipe_to_returns_after_failed_write() {
        // `true` exits without reading, so a write larger than the pipe buffer breaks
        let text = "x".repeat(1 << 22);
        let err = pipe_to("true", &[], &text).unwrap_err();
        assert!(matches!(err, ClipboardError::Io(_)));
    }

    #[test]
    fn test_command_arguments() {
        assert_eq!(ClipboardCommand::Xclip.args(), ["-selection", "clipboard", "-in"]);
        assert!(ClipboardCommand::Pbcopy.args().is_empty());
        assert_eq!(ClipboardCommand::Termux.program(), "termux-clipboard-set");
    }
}
