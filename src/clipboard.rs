// Copy-to-clipboard action and its acknowledgment toast
//
// The clipboard itself belongs to the host. `CommandClipboard` pipes text
// into a host tool such as `wl-copy`, `xclip -selection clipboard` or
// `pbcopy`; without one configured every copy fails and is only logged.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::Instant;

/// How long the copy acknowledgment stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

pub const COPY_TOAST_MESSAGE: &str = "📋 프롬프트가 복사되었습니다!";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command configured")]
    Unavailable,
    #[error("clipboard command is empty")]
    EmptyCommand,
    #[error("failed to run clipboard command: {0}")]
    Io(#[from] std::io::Error),
    #[error("clipboard command exited with {0}")]
    CommandFailed(std::process::ExitStatus),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Host has no usable clipboard
pub struct UnavailableClipboard;

#[async_trait]
impl Clipboard for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

/// Writes text to the stdin of a host clipboard command
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Split a command line like `xclip -selection clipboard` on whitespace
    pub fn from_command_line(command_line: &str) -> Result<Self, ClipboardError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(ClipboardError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits early closes the pipe; its exit status decides
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
            // Close stdin so the tool sees EOF
            drop(stdin);
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed(status));
        }
        Ok(())
    }
}

/// Transient acknowledgment, visible for `TOAST_DURATION` after `show`
#[derive(Debug, Default, Clone, Copy)]
pub struct Toast {
    shown_at: Option<Instant>,
}

impl Toast {
    pub fn show(&mut self) {
        self.shown_at = Some(Instant::now());
    }

    pub fn is_visible(&self) -> bool {
        self.shown_at
            .map(|at| at.elapsed() < TOAST_DURATION)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_toast_hides_after_duration() {
        let mut toast = Toast::default();
        assert!(!toast.is_visible());

        toast.show();
        assert!(toast.is_visible());

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert!(toast.is_visible());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_command_line_parsing() {
        let clipboard = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);

        assert!(matches!(
            CommandClipboard::from_command_line("   "),
            Err(ClipboardError::EmptyCommand)
        ));
    }

    #[tokio::test]
    async fn test_unavailable_clipboard_fails() {
        assert!(matches!(
            UnavailableClipboard.write_text("x").await,
            Err(ClipboardError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_command_clipboard_reports_exit_status() {
        let ok = CommandClipboard::from_command_line("cat").unwrap();
        assert!(ok.write_text("lofi, rainy").await.is_ok());

        let failing = CommandClipboard::from_command_line("false").unwrap();
        assert!(matches!(
            failing.write_text("lofi").await,
            Err(ClipboardError::CommandFailed(_))
        ));
    }
}
