// Runtime configuration from command-line flags and environment

use crate::ai::gemini_client::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::ai::GeminiConfig;
use crate::clipboard::{Clipboard, ClipboardError, CommandClipboard, UnavailableClipboard};
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "promptlab", version, about = "Suno prompt preset catalog with AI preset generation")]
pub struct Config {
    /// Address the local API binds to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Preferred port; nearby ports are tried when it is taken
    #[arg(long, default_value_t = 8384)]
    pub port: u16,

    /// Gemini model used for preset generation
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Gemini API key. Not checked locally; a missing key fails on the first request.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Host command that receives copied text on stdin, e.g. "wl-copy"
    #[arg(long, env = "PROMPTLAB_CLIPBOARD")]
    pub clipboard_command: Option<String>,

    /// Directory with the browser front end (index.html fallback)
    #[arg(long)]
    pub frontend_dir: Option<PathBuf>,

    /// Timeout for one Gemini request, in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone().filter(|key| !key.trim().is_empty()),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    pub fn clipboard(&self) -> Result<Arc<dyn Clipboard>, ClipboardError> {
        match self.clipboard_command.as_deref() {
            Some(command_line) => Ok(Arc::new(CommandClipboard::from_command_line(command_line)?)),
            None => Ok(Arc::new(UnavailableClipboard)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["promptlab"]).unwrap();
        assert_eq!(config.port, 8384);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.gemini().model, DEFAULT_MODEL);
        assert_eq!(config.gemini().timeout, Duration::from_secs(30));
        assert!(config.frontend_dir.is_none());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "promptlab",
            "--port",
            "9000",
            "--model",
            "gemini-test",
            "--api-base",
            "http://127.0.0.1:1234",
            "--api-key",
            "secret",
            "--clipboard-command",
            "xclip -selection clipboard",
        ])
        .unwrap();
        let gemini = config.gemini();
        assert_eq!(config.port, 9000);
        assert_eq!(gemini.model, "gemini-test");
        assert_eq!(gemini.api_base, "http://127.0.0.1:1234");
        assert_eq!(gemini.api_key.as_deref(), Some("secret"));
        assert!(config.clipboard().is_ok());
    }

    #[test]
    fn test_blank_api_key_is_dropped() {
        let config = Config::try_parse_from(["promptlab", "--api-key", "  "]).unwrap();
        assert!(config.gemini().api_key.is_none());
    }

    #[test]
    fn test_blank_clipboard_command_is_rejected() {
        let config = Config::try_parse_from(["promptlab", "--clipboard-command", " "]).unwrap();
        assert!(matches!(config.clipboard(), Err(ClipboardError::EmptyCommand)));
    }
}
