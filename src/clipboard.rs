/*!
 * Clipboard support for filecopy
 *
 * Copying is best-effort: the native clipboard on macOS and Windows, the
 * command-line clipboard tools found on other systems, then tmux. When
 * nothing works the outcome is reported as unavailable instead of failing
 * the run.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The native clipboard could not be opened or written
    #[error("Native clipboard error: {0}")]
    Native(#[from] arboard::Error),

    /// Failed to execute the command
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

/// What happened to a clipboard write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    /// The text is on the clipboard
    Copied { provider: &'static str },
    /// The clipboard was not usable this run
    Unavailable { reason: String },
}

impl ClipboardOutcome {
    /// Name of the provider that took the text
    pub fn provider(&self) -> Option<&'static str> {
        match self {
            Self::Copied { provider } => Some(*provider),
            Self::Unavailable { .. } => None,
        }
    }
}

/// Capability to place text on a clipboard
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`
    fn write(&self, text: &str) -> ClipboardOutcome;
}

/// The platform clipboard, falling back to command-line tools
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write(&self, text: &str) -> ClipboardOutcome {
        if text.is_empty() {
            return ClipboardOutcome::Unavailable {
                reason: "nothing to copy".to_string(),
            };
        }

        for provider in determine_clipboard_providers() {
            match provider.copy_to_clipboard(text) {
                Ok(()) => {
                    debug!("Copied {} bytes with {}", text.len(), provider.name());
                    return ClipboardOutcome::Copied {
                        provider: provider.name(),
                    };
                }
                Err(e) => debug!("Clipboard provider {} failed: {}", provider.name(), e),
            }
        }

        ClipboardOutcome::Unavailable {
            reason: ClipboardError::NoClipboardFound.to_string(),
        }
    }
}

/// A clipboard that never accepts text
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write(&self, _text: &str) -> ClipboardOutcome {
        ClipboardOutcome::Unavailable {
            reason: "clipboard disabled".to_string(),
        }
    }
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClipboardProvider {
    /// OS clipboard API (Win32, AppKit, X11/Wayland)
    Native,
    /// tmux paste buffer
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (via WSL)
    Wsl,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    fn name(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Tmux => "tmux",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Wayland => "wl-copy",
            Self::MacOS => "pbcopy",
            Self::Wsl => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (cmd, args) = match self {
            // The handle owns the clipboard while open and releases it on drop.
            Self::Native => {
                let mut clipboard = arboard::Clipboard::new()?;
                clipboard.set_text(text)?;
                return Ok(());
            }
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Wsl => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        };

        execute_clipboard_command(cmd, &args, text)
    }
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Some(paths) = env::var_os("PATH") {
        if env::split_paths(&paths).any(|dir| dir.join(command).exists()) {
            return true;
        }
    }

    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Spawn a clipboard command and feed `text` to its stdin
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    {
        let mut stdin = child.stdin.take().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;
        stdin
            .write_all(text.as_bytes())
            .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;
    }

    let status = child.wait()?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

static PLATFORM: OnceLock<&'static str> = OnceLock::new();

/// Determine the platform (cached)
fn get_platform() -> &'static str {
    PLATFORM.get_or_init(|| {
        if cfg!(target_os = "macos") {
            "macos"
        } else if cfg!(target_os = "windows") {
            "windows"
        } else if cfg!(target_os = "linux") {
            if env::var("WSL_DISTRO_NAME").is_ok() {
                "wsl"
            } else {
                "linux"
            }
        } else if cfg!(target_os = "android") {
            "android"
        } else {
            "unknown"
        }
    })
}

/// Providers to try, in order of preference
fn determine_clipboard_providers() -> Vec<ClipboardProvider> {
    let tmux_running = command_exists("tmux") && is_tmux_running();
    providers_for(get_platform(), tmux_running, command_exists)
}

/// Provider order for `platform`, given which commands are installed
///
/// The native API only keeps its contents after exit on macOS and Windows.
/// On X11 and Wayland the selection is served by the writing process, so
/// there only the command-line tools, which outlive us, are used.
fn providers_for(
    platform: &str,
    tmux_running: bool,
    exists: impl Fn(&str) -> bool,
) -> Vec<ClipboardProvider> {
    let mut providers = Vec::with_capacity(4);

    match platform {
        "macos" => {
            providers.push(ClipboardProvider::Native);
            if exists("pbcopy") {
                providers.push(ClipboardProvider::MacOS);
            }
        }
        "windows" => providers.push(ClipboardProvider::Native),
        "wsl" => {
            if exists("clip.exe") {
                providers.push(ClipboardProvider::Wsl);
            }
        }
        "linux" => {
            if exists("wl-copy") {
                providers.push(ClipboardProvider::Wayland);
            }
            if exists("xsel") {
                providers.push(ClipboardProvider::Xsel);
            }
            if exists("xclip") {
                providers.push(ClipboardProvider::Xclip);
            }
        }
        "android" => {
            if exists("termux-clipboard-set") {
                providers.push(ClipboardProvider::Termux);
            }
        }
        _ => {}
    }

    if tmux_running {
        providers.push(ClipboardProvider::Tmux);
    }

    providers
}

/// Check if tmux is running and available for clipboard operations
fn is_tmux_running() -> bool {
    if env::var("TMUX").is_ok() {
        return true;
    }

    Command::new("tmux")
        .args(["list-buffers"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
