//! Creates a pipe to listen for external commands.
use crate::errors::{DeskError, Result};
use crate::models::AppKind;
use crate::Command;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Holds pipe file location and a receiver.
#[derive(Debug)]
pub struct CommandPipe {
    pipe_file: PathBuf,
    rx: mpsc::UnboundedReceiver<Command>,
}

impl Drop for CommandPipe {
    fn drop(&mut self) {
        use std::os::unix::fs::OpenOptionsExt;
        self.rx.close();

        // Open fifo for write to unblock pending open for read operation that prevents tokio runtime
        // from shutting down.
        std::fs::OpenOptions::new()
            .write(true)
            .custom_flags(nix::fcntl::OFlag::O_NONBLOCK.bits())
            .open(self.pipe_file.clone())
            .ok();
    }
}

impl CommandPipe {
    /// Create and listen to the named pipe.
    /// # Errors
    ///
    /// Will error if unable to `mkfifo`, likely a filesystem issue
    /// such as inadequate permissions.
    pub async fn new(pipe_file: PathBuf) -> Result<Self> {
        fs::remove_file(pipe_file.as_path()).await.ok();
        if let Err(e) = nix::unistd::mkfifo(&pipe_file, nix::sys::stat::Mode::S_IRWXU) {
            tracing::error!("Failed to create new fifo {:?}", e);
        }

        let path = pipe_file.clone();
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            while !tx.is_closed() {
                read_from_pipe(&path, &tx).await;
            }
            fs::remove_file(path).await.ok();
        });

        Ok(Self { pipe_file, rx })
    }

    #[must_use]
    pub fn pipe_name() -> PathBuf {
        PathBuf::from("commands.pipe")
    }

    pub async fn read_command(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}

async fn read_from_pipe(pipe_file: &Path, tx: &mpsc::UnboundedSender<Command>) -> Option<()> {
    let file = fs::File::open(pipe_file).await.ok()?;
    let mut lines = BufReader::new(file).lines();

    while let Some(line) = lines.next_line().await.ok()? {
        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                tracing::error!("An error occurred while parsing the command: {}", err);
                return None;
            }
        };
        tx.send(cmd).ok()?;
    }

    Some(())
}

fn parse_command(s: &str) -> Result<Command> {
    let (head, rest) = s.split_once(' ').unwrap_or((s, ""));
    match head {
        "Open" => Ok(Command::Open(parse_kind(rest)?)),
        "Close" => Ok(Command::Close(parse_kind(rest)?)),
        "Minimize" => Ok(Command::Minimize(parse_kind(rest)?)),
        "Focus" => Ok(Command::Focus(parse_kind(rest)?)),
        "ToggleMaximize" => Ok(Command::ToggleMaximize(parse_kind(rest)?)),
        "SetIcon" => build_set_icon(rest),
        "ResetIcon" => build_reset_icon(rest),
        _ => Err(DeskError::UnknownCommand(s.into())),
    }
}

fn parse_kind(raw: &str) -> Result<AppKind> {
    AppKind::from_str(raw.trim())
}

// Icon labels may contain spaces; the image path is the last token.
fn build_set_icon(raw: &str) -> Result<Command> {
    let Some((label, image)) = raw.rsplit_once(' ') else {
        return Err(DeskError::UnknownCommand(format!("SetIcon {raw}")));
    };
    if label.is_empty() || image.is_empty() {
        return Err(DeskError::UnknownCommand(format!("SetIcon {raw}")));
    }
    Ok(Command::SetIcon {
        label: label.to_string(),
        image: image.to_string(),
    })
}

fn build_reset_icon(raw: &str) -> Result<Command> {
    if raw.is_empty() {
        return Err(DeskError::UnknownCommand("ResetIcon".to_string()));
    }
    Ok(Command::ResetIcon(raw.to_string()))
}
