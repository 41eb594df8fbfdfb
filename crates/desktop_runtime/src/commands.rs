//! Terminal-style window commands (`open about`, `minimize resume`, `windows`).
//!
//! A terminal panel parses a line into a [`WindowCommand`] and turns it into a
//! [`DesktopAction`]; `open` goes through the open-request channel so the terminal never needs a
//! reference to the window manager.

use thiserror::Error;

use crate::{
    model::{WindowId, WindowSummary},
    open_request::OpenWindowRequest,
    reducer::DesktopAction,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownVerb(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand {
    Open(OpenWindowRequest),
    Close(WindowId),
    Focus(WindowId),
    Minimize(WindowId),
    Restore(WindowId),
    Fullscreen(WindowId),
    List,
}

impl WindowCommand {
    /// Maps the command to a reducer action. `List` is answered from [`WindowCommand::render_list`]
    /// and has no action.
    pub fn into_action(self) -> Option<DesktopAction> {
        Some(match self {
            Self::Open(request) => DesktopAction::HandleOpenRequest(request),
            Self::Close(window_id) => DesktopAction::CloseWindow { window_id },
            Self::Focus(window_id) => DesktopAction::FocusWindow { window_id },
            Self::Minimize(window_id) => DesktopAction::MinimizeWindow { window_id },
            Self::Restore(window_id) => DesktopAction::RestoreWindow { window_id },
            Self::Fullscreen(window_id) => DesktopAction::ToggleFullscreen { window_id },
            Self::List => return None,
        })
    }

    /// Plain-text table for the `windows` command.
    pub fn render_list(windows: &[WindowSummary]) -> String {
        if windows.is_empty() {
            return "no open windows".to_string();
        }
        let id_width = windows
            .iter()
            .map(|w| w.id.as_str().len())
            .max()
            .unwrap_or(0)
            .max("id".len());
        let mut out = format!("{:<id_width$}  {:<10}  focused", "id", "state");
        for window in windows {
            let row = format!(
                "{:<id_width$}  {:<10}  {}",
                window.id.as_str(),
                window.state.label(),
                if window.focused { "*" } else { "" }
            );
            out.push('\n');
            out.push_str(row.trim_end());
        }
        out
    }
}

/// Parses one command line.
pub fn parse_window_command(line: &str) -> Result<WindowCommand, CommandError> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or(CommandError::Empty)?;
    let args: Vec<&str> = parts.collect();

    match verb {
        "windows" => {
            if args.is_empty() {
                Ok(WindowCommand::List)
            } else {
                Err(CommandError::Usage("windows"))
            }
        }
        "open" => parse_open(&args),
        "close" => single_id(&args, "close <window-id>").map(WindowCommand::Close),
        "focus" => single_id(&args, "focus <window-id>").map(WindowCommand::Focus),
        "minimize" => single_id(&args, "minimize <window-id>").map(WindowCommand::Minimize),
        "restore" => single_id(&args, "restore <window-id>").map(WindowCommand::Restore),
        "fullscreen" => single_id(&args, "fullscreen <window-id>").map(WindowCommand::Fullscreen),
        other => Err(CommandError::UnknownVerb(other.to_string())),
    }
}

fn parse_open(args: &[&str]) -> Result<WindowCommand, CommandError> {
    const USAGE: &str = "open [--background] <window-id>";
    let mut request_focus = true;
    let mut window_id = None;
    for arg in args {
        match *arg {
            "--background" | "-b" => request_focus = false,
            flag if flag.starts_with('-') => {
                return Err(CommandError::UnknownFlag(flag.to_string()))
            }
            id if window_id.is_none() => window_id = Some(WindowId::from(id)),
            _ => return Err(CommandError::Usage(USAGE)),
        }
    }
    let window_id = window_id.ok_or(CommandError::Usage(USAGE))?;
    Ok(WindowCommand::Open(OpenWindowRequest::new(
        window_id,
        request_focus,
    )))
}

fn single_id(args: &[&str], usage: &'static str) -> Result<WindowId, CommandError> {
    match args {
        [id] if !id.starts_with('-') => Ok(WindowId::from(*id)),
        _ => Err(CommandError::Usage(usage)),
    }
}
