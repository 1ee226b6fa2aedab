//! Platform abstraction traits for toolbar operations.
//!
//! These traits define the interface between the toolbar logic and the host
//! (browser DOM, native UI, tests). The browser implementation calls
//! `document.execCommand` and `window.prompt`.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::command::CommandInvocation;

/// Error type for platform operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// The host's rich-text command primitive.
///
/// Applies a command to the current selection in the editable region.
/// Returns whether the host reports the command as executed. Callers treat
/// both `Ok(false)` and `Err` as a silent no-op.
pub trait CommandSurface {
    fn exec_command(&self, invocation: &CommandInvocation) -> Result<bool, PlatformError>;
}

/// Asks the user for a line of text.
///
/// `None` means the user cancelled.
pub trait LinkPrompt {
    fn prompt(&self, message: &str) -> Option<String>;
}

impl<T: CommandSurface + ?Sized> CommandSurface for &T {
    fn exec_command(&self, invocation: &CommandInvocation) -> Result<bool, PlatformError> {
        (**self).exec_command(invocation)
    }
}

impl<T: LinkPrompt + ?Sized> LinkPrompt for &T {
    fn prompt(&self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }
}

/// Command surface that records every invocation.
///
/// Useful for tests and for hosts without a native command primitive.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: RefCell<Vec<CommandInvocation>>,
    /// Commands reported as unsupported (`Ok(false)`).
    rejected: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the named commands as unsupported. They are still recorded.
    pub fn rejecting(commands: &[&str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            rejected: commands.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// All invocations so far, oldest first.
    pub fn calls(&self) -> Vec<CommandInvocation> {
        self.calls.borrow().clone()
    }

    pub fn last(&self) -> Option<CommandInvocation> {
        self.calls.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl CommandSurface for RecordingSurface {
    fn exec_command(&self, invocation: &CommandInvocation) -> Result<bool, PlatformError> {
        self.calls.borrow_mut().push(invocation.clone());
        let name = invocation.command.as_str();
        Ok(!self.rejected.iter().any(|r| r == name))
    }
}

/// Prompt that answers from a queue.
///
/// Once the queue is empty every prompt is treated as cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer; `None` simulates cancel.
    pub fn push(&self, answer: Option<&str>) {
        self.answers
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    /// Messages shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl LinkPrompt for ScriptedPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::FormatCommand;

    #[test]
    fn test_recording_surface_records_in_order() {
        let surface = RecordingSurface::new();
        surface
            .exec_command(&CommandInvocation::new(FormatCommand::Bold, None))
            .unwrap();
        surface
            .exec_command(&CommandInvocation::new(
                FormatCommand::FontSize,
                Some("5".into()),
            ))
            .unwrap();

        let calls = surface.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].command, FormatCommand::Bold);
        assert_eq!(calls[1].value.as_deref(), Some("5"));
    }

    #[test]
    fn test_recording_surface_rejects() {
        let surface = RecordingSurface::rejecting(&["nope"]);
        let ok = surface
            .exec_command(&CommandInvocation::new(FormatCommand::from_id("nope"), None))
            .unwrap();
        assert!(!ok);
        assert_eq!(surface.calls().len(), 1);
    }

    #[test]
    fn test_scripted_prompt_runs_dry_as_cancel() {
        let prompt = ScriptedPrompt::new();
        prompt.push(Some("example.com"));
        assert_eq!(prompt.prompt("url?").as_deref(), Some("example.com"));
        assert_eq!(prompt.prompt("url?"), None);
        assert_eq!(prompt.asked(), vec!["url?", "url?"]);
    }
}
