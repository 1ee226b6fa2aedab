//! `window.prompt` as a link prompt.

use web_sys::Window;

use inkbar_core::{LinkPrompt, PlatformError};

/// Blocking browser prompt. Suspends the page until the user answers.
pub struct WindowPrompt {
    window: Window,
}

impl WindowPrompt {
    pub fn new() -> Result<Self, PlatformError> {
        let window = web_sys::window().ok_or_else(|| PlatformError::from("no window"))?;
        Ok(Self { window })
    }
}

impl LinkPrompt for WindowPrompt {
    fn prompt(&self, message: &str) -> Option<String> {
        match self.window.prompt_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("prompt failed: {:?}", e);
                None
            }
        }
    }
}
