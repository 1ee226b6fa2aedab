//! `execCommand` as a command surface.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement};

use inkbar_core::{CommandInvocation, CommandSurface, PlatformError};

/// Browser command surface.
///
/// Runs commands through `document.execCommand`. If an editor element is
/// attached it is focused first, so commands land in the writing area even
/// when a toolbar control took focus.
pub struct DocumentSurface {
    document: HtmlDocument,
    editor: Option<HtmlElement>,
}

impl DocumentSurface {
    /// Surface over the current page document.
    pub fn new() -> Result<Self, PlatformError> {
        let document = crate::dom::document()
            .map_err(|e| PlatformError(e.to_string()))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PlatformError::from("document is not an HTML document"))?;
        Ok(Self {
            document,
            editor: None,
        })
    }

    /// Focus `editor` before every command.
    pub fn with_editor(mut self, editor: HtmlElement) -> Self {
        self.editor = Some(editor);
        self
    }
}

impl CommandSurface for DocumentSurface {
    fn exec_command(&self, invocation: &CommandInvocation) -> Result<bool, PlatformError> {
        if let Some(editor) = &self.editor {
            let is_focused = self
                .document
                .active_element()
                .is_some_and(|active| editor.contains(Some(active.as_ref())));
            if !is_focused {
                if let Err(e) = editor.focus() {
                    tracing::debug!("editor focus failed: {:?}", e);
                }
            }
        }

        let command = invocation.command.as_str();
        let result = match &invocation.value {
            Some(value) => {
                self.document
                    .exec_command_with_show_ui_and_value(command, invocation.show_ui, value)
            }
            None => self
                .document
                .exec_command_with_show_ui(command, invocation.show_ui),
        };
        result.map_err(|e| PlatformError(format!("execCommand({command}) threw: {e:?}")))
    }
}
