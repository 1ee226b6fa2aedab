//! JsToolbar - the mounted toolbar exposed to JavaScript.

use wasm_bindgen::prelude::*;

use inkbar_browser::{BrowserToolbar, FormatCommand, ToolbarConfig};

/// A toolbar mounted on the current page.
///
/// Listeners stay installed until `free()` is called.
#[wasm_bindgen]
pub struct JsToolbar {
    inner: BrowserToolbar,
}

#[wasm_bindgen]
impl JsToolbar {
    /// Mount the toolbar.
    ///
    /// `config` is optional; missing fields use the stock markup ids and
    /// selectors. Throws if required markup is missing.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsToolbar, JsError> {
        let config = parse_config(config)?;
        let inner = BrowserToolbar::mount(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { inner })
    }

    /// Run a formatting command on the current selection.
    ///
    /// Same path as the toolbar buttons: an unsupported command is ignored.
    #[wasm_bindgen(js_name = modifyText)]
    pub fn modify_text(&self, command: &str, value: Option<String>) {
        self.inner
            .controller()
            .modify_text(FormatCommand::from_id(command), false, value);
    }

    /// Prompt for a URL and link the selection, as the link button does.
    #[wasm_bindgen(js_name = insertLink)]
    pub fn insert_link(&self) -> String {
        self.inner.controller().insert_link()
    }

    /// Identifiers of the active controls in a highlight group.
    #[wasm_bindgen(js_name = activeControls)]
    pub fn active_controls(&self, group: &str) -> Result<Vec<String>, JsError> {
        self.inner
            .controller()
            .active_controls(group)
            .map(|ids| ids.into_iter().map(|id| id.to_string()).collect())
            .ok_or_else(|| JsError::new(&format!("unknown group: {group}")))
    }
}

/// Parse an optional JS config object.
pub fn parse_config(value: JsValue) -> Result<ToolbarConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ToolbarConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid toolbar config: {}", e)))
}
