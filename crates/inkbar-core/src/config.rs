//! Toolbar markup configuration.
//!
//! Describes where the toolbar finds its controls on the page. Every field
//! has a default matching the stock markup, so an empty JS object (or no
//! config at all) mounts the standard toolbar.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ToolbarError;
use crate::group::HighlightPolicy;
use crate::options::{DEFAULT_FONT_SIZE, FONT_SIZES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToolbarConfig {
    /// Selector for simple command buttons (no value).
    pub option_selector: String,
    /// Selector for controls carrying a value (color pickers, dropdowns).
    pub value_selector: String,
    pub font_name_id: String,
    pub font_size_id: String,
    /// The contenteditable writing area.
    pub editor_id: String,
    pub link_id: String,
    /// Class marking a control as active.
    pub active_class: String,
    pub link_prompt_message: String,
    pub default_font_size: u8,
    pub groups: Vec<GroupConfig>,
}

/// A highlight group: all elements matching `selector` share `policy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub selector: String,
    pub policy: HighlightPolicy,
}

impl GroupConfig {
    pub fn new(name: &str, selector: &str, policy: HighlightPolicy) -> Self {
        Self {
            name: name.to_string(),
            selector: selector.to_string(),
            policy,
        }
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            option_selector: ".option-button".to_owned(),
            value_selector: ".adv-option-button".to_owned(),
            font_name_id: "fontName".to_owned(),
            font_size_id: "fontSize".to_owned(),
            editor_id: "text-input".to_owned(),
            link_id: "createLink".to_owned(),
            active_class: "active".to_owned(),
            link_prompt_message: "Enter a URL?".to_owned(),
            default_font_size: DEFAULT_FONT_SIZE,
            groups: vec![
                GroupConfig::new("align", ".align", HighlightPolicy::Exclusive),
                GroupConfig::new("spacing", ".spacing", HighlightPolicy::Exclusive),
                GroupConfig::new("format", ".format", HighlightPolicy::Independent),
                GroupConfig::new("script", ".script", HighlightPolicy::Exclusive),
            ],
        }
    }
}

impl ToolbarConfig {
    /// Check the config before touching the page.
    pub fn validate(&self) -> Result<(), ToolbarError> {
        let required = [
            ("optionSelector", &self.option_selector),
            ("valueSelector", &self.value_selector),
            ("fontNameId", &self.font_name_id),
            ("fontSizeId", &self.font_size_id),
            ("editorId", &self.editor_id),
            ("linkId", &self.link_id),
            ("activeClass", &self.active_class),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ToolbarError::InvalidConfig(format!("{field} is empty")));
            }
        }

        if self.active_class.contains(char::is_whitespace) {
            return Err(ToolbarError::InvalidConfig(format!(
                "activeClass {:?} must be a single class name",
                self.active_class
            )));
        }

        if !FONT_SIZES.contains(&self.default_font_size) {
            return Err(ToolbarError::InvalidConfig(format!(
                "defaultFontSize {} is outside {}..={}",
                self.default_font_size,
                FONT_SIZES.start(),
                FONT_SIZES.end()
            )));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.selector.trim().is_empty() {
                return Err(ToolbarError::InvalidConfig(format!(
                    "group {:?} has an empty selector",
                    group.name
                )));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ToolbarError::InvalidConfig(format!(
                    "duplicate group name {:?}",
                    group.name
                )));
            }
        }

        Ok(())
    }

    pub fn group(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.name == name)
    }
}
