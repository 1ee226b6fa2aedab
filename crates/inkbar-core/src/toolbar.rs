//! The toolbar controller.
//!
//! `Toolbar` turns discrete UI events (a button click, a dropdown change, the
//! link button) into calls on the host command primitive, and owns the
//! highlight groups. It is generic over the host so the same logic drives the
//! browser DOM and the in-memory test doubles.

use smol_str::SmolStr;

use crate::command::{CommandInvocation, FormatCommand};
use crate::config::ToolbarConfig;
use crate::group::ControlGroup;
use crate::link::normalize_link;
use crate::marker::Marker;
use crate::platform::{CommandSurface, LinkPrompt};

pub struct Toolbar<S, P, M> {
    surface: S,
    prompt: P,
    groups: Vec<ControlGroup<M>>,
    link_id: SmolStr,
    link_prompt_message: String,
}

impl<S, P, M> Toolbar<S, P, M>
where
    S: CommandSurface,
    P: LinkPrompt,
    M: Marker,
{
    /// Create a controller with no groups yet.
    pub fn new(surface: S, prompt: P, config: &ToolbarConfig) -> Self {
        Self {
            surface,
            prompt,
            groups: Vec::new(),
            link_id: SmolStr::new(&config.link_id),
            link_prompt_message: config.link_prompt_message.clone(),
        }
    }

    pub fn add_group(&mut self, group: ControlGroup<M>) {
        self.groups.push(group);
    }

    pub fn with_group(mut self, group: ControlGroup<M>) -> Self {
        self.add_group(group);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn groups(&self) -> &[ControlGroup<M>] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&ControlGroup<M>> {
        self.groups.iter().find(|g| g.name() == name)
    }

    pub fn link_id(&self) -> &str {
        &self.link_id
    }

    /// Forward a command to the host.
    ///
    /// The host's verdict is logged and otherwise ignored: an unsupported
    /// command is a silent no-op.
    pub fn modify_text(&self, command: FormatCommand, show_ui: bool, value: Option<String>) {
        let invocation = CommandInvocation {
            command,
            show_ui,
            value,
        };
        match self.surface.exec_command(&invocation) {
            Ok(true) => tracing::trace!(
                command = %invocation.command,
                value = ?invocation.value,
                "command executed"
            ),
            Ok(false) => tracing::debug!(
                command = %invocation.command,
                value = ?invocation.value,
                "host did not execute command"
            ),
            Err(e) => tracing::debug!(command = %invocation.command, "command failed: {}", e),
        }
    }

    /// A simple option button was activated.
    pub fn activate_option(&self, id: &str) {
        self.modify_text(FormatCommand::from_id(id), false, None);
    }

    /// A value-carrying control changed; `value` is read at event time.
    pub fn change_value(&self, id: &str, value: &str) {
        self.modify_text(FormatCommand::from_id(id), false, Some(value.to_string()));
    }

    /// Ask for a URL and link the selection to it.
    ///
    /// Cancel still dispatches, with the bare `http://` prefix. Returns the
    /// URL that was dispatched.
    pub fn insert_link(&self) -> String {
        let answer = self.prompt.prompt(&self.link_prompt_message);
        if answer.is_none() {
            tracing::debug!("link prompt cancelled");
        }
        let url = normalize_link(answer.as_deref());
        self.modify_text(FormatCommand::from_id(&self.link_id), false, Some(url.clone()));
        url
    }

    /// Apply a click on control `index` of the named group.
    ///
    /// Returns `None` for an unknown group, otherwise whether the control is
    /// active afterwards.
    pub fn click_group(&self, group: &str, index: usize) -> Option<bool> {
        let group = self.group(group)?;
        Some(group.click(index))
    }

    /// Identifiers currently marked active in a group.
    pub fn active_controls(&self, group: &str) -> Option<Vec<SmolStr>> {
        self.group(group).map(ControlGroup::active_ids)
    }
}
