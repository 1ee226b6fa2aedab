//! Mounting the toolbar onto a page.
//!
//! `BrowserToolbar::mount` resolves the markup described by a
//! `ToolbarConfig`, fills the font dropdowns, and installs one listener per
//! control. Listeners live as long as the `BrowserToolbar`; dropping it
//! unbinds the page.

use std::rc::Rc;

use gloo_events::EventListener;
use smol_str::SmolStr;
use web_sys::{Element, HtmlElement, HtmlSelectElement};

use inkbar_core::{
    CommandSurface, Control, ControlGroup, LinkPrompt, Toolbar, ToolbarConfig, ToolbarError,
    font_name_options, font_size_options,
};

use crate::dom;
use crate::marker::ClassMarker;
use crate::prompt::WindowPrompt;
use crate::surface::DocumentSurface;

/// A toolbar bound to the current page.
pub struct BrowserToolbar<S = DocumentSurface, P = WindowPrompt> {
    controller: Rc<Toolbar<S, P, ClassMarker>>,
    editor: HtmlElement,
    font_name: HtmlSelectElement,
    font_size: HtmlSelectElement,
    listeners: Vec<EventListener>,
}

impl BrowserToolbar {
    /// Mount with the real `execCommand` and `window.prompt`.
    pub fn mount(config: &ToolbarConfig) -> Result<Self, ToolbarError> {
        config.validate()?;
        let document = dom::document()?;
        let editor: HtmlElement =
            dom::require_typed(&document, &config.editor_id, "editor", "HTML element")?;
        let surface = DocumentSurface::new()?.with_editor(editor);
        let prompt = WindowPrompt::new()?;
        Self::mount_with(config, surface, prompt)
    }
}

impl<S, P> BrowserToolbar<S, P>
where
    S: CommandSurface + 'static,
    P: LinkPrompt + 'static,
{
    /// Mount with a custom command surface and prompt.
    ///
    /// Missing required markup (editor, font dropdowns, link button) fails
    /// the whole mount. Group and button selectors may match nothing.
    pub fn mount_with(config: &ToolbarConfig, surface: S, prompt: P) -> Result<Self, ToolbarError> {
        config.validate()?;
        let document = dom::document()?;

        let editor: HtmlElement =
            dom::require_typed(&document, &config.editor_id, "editor", "HTML element")?;
        let font_name: HtmlSelectElement = dom::require_typed(
            &document,
            &config.font_name_id,
            "font name dropdown",
            "<select>",
        )?;
        let font_size: HtmlSelectElement = dom::require_typed(
            &document,
            &config.font_size_id,
            "font size dropdown",
            "<select>",
        )?;
        let link_button = dom::require_element(&document, &config.link_id, "link button")?;

        // Highlight groups.
        let mut controller = Toolbar::new(surface, prompt, config);
        let mut group_elements = Vec::with_capacity(config.groups.len());
        for group_config in &config.groups {
            let elements = dom::query_all(&document, &group_config.selector)?;
            let controls = elements
                .iter()
                .map(|el| Control::new(el.id(), ClassMarker::new(el.clone(), &config.active_class)))
                .collect();
            controller.add_group(ControlGroup::with_controls(
                group_config.name.as_str(),
                group_config.policy,
                controls,
            ));
            group_elements.push((SmolStr::new(&group_config.name), elements));
        }

        // Dropdowns.
        dom::populate_select(&font_name, &font_name_options())?;
        dom::populate_select(&font_size, &font_size_options())?;
        font_size.set_value(&config.default_font_size.to_string());

        let controller = Rc::new(controller);
        let mut listeners = Vec::new();

        for (name, elements) in group_elements {
            for (index, element) in elements.iter().enumerate() {
                let controller = controller.clone();
                let name = name.clone();
                listeners.push(EventListener::new(element, "click", move |_| {
                    controller.click_group(&name, index);
                }));
            }
        }

        let option_buttons = dom::query_all(&document, &config.option_selector)?;
        for button in &option_buttons {
            let controller = controller.clone();
            let id = button.id();
            listeners.push(EventListener::new(button, "click", move |_| {
                controller.activate_option(&id);
            }));
        }

        let value_controls = dom::query_all(&document, &config.value_selector)?;
        for control in &value_controls {
            let controller = controller.clone();
            let target = control.clone();
            listeners.push(EventListener::new(control, "change", move |_| {
                on_value_change(&controller, &target);
            }));
        }

        {
            let controller = controller.clone();
            listeners.push(EventListener::new(&link_button, "click", move |_| {
                controller.insert_link();
            }));
        }

        tracing::info!(
            groups = config.groups.len(),
            options = option_buttons.len(),
            values = value_controls.len(),
            listeners = listeners.len(),
            "toolbar mounted"
        );

        Ok(Self {
            controller,
            editor,
            font_name,
            font_size,
            listeners,
        })
    }

    pub fn controller(&self) -> &Toolbar<S, P, ClassMarker> {
        &self.controller
    }

    /// The contenteditable writing area.
    pub fn editor(&self) -> &HtmlElement {
        &self.editor
    }

    pub fn font_name(&self) -> &HtmlSelectElement {
        &self.font_name
    }

    pub fn font_size(&self) -> &HtmlSelectElement {
        &self.font_size
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

fn on_value_change<S, P>(controller: &Toolbar<S, P, ClassMarker>, target: &Element)
where
    S: CommandSurface,
    P: LinkPrompt,
{
    let id = target.id();
    match dom::control_value(target) {
        Some(value) => controller.change_value(&id, &value),
        None => {
            tracing::debug!(control = %id, "value control has no value");
            controller.change_value(&id, "");
        }
    }
}

impl<S, P> std::fmt::Debug for BrowserToolbar<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserToolbar")
            .field("editor", &self.editor.id())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
