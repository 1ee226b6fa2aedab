//! DOM lookup and dropdown helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use inkbar_core::{PlatformError, SelectOption, ToolbarError};

/// Get the page document.
pub fn document() -> Result<Document, ToolbarError> {
    let window = web_sys::window().ok_or_else(|| PlatformError::from("no window"))?;
    Ok(window
        .document()
        .ok_or_else(|| PlatformError::from("no document"))?)
}

/// Look up a required element by id.
pub fn require_element(document: &Document, id: &str, what: &str) -> Result<Element, ToolbarError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ToolbarError::missing(what, format!("#{id}")))
}

/// Look up a required element by id and cast it.
pub fn require_typed<T: JsCast>(
    document: &Document,
    id: &str,
    what: &str,
    expected: &str,
) -> Result<T, ToolbarError> {
    require_element(document, id, what)?
        .dyn_into::<T>()
        .map_err(|_| ToolbarError::WrongElementType {
            id: id.to_string(),
            expected: expected.to_string(),
        })
}

/// All elements matching a selector, in document order.
///
/// Matching nothing is fine; an unparseable selector is a config error.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, ToolbarError> {
    let node_list = document
        .query_selector_all(selector)
        .map_err(|e| ToolbarError::InvalidConfig(format!("bad selector {selector:?}: {e:?}")))?;

    let mut elements = Vec::with_capacity(node_list.length() as usize);
    for i in 0..node_list.length() {
        let Some(node) = node_list.item(i) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<Element>() {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Append options to a `<select>`, in order.
pub fn populate_select(
    select: &HtmlSelectElement,
    options: &[SelectOption],
) -> Result<(), PlatformError> {
    for opt in options {
        let option = HtmlOptionElement::new_with_text_and_value(&opt.label, &opt.value)
            .map_err(|e| PlatformError(format!("create option: {e:?}")))?;
        select
            .add_with_html_option_element(&option)
            .map_err(|e| PlatformError(format!("add option: {e:?}")))?;
    }
    Ok(())
}

/// Current value of a value-carrying control.
///
/// Handles `<input>` (color pickers) and `<select>`; anything else falls back
/// to its `value` attribute.
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.get_attribute("value")
}

/// Values of every option in a `<select>`, in order.
pub fn select_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    (0..options.length())
        .filter_map(|i| options.get_with_index(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}
