//! WASM browser tests for the JS bindings.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use inkbar_browser::{HighlightPolicy, ToolbarConfig};
use inkbar_js::{JsToolbar, parse_config};

const MARKUP: &str = r#"
<button id="bold" class="option-button format">B</button>
<button id="justifyLeft" class="option-button align">L</button>
<button id="justifyRight" class="option-button align">R</button>
<button id="createLink">link</button>
<select id="fontName" class="adv-option-button"></select>
<select id="fontSize" class="adv-option-button"></select>
<div id="text-input" contenteditable="true"></div>
"#;

fn set_markup(html: &str) {
    web_sys_body().set_inner_html(html);
}

fn web_sys_body() -> web_sys::HtmlElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .body()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_missing_config_is_default() {
    let config = parse_config(JsValue::UNDEFINED).ok().unwrap();
    assert_eq!(config, ToolbarConfig::default());
    let config = parse_config(JsValue::NULL).ok().unwrap();
    assert_eq!(config, ToolbarConfig::default());
}

#[wasm_bindgen_test]
fn test_partial_config_object() {
    let value = js_sys::JSON::parse(
        r#"{ "editorId": "writer", "groups": [ { "name": "lists", "selector": ".list", "policy": "independent" } ] }"#,
    )
    .unwrap();
    let config = parse_config(value).ok().unwrap();
    assert_eq!(config.editor_id, "writer");
    assert_eq!(config.font_size_id, "fontSize");
    assert_eq!(config.groups.len(), 1);
    assert_eq!(config.groups[0].policy, HighlightPolicy::Independent);
}

#[wasm_bindgen_test]
fn test_bad_policy_rejected() {
    let value = js_sys::JSON::parse(
        r#"{ "groups": [ { "name": "x", "selector": ".x", "policy": "sometimes" } ] }"#,
    )
    .unwrap();
    assert!(parse_config(value).is_err());
}

#[wasm_bindgen_test]
fn test_mount_and_query_groups() {
    set_markup(MARKUP);
    let toolbar = JsToolbar::new(JsValue::UNDEFINED).ok().unwrap();

    let button: web_sys::HtmlElement = wasm_bindgen::JsCast::unchecked_into(
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("justifyRight")
            .unwrap(),
    );
    button.click();

    assert_eq!(toolbar.active_controls("align").ok().unwrap(), ["justifyRight"]);
    assert!(toolbar.active_controls("format").ok().unwrap().is_empty());
    assert!(toolbar.active_controls("nope").is_err());
}

#[wasm_bindgen_test]
fn test_mount_without_markup_throws() {
    set_markup("<p>nothing here</p>");
    assert!(JsToolbar::new(JsValue::UNDEFINED).is_err());
}
