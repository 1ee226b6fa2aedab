//! WASM bindings for the inkbar toolbar.
//!
//! Loading the module installs the panic hook and console logging. Page code
//! then mounts the toolbar:
//!
//! ```js
//! import init, { JsToolbar } from "inkbar-js";
//! await init();
//! const toolbar = new JsToolbar({ editorId: "text-input" });
//! ```

mod toolbar;

pub use toolbar::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and tracing for better messages in the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Host page may already have installed a subscriber.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
