//! Browser DOM layer for the inkbar toolbar.
//!
//! This crate wires `inkbar-core`'s controller to a page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `surface`: `execCommand` as a `CommandSurface`
//! - `prompt`: `window.prompt` as a `LinkPrompt`
//! - `marker`: CSS class markers on toolbar elements
//! - `dom`: element lookup and dropdown population
//! - `toolbar`: `BrowserToolbar`, which mounts everything and owns the listeners
//!
//! # Re-exports
//!
//! This crate re-exports `inkbar-core` for convenience, so consumers
//! only need to depend on `inkbar-browser`.

// Re-export core crate
pub use inkbar_core;
pub use inkbar_core::*;

pub mod dom;
pub mod marker;
pub mod prompt;
pub mod surface;
pub mod toolbar;

pub use marker::ClassMarker;
pub use prompt::WindowPrompt;
pub use surface::DocumentSurface;
pub use toolbar::BrowserToolbar;
