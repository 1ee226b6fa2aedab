//! inkbar-core: Pure Rust toolbar logic without framework dependencies.
//!
//! This crate provides:
//! - `FormatCommand` - the host formatting commands a toolbar dispatches
//! - `ControlGroup<M>` - exclusive/independent highlight policies over any `Marker`
//! - `Toolbar<S, P>` - the controller, generic over `CommandSurface` and `LinkPrompt`
//! - Option lists, link normalization and `ToolbarConfig`

pub mod command;
pub mod config;
pub mod error;
pub mod group;
pub mod link;
pub mod marker;
pub mod options;
pub mod platform;
pub mod toolbar;

pub use command::{CommandInvocation, FormatCommand};
pub use config::{GroupConfig, ToolbarConfig};
pub use error::ToolbarError;
pub use group::{Control, ControlGroup, HighlightPolicy};
pub use link::{LINK_PREFIX, normalize_link};
pub use marker::{Marker, MemoryMarker};
pub use options::{
    DEFAULT_FONT_SIZE, FONT_LIST, FONT_SIZES, SelectOption, font_name_options, font_size_options,
};
pub use platform::{CommandSurface, LinkPrompt, PlatformError, RecordingSurface, ScriptedPrompt};
pub use smol_str::SmolStr;
pub use toolbar::Toolbar;
