//! Host formatting commands.
//!
//! A toolbar control's identifier doubles as the command it dispatches, so
//! parsing never fails: identifiers the enum doesn't know are carried as
//! `FormatCommand::Other` and forwarded verbatim. Whether the host supports
//! them is the host's business.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// A rich-text command understood by the host editing surface.
///
/// Names follow the browser `execCommand` command identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    // === Inline formatting ===
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,

    // === Lists ===
    InsertOrderedList,
    InsertUnorderedList,

    // === History ===
    Undo,
    Redo,

    // === Links ===
    CreateLink,
    Unlink,

    // === Alignment ===
    JustifyLeft,
    JustifyCenter,
    JustifyRight,
    JustifyFull,

    // === Spacing ===
    Indent,
    Outdent,

    // === Value commands ===
    FormatBlock,
    FontName,
    FontSize,
    ForeColor,
    BackColor,

    /// Any other identifier, passed through as-is.
    Other(SmolStr),
}

impl FormatCommand {
    /// Parse a control identifier into a command.
    pub fn from_id(id: &str) -> Self {
        match id {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "strikethrough" => Self::Strikethrough,
            "superscript" => Self::Superscript,
            "subscript" => Self::Subscript,
            "insertOrderedList" => Self::InsertOrderedList,
            "insertUnorderedList" => Self::InsertUnorderedList,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "createLink" => Self::CreateLink,
            "unlink" => Self::Unlink,
            "justifyLeft" => Self::JustifyLeft,
            "justifyCenter" => Self::JustifyCenter,
            "justifyRight" => Self::JustifyRight,
            "justifyFull" => Self::JustifyFull,
            "indent" => Self::Indent,
            "outdent" => Self::Outdent,
            "formatBlock" => Self::FormatBlock,
            "fontName" => Self::FontName,
            "fontSize" => Self::FontSize,
            "foreColor" => Self::ForeColor,
            "backColor" => Self::BackColor,
            other => Self::Other(SmolStr::new(other)),
        }
    }

    /// The command name passed to the host.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
            Self::InsertOrderedList => "insertOrderedList",
            Self::InsertUnorderedList => "insertUnorderedList",
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::CreateLink => "createLink",
            Self::Unlink => "unlink",
            Self::JustifyLeft => "justifyLeft",
            Self::JustifyCenter => "justifyCenter",
            Self::JustifyRight => "justifyRight",
            Self::JustifyFull => "justifyFull",
            Self::Indent => "indent",
            Self::Outdent => "outdent",
            Self::FormatBlock => "formatBlock",
            Self::FontName => "fontName",
            Self::FontSize => "fontSize",
            Self::ForeColor => "foreColor",
            Self::BackColor => "backColor",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Whether the host expects an argument with this command.
    ///
    /// Only informational: the toolbar passes whatever value the control
    /// carries.
    pub fn takes_value(&self) -> bool {
        matches!(
            self,
            Self::CreateLink
                | Self::FormatBlock
                | Self::FontName
                | Self::FontSize
                | Self::ForeColor
                | Self::BackColor
        )
    }

    /// Whether this is one of the commands the enum knows by name.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl FromStr for FormatCommand {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_id(s))
    }
}

impl From<&str> for FormatCommand {
    fn from(s: &str) -> Self {
        Self::from_id(s)
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call into the host command primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    pub command: FormatCommand,
    /// Ask the host for its own UI (e.g. a native link dialog).
    pub show_ui: bool,
    pub value: Option<String>,
}

impl CommandInvocation {
    /// An invocation without host UI, which is how the toolbar always calls.
    pub fn new(command: FormatCommand, value: Option<String>) -> Self {
        Self {
            command,
            show_ui: false,
            value,
        }
    }
}
