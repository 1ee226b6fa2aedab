//! CSS class markers on toolbar elements.
//!
//! Your CSS decides what the class looks like:
//! ```css
//! .option-button.active {
//!     background-color: #e0e9ff;
//! }
//! ```

use smol_str::SmolStr;
use web_sys::Element;

use inkbar_core::Marker;

/// An element whose "active" state is the presence of a class.
///
/// Reads go to `classList` every time, so markup changed by other scripts is
/// picked up.
#[derive(Debug, Clone)]
pub struct ClassMarker {
    element: Element,
    class: SmolStr,
}

impl ClassMarker {
    pub fn new(element: Element, class: impl Into<SmolStr>) -> Self {
        Self {
            element,
            class: class.into(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Marker for ClassMarker {
    fn is_active(&self) -> bool {
        self.element.class_list().contains(&self.class)
    }

    fn set_active(&self, active: bool) {
        let class_list = self.element.class_list();
        let result = if active {
            class_list.add_1(&self.class)
        } else {
            class_list.remove_1(&self.class)
        };
        if let Err(e) = result {
            tracing::warn!("class update failed: {:?}", e);
        }
    }
}
