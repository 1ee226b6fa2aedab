//! Control groups and their highlight policies.
//!
//! Toolbar buttons are grouped (alignment, spacing, format, script) and each
//! group decides how the active marker reacts to a click:
//!
//! - `Exclusive`: at most one control is active. A click clears every
//!   control first, then re-marks the clicked one only if it wasn't already
//!   active, so clicking the active control switches the group off.
//! - `Independent`: a click flips only the clicked control.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::marker::Marker;

/// How a group reacts to clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightPolicy {
    Exclusive,
    Independent,
}

/// A toolbar control: its identifier (which is also its command) and the
/// marker showing whether it is active.
#[derive(Debug, Clone)]
pub struct Control<M> {
    pub id: SmolStr,
    pub marker: M,
}

impl<M: Marker> Control<M> {
    pub fn new(id: impl Into<SmolStr>, marker: M) -> Self {
        Self {
            id: id.into(),
            marker,
        }
    }

    pub fn is_active(&self) -> bool {
        self.marker.is_active()
    }
}

/// An ordered set of controls sharing a highlight policy.
#[derive(Debug, Clone)]
pub struct ControlGroup<M> {
    name: SmolStr,
    policy: HighlightPolicy,
    controls: Vec<Control<M>>,
}

impl<M: Marker> ControlGroup<M> {
    pub fn with_controls(
        name: impl Into<SmolStr>,
        policy: HighlightPolicy,
        controls: Vec<Control<M>>,
    ) -> Self {
        Self {
            name: name.into(),
            policy,
            controls,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> HighlightPolicy {
        self.policy
    }

    pub fn controls(&self) -> &[Control<M>] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Apply the group's policy to a click on the control at `index`.
    ///
    /// Out-of-range indices are ignored. Returns whether the clicked control
    /// is active afterwards.
    pub fn click(&self, index: usize) -> bool {
        let Some(clicked) = self.controls.get(index) else {
            return false;
        };

        match self.policy {
            HighlightPolicy::Exclusive => {
                // Clear-then-set: read first, or an active control could never
                // be switched off.
                let already_active = clicked.marker.is_active();
                self.clear_highlights();
                if !already_active {
                    clicked.marker.set_active(true);
                }
                tracing::trace!(
                    group = %self.name,
                    control = %clicked.id,
                    active = !already_active,
                    "exclusive highlight"
                );
                !already_active
            }
            HighlightPolicy::Independent => {
                let active = clicked.marker.toggle();
                tracing::trace!(group = %self.name, control = %clicked.id, active, "toggle highlight");
                active
            }
        }
    }

    /// Click the first control with this identifier.
    ///
    /// Returns `None` if no control in the group has the identifier.
    pub fn click_id(&self, id: &str) -> Option<bool> {
        let index = self.position(id)?;
        Some(self.click(index))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.controls.iter().position(|c| c.id == id)
    }

    /// Remove the active marker from every control in the group.
    pub fn clear_highlights(&self) {
        for control in &self.controls {
            control.marker.set_active(false);
        }
    }

    /// Identifiers of the controls currently marked active, in group order.
    pub fn active_ids(&self) -> Vec<SmolStr> {
        self.controls
            .iter()
            .filter(|c| c.marker.is_active())
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.controls.iter().filter(|c| c.marker.is_active()).count()
    }
}
