//! UI state management

use bevy::prelude::*;

/// Persistent state for the Mission Control panel.
#[derive(Resource)]
pub struct PanelUi {
    /// Whether the per-body speed rows are shown.
    pub expanded: bool,
}

impl Default for PanelUi {
    fn default() -> Self {
        // Collapsed until asked for, so the scene keeps the screen.
        Self { expanded: false }
    }
}
