//! User interface module
//!
//! This module handles UI state management, the Mission Control panel,
//! and toast notifications for the egui-based user interface.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub mod panel;
pub mod state;
pub mod toast;

pub use state::PanelUi;
pub use toast::{Notice, Toasts};

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelUi>()
            .init_resource::<Toasts>()
            .add_event::<Notice>()
            .add_systems(Update, toast::collect_notices)
            .add_systems(
                EguiPrimaryContextPass,
                (panel::control_panel_system, toast::render_toasts),
            );
    }
}
