//! Click selection over body meshes.
//!
//! The mesh picking backend raycasts every `Mesh3d` and the nearest hit
//! along the ray wins, with decorative meshes opted out via
//! `Pickable::IGNORE`. This module turns those hits into selection state.

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::catalog::PLANETS;
use crate::scene::Planet;
use crate::ui::toast::Notice;

/// Currently selected body, as an index into [`PLANETS`].
#[derive(Resource, Default)]
pub struct SelectedBody(pub Option<usize>);

impl SelectedBody {
    /// Display name of the selected body, if any.
    pub fn name(&self) -> Option<&'static str> {
        self.0
            .and_then(|index| PLANETS.get(index))
            .map(|body| body.name)
    }
}

/// Plugin for click selection.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .add_systems(Update, body_click_system);
    }
}

/// Select the clicked body, or clear the selection when the click lands
/// on empty space.
///
/// A release also lands here at the end of a camera drag; clearing
/// silently keeps that path from spamming notifications.
pub fn body_click_system(
    mut contexts: EguiContexts,
    mut selected: ResMut<SelectedBody>,
    mut clicks: EventReader<Pointer<Click>>,
    buttons: Res<ButtonInput<MouseButton>>,
    planets: Query<&Planet>,
    mut notices: EventWriter<Notice>,
) {
    let ui_owns_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
    if ui_owns_pointer {
        clicks.clear();
        return;
    }

    let mut hit = None;
    for click in clicks.read() {
        if click.button != PointerButton::Primary {
            continue;
        }
        if let Ok(planet) = planets.get(click.target) {
            hit = Some(planet.index);
        }
    }

    if let Some(index) = hit {
        let Some(body) = PLANETS.get(index) else {
            warn!("clicked body index {} is outside the catalog", index);
            return;
        };
        selected.0 = Some(index);
        info!("selected {}", body.name);
        notices.write(Notice::detailed(format!("Selected {}", body.name), body.blurb));
    } else if buttons.just_released(MouseButton::Left) && selected.0.is_some() {
        selected.0 = None;
    }
}
