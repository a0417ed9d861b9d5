//! Mission Control panel and the title overlay.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui::{self, Color32};

use crate::catalog::{BodyRecord, MAX_SPEED, MIN_SPEED, PLANETS, SPEED_STEP};
use crate::picking::SelectedBody;
use crate::sim::{OrbitSpeeds, SimClock};
use crate::ui::state::PanelUi;
use crate::ui::toast::Notice;

const ACCENT: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);

/// Convert a catalog color to an egui color.
fn body_color32(body: &BodyRecord) -> Color32 {
    Color32::from_rgb(body.rgb[0], body.rgb[1], body.rgb[2])
}

/// Render the title overlay and the Mission Control window.
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<PanelUi>,
    mut speeds: ResMut<OrbitSpeeds>,
    mut clock: ResMut<SimClock>,
    selected: Res<SelectedBody>,
    mut notices: EventWriter<Notice>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("headline"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(24.0, 24.0))
        .show(ctx, |ui| {
            ui.heading(
                egui::RichText::new("Interactive Solar System")
                    .size(28.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new("Explore the planets and control their orbital speeds")
                    .color(Color32::LIGHT_GRAY),
            );
        });

    egui::Window::new("Mission Control")
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
        .default_width(320.0)
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let pause_label = if clock.paused { "Resume" } else { "Pause" };
                if ui.small_button(pause_label).clicked() {
                    let paused = clock.toggle_paused();
                    let message = if paused {
                        "Animation paused"
                    } else {
                        "Animation resumed"
                    };
                    info!("{}", message);
                    notices.write(Notice::new(message));
                }
                if ui.small_button("Reset").clicked() {
                    speeds.reset();
                    info!("planet speeds reset to default");
                    notices.write(Notice::new("Planet speeds reset to default"));
                }
                let expand_label = if panel.expanded { "Collapse" } else { "Expand" };
                if ui.small_button(expand_label).clicked() {
                    panel.expanded = !panel.expanded;
                }
            });

            if let Some(name) = selected.name() {
                ui.colored_label(ACCENT, format!("Selected: {}", name));
            }

            if !panel.expanded {
                return;
            }

            ui.separator();
            ui.label(
                egui::RichText::new(
                    "Adjust orbital speeds • Click planets to select • Drag to rotate view",
                )
                .small()
                .color(Color32::GRAY),
            );

            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for (index, body) in PLANETS.iter().enumerate() {
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.colored_label(body_color32(body), "●");
                        let name_color = if selected.0 == Some(index) {
                            ACCENT
                        } else {
                            Color32::WHITE
                        };
                        ui.colored_label(name_color, body.name);
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(format!("{:.1}x", speeds.get(index)))
                                        .small()
                                        .color(Color32::GRAY),
                                );
                            },
                        );
                    });
                    let mut value = speeds.get(index);
                    let slider = egui::Slider::new(&mut value, MIN_SPEED..=MAX_SPEED)
                        .step_by(SPEED_STEP)
                        .show_value(false);
                    if ui.add(slider).changed() {
                        speeds.set(index, value);
                    }
                    ui.label(
                        egui::RichText::new(body.blurb)
                            .small()
                            .color(Color32::GRAY),
                    );
                }
            });
        });
}
