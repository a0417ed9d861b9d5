//! Ephemeral toast notifications rendered as an egui overlay.

use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui::{self, Color32};

/// Seconds a toast stays on screen.
const TOAST_TTL: f64 = 3.5;
/// Fade-out window at the end of a toast's life.
const TOAST_FADE: f64 = 0.5;

/// Fire-and-forget user notification.
#[derive(Event)]
pub struct Notice {
    pub message: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn detailed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Queue of live toasts, oldest first.
#[derive(Resource, Default)]
pub struct Toasts {
    entries: Vec<Toast>,
}

struct Toast {
    message: String,
    detail: Option<String>,
    expires_at: f64,
}

impl Toasts {
    fn push(&mut self, notice: &Notice, now: f64) {
        self.entries.push(Toast {
            message: notice.message.clone(),
            detail: notice.detail.clone(),
            expires_at: now + TOAST_TTL,
        });
    }

    fn prune(&mut self, now: f64) {
        self.entries.retain(|toast| toast.expires_at > now);
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Move notices into the toast queue, stamped with screen time.
///
/// Toast lifetime runs on the engine clock, not the animation clock, so
/// notifications still expire while the simulation is paused.
pub fn collect_notices(
    mut events: EventReader<Notice>,
    mut toasts: ResMut<Toasts>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs_f64();
    for notice in events.read() {
        toasts.push(notice, now);
    }
}

/// Render live toasts anchored at the top center of the window.
pub fn render_toasts(mut contexts: EguiContexts, mut toasts: ResMut<Toasts>, time: Res<Time>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let now = time.elapsed_secs_f64();
    toasts.prune(now);
    if toasts.is_empty() {
        return;
    }

    egui::Window::new("notifications")
        .title_bar(false)
        .resizable(false)
        .interactable(false)
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 16.0))
        .show(ctx, |ui| {
            for (row, toast) in toasts.entries.iter().enumerate() {
                if row > 0 {
                    ui.separator();
                }
                let alpha = (((toast.expires_at - now) / TOAST_FADE).clamp(0.0, 1.0)) as f32;
                ui.colored_label(Color32::WHITE.gamma_multiply(alpha), &toast.message);
                if let Some(detail) = &toast.detail {
                    ui.label(
                        egui::RichText::new(detail)
                            .small()
                            .color(Color32::LIGHT_GRAY.gamma_multiply(alpha)),
                    );
                }
            }
        });
}
