//! The animated particle backdrop behind every page.
//!
//! [`Background`] owns the [`Field`] and is the event boundary between egui
//! input and the core: surface size and pointer position flow in through the
//! field's setters once per frame, the field advances one step, and the
//! result is painted on egui's background layer. The repaint request that
//! keeps the animation going is owned by the egui context, so closing the
//! window ends the loop with nothing left scheduled.

use egui::{LayerId, Stroke};
use field_core::config::FieldConfig;
use field_core::field::{Bounds, Field};
use glam::Vec2;
use rand::rng;

use crate::theme;

pub struct Background {
    field: Option<Field>,
    rng: rand::rngs::ThreadRng,
}

impl Background {
    /// Creates an empty backdrop. The field itself mounts lazily on the
    /// first frame with a usable surface size, which fixes the particle
    /// count from the width at that moment.
    pub fn new() -> Self {
        Self {
            field: None,
            rng: rng(),
        }
    }

    /// Runs one backdrop frame: forward input events to the field, advance
    /// it one step, paint it, and keep the animation scheduled.
    pub fn frame(&mut self, ctx: &egui::Context) {
        let rect = ctx.screen_rect();
        let bounds = Bounds::new(rect.width(), rect.height());

        if self.field.is_none() {
            if bounds.width <= 0.0 || bounds.height <= 0.0 {
                // No usable surface yet; try again next frame.
                return;
            }
            let field = Field::new(bounds, FieldConfig::default(), &mut self.rng);
            tracing::info!(
                particles = field.particles.len(),
                width = bounds.width,
                height = bounds.height,
                "particle field mounted"
            );
            self.field = Some(field);
        }
        let Some(field) = self.field.as_mut() else {
            return;
        };

        if field.bounds() != bounds {
            field.set_bounds(bounds);
        }
        if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
            field.set_pointer(Vec2::new(pos.x, pos.y));
        }

        field.step();
        Self::paint(field, ctx, rect);

        ctx.request_repaint();
    }

    fn paint(field: &Field, ctx: &egui::Context, rect: egui::Rect) {
        let painter = ctx.layer_painter(LayerId::background());
        painter.rect_filled(rect, egui::CornerRadius::ZERO, theme::NIGHT);

        let to_screen = |v: Vec2| egui::pos2(v.x, v.y);

        for link in field.particle_links() {
            painter.line_segment(
                [
                    to_screen(field.particles[link.a].pos),
                    to_screen(field.particles[link.b].pos),
                ],
                Stroke::new(0.5, theme::cyan_link(link.strength)),
            );
        }

        if let Some(pointer) = field.pointer() {
            for link in field.pointer_links() {
                painter.line_segment(
                    [to_screen(field.particles[link.id].pos), to_screen(pointer)],
                    Stroke::new(1.0, theme::orange_link(link.strength)),
                );
            }
        }

        for p in &field.particles {
            painter.circle_filled(to_screen(p.pos), p.radius, theme::cyan_link(0.65));
        }
    }
}
