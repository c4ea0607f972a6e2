//! Falling pickup dropped by a destroyed enemy.

use std::f32::consts::TAU;

use rand::Rng;

use crate::entities::PowerUpKind;
use crate::geometry::{Body, GameObject, Position, Rect, Size, Vec2};
use crate::render::{Color, Surface};

pub const PICKUP_SIZE: Size = Size::new(20.0, 20.0);
const FALL_SPEED: f32 = 50.0;
const BOB_AMPLITUDE: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct PowerUp {
    body: Body,
    kind: PowerUpKind,
    time_alive: f32,
    /// Random phase so neighbouring pickups do not bob in step.
    bob_offset: f32,
    field: Size,
}

impl PowerUp {
    pub fn new(position: Position, kind: PowerUpKind, field: Size, rng: &mut impl Rng) -> Self {
        Self {
            body: Body::new(position, PICKUP_SIZE, Vec2::new(0.0, FALL_SPEED)),
            kind,
            time_alive: 0.0,
            bob_offset: rng.gen::<f32>() * TAU,
            field,
        }
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    fn color(&self) -> Color {
        match self.kind {
            PowerUpKind::MultiShot => Color::CYAN,
            PowerUpKind::ExtraLife => Color::RED,
            PowerUpKind::PowerUp => Color::GOLD,
            PowerUpKind::Shield => Color::SKY,
        }
    }

    fn glyph(&self) -> &'static str {
        match self.kind {
            PowerUpKind::MultiShot => "M",
            PowerUpKind::ExtraLife => "+",
            PowerUpKind::PowerUp => "P",
            PowerUpKind::Shield => "S",
        }
    }
}

impl GameObject for PowerUp {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.time_alive += dt;
        self.body.advance(dt);
        self.body.position.y += (self.time_alive * 3.0 + self.bob_offset).sin() * BOB_AMPLITUDE * dt;

        if self.body.is_out_of_bounds(self.field.width, self.field.height) {
            self.body.active = false;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if !self.body.active {
            return;
        }
        let Rect { x, y, width, height } = self.body.bounds();
        // Pulse between 60% and 100% brightness.
        let glow = 0.8 + 0.2 * (self.time_alive * 5.0).sin();
        let color = self.color().dimmed(glow);
        surface.stroke_rect(Rect::new(x, y, width, height), color);
        surface.fill_text(self.glyph(), x + width / 2.0 - 3.0, y + height / 2.0 - 4.0, color);
    }
}
