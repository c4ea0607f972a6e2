//! The player's ship: movement, fire cadence and power-up state.
//!
//! Timed effects run on the ship's own simulation clock, which advances only
//! through `update(dt)`.  A paused game therefore never burns power-up time.

use tracing::{debug, info};

use crate::entities::PowerUpKind;
use crate::geometry::{Body, GameObject, Position, Rect, Size, Vec2};
use crate::input::KeyState;
use crate::render::{tier_color, Color, Surface};

pub const PLAYER_SIZE: Size = Size::new(40.0, 30.0);
pub const SHOOT_COOLDOWN_MS: f32 = 150.0;
pub const MAX_MULTI_SHOT_LEVEL: u32 = 15;
pub const POWER_UP_DURATION_MS: f64 = 10_000.0;
pub const SHIELD_DURATION_MS: f64 = 15_000.0;
pub const SHIELD_HITS: u32 = 3;
pub const DAMAGE_BOOST: f32 = 2.0;

// ── Power-up state ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct MultiShot {
    pub active: bool,
    /// 1 ..= `max_level`; never decays.
    pub level: u32,
    pub max_level: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DamageBoost {
    pub active: bool,
    /// Player clock (ms) at which the boost lapses.
    pub end_time: f64,
    pub multiplier: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shield {
    pub active: bool,
    pub end_time: f64,
    /// Hits left before the shield breaks.
    pub hits: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerPowerUps {
    pub multi_shot: MultiShot,
    pub power_up: DamageBoost,
    pub shield: Shield,
}

impl Default for PlayerPowerUps {
    fn default() -> Self {
        Self {
            multi_shot: MultiShot {
                active: true,
                level: 1,
                max_level: MAX_MULTI_SHOT_LEVEL,
            },
            power_up: DamageBoost {
                active: false,
                end_time: 0.0,
                multiplier: DAMAGE_BOOST,
            },
            shield: Shield {
                active: false,
                end_time: 0.0,
                hits: 0,
            },
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    body: Body,
    speed: f32,
    field: Size,
    since_last_shot_ms: f32,
    clock_ms: f64,
    power_ups: PlayerPowerUps,
}

impl Player {
    pub fn new(position: Position, field: Size, speed: f32) -> Self {
        Self {
            body: Body::new(position, PLAYER_SIZE, Vec2::ZERO),
            speed,
            field,
            since_last_shot_ms: 0.0,
            clock_ms: 0.0,
            power_ups: PlayerPowerUps::default(),
        }
    }

    /// Bottom-centre spawn point for a field.
    pub fn spawn_position(field: Size) -> Position {
        Vec2::new(field.width / 2.0 - 20.0, field.height - 80.0)
    }

    /// Held directions become velocity.  Opposite directions held together
    /// cancel out.
    pub fn handle_input(&mut self, keys: &KeyState) {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        self.body.velocity.x = axis(keys.left, keys.right) * self.speed;
        self.body.velocity.y = axis(keys.up, keys.down) * self.speed;
    }

    pub fn can_shoot(&self) -> bool {
        self.since_last_shot_ms >= SHOOT_COOLDOWN_MS
    }

    pub fn shoot(&mut self) {
        self.since_last_shot_ms = 0.0;
    }

    /// Bullets per volley: cycles 1, 2, 3 as the multi-shot level climbs.
    pub fn shot_count(&self) -> u32 {
        (self.power_ups.multi_shot.level - 1) % 3 + 1
    }

    /// Weapon tier: levels 1-3 → 1, 4-6 → 2, …  Drives bullet damage and size.
    pub fn power_level(&self) -> u32 {
        (self.power_ups.multi_shot.level - 1) / 3 + 1
    }

    /// Muzzle points, symmetric around the ship's centre line.
    pub fn bullet_spawn_positions(&self) -> Vec<Position> {
        let cx = self.body.center_x();
        let y = self.body.position.y;
        let offsets: &[f32] = match self.shot_count() {
            1 => &[-2.0],
            2 => &[-8.0, 4.0],
            _ => &[-2.0, -12.0, 8.0],
        };
        offsets.iter().map(|dx| Vec2::new(cx + dx, y)).collect()
    }

    /// Extra lives are granted by the engine, so `ExtraLife` is a no-op here.
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        let now = self.clock_ms;
        let p = &mut self.power_ups;
        match kind {
            PowerUpKind::MultiShot => {
                p.multi_shot.active = true;
                if p.multi_shot.level < p.multi_shot.max_level {
                    p.multi_shot.level += 1;
                    debug!("Multi-shot level {}", p.multi_shot.level);
                } else {
                    info!("Multi-shot already at max level {}", p.multi_shot.max_level);
                }
            }
            PowerUpKind::ExtraLife => {}
            PowerUpKind::PowerUp => {
                p.power_up.active = true;
                p.power_up.end_time = now + POWER_UP_DURATION_MS;
            }
            PowerUpKind::Shield => {
                p.shield.active = true;
                p.shield.end_time = now + SHIELD_DURATION_MS;
                p.shield.hits = SHIELD_HITS;
            }
        }
    }

    /// Applied to bullet damage at the moment of impact.
    pub fn damage_multiplier(&self) -> f32 {
        if self.power_ups.power_up.active {
            self.power_ups.power_up.multiplier
        } else {
            1.0
        }
    }

    /// The single authority on whether an incoming hit is blocked.
    pub fn handle_shield_hit(&mut self) -> bool {
        let shield = &mut self.power_ups.shield;
        if shield.active && shield.hits > 0 {
            shield.hits -= 1;
            debug!("Shield absorbed a hit, {} left", shield.hits);
            if shield.hits == 0 {
                shield.active = false;
            }
            true
        } else {
            false
        }
    }

    pub fn has_shield(&self) -> bool {
        self.power_ups.shield.active && self.power_ups.shield.hits > 0
    }

    pub fn power_ups(&self) -> &PlayerPowerUps {
        &self.power_ups
    }

    pub fn power_ups_mut(&mut self) -> &mut PlayerPowerUps {
        &mut self.power_ups
    }

    /// Milliseconds of simulated time this ship has lived.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Whole seconds of damage boost left, rounded up.
    pub fn power_up_seconds_left(&self) -> u32 {
        let left = self.power_ups.power_up.end_time - self.clock_ms;
        if self.power_ups.power_up.active && left > 0.0 {
            (left / 1000.0).ceil() as u32
        } else {
            0
        }
    }

    fn constrain_to_field(&mut self) {
        let max_x = self.field.width - self.body.size.width;
        let max_y = self.field.height - self.body.size.height;
        self.body.position.x = self.body.position.x.clamp(0.0, max_x.max(0.0));
        self.body.position.y = self.body.position.y.clamp(0.0, max_y.max(0.0));
    }

    fn expire_power_ups(&mut self) {
        let now = self.clock_ms;
        let p = &mut self.power_ups;
        if p.power_up.active && now >= p.power_up.end_time {
            p.power_up.active = false;
            debug!("Damage boost expired");
        }
        if p.shield.active && now >= p.shield.end_time {
            p.shield.active = false;
            p.shield.hits = 0;
            debug!("Shield expired");
        }
    }
}

impl GameObject for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.since_last_shot_ms += dt * 1000.0;
        self.clock_ms += dt as f64 * 1000.0;
        self.body.advance(dt);
        self.constrain_to_field();
        self.expire_power_ups();
    }

    fn render(&self, surface: &mut dyn Surface) {
        if !self.body.active {
            return;
        }
        let Rect { x, y, width: w, height: h } = self.body.bounds();
        let hull = tier_color(self.power_level());

        // Wings, fuselage, cockpit.
        surface.fill_rect(Rect::new(x, y + h * 0.5, w, h * 0.3), hull);
        surface.fill_rect(Rect::new(x + w * 0.4, y, w * 0.2, h * 0.9), hull);
        surface.fill_rect(Rect::new(x + w * 0.45, y + h * 0.2, w * 0.1, h * 0.2), Color::WHITE);
        surface.fill_rect(Rect::new(x + w * 0.4, y + h * 0.9, w * 0.2, h * 0.1), Color::ORANGE);

        if self.power_ups.multi_shot.level > 1 {
            let label = format!("{}x T{}", self.shot_count(), self.power_level());
            surface.fill_text(&label, x, y - 8.0, hull);
        }
        if self.has_shield() {
            surface.stroke_rect(Rect::new(x - 8.0, y - 8.0, w + 16.0, h + 16.0), Color::SKY);
        }
    }
}
