//! Hostile ships: per-kind tables, formation entry, movement patterns and
//! the boss volley.

use std::f32::consts::PI;

use rand::Rng;
use tracing::debug;

use crate::compute;
use crate::entities::{Difficulty, EnemyKind, MovePattern, PowerUpKind};
use crate::geometry::{Body, GameObject, Position, Rect, Size, Vec2};
use crate::render::{Color, Surface};

/// Inside this distance a forming enemy snaps onto its slot.
const FORMATION_SNAP_DISTANCE: f32 = 10.0;
const FORMATION_ENTRY_SPEED: f32 = 350.0;
/// Margin past the side and bottom edges before an enemy is culled.
const CULL_MARGIN: f32 = 50.0;
const BOSS_MIN_Y: f32 = 20.0;
const BOSS_MAX_Y: f32 = 150.0;

/// Stable identity of an enemy for the lifetime of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u64);

/// One bullet of a volley: where it starts, which way, how fast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletPattern {
    pub position: Position,
    /// Radians, same convention as `Bullet::reset`.
    pub angle: f32,
    pub speed: f32,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    id: EnemyId,
    body: Body,
    kind: EnemyKind,
    health: i32,
    max_health: i32,
    score_value: u32,
    since_last_shot_ms: f32,
    time_alive: f32,
    carried: Option<PowerUpKind>,
    target: Option<Position>,
    moving_into_formation: bool,
    base_speed_y: f32,
    field: Size,
}

impl Enemy {
    /// Health and score are `floor(base * stage_multiplier)`.
    pub fn new(
        id: EnemyId,
        kind: EnemyKind,
        position: Position,
        speed: f32,
        stage_multiplier: f32,
        field: Size,
    ) -> Self {
        let health = (kind.base_health() as f32 * stage_multiplier).floor() as i32;
        Self {
            id,
            body: Body::new(position, kind.size(), Vec2::new(0.0, speed)),
            kind,
            health,
            max_health: health,
            score_value: (kind.base_score() as f32 * stage_multiplier).floor() as u32,
            since_last_shot_ms: 0.0,
            time_alive: 0.0,
            carried: None,
            target: None,
            moving_into_formation: false,
            base_speed_y: speed,
            field,
        }
    }

    /// Fly into formation toward `target` before doing anything else.
    pub fn with_target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self.moving_into_formation = true;
        self.body.velocity = Vec2::new(0.0, FORMATION_ENTRY_SPEED);
        self
    }

    pub fn with_power_up(mut self, carried: Option<PowerUpKind>) -> Self {
        self.carried = carried;
        self
    }

    /// Roll the carried power-up once, at construction.
    pub fn with_drop_rate(self, drop_rate: f64, rng: &mut impl Rng) -> Self {
        let carried = compute::roll_power_up(drop_rate, rng);
        self.with_power_up(carried)
    }

    pub fn id(&self) -> EnemyId {
        self.id
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// 0.0 ..= 1.0 of the starting health.
    pub fn health_percent(&self) -> f32 {
        if self.max_health <= 0 {
            0.0
        } else {
            (self.health as f32 / self.max_health as f32).max(0.0)
        }
    }

    pub fn score_value(&self) -> u32 {
        self.score_value
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn is_moving_into_formation(&self) -> bool {
        self.moving_into_formation
    }

    pub fn carried_power_up(&self) -> Option<PowerUpKind> {
        self.carried
    }

    /// Subtract `amount`; true once health is at or below zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health -= amount;
        self.health <= 0
    }

    /// Hand over the carried power-up.  A second call yields `None`.
    pub fn drop_power_up(&mut self) -> Option<PowerUpKind> {
        self.carried.take()
    }

    pub fn can_shoot(&self) -> bool {
        !self.moving_into_formation && self.since_last_shot_ms >= self.kind.shoot_cooldown_ms()
    }

    pub fn shoot(&mut self) {
        self.since_last_shot_ms = 0.0;
    }

    /// Bottom-centre muzzle.
    pub fn bullet_spawn_position(&self) -> Position {
        Vec2::new(
            self.body.position.x + self.body.size.width / 2.0 - 2.0,
            self.body.position.y + self.body.size.height,
        )
    }

    /// The boss volley for `stage`.  Non-boss enemies get a single shot.
    ///
    /// * stage 1-2: fan of `count` bullets over 60° around straight down.
    /// * stage 3-4: ring of up to 8, the rest as near-vertical bursts.
    /// * stage 5+: every bullet with a random angle, speed and x offset.
    pub fn boss_multi_shot_pattern(
        &self,
        stage: u32,
        difficulty: Difficulty,
        rng: &mut impl Rng,
    ) -> Vec<BulletPattern> {
        if self.kind != EnemyKind::Boss {
            return vec![BulletPattern {
                position: self.bullet_spawn_position(),
                angle: PI / 2.0,
                speed: 300.0,
            }];
        }

        let center_x = self.body.center_x();
        let center_y = self.body.position.y + self.body.size.height;
        let muzzle = Vec2::new(center_x - 2.0, center_y);
        let (count, base_speed) = compute::boss_volley(stage, difficulty);

        match stage {
            0..=2 => {
                let spread = PI / 3.0;
                (0..count)
                    .map(|i| {
                        let ratio = if count == 1 {
                            0.5
                        } else {
                            i as f32 / (count - 1) as f32
                        };
                        BulletPattern {
                            position: muzzle,
                            angle: PI - spread / 2.0 + spread * ratio,
                            speed: base_speed + rng.gen::<f32>() * 50.0 - 25.0,
                        }
                    })
                    .collect()
            }
            3..=4 => {
                let ring = count.min(8);
                let mut volley: Vec<BulletPattern> = (0..ring)
                    .map(|i| BulletPattern {
                        position: muzzle,
                        angle: i as f32 * 2.0 * PI / ring as f32,
                        speed: base_speed,
                    })
                    .collect();
                for _ in ring..count {
                    volley.push(BulletPattern {
                        position: Vec2::new(muzzle.x + (rng.gen::<f32>() - 0.5) * 40.0, center_y),
                        angle: PI / 2.0 + (rng.gen::<f32>() - 0.5) * 0.4,
                        speed: base_speed * 1.2,
                    });
                }
                volley
            }
            _ => (0..count)
                .map(|_| {
                    let angle = rng.gen::<f32>() * 2.0 * PI;
                    let speed = base_speed + (rng.gen::<f32>() - 0.5) * 100.0;
                    let offset_x = (rng.gen::<f32>() - 0.5) * self.body.size.width;
                    BulletPattern {
                        position: Vec2::new(center_x + offset_x, center_y),
                        angle,
                        speed: speed.max(150.0),
                    }
                })
                .collect(),
        }
    }

    fn move_into_formation(&mut self) {
        let Some(target) = self.target else {
            self.moving_into_formation = false;
            self.body.velocity.y = self.base_speed_y;
            return;
        };

        let dx = target.x - self.body.position.x;
        let dy = target.y - self.body.position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < FORMATION_SNAP_DISTANCE {
            debug!(enemy = self.id.0, "Reached formation slot ({}, {})", target.x, target.y);
            self.moving_into_formation = false;
            self.body.position = target;
            self.body.velocity = Vec2::new(0.0, self.base_speed_y * 0.5);
            self.target = None;
            return;
        }

        let speed = if distance > 200.0 {
            450.0
        } else if distance > 100.0 {
            350.0
        } else {
            200.0
        };
        let angle = dy.atan2(dx);
        self.body.velocity = Vec2::new(angle.cos() * speed, angle.sin() * speed);
    }

    fn apply_move_pattern(&mut self) {
        let t = self.time_alive;
        let v = &mut self.body.velocity;
        match self.kind.move_pattern() {
            MovePattern::Straight => v.x = 0.0,
            MovePattern::Zigzag => v.x = (t * 3.0).sin() * 80.0,
            MovePattern::Circle if self.kind == EnemyKind::Boss => {
                v.x = (t * 1.5).sin() * 120.0;
                v.y = if self.body.position.y > 80.0 { v.y * 0.3 } else { 0.0 };
            }
            MovePattern::Circle => {
                let base = v.y;
                v.x = (t * 2.0).cos() * 60.0;
                v.y = base + (t * 2.0).sin() * 30.0;
            }
        }
    }

    fn constrain_boss(&mut self) {
        let max_x = (self.field.width - self.body.size.width).max(0.0);
        let p = &mut self.body.position;
        p.x = p.x.clamp(0.0, max_x);
        p.y = p.y.clamp(BOSS_MIN_Y, BOSS_MAX_Y);
    }

    /// Side and bottom edges only: enemies above the field are still forming.
    fn is_far_off_field(&self) -> bool {
        let p = self.body.position;
        p.x + self.body.size.width < -CULL_MARGIN
            || p.x > self.field.width + CULL_MARGIN
            || p.y > self.field.height + CULL_MARGIN
    }
}

impl GameObject for Enemy {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn update(&mut self, dt: f32) {
        self.time_alive += dt;
        self.since_last_shot_ms += dt * 1000.0;

        if self.moving_into_formation {
            self.move_into_formation();
        } else {
            self.apply_move_pattern();
        }
        self.body.advance(dt);

        if self.kind == EnemyKind::Boss {
            self.constrain_boss();
        } else if !self.moving_into_formation && self.is_far_off_field() {
            debug!(
                enemy = self.id.0,
                "Culled off-screen at ({:.0}, {:.0})", self.body.position.x, self.body.position.y
            );
            self.body.active = false;
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        if !self.body.active {
            return;
        }
        let Rect { x, y, width: w, height: h } = self.body.bounds();
        let carrying = self.carried.is_some();

        match self.kind {
            EnemyKind::Basic => {
                let hull = if carrying { Color::rgb(0xff, 0x44, 0xff) } else { Color::rgb(0xff, 0x44, 0x44) };
                surface.fill_rect(Rect::new(x, y + h * 0.4, w, h * 0.4), hull);
                surface.fill_rect(Rect::new(x + w * 0.3, y, w * 0.4, h), hull);
            }
            EnemyKind::Fast => {
                let hull = if carrying { Color::rgb(0xff, 0x88, 0xff) } else { Color::YELLOW };
                surface.fill_rect(Rect::new(x + w * 0.25, y, w * 0.5, h), hull);
                surface.fill_rect(Rect::new(x, y + h * 0.2, w, h * 0.3), hull);
            }
            EnemyKind::Strong => {
                let hull = if carrying { Color::rgb(0xcc, 0x44, 0xff) } else { Color::GREEN };
                surface.fill_rect(Rect::new(x, y, w, h * 0.7), hull);
                surface.fill_rect(Rect::new(x + w * 0.35, y + h * 0.7, w * 0.3, h * 0.3), hull);
            }
            EnemyKind::Boss => {
                surface.fill_rect(Rect::new(x, y + h * 0.25, w, h * 0.5), Color::PURPLE);
                surface.fill_rect(Rect::new(x + w * 0.25, y, w * 0.5, h), Color::PURPLE);
                surface.fill_rect(Rect::new(x + w * 0.4, y + h * 0.4, w * 0.2, h * 0.2), Color::RED);
            }
        }

        if matches!(self.kind, EnemyKind::Boss | EnemyKind::Strong) {
            let bar = Rect::new(x, y - 6.0, w, 3.0);
            surface.fill_rect(bar, Color::RED);
            surface.fill_rect(Rect::new(x, y - 6.0, w * self.health_percent(), 3.0), Color::GREEN);
        }
    }
}
